use crate::helpers::spawn_app;

#[tokio::test]
async fn home_renders_an_empty_waitlist_form() {
    let app = spawn_app().await;

    let response = app.get_home().await;

    assert_eq!(200, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains(r#"action="/waitlist""#));
    assert!(page.contains("Join the waitlist"));
    assert!(!page.contains("class=\"status"));
}
