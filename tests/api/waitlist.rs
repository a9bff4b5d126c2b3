use crate::helpers::spawn_app;

#[tokio::test]
async fn join_waitlist_returns_200_for_valid_form_data() {
    let app = spawn_app().await;
    let body = "email=a%40x.com&city=%20Paris%20";

    let response = app.post_waitlist(body.into()).await;

    assert_eq!(200, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains("You’re on the list ✨"));
    assert!(page.contains(r#"name="email" placeholder="Your email" value="""#));
    assert!(page.contains(r#"name="city" placeholder="Your city" value="""#));
}

#[tokio::test]
async fn join_waitlist_persists_the_trimmed_city() {
    let app = spawn_app().await;
    let body = "email=a%40x.com&city=%20Paris%20";

    app.post_waitlist(body.into()).await;

    assert_eq!(
        app.store.entries(),
        vec![("a@x.com".to_string(), "Paris".to_string())]
    );
}

#[tokio::test]
async fn join_waitlist_returns_409_for_an_email_already_on_the_list() {
    let app = spawn_app().await;
    let body = "email=ursula_le_guin%40gmail.com&city=Portland";

    app.post_waitlist(body.into()).await;
    let response = app.post_waitlist(body.into()).await;

    assert_eq!(409, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains("You’re already on the list 👀"));
    assert!(page.contains(r#"value="ursula_le_guin@gmail.com""#));
    assert_eq!(app.store.entries().len(), 1);
}

#[tokio::test]
async fn join_waitlist_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("city=Paris", "missing the email"),
        ("email=a%40x.com", "missing the city"),
        ("", "missing both email and city"),
    ];

    for (data, err_message) in test_cases {
        let response = app.post_waitlist(data.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            err_message
        );
    }
    assert!(app.store.entries().is_empty());
}

#[tokio::test]
async fn join_waitlist_returns_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("email=&city=Paris", "empty email"),
        ("email=a%40x.com&city=%20%20", "blank city"),
        ("email=definitely-not-an-email&city=Paris", "invalid email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_waitlist(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
        let page = response.text().await.unwrap();
        assert!(page.contains("Something went wrong. Try again."));
    }
    assert!(app.store.entries().is_empty());
}

#[tokio::test]
async fn join_waitlist_returns_500_and_keeps_the_input_when_the_store_fails() {
    let app = spawn_app().await;
    app.store.break_down();
    let body = "email=a%40x.com&city=Paris";

    let response = app.post_waitlist(body.into()).await;

    assert_eq!(500, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains("Something went wrong. Try again."));
    assert!(page.contains(r#"value="a@x.com""#));
    assert!(page.contains(r#"value="Paris""#));
}
