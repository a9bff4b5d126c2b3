use claims::{assert_matches, assert_ok};
use vibenest::{
    domain::NewWaitlistEntry,
    waitlist_store::{PgWaitlistStore, StoreError, WaitlistStore},
};

use crate::helpers::spawn_database;

fn entry(email: &str, city: &str) -> NewWaitlistEntry {
    NewWaitlistEntry::parse(email.into(), city.into()).expect("Invalid test entry")
}

#[tokio::test]
#[ignore = "needs a running Postgres instance"]
async fn insert_persists_the_entry() {
    let store = PgWaitlistStore::new(spawn_database().await);

    assert_ok!(store.insert(&entry("a@x.com", " Paris ")).await);

    let saved: (String, String) = sqlx::query_as("SELECT email, city FROM waitlist")
        .fetch_one(store.pool())
        .await
        .expect("Failed to fetch saved waitlist entry");
    assert_eq!(saved, ("a@x.com".to_string(), "Paris".to_string()));
}

#[tokio::test]
#[ignore = "needs a running Postgres instance"]
async fn inserting_the_same_email_twice_is_a_unique_violation() {
    let store = PgWaitlistStore::new(spawn_database().await);

    assert_ok!(store.insert(&entry("a@x.com", "Paris")).await);
    let second = store.insert(&entry("a@x.com", "Lyon")).await;

    assert_matches!(second, Err(StoreError::UniqueViolation));
}

#[tokio::test]
#[ignore = "needs a running Postgres instance"]
async fn other_database_failures_are_unexpected_errors() {
    let pool = spawn_database().await;
    sqlx::query("DROP TABLE waitlist")
        .execute(&pool)
        .await
        .expect("Failed to drop the waitlist table");
    let store = PgWaitlistStore::new(pool);

    let outcome = store.insert(&entry("a@x.com", "Paris")).await;

    assert_matches!(outcome, Err(StoreError::UnexpectedError(_)));
}
