use std::future::Future;

use sqlx::{PgPool, types::chrono::Utc};
use uuid::Uuid;

use crate::{domain::NewWaitlistEntry, routes::error_chain_fmt};

/// SQLSTATE reported by Postgres when a unique constraint rejects a row.
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("The email is already on the waitlist.")]
    UniqueViolation,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// The remote collection waitlist entries are written to.
pub trait WaitlistStore {
    fn insert(
        &self,
        entry: &NewWaitlistEntry,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

#[derive(Clone)]
pub struct PgWaitlistStore {
    pool: PgPool,
}

impl PgWaitlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl WaitlistStore for PgWaitlistStore {
    #[tracing::instrument(
        name = "Saving new waitlist entry in the database",
        skip(self, entry),
        fields(waitlist_email = %entry.email.as_ref())
    )]
    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO waitlist (id, email, city, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.email.as_ref())
        .bind(entry.city.as_ref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(classify_insert_error)?;

        Ok(())
    }
}

fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if is_unique_violation(&err) {
        return StoreError::UniqueViolation;
    }
    tracing::error!("Failed to execute query: {:?}", err);
    StoreError::UnexpectedError(
        anyhow::Error::new(err).context("Failed to insert a new waitlist entry in the database."),
    )
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| code == UNIQUE_VIOLATION_CODE),
        _ => false,
    }
}
