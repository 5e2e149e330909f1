//! Record store for users and daily logs.
//!
//! Every operation is a free function over a `SqlitePool`. Uniqueness of
//! emails is enforced by the `idx_users_email` index, and a rejected insert
//! surfaces as [`StoreError::DuplicateEmail`].

use sqlx::SqlitePool;

pub mod daily_logs;
pub mod pool;
pub mod users;

pub use pool::create_pool;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
