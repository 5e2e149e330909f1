use chrono::Utc;
use sqlx::SqlitePool;

use super::{StoreError, StoreResult};
use crate::models::user::{NewUser, User};

pub async fn insert_user(pool: &SqlitePool, new_user: &NewUser) -> StoreResult<User> {
    let created_at = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO users (name, email, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(created_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
        }
        StoreError::Sqlx(e)
    })?;

    Ok(User {
        id: result.last_insert_rowid(),
        name: new_user.name.clone(),
        email: new_user.email.clone(),
        password_hash: new_user.password_hash.clone(),
        created_at,
    })
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> StoreResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_pool;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ravi".into(),
            email: email.into(),
            password_hash: "hash".into(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let pool = test_pool().await;

        let user = insert_user(&pool, &new_user("ravi@example.com")).await.unwrap();
        assert!(user.id > 0);

        let by_email = find_by_email(&pool, "ravi@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);
        assert_eq!(by_email.name, "Ravi");

        let by_id = find_by_id(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ravi@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_second_row() {
        let pool = test_pool().await;

        insert_user(&pool, &new_user("dup@example.com")).await.unwrap();
        let second = insert_user(&pool, &new_user("dup@example.com")).await;
        assert!(matches!(second, Err(StoreError::DuplicateEmail)));

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("dup@example.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_missing_user_is_none() {
        let pool = test_pool().await;
        assert!(find_by_email(&pool, "nobody@example.com").await.unwrap().is_none());
        assert!(find_by_id(&pool, 42).await.unwrap().is_none());
    }
}
