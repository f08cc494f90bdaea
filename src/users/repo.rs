use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email_address, password_hash, created_at
            FROM users
            WHERE email_address = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        first_name: &str,
        last_name: &str,
        email_address: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email_address, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email_address, password_hash, created_at
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email_address)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}
