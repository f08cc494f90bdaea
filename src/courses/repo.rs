use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: Uuid,
    #[serde(skip_serializing)]
    pub created_at: OffsetDateTime,
    #[serde(skip_serializing)]
    pub updated_at: OffsetDateTime,
}

/// Course row joined with the owner's public columns, for the read endpoints.
#[derive(Debug, Clone, FromRow)]
pub struct CourseWithOwner {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: Uuid,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email_address: String,
}

impl Course {
    pub async fn list_with_owner(db: &PgPool) -> Result<Vec<CourseWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, CourseWithOwner>(
            r#"
            SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
                   c.user_id,
                   u.first_name AS owner_first_name,
                   u.last_name AS owner_last_name,
                   u.email_address AS owner_email_address
            FROM courses c
            JOIN users u ON u.id = c.user_id
            ORDER BY c.created_at
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_with_owner(
        db: &PgPool,
        id: Uuid,
    ) -> Result<Option<CourseWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, CourseWithOwner>(
            r#"
            SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
                   c.user_id,
                   u.first_name AS owner_first_name,
                   u.last_name AS owner_last_name,
                   u.email_address AS owner_email_address
            FROM courses c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, estimated_time, materials_needed,
                   user_id, created_at, updated_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: &str,
        estimated_time: Option<&str>,
        materials_needed: Option<&str>,
    ) -> Result<Uuid, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(estimated_time)
        .bind(materials_needed)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    /// Persists the merged row in a single statement. `user_id` is
    /// deliberately not part of the SET list; ownership never changes.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: &str,
        description: &str,
        estimated_time: Option<&str>,
        materials_needed: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE courses
            SET title = $1, description = $2, estimated_time = $3,
                materials_needed = $4, updated_at = now()
            WHERE id = $5
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(estimated_time)
        .bind(materials_needed)
        .bind(id)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
