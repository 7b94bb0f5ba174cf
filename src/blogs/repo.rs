use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Result-set cap for the public listing; no pagination cursor.
pub const LIST_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Blog {
    pub async fn insert(
        db: &PgPool,
        title: &str,
        content: &str,
        tags: &[String],
        author_id: Uuid,
        author_name: &str,
    ) -> anyhow::Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (title, content, tags, author_id, author_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, now(), now())
            RETURNING id, title, content, tags, author_id, author_name, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(tags)
        .bind(author_id)
        .bind(author_name)
        .fetch_one(db)
        .await?;
        Ok(blog)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Blog>> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, content, tags, author_id, author_name, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(blog)
    }

    /// Newest first, capped at `LIST_LIMIT`.
    pub async fn list_recent(db: &PgPool) -> anyhow::Result<Vec<Blog>> {
        let rows = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, content, tags, author_id, author_name, created_at, updated_at
            FROM blogs
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(LIST_LIMIT)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Patch only the supplied fields; `updated_at` is always refreshed.
    /// Returns `None` when the id no longer resolves.
    pub async fn update_fields(
        db: &PgPool,
        id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
        tags: Option<&[String]>,
    ) -> anyhow::Result<Option<Blog>> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs
            SET title      = COALESCE($2, title),
                content    = COALESCE($3, content),
                tags       = COALESCE($4, tags),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, content, tags, author_id, author_name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(tags)
        .fetch_optional(db)
        .await?;
        Ok(blog)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM blogs WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
