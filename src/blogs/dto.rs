use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::blogs::repo::Blog;

const EXCERPT_CHARS: usize = 100;
const EXCERPT_MARKER: &str = "...";

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update. A field that is omitted and a field sent as `null`
/// deserialize the same way and both leave the stored value untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub author_id: Uuid,
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct DeleteBlogResponse {
    pub message: &'static str,
}

/// Display-only truncation; never stored.
pub(crate) fn excerpt(content: &str) -> String {
    if content.chars().count() <= EXCERPT_CHARS {
        content.to_string()
    } else {
        let cut: String = content.chars().take(EXCERPT_CHARS).collect();
        format!("{cut}{EXCERPT_MARKER}")
    }
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            excerpt: excerpt(&blog.content),
            id: blog.id,
            title: blog.title,
            content: blog.content,
            author: blog.author_name,
            author_id: blog.author_id,
            tags: blog.tags,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_passes_through() {
        let content = "short enough";
        assert_eq!(excerpt(content), content);
    }

    #[test]
    fn content_of_exactly_100_chars_is_unchanged() {
        let content = "y".repeat(100);
        assert_eq!(excerpt(&content), content);
    }

    #[test]
    fn long_content_is_cut_at_100_chars_with_marker() {
        let content = "x".repeat(150);
        let result = excerpt(&content);
        assert_eq!(result.len(), 103);
        assert_eq!(result, format!("{}...", &content[..100]));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let content = "é".repeat(120);
        let result = excerpt(&content);
        assert_eq!(result.chars().count(), 103);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn update_request_treats_null_and_omitted_alike() {
        let omitted: UpdateBlogRequest = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        let null: UpdateBlogRequest =
            serde_json::from_str(r#"{"title": "New", "content": null, "tags": null}"#).unwrap();
        assert_eq!(omitted.title.as_deref(), Some("New"));
        assert!(omitted.content.is_none() && omitted.tags.is_none());
        assert!(null.content.is_none() && null.tags.is_none());
    }

    #[test]
    fn response_carries_projection_fields() {
        let blog = Blog {
            id: Uuid::new_v4(),
            title: "A".into(),
            content: "x".repeat(150),
            tags: vec!["rust".into()],
            author_id: Uuid::new_v4(),
            author_name: "Alice".into(),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };
        let author_id = blog.author_id;
        let response = BlogResponse::from(blog);
        assert_eq!(response.excerpt.len(), 103);
        assert_eq!(response.author, "Alice");
        assert_eq!(response.author_id, author_id);

        let value = serde_json::to_value(&response).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "title",
            "content",
            "excerpt",
            "author",
            "author_id",
            "tags",
            "created_at",
            "updated_at",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
    }
}
