//! Blog post entity and repository trait.
//!
//! Maps to the `posts` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Sort direction for listing posts by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Represents a published blog post.
///
/// Maps to the `posts` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: TEXT NOT NULL
/// - content: TEXT NOT NULL
/// - author: TEXT NOT NULL (free-text display name, not a users FK)
/// - image_url: TEXT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// `created_at` is assigned by the database on insert and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Database-generated primary key
    pub id: i64,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Author display name (free text)
    pub author: String,

    /// Public URL of the post's image, if one was uploaded
    pub image_url: Option<String>,

    /// Creation timestamp (server-assigned, immutable)
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a post. The id and timestamp are generated
/// by the database.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
}

/// Partial update of a post. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
}

impl PostUpdate {
    /// True when no field is supplied, making the update a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.image_url.is_none()
    }
}

/// One page of posts together with the total row count for the query.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub total: i64,
    pub posts: Vec<Post>,
}

/// Repository trait for Post data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
/// Each call runs against a single pooled connection; mutating calls are
/// atomic on their own but not across calls.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a new post and return it with its generated id and timestamp.
    async fn create(&self, new_post: &NewPost) -> Result<Post, AppError>;

    /// Find a post by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// List posts ordered by creation time (id as tiebreak for rows with
    /// equal timestamps), plus the total post count.
    async fn list(&self, limit: i64, offset: i64, order: SortOrder) -> Result<PostPage, AppError>;

    /// Apply the supplied fields to a post. Returns None if the id is absent.
    async fn update(&self, id: i64, changes: &PostUpdate) -> Result<Option<Post>, AppError>;

    /// Delete a post. Returns false if the id is absent.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Set the post's image URL. Returns None if the id is absent.
    async fn set_image_url(&self, id: i64, image_url: &str) -> Result<Option<Post>, AppError>;

    /// Case-insensitive substring search over title, content, and author,
    /// newest first, plus the total match count.
    async fn search(&self, query: &str, limit: i64, offset: i64) -> Result<PostPage, AppError>;
}
