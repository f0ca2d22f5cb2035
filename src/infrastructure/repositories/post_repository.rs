//! Post Repository Implementation
//!
//! PostgreSQL implementation of post operations: CRUD, offset pagination,
//! and case-insensitive substring search.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewPost, Post, PostPage, PostRepository, PostUpdate, SortOrder};
use crate::shared::error::AppError;

/// Internal row type for post queries.
/// Maps to the posts table schema defined in the migration.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl PostRow {
    /// Converts database row to domain Post entity.
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author,
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }
}

/// Escape LIKE/ILIKE metacharacters so user input matches literally.
fn escape_like(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// PostgreSQL post repository implementation.
///
/// Provides CRUD operations for posts against a PostgreSQL database.
/// Ordering is by creation time with id as tiebreak, so pages are
/// deterministic even when rows share a timestamp.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    /// Create a new post. The id and created_at are assigned by the database.
    async fn create(&self, new_post: &NewPost) -> Result<Post, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, author, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author, image_url, created_at
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(&new_post.author)
        .bind(&new_post.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author, image_url, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    /// List posts ordered by creation time in the requested direction.
    async fn list(&self, limit: i64, offset: i64, order: SortOrder) -> Result<PostPage, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        // The direction comes from a closed enum, never from user input,
        // so interpolating it into the statement is safe.
        let statement = format!(
            r#"
            SELECT id, title, content, author, image_url, created_at
            FROM posts
            ORDER BY created_at {dir}, id {dir}
            LIMIT $1 OFFSET $2
            "#,
            dir = order.as_sql()
        );

        let rows = sqlx::query_as::<_, PostRow>(&statement)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(PostPage {
            total,
            posts: rows.into_iter().map(PostRow::into_post).collect(),
        })
    }

    /// Apply only the supplied fields; absent fields keep their value.
    async fn update(&self, id: i64, changes: &PostUpdate) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                author = COALESCE($4, author),
                image_url = COALESCE($5, image_url)
            WHERE id = $1
            RETURNING id, title, content, author, image_url, created_at
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(&changes.author)
        .bind(&changes.image_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    /// Delete a post. Reaction rows go with it via ON DELETE CASCADE.
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Point the post at an uploaded image.
    async fn set_image_url(&self, id: i64, image_url: &str) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET image_url = $2
            WHERE id = $1
            RETURNING id, title, content, author, image_url, created_at
            "#,
        )
        .bind(id)
        .bind(image_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    /// Case-insensitive substring match over title, content, or author.
    async fn search(&self, query: &str, limit: i64, offset: i64) -> Result<PostPage, AppError> {
        let pattern = format!("%{}%", escape_like(query));

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM posts
            WHERE title ILIKE $1 OR content ILIKE $1 OR author ILIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author, image_url, created_at
            FROM posts
            WHERE title ILIKE $1 OR content ILIKE $1 OR author ILIKE $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(PostPage {
            total,
            posts: rows.into_iter().map(PostRow::into_post).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passes_plain_text() {
        assert_eq!(escape_like("hello world"), "hello world");
    }

    #[test]
    fn test_escape_like_escapes_metacharacters() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_escape_like_escapes_backslash_first() {
        // A backslash followed by a wildcard must not collapse into a
        // single escaped sequence.
        assert_eq!(escape_like("\\%"), "\\\\\\%");
    }
}
