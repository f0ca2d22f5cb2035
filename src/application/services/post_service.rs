//! Post Service
//!
//! Handles post CRUD, pagination, substring search, and image upload.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostPage, PostRepository, PostUpdate, SortOrder};
use crate::infrastructure::storage::LocalFileStorage;

/// Post service trait
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a new post
    async fn create_post(&self, new_post: NewPost) -> Result<Post, PostError>;

    /// Get a single post
    async fn get_post(&self, id: i64) -> Result<Post, PostError>;

    /// List posts with offset pagination
    async fn list_posts(
        &self,
        limit: i64,
        offset: i64,
        order: SortOrder,
    ) -> Result<PostListing, PostError>;

    /// Apply a partial update to a post
    async fn update_post(&self, id: i64, changes: PostUpdate) -> Result<Post, PostError>;

    /// Delete a post
    async fn delete_post(&self, id: i64) -> Result<(), PostError>;

    /// Store an uploaded image and attach it to a post
    async fn attach_image(
        &self,
        id: i64,
        filename: &str,
        bytes: &[u8],
    ) -> Result<Post, PostError>;

    /// Substring search over title, content, and author
    async fn search_posts(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<PostPage, PostError>;
}

/// One page of posts plus navigation offsets.
#[derive(Debug, Clone)]
pub struct PostListing {
    pub total_posts: i64,
    pub limit: i64,
    pub offset: i64,
    pub next_offset: Option<i64>,
    pub previous_offset: Option<i64>,
    pub posts: Vec<Post>,
}

/// Post service errors
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Post not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::shared::error::AppError> for PostError {
    fn from(e: crate::shared::error::AppError) -> Self {
        PostError::Internal(e.to_string())
    }
}

/// Offsets of the neighboring pages, or None when out of range.
fn page_offsets(total: i64, limit: i64, offset: i64) -> (Option<i64>, Option<i64>) {
    let next = if offset + limit < total {
        Some(offset + limit)
    } else {
        None
    };
    let previous = if offset - limit >= 0 {
        Some(offset - limit)
    } else {
        None
    };
    (next, previous)
}

/// PostService implementation
pub struct PostServiceImpl<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
    storage: Arc<LocalFileStorage>,
}

impl<P> PostServiceImpl<P>
where
    P: PostRepository,
{
    /// Create a new PostServiceImpl
    pub fn new(post_repo: Arc<P>, storage: Arc<LocalFileStorage>) -> Self {
        Self { post_repo, storage }
    }
}

#[async_trait]
impl<P> PostService for PostServiceImpl<P>
where
    P: PostRepository + 'static,
{
    async fn create_post(&self, new_post: NewPost) -> Result<Post, PostError> {
        Ok(self.post_repo.create(&new_post).await?)
    }

    async fn get_post(&self, id: i64) -> Result<Post, PostError> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound)
    }

    async fn list_posts(
        &self,
        limit: i64,
        offset: i64,
        order: SortOrder,
    ) -> Result<PostListing, PostError> {
        let page = self.post_repo.list(limit, offset, order).await?;
        let (next_offset, previous_offset) = page_offsets(page.total, limit, offset);

        Ok(PostListing {
            total_posts: page.total,
            limit,
            offset,
            next_offset,
            previous_offset,
            posts: page.posts,
        })
    }

    async fn update_post(&self, id: i64, changes: PostUpdate) -> Result<Post, PostError> {
        self.post_repo
            .update(id, &changes)
            .await?
            .ok_or(PostError::NotFound)
    }

    async fn delete_post(&self, id: i64) -> Result<(), PostError> {
        if self.post_repo.delete(id).await? {
            Ok(())
        } else {
            Err(PostError::NotFound)
        }
    }

    async fn attach_image(
        &self,
        id: i64,
        filename: &str,
        bytes: &[u8],
    ) -> Result<Post, PostError> {
        // Reject before writing anything to disk when the post is absent.
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound)?;

        let image_url = self.storage.store_image(filename, bytes).await?;

        self.post_repo
            .set_image_url(id, &image_url)
            .await?
            .ok_or(PostError::NotFound)
    }

    async fn search_posts(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<PostPage, PostError> {
        Ok(self.post_repo.search(query, limit, offset).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_fifteen() {
        // 15 posts, limit 10, offset 0: a next page exists, no previous
        assert_eq!(page_offsets(15, 10, 0), (Some(10), None));
    }

    #[test]
    fn test_last_page_of_fifteen() {
        assert_eq!(page_offsets(15, 10, 10), (None, Some(0)));
    }

    #[test]
    fn test_middle_page() {
        assert_eq!(page_offsets(30, 10, 10), (Some(20), Some(0)));
    }

    #[test]
    fn test_empty_store_has_no_neighbors() {
        assert_eq!(page_offsets(0, 10, 0), (None, None));
    }

    #[test]
    fn test_exact_boundary_has_no_next() {
        // offset + limit == total means the page ends exactly at the last row
        assert_eq!(page_offsets(20, 10, 10), (None, Some(0)));
    }

    #[test]
    fn test_offset_beyond_total() {
        assert_eq!(page_offsets(5, 10, 50), (None, Some(40)));
    }
}
