//! Reaction Service
//!
//! Upsert-with-increment and decrement-or-delete semantics over the
//! reaction counter repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Reaction, ReactionRepository};

/// Reaction service trait
#[async_trait]
pub trait ReactionService: Send + Sync {
    /// Add one reaction of the given type to a post
    async fn react(&self, post_id: i64, reaction_type: &str) -> Result<Reaction, ReactionError>;

    /// Remove one reaction of the given type from a post
    async fn unreact(&self, post_id: i64, reaction_type: &str) -> Result<Reaction, ReactionError>;
}

/// Reaction service errors
#[derive(Debug, thiserror::Error)]
pub enum ReactionError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Reaction not found")]
    ReactionNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ReactionService implementation
pub struct ReactionServiceImpl<R>
where
    R: ReactionRepository,
{
    reaction_repo: Arc<R>,
}

impl<R> ReactionServiceImpl<R>
where
    R: ReactionRepository,
{
    /// Create a new ReactionServiceImpl
    pub fn new(reaction_repo: Arc<R>) -> Self {
        Self { reaction_repo }
    }
}

#[async_trait]
impl<R> ReactionService for ReactionServiceImpl<R>
where
    R: ReactionRepository + 'static,
{
    async fn react(&self, post_id: i64, reaction_type: &str) -> Result<Reaction, ReactionError> {
        self.reaction_repo
            .increment(post_id, reaction_type)
            .await
            .map_err(|e| ReactionError::Internal(e.to_string()))?
            .ok_or(ReactionError::PostNotFound)
    }

    async fn unreact(&self, post_id: i64, reaction_type: &str) -> Result<Reaction, ReactionError> {
        self.reaction_repo
            .decrement(post_id, reaction_type)
            .await
            .map_err(|e| ReactionError::Internal(e.to_string()))?
            .ok_or(ReactionError::ReactionNotFound)
    }
}
