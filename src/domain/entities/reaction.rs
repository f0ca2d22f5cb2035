//! Post reaction entity and repository trait.
//!
//! Maps to the `post_reactions` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A counted reaction label on a post.
///
/// Maps to the `post_reactions` table:
/// - post_id: BIGINT NOT NULL REFERENCES posts(id) (composite PK)
/// - reaction_type: VARCHAR(100) NOT NULL (composite PK)
/// - count: BIGINT NOT NULL CHECK (count >= 1)
///
/// The composite primary key (post_id, reaction_type) ensures at most one
/// row per label per post. A row exists only while its count is >= 1;
/// decrementing a count of 1 removes the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Post this reaction is on
    pub post_id: i64,

    /// Emoji or short text label (e.g. "👍", "❤️", "lol")
    pub reaction_type: String,

    /// Number of times this reaction was added
    pub count: i64,
}

impl Reaction {
    /// Create a reaction with an initial count of 1.
    pub fn new(post_id: i64, reaction_type: String) -> Self {
        Self {
            post_id,
            reaction_type,
            count: 1,
        }
    }
}

/// Repository trait for Reaction data access operations.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Increment the counter for (post, reaction_type), creating the row
    /// with count 1 on first use. The increment is atomic: concurrent calls
    /// on the same pair never lose updates.
    ///
    /// Returns None if the post does not exist.
    async fn increment(
        &self,
        post_id: i64,
        reaction_type: &str,
    ) -> Result<Option<Reaction>, AppError>;

    /// Decrement the counter for (post, reaction_type), deleting the row
    /// when the count reaches zero.
    ///
    /// Returns None if no such reaction row exists; otherwise the reaction
    /// with its remaining count (0 when the row was just removed).
    async fn decrement(
        &self,
        post_id: i64,
        reaction_type: &str,
    ) -> Result<Option<Reaction>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reaction_starts_at_one() {
        let reaction = Reaction::new(7, "👍".to_string());
        assert_eq!(reaction.post_id, 7);
        assert_eq!(reaction.reaction_type, "👍");
        assert_eq!(reaction.count, 1);
    }

    #[test]
    fn test_reaction_serialization() {
        let reaction = Reaction::new(7, "❤️".to_string());
        let json = serde_json::to_string(&reaction).unwrap();

        assert!(json.contains("\"post_id\":7"));
        assert!(json.contains("\"count\":1"));
    }
}
