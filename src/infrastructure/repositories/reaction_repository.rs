//! Reaction Repository Implementation
//!
//! PostgreSQL implementation of per-post reaction counters. One row per
//! (post, reaction_type) pair; the row exists only while its count is >= 1.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Reaction, ReactionRepository};
use crate::shared::error::AppError;

/// Internal row type for reaction queries.
#[derive(Debug, sqlx::FromRow)]
struct ReactionRow {
    post_id: i64,
    reaction_type: String,
    count: i64,
}

impl ReactionRow {
    fn into_reaction(self) -> Reaction {
        Reaction {
            post_id: self.post_id,
            reaction_type: self.reaction_type,
            count: self.count,
        }
    }
}

/// PostgreSQL implementation of the ReactionRepository.
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Creates a new PgReactionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    /// Increment the counter for (post, reaction_type).
    ///
    /// Uses INSERT ON CONFLICT with an in-database increment, so two
    /// concurrent calls on the same pair serialize on the row and neither
    /// update is lost.
    async fn increment(
        &self,
        post_id: i64,
        reaction_type: &str,
    ) -> Result<Option<Reaction>, AppError> {
        let result = sqlx::query_as::<_, ReactionRow>(
            r#"
            INSERT INTO post_reactions (post_id, reaction_type, count)
            VALUES ($1, $2, 1)
            ON CONFLICT (post_id, reaction_type)
            DO UPDATE SET count = post_reactions.count + 1
            RETURNING post_id, reaction_type, count
            "#,
        )
        .bind(post_id)
        .bind(reaction_type)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(Some(row.into_reaction())),
            // Inserting a reaction for a missing post trips the FK; that is
            // the "post not found" signal, not a storage failure.
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    /// Decrement the counter for (post, reaction_type), removing the row
    /// when the count would reach zero.
    ///
    /// Runs in one transaction. The UPDATE only matches rows with count > 1
    /// and the DELETE only matches count = 1, so the count >= 1 constraint
    /// holds at every point and concurrent decrements cannot drive the
    /// counter negative.
    async fn decrement(
        &self,
        post_id: i64,
        reaction_type: &str,
    ) -> Result<Option<Reaction>, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, ReactionRow>(
            r#"
            UPDATE post_reactions
            SET count = count - 1
            WHERE post_id = $1 AND reaction_type = $2 AND count > 1
            RETURNING post_id, reaction_type, count
            "#,
        )
        .bind(post_id)
        .bind(reaction_type)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(row) = updated {
            tx.commit().await?;
            return Ok(Some(row.into_reaction()));
        }

        let deleted = sqlx::query(
            r#"
            DELETE FROM post_reactions
            WHERE post_id = $1 AND reaction_type = $2 AND count = 1
            "#,
        )
        .bind(post_id)
        .bind(reaction_type)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if deleted.rows_affected() > 0 {
            Ok(Some(Reaction {
                post_id,
                reaction_type: reaction_type.to_string(),
                count: 0,
            }))
        } else {
            Ok(None)
        }
    }
}
