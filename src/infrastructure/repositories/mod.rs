//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! This module provides concrete implementations of the repository traits
//! defined in the domain layer. Each repository handles data access for
//! a specific entity type.
//!
//! ## Available Repositories
//!
//! - **PostRepository** - Post CRUD, pagination, and substring search
//! - **ReactionRepository** - Per-post reaction counters
//! - **UserRepository** - Account lookup and registration

pub mod post_repository;
pub mod reaction_repository;
pub mod user_repository;

pub use post_repository::PgPostRepository;
pub use reaction_repository::PgReactionRepository;
pub use user_repository::PgUserRepository;
