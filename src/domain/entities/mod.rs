//! # Domain Entities
//!
//! Core domain entities representing the main business objects in the blog
//! server. All entities map directly to their corresponding database tables.
//!
//! - **User**: Registered account with a hashed password
//! - **Post**: A blog post with title, content, author, and optional image
//! - **Reaction**: A counted emoji/text label attached to a post
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod post;
mod reaction;
mod user;

// Re-export Post entity and related types
pub use post::{NewPost, Post, PostPage, PostRepository, PostUpdate, SortOrder};

// Re-export Reaction entity and related types
pub use reaction::{Reaction, ReactionRepository};

// Re-export User entity and related types
pub use user::{NewUser, User, UserRepository};
