//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Registration, login, password hashing, JWT tokens
//! - **PostService**: Post CRUD, pagination, search, image upload
//! - **ReactionService**: Reaction counter increments and decrements

pub mod auth_service;
pub mod post_service;
pub mod reaction_service;

pub use auth_service::{
    create_token, decode_token, hash_password, verify_password, AuthError, AuthService,
    AuthServiceImpl, AuthTokens, Claims,
};
pub use post_service::{PostError, PostListing, PostService, PostServiceImpl};
pub use reaction_service::{ReactionError, ReactionService, ReactionServiceImpl};
