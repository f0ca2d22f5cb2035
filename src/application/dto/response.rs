//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{AuthTokens, PostListing};
use crate::domain::{Post, PostPage, Reaction};

/// Post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            image_url: post.image_url,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

/// Paginated post listing. `next_offset`/`previous_offset` are serialized
/// as null (not omitted) when the neighboring page is out of range.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub total_posts: i64,
    pub limit: i64,
    pub offset: i64,
    pub next_offset: Option<i64>,
    pub previous_offset: Option<i64>,
    pub posts: Vec<PostResponse>,
}

impl From<PostListing> for PostListResponse {
    fn from(listing: PostListing) -> Self {
        Self {
            total_posts: listing.total_posts,
            limit: listing.limit,
            offset: listing.offset,
            next_offset: listing.next_offset,
            previous_offset: listing.previous_offset,
            posts: listing.posts.into_iter().map(PostResponse::from).collect(),
        }
    }
}

/// Search result page
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total_count: i64,
    pub posts: Vec<PostResponse>,
}

impl From<PostPage> for SearchResponse {
    fn from(page: PostPage) -> Self {
        Self {
            total_count: page.total,
            posts: page.posts.into_iter().map(PostResponse::from).collect(),
        }
    }
}

/// Response to adding a reaction
#[derive(Debug, Serialize)]
pub struct ReactionAddedResponse {
    pub message: String,
    pub reaction: String,
    pub count: i64,
}

impl From<Reaction> for ReactionAddedResponse {
    fn from(reaction: Reaction) -> Self {
        Self {
            message: "Reaction added".to_string(),
            reaction: reaction.reaction_type,
            count: reaction.count,
        }
    }
}

/// Response to removing a reaction
#[derive(Debug, Serialize)]
pub struct ReactionRemovedResponse {
    pub message: String,
    pub reaction: String,
    pub remaining_count: i64,
}

impl From<Reaction> for ReactionRemovedResponse {
    fn from(reaction: Reaction) -> Self {
        Self {
            message: "Reaction removed".to_string(),
            reaction: reaction.reaction_type,
            remaining_count: reaction.count,
        }
    }
}

/// URLs produced by an upload
#[derive(Debug, Serialize)]
pub struct UploadUrls {
    pub image_url: String,
}

/// Response to an image upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub urls: UploadUrls,
}

/// Registration confirmation
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Bearer token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<AuthTokens> for TokenResponse {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            token_type: tokens.token_type,
        }
    }
}

/// Auth-gated greeting
#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
}
