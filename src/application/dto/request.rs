//! Request DTOs
//!
//! Data structures for API request bodies and query parameters.

use serde::Deserialize;
use validator::Validate;

use crate::domain::SortOrder;

/// Create post request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: String,

    pub image_url: Option<String>,
}

/// Partial post update request; absent fields are left untouched
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: Option<String>,

    pub image_url: Option<String>,
}

/// Post listing query parameters
#[derive(Debug, Deserialize, Validate)]
pub struct ListPostsParams {
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: Option<i64>,

    pub order: Option<SortOrder>,
}

/// Search query parameters
#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: Option<i64>,
}

/// Upload query parameters
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub post_id: i64,
}

/// Reaction request body (emoji or short text label)
#[derive(Debug, Deserialize, Validate)]
pub struct ReactionRequest {
    #[validate(length(min = 1, max = 100, message = "reaction_type must be 1-100 characters"))]
    pub reaction_type: String,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 2, max = 64, message = "Username must be 2-64 characters"))]
    pub username: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_rejects_empty_title() {
        let body = CreatePostRequest {
            title: String::new(),
            content: "text".to_string(),
            author: "alice".to_string(),
            image_url: None,
        };

        assert!(body.validate().is_err());
    }

    #[test]
    fn test_update_post_allows_all_fields_absent() {
        let body = UpdatePostRequest {
            title: None,
            content: None,
            author: None,
            image_url: None,
        };

        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_list_params_reject_out_of_range_limit() {
        let params = ListPostsParams {
            limit: Some(0),
            offset: None,
            order: None,
        };
        assert!(params.validate().is_err());

        let params = ListPostsParams {
            limit: Some(101),
            offset: None,
            order: None,
        };
        assert!(params.validate().is_err());

        let params = ListPostsParams {
            limit: Some(100),
            offset: Some(0),
            order: None,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_register_rejects_bad_email_and_short_password() {
        let body = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "longenough123".to_string(),
            username: None,
        };
        assert!(body.validate().is_err());

        let body = RegisterRequest {
            email: "a@example.com".to_string(),
            password: "short".to_string(),
            username: None,
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_reaction_request_accepts_emoji() {
        let body = ReactionRequest {
            reaction_type: "👍".to_string(),
        };
        assert!(body.validate().is_ok());
    }
}
