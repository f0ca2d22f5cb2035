//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    // Protected routes (require a valid bearer token)
    let protected_routes = Router::new()
        .route("/protected/", get(handlers::auth::protected))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Posts
        .route(
            "/posts/",
            post(handlers::post::create_post).get(handlers::post::list_posts),
        )
        .route(
            "/posts/{id}",
            get(handlers::post::get_post)
                .put(handlers::post::update_post)
                .delete(handlers::post::delete_post),
        )
        // Reactions
        .route(
            "/posts/{id}/react",
            post(handlers::reaction::add_reaction).delete(handlers::reaction::remove_reaction),
        )
        // Upload & search
        .route("/upload/", post(handlers::upload::upload_image))
        .route("/search/", get(handlers::search::search_posts))
        // Authentication
        .route("/register/", post(handlers::auth::register))
        .route("/login/", post(handlers::auth::login))
        .merge(protected_routes)
        // Uploaded images are served statically under /uploads
        .nest_service(
            "/uploads",
            ServeDir::new(&state.settings.storage.upload_dir),
        )
        .with_state(state)
}
