//! # Postboard Gateway Crate
//!
//! HTTP layer for the Postboard backend: the axum router, bearer-token
//! middleware, REST handlers, and the mapping from application errors onto
//! HTTP statuses.
//!
//! ## Architecture
//!
//! - **REST**: JSON endpoints under `/auth`, plus `/health`
//! - **State**: services constructed once and shared via `Arc`
//! - **Middleware**: bearer authentication, CORS, request logging

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create the main application router with all routes
pub fn create_router(state: AppState) -> Router {
    let arc_state = Arc::new(state);

    let public = Router::new()
        .route("/auth/add-user", post(rest::auth::add_user))
        .route("/health", get(rest::health::health_check));

    let protected = Router::new()
        .route("/auth/add-profile", post(rest::auth::add_profile))
        .route("/auth/add-post", post(rest::auth::add_post))
        .route(
            "/auth/get-user-posts-by-id",
            get(rest::auth::get_user_posts_by_id),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            arc_state.clone(),
            middleware::auth_middleware,
        ));

    let router = Router::new()
        .merge(public)
        .merge(protected)
        .with_state(arc_state)
        .layer(middleware::create_cors_middleware())
        .layer(axum_middleware::from_fn(middleware::logging_middleware));

    // Serve the OpenAPI document in debug builds
    #[cfg(debug_assertions)]
    let router = {
        use utoipa::OpenApi;

        #[derive(OpenApi)]
        #[openapi(
            paths(
                rest::auth::add_user,
                rest::auth::add_profile,
                rest::auth::add_post,
                rest::auth::get_user_posts_by_id,
                rest::health::health_check,
            ),
            components(
                schemas(
                    rest::auth::RegisterUserRequest,
                    rest::auth::RegisterProfileRequest,
                    rest::auth::RegisterPostRequest,
                    rest::auth::RegistrationResponse,
                    rest::auth::StatusResponse,
                    rest::auth::PostResponse,
                    rest::health::HealthResponse,
                    error::ErrorBody,
                )
            ),
            tags(
                (name = "Auth", description = "Registration and content endpoints"),
                (name = "Health", description = "Service health"),
            )
        )]
        struct ApiDoc;

        router.route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
    };

    router
}
