//! Registration and content endpoints

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{ApiResult, ErrorBody};
use crate::state::AppState;
use postboard_app::{
    PostResult, ProfileResult, RegisterPostCommand, RegisterProfileCommand, RegisterUserCommand,
    RegistrationResult,
};
use postboard_database::PostRow;
use postboard_domain::UserId;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterProfileRequest {
    pub age: i64,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterPostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub status: String,
    pub message: String,
    pub access_token: String,
}

impl From<RegistrationResult> for RegistrationResponse {
    fn from(result: RegistrationResult) -> Self {
        Self {
            status: result.status,
            message: result.message,
            access_token: result.access_token,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl From<ProfileResult> for StatusResponse {
    fn from(result: ProfileResult) -> Self {
        Self {
            status: result.status,
            message: result.message,
        }
    }
}

impl From<PostResult> for StatusResponse {
    fn from(result: PostResult) -> Self {
        Self {
            status: result.status,
            message: result.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub post_id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub status: String,
    pub created_at: String,
}

impl From<PostRow> for PostResponse {
    fn from(row: PostRow) -> Self {
        Self {
            post_id: row.post_id,
            user_id: row.user_id,
            title: row.title,
            content: row.content,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/auth/add-user",
    tag = "Auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account registered, access token issued", body = RegistrationResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 500, description = "Registration failed", body = ErrorBody)
    )
)]
pub async fn add_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> ApiResult<(StatusCode, Json<RegistrationResponse>)> {
    let result = state
        .registration
        .register_user(RegisterUserCommand {
            username: payload.username,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

#[utoipa::path(
    post,
    path = "/auth/add-profile",
    tag = "Auth",
    request_body = RegisterProfileRequest,
    responses(
        (status = 201, description = "Profile attached to the authenticated user", body = StatusResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorBody),
        (status = 500, description = "Persistence failure", body = ErrorBody)
    )
)]
pub async fn add_profile(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(payload): Json<RegisterProfileRequest>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    let result = state
        .registration
        .register_profile(
            RegisterProfileCommand {
                age: payload.age,
                name: payload.name,
                city: payload.city,
            },
            user_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

#[utoipa::path(
    post,
    path = "/auth/add-post",
    tag = "Auth",
    request_body = RegisterPostRequest,
    responses(
        (status = 201, description = "Draft post created", body = StatusResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorBody),
        (status = 500, description = "Persistence failure", body = ErrorBody)
    )
)]
pub async fn add_post(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(payload): Json<RegisterPostRequest>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    let result = state
        .registration
        .register_post(
            RegisterPostCommand {
                title: payload.title,
                content: payload.content,
            },
            user_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

#[utoipa::path(
    get,
    path = "/auth/get-user-posts-by-id",
    tag = "Auth",
    responses(
        (status = 200, description = "Posts owned by the authenticated user", body = Vec<PostResponse>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorBody),
        (status = 500, description = "Persistence failure", body = ErrorBody)
    )
)]
pub async fn get_user_posts_by_id(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let posts = state.repository.posts_by_user(&user_id).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}
