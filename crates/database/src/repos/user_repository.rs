//! User repository for database operations.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::{error, info};

use postboard_domain::{Post, Profile, RepositoryError, User, UserId, UserRepository};

use crate::entities::PostRow;

/// Repository persisting the three aggregates and serving the posts listing.
#[derive(Clone)]
pub struct SqlUserRepository {
    pool: SqlitePool,
}

impl SqlUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All posts belonging to the given user, oldest first.
    pub async fn posts_by_user(&self, user_id: &UserId) -> Result<Vec<PostRow>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT post_id, user_id, title, content, status, created_at \
             FROM posts WHERE user_id = ? ORDER BY created_at ASC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, "failed to fetch posts");
            RepositoryError::Database(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|row| PostRow {
                post_id: row.get("post_id"),
                user_id: row.get("user_id"),
                title: row.get("title"),
                content: row.get("content"),
                status: row.get("status"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn add_user(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO user (user_id, username, password, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user.user_id().to_string())
        .bind(user.username().as_str())
        .bind(user.password().as_str())
        .bind(user.created_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to insert user");
            RepositoryError::Database(e.to_string())
        })?;

        info!(user_id = %user.user_id(), "user persisted");
        Ok(())
    }

    async fn add_profile(&self, profile: &Profile) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO profile (user_id, age, name, city) VALUES (?, ?, ?, ?)")
            .bind(profile.user_id().to_string())
            .bind(i64::from(profile.age().value()))
            .bind(profile.name().as_str())
            .bind(profile.city().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %profile.user_id(), "failed to insert profile");
                RepositoryError::Database(e.to_string())
            })?;

        info!(user_id = %profile.user_id(), "profile persisted");
        Ok(())
    }

    async fn add_post(&self, post: &Post) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO posts (post_id, user_id, title, content, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(post.post_id().to_string())
        .bind(post.user_id().to_string())
        .bind(post.title().as_str())
        .bind(post.content().as_str())
        .bind(post.status().as_str())
        .bind(post.created_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %post.user_id(), "failed to insert post");
            RepositoryError::Database(e.to_string())
        })?;

        info!(post_id = %post.post_id(), user_id = %post.user_id(), "post persisted");
        Ok(())
    }
}
