//! Result objects returned to the presentation layer.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResult {
    pub status: String,
    pub message: String,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResult {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResult {
    pub status: String,
    pub message: String,
}
