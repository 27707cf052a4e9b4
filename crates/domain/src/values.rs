//! Self-validating value objects.
//!
//! Each type exposes a single validated constructor; an instance that exists
//! is guaranteed to satisfy its constraints. Equality is value-based and
//! there are no setters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::hasher::PasswordHasher;

/// Opaque user identifier backed by a random 128-bit UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh identifier. Never reused.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::validation("invalid user id"))
    }
}

/// Opaque post identifier, distinct from [`UserId`] at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::validation("invalid post id"))
    }
}

/// Account username: trimmed, 8 to 15 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        if trimmed.chars().count() < 8 {
            return Err(DomainError::validation("username is too short"));
        }
        if trimmed.chars().count() > 15 {
            return Err(DomainError::validation("username is too long"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Argon2 password hash. The plaintext is length-checked before hashing and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Validate the plaintext length (5 to 15 characters) and hash it via the
    /// hashing collaborator.
    pub fn from_plain(plain: &str, hasher: &impl PasswordHasher) -> Result<Self, DomainError> {
        if plain.chars().count() < 5 {
            return Err(DomainError::validation(
                "password must be at least 5 characters",
            ));
        }
        if plain.chars().count() > 15 {
            return Err(DomainError::validation(
                "password must be at most 15 characters",
            ));
        }
        Ok(Self(hasher.hash(plain)?))
    }

    pub fn verify(&self, plain: &str, hasher: &impl PasswordHasher) -> bool {
        hasher.verify(&self.0, plain)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display name attached to a profile: trimmed, 3 to 10 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileName(String);

impl ProfileName {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if trimmed.chars().count() < 3 {
            return Err(DomainError::validation("name is too short"));
        }
        if trimmed.chars().count() > 10 {
            return Err(DomainError::validation("name is too long"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Age in years, exclusive bounds: valid values are 1 to 79.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(u8);

impl Age {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::validation("age must be greater than 0"));
        }
        if value >= 80 {
            return Err(DomainError::validation("age must be less than 80"));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// City name: trimmed, 1 to 10 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("city is too short"));
        }
        if trimmed.chars().count() > 10 {
            return Err(DomainError::validation("city is too long"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post title: trimmed, 3 to 25 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < 3 {
            return Err(DomainError::validation("title is too short"));
        }
        if trimmed.chars().count() > 25 {
            return Err(DomainError::validation("title is too long"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post body: trimmed, 3 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(String);

impl Content {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < 3 {
            return Err(DomainError::validation("content is too short"));
        }
        if trimmed.chars().count() > 255 {
            return Err(DomainError::validation("content is too long"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Publication state of a post. Posts are created as `Draft`; no API path
/// currently transitions them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "archived" => Ok(PostStatus::Archived),
            other => Err(DomainError::validation(format!("invalid status: {other}"))),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
