//! # Postboard Domain Crate
//!
//! This crate holds the domain model for the Postboard backend: self-validating
//! value objects, the `User`/`Profile`/`Post` aggregates, and the domain events
//! they queue on construction. It also defines the trait seams (password
//! hashing, token issuance, persistence) that the infrastructure crates
//! implement, so the domain stays free of database and crypto dependencies.
//!
//! ## Architecture
//!
//! - **Values**: immutable, validated primitives (`Username`, `Age`, ...)
//! - **Aggregates**: invariant-enforcing constructors that emit events
//! - **Events**: append-only records drained exactly once via `pull_events`
//! - **Seams**: `PasswordHasher`, `TokenIssuer`, `UserRepository`

pub mod aggregates;
pub mod error;
pub mod events;
pub mod hasher;
pub mod repository;
pub mod token;
pub mod values;

pub use aggregates::{Post, Profile, User};
pub use error::DomainError;
pub use events::{DomainEvent, DomainEventKind};
pub use hasher::PasswordHasher;
pub use repository::{RepositoryError, UserRepository};
pub use token::{TokenError, TokenIssuer};
pub use values::{
    Age, City, Content, PasswordHash, PostId, PostStatus, ProfileName, Title, UserId, Username,
};

/// Result alias for fallible domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
