//! # Postboard App Crate
//!
//! Application layer: thin command handlers that drive the aggregates,
//! persist them through the repository seam, publish the drained domain
//! events, and issue access tokens on registration.

pub mod commands;
pub mod error;
pub mod handler;
pub mod publisher;
pub mod results;

pub use commands::{RegisterPostCommand, RegisterProfileCommand, RegisterUserCommand};
pub use error::AppError;
pub use handler::RegistrationHandler;
pub use publisher::{EventPublisher, TracingEventPublisher};
pub use results::{PostResult, ProfileResult, RegistrationResult};
