//! Repository implementations over the SQLite pool.

pub mod user_repository;

pub use user_repository::SqlUserRepository;
