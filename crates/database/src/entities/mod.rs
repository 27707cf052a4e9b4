//! Row types read back from the database.

pub mod post;

pub use post::PostRow;
