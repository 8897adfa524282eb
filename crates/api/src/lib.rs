//! Data model shared by the discovery and rendering halves of the generator.

pub mod error;
pub mod models;

pub use error::ApiError;
pub use models::*;
