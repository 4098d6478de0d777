//! REST client and wire models for the media backend.

pub mod client;
pub mod error;
pub mod models;

pub use client::LibraryClient;
pub use error::ApiError;
pub use models::*;
