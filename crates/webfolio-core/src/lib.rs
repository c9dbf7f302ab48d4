//! Core types for the Webfolio service: configuration, the unified error
//! taxonomy, and the domain models shared by the processing pipeline and the
//! HTTP API.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
