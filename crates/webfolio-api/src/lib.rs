//! Webfolio API Library
//!
//! This crate provides the HTTP handlers, error rendering, and application
//! setup for the folder-upload image transcoding service.

mod api_doc;

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use error::ErrorResponse;
