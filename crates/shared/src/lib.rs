//! Shared types, errors, and configuration for Doctra.
//!
//! This crate provides common types used across all other crates:
//! - The six-kind error taxonomy every domain error maps into
//! - Pagination types for list endpoints
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::ErrorKind;
