//! Trail templates for Doctra.
//!
//! Trails are predefined department-sequence templates. They seed a new
//! document's final destination; they do not constrain movement.
//!
//! # Modules
//!
//! - `types` - Trail step types
//! - `error` - Trail-specific error types
//! - `service` - Name validation and sequence assignment

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::TrailError;
pub use service::TrailService;
pub use types::{TrailStep, TrailStepInput};
