//! Core business logic for Doctra.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, transition rules, and access checks live here.
//!
//! # Modules
//!
//! - `lifecycle` - Document state machine, access policy, notification contract
//! - `trail` - Routing templates and sequence rules

pub mod lifecycle;
pub mod trail;
