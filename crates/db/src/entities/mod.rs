//! `SeaORM` entity definitions.
//!
//! One module per table plus the Postgres enum mappings in
//! [`sea_orm_active_enums`].

pub mod departments;
pub mod document_approvals;
pub mod document_movements;
pub mod documents;
pub mod sea_orm_active_enums;
pub mod trail_steps;
pub mod trails;
pub mod users;
