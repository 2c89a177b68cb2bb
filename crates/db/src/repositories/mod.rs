//! Repository layer for database access.
//!
//! Repositories wrap `SeaORM` queries and enforce core-service
//! validation before any write.

pub mod department;
pub mod lifecycle;
pub mod trail;


pub use department::{DepartmentError, DepartmentRepository};
pub use lifecycle::{
    CreateDocumentInput, DocumentFilter, DocumentHistory, HistoryEvent, LifecycleRepository,
};
pub use trail::{TrailInput, TrailRepository, TrailWithSteps};
