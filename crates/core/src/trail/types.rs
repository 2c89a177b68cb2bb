//! Trail domain types.
//!
//! A trail is a named, ordered template of department stops used to
//! seed a document's intended route. Steps carry contiguous sequence
//! numbers starting at 1, assigned by the registry and never trusted
//! from input order numbers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A submitted step, before sequence assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailStepInput {
    /// The department this stop routes through.
    pub department_id: Uuid,
    /// Whether an approval is expected at this stop.
    pub requires_approval: bool,
}

/// A validated step with its assigned sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailStep {
    /// Position in the trail, starting at 1, no gaps.
    pub sequence: i32,
    /// The department this stop routes through.
    pub department_id: Uuid,
    /// Whether an approval is expected at this stop.
    pub requires_approval: bool,
}
