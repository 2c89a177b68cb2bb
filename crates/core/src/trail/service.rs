//! Trail validation and sequence assignment.

use uuid::Uuid;

use crate::trail::error::TrailError;
use crate::trail::types::{TrailStep, TrailStepInput};

/// Stateless service for trail template rules.
pub struct TrailService;

impl TrailService {
    /// Validate a trail name.
    ///
    /// # Returns
    /// * `Ok(())` when non-empty after trimming
    /// * `Err(TrailError::NameRequired)` otherwise
    pub fn validate_name(name: &str) -> Result<(), TrailError> {
        if name.trim().is_empty() {
            return Err(TrailError::NameRequired);
        }
        Ok(())
    }

    /// Assign contiguous sequence numbers (1..N) in submission order.
    ///
    /// # Arguments
    /// * `steps` - The submitted steps, in intended order
    ///
    /// # Returns
    /// * `Ok(Vec<TrailStep>)` with sequences assigned
    /// * `Err(TrailError::EmptyTrail)` when no steps were submitted
    pub fn assign_sequences(steps: Vec<TrailStepInput>) -> Result<Vec<TrailStep>, TrailError> {
        if steps.is_empty() {
            return Err(TrailError::EmptyTrail);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let assigned = steps
            .into_iter()
            .enumerate()
            .map(|(i, step)| TrailStep {
                sequence: (i + 1) as i32,
                department_id: step.department_id,
                requires_approval: step.requires_approval,
            })
            .collect();
        Ok(assigned)
    }

    /// The department a document is ultimately routed to: the last step's.
    #[must_use]
    pub fn final_destination(steps: &[TrailStep]) -> Option<Uuid> {
        steps
            .iter()
            .max_by_key(|step| step.sequence)
            .map(|step| step.department_id)
    }
}
