//! Property-based tests for TrailService sequence assignment.

use proptest::prelude::*;
use uuid::Uuid;

use crate::trail::service::TrailService;
use crate::trail::types::TrailStepInput;

/// Strategy for generating random step inputs.
fn arb_step() -> impl Strategy<Value = TrailStepInput> {
    (any::<u128>(), any::<bool>()).prop_map(|(id, requires_approval)| TrailStepInput {
        department_id: Uuid::from_u128(id),
        requires_approval,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Assigned sequences are always 1..N with no gaps, in submission order.
    #[test]
    fn prop_sequences_contiguous(steps in prop::collection::vec(arb_step(), 1..20)) {
        let inputs = steps.clone();
        let assigned = TrailService::assign_sequences(steps).unwrap();

        prop_assert_eq!(assigned.len(), inputs.len());
        for (i, step) in assigned.iter().enumerate() {
            prop_assert_eq!(step.sequence as usize, i + 1);
            prop_assert_eq!(step.department_id, inputs[i].department_id);
            prop_assert_eq!(step.requires_approval, inputs[i].requires_approval);
        }
    }

    /// The final destination is the department of the highest sequence.
    #[test]
    fn prop_final_destination_is_highest_sequence(
        steps in prop::collection::vec(arb_step(), 1..20)
    ) {
        let last = steps.last().unwrap().department_id;
        let assigned = TrailService::assign_sequences(steps).unwrap();
        prop_assert_eq!(TrailService::final_destination(&assigned), Some(last));
    }
}
