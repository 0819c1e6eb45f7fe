use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::propagation::store::PropagatorStore;
use crate::engine::cp::propagation::PropagationContext;

/// Checks that every posted propagator is satisfied under the current (full) assignment. Only
/// invoked under assertion macros when a solution is recorded; a failure indicates a bug in a
/// propagator or in the engine.
pub(crate) fn debug_check_propagator_satisfaction(
    assignments: &Assignments,
    propagators: &PropagatorStore,
) -> bool {
    propagators
        .iter_propagators()
        .all(|propagator| propagator.is_satisfied(PropagationContext::new(assignments)))
}
