use crate::engine::cp::assignments::EmptyDomain;

/// The result of invoking a constraint programming propagator. The propagation can either succeed
/// or identify a conflict.
pub type PropagationStatusCP = Result<(), Inconsistency>;

/// The signal a propagator raises when the current assignment cannot be extended to a solution of
/// the constraint. This is the expected, frequent outcome which the search loop recovers from by
/// backtracking; it is deliberately a value and not a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// A domain operation performed by the propagator emptied a domain.
    EmptyDomain,
    /// The propagator determined the current state to be inconsistent without having emptied a
    /// domain itself, e.g. two variables fixed to the same value under a disequality.
    Conflict,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
