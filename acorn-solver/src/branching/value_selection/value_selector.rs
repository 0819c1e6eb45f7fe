use crate::basic_types::SolutionReference;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainId;

/// A trait containing the interface for value selectors, specifying the appropriate hooks into
/// the solver and the methods required for selecting a value for a given variable.
pub trait ValueSelector<Var> {
    /// Determines which value in the domain of `decision_variable` to branch next on. The domain
    /// of the `decision_variable` should have at least 2 values in it (as it otherwise should not
    /// have been selected). Returns a [`Predicate`] specifying the required change in the domain.
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var)
        -> Predicate;

    /// A function which is called after a [`DomainId`] is unassigned during backtracking (i.e.
    /// when it was fixed but is no longer).
    fn on_unassign_integer(&mut self, _variable: DomainId, _value: i32) {}

    /// This method is called when a solution is found.
    fn on_solution(&mut self, _solution: SolutionReference) {}

    /// Whether restarting the search would select the exact same values again; see
    /// [`Brancher::is_restart_pointless`](crate::branching::Brancher::is_restart_pointless).
    fn is_restart_pointless(&mut self) -> bool {
        true
    }
}
