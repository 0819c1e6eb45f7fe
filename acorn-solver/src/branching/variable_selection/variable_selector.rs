use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// A trait containing the interface for variable selectors, specifying the appropriate hooks
/// into the solver and the methods required for selecting variables.
pub trait VariableSelector<Var> {
    /// Determines which variable to select next if there are any left to branch on. Should only
    /// return [`None`] when all variables which have been passed to the selector are fixed.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var>;

    /// A function which is called after a conflict has been found and processed.
    fn on_conflict(&mut self) {}

    /// A function which is called after a [`DomainId`] is unassigned during backtracking (i.e.
    /// when it was fixed but is no longer).
    fn on_unassign_integer(&mut self, _variable: DomainId, _value: i32) {}

    /// Whether restarting the search would select the exact same variables again; see
    /// [`Brancher::is_restart_pointless`](crate::branching::Brancher::is_restart_pointless).
    fn is_restart_pointless(&mut self) -> bool {
        true
    }
}
