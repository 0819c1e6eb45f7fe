use crate::basic_types::SolutionReference;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainId;

/// A trait for defining a branching strategy (oftentimes utilising a
/// [`VariableSelector`](crate::branching::variable_selection::VariableSelector) and a
/// [`ValueSelector`](crate::branching::value_selection::ValueSelector)).
///
/// Implementations of this trait determine which part of the search space the solver explores
/// next. The returned decision must narrow the domain of at least one variable; if the
/// [`Brancher`] is implemented incorrectly then the behaviour of the solver is undefined.
pub trait Brancher {
    /// Returns the next decision concerning a single variable and value; it returns the
    /// [`Predicate`] corresponding to this decision (or [`None`] if all variables under
    /// consideration are assigned, in which case the current assignment is a solution).
    ///
    /// Note that this method **cannot** perform the assignment of the decision; the
    /// [`SelectionContext`] is only mutable to account for the usage of random generators.
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate>;

    /// A function which is called after a conflict has been found and processed.
    fn on_conflict(&mut self) {}

    /// A function which is called after a [`DomainId`] is unassigned during backtracking (i.e.
    /// when it was fixed but is no longer). This method could be called multiple times in a
    /// single backtracking operation.
    fn on_unassign_integer(&mut self, _variable: DomainId, _value: i32) {}

    /// This method is called when a solution is found, either a new incumbent during
    /// optimisation or any solution during enumeration.
    fn on_solution(&mut self, _solution: SolutionReference) {}

    /// This method is called whenever a restart is performed.
    fn on_restart(&mut self) {}

    /// Whether a restart would lead the search down the exact same path. Deterministic branchers
    /// return `true`, which lets the solver skip restarts that cannot help; strategies with a
    /// random component (or which learn between descents) return `false`.
    fn is_restart_pointless(&mut self) -> bool {
        true
    }
}
