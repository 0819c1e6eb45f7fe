use enumset::EnumSet;

use super::TransformableVariable;
use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::assignments::EmptyDomain;
use crate::engine::cp::watch_list_cp::IntDomainEvent;
use crate::engine::cp::watch_list_cp::Watchers;

/// A trait which defines the operations of an integer variable. Implementations are cheap
/// handles; the domain state itself lives in the [`Assignments`].
pub trait IntegerVariable: Clone + TransformableVariable<Self::AffineView> {
    type AffineView: IntegerVariable;

    /// Get the lower bound of the variable.
    fn lower_bound(&self, assignment: &Assignments) -> i32;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, assignment: &Assignments) -> i32;

    /// Determine whether the value is in the domain of this variable.
    fn contains(&self, assignment: &Assignments, value: i32) -> bool;

    /// Iterate over the values of the domain, in increasing order for positively scaled
    /// variables.
    fn iterate_domain(&self, assignment: &Assignments) -> impl Iterator<Item = i32>;

    /// Remove a value from the domain of this variable.
    fn remove(&self, assignment: &mut Assignments, value: i32) -> Result<(), EmptyDomain>;

    /// Tighten the lower bound of the domain of this variable.
    fn set_lower_bound(&self, assignment: &mut Assignments, value: i32)
        -> Result<(), EmptyDomain>;

    /// Tighten the upper bound of the domain of this variable.
    fn set_upper_bound(&self, assignment: &mut Assignments, value: i32)
        -> Result<(), EmptyDomain>;

    /// Register a watch for this variable on the given domain events.
    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<IntDomainEvent>);

    /// Decode a domain event of the underlying [`DomainId`](super::DomainId) into an event in
    /// terms of this variable. For negatively scaled views, a lower bound event on the underlying
    /// domain is an upper bound event on the view.
    fn unpack_event(&self, event: IntDomainEvent) -> IntDomainEvent;
}
