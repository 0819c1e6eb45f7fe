use super::propagation_context::HasAssignments;
use super::LocalId;
use super::PropagatorId;
use super::PropagatorVarId;
use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::trailed::TrailedInteger;
use crate::engine::cp::trailed::TrailedValues;
use crate::engine::cp::watch_list_cp::WatchListCP;
use crate::engine::cp::watch_list_cp::Watchers;
use crate::engine::variables::IntegerVariable;

/// The context handed to [`Propagator::initialise_at_root`](super::Propagator::initialise_at_root).
/// Through it a propagator declares, per variable in its scope, the domain events it wants to be
/// woken up for, and allocates the reversible cells backing its incremental state.
#[derive(Debug)]
pub struct PropagatorInitialisationContext<'a> {
    watch_list: &'a mut WatchListCP,
    trailed_values: &'a mut TrailedValues,
    propagator_id: PropagatorId,
    assignments: &'a Assignments,
}

impl<'a> PropagatorInitialisationContext<'a> {
    pub(crate) fn new(
        watch_list: &'a mut WatchListCP,
        trailed_values: &'a mut TrailedValues,
        propagator_id: PropagatorId,
        assignments: &'a Assignments,
    ) -> Self {
        PropagatorInitialisationContext {
            watch_list,
            trailed_values,
            propagator_id,
            assignments,
        }
    }

    /// Subscribes the propagator to the provided [`DomainEvents`] on `var`. The `local_id` is the
    /// index of `var` within the propagator and is handed back on every notification.
    pub fn register<Var: IntegerVariable>(
        &mut self,
        var: Var,
        domain_events: DomainEvents,
        local_id: LocalId,
    ) {
        let propagator_var = PropagatorVarId {
            propagator: self.propagator_id,
            variable: local_id,
        };

        let mut watchers = Watchers::new(propagator_var, self.watch_list);
        var.watch_all(&mut watchers, domain_events.get_int_events());
    }

    /// Allocates a new reversible integer cell owned by this propagator.
    pub fn new_trailed_integer(&mut self, initial_value: i64) -> TrailedInteger {
        self.trailed_values.grow(initial_value)
    }
}

impl HasAssignments for PropagatorInitialisationContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
