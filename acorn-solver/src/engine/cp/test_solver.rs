//! This module exposes helpers that aid testing of CP propagators. The [`TestSolver`] allows
//! setting up specific scenarios under which to test the various operations of a propagator.
use std::fmt::Debug;
use std::fmt::Formatter;

use crate::basic_types::Inconsistency;
use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::assignments::EmptyDomain;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::PropagationContextWithTrailedValues;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::trailed::TrailedValues;
use crate::engine::cp::watch_list_cp::IntDomainEvent;
use crate::engine::cp::watch_list_cp::WatchListCP;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;

/// A container for CP variables, which can be used to test propagators in isolation from the
/// search loop.
#[derive(Default)]
pub(crate) struct TestSolver {
    pub(crate) assignments: Assignments,
    pub(crate) trailed_values: TrailedValues,
    watch_list: WatchListCP,
    next_propagator_id: u32,
}

type BoxedPropagator = Box<dyn Propagator>;

impl Debug for TestSolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSolver").finish()
    }
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> DomainId {
        self.watch_list.grow();
        self.assignments.grow(lb, ub)
    }

    pub(crate) fn new_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<BoxedPropagator, Inconsistency> {
        let id = PropagatorId(self.next_propagator_id);
        self.next_propagator_id += 1;

        let mut propagator: BoxedPropagator = Box::new(propagator);
        propagator.initialise_at_root(&mut PropagatorInitialisationContext::new(
            &mut self.watch_list,
            &mut self.trailed_values,
            id,
            &self.assignments,
        ))?;
        self.propagate(&mut propagator)?;

        Ok(propagator)
    }

    pub(crate) fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(&self.assignments, value)
    }

    pub(crate) fn lower_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_lower_bound(var)
    }

    pub(crate) fn upper_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_upper_bound(var)
    }

    pub(crate) fn set_lower_bound(
        &mut self,
        var: DomainId,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.assignments.tighten_lower_bound(var, bound)
    }

    pub(crate) fn set_upper_bound(
        &mut self,
        var: DomainId,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.assignments.tighten_upper_bound(var, bound)
    }

    pub(crate) fn remove(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.remove_value_from_domain(var, value)
    }

    pub(crate) fn increase_lower_bound_and_notify(
        &mut self,
        propagator: &mut BoxedPropagator,
        local_id: u32,
        var: DomainId,
        value: i32,
    ) -> crate::engine::cp::propagation::EnqueueDecision {
        let result = self.assignments.tighten_lower_bound(var, value);
        assert!(
            result.is_ok(),
            "the provided value to `increase_lower_bound_and_notify` caused an empty domain"
        );
        let context =
            PropagationContextWithTrailedValues::new(&mut self.trailed_values, &self.assignments);
        propagator.notify(
            context,
            crate::engine::cp::propagation::LocalId::from(local_id),
            IntDomainEvent::LowerBound,
        )
    }

    pub(crate) fn propagate(
        &mut self,
        propagator: &mut BoxedPropagator,
    ) -> Result<(), Inconsistency> {
        let context = PropagationContextMut::new(&mut self.trailed_values, &mut self.assignments);
        propagator.propagate(context)
    }

    pub(crate) fn propagate_until_fixed_point(
        &mut self,
        propagator: &mut BoxedPropagator,
    ) -> Result<(), Inconsistency> {
        let mut num_trail_entries = self.assignments.num_trail_entries();
        self.notify_propagator(propagator);
        loop {
            {
                let context =
                    PropagationContextMut::new(&mut self.trailed_values, &mut self.assignments);
                propagator.propagate(context)?;
                self.notify_propagator(propagator);
            }
            if self.assignments.num_trail_entries() == num_trail_entries {
                break;
            }
            num_trail_entries = self.assignments.num_trail_entries();
        }
        Ok(())
    }

    pub(crate) fn notify_propagator(&mut self, propagator: &mut BoxedPropagator) {
        let events = self.assignments.drain_domain_events().collect::<Vec<_>>();
        for (event, domain) in events {
            for propagator_var in self.watch_list.get_affected_propagators(event, domain) {
                let context = PropagationContextWithTrailedValues::new(
                    &mut self.trailed_values,
                    &self.assignments,
                );
                let _ = propagator.notify(context, propagator_var.variable, event);
            }
        }
    }

    pub(crate) fn assert_bounds(&self, var: DomainId, lb: i32, ub: i32) {
        let actual_lb = self.lower_bound(var);
        let actual_ub = self.upper_bound(var);

        assert_eq!(
            (lb, ub), (actual_lb, actual_ub),
            "The expected bounds [{lb}..{ub}] did not match the actual bounds [{actual_lb}..{actual_ub}]"
        );
    }
}
