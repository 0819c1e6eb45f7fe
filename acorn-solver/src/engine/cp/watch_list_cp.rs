use enumset::EnumSet;
use enumset::EnumSetType;

use crate::acorn_assert_moderate;
use crate::containers::KeyedVec;
use crate::engine::cp::propagation::PropagatorVarId;
use crate::engine::variables::DomainId;

/// A description of the kinds of events that can happen on a domain variable.
#[derive(Debug, EnumSetType, Hash)]
pub enum IntDomainEvent {
    /// Event where an (integer) variable domain collapses to a single value.
    Assign,
    /// Event where an (integer) variable domain tightens the lower bound.
    LowerBound,
    /// Event where an (integer) variable domain tightens the upper bound.
    UpperBound,
    /// Event where an (integer) variable domain removes an inner value within the domain.
    Removal,
}

impl std::fmt::Display for IntDomainEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntDomainEvent::Assign => write!(f, "[Event:Assign]"),
            IntDomainEvent::LowerBound => write!(f, "[Event:LB]"),
            IntDomainEvent::UpperBound => write!(f, "[Event:UB]"),
            IntDomainEvent::Removal => write!(f, "[Event:Remove]"),
        }
    }
}

/// Per-variable subscription lists: for every domain and event kind, the propagators that must be
/// woken up when that event occurs on that domain. Registration order is preserved, which makes
/// the wake-up order deterministic for a fixed model.
#[derive(Default, Debug)]
pub(crate) struct WatchListCP {
    watchers: KeyedVec<DomainId, WatcherCP>,
    is_watching_anything: bool,
}

#[derive(Default, Debug, Clone)]
struct WatcherCP {
    lower_bound_watchers: Vec<PropagatorVarId>,
    upper_bound_watchers: Vec<PropagatorVarId>,
    assign_watchers: Vec<PropagatorVarId>,
    removal_watchers: Vec<PropagatorVarId>,
}

impl WatchListCP {
    pub(crate) fn grow(&mut self) {
        let _ = self.watchers.push(WatcherCP::default());
    }

    pub(crate) fn is_watching_anything(&self) -> bool {
        self.is_watching_anything
    }

    pub(crate) fn get_affected_propagators(
        &self,
        event: IntDomainEvent,
        domain: DomainId,
    ) -> &[PropagatorVarId] {
        let watcher = &self.watchers[domain];

        match event {
            IntDomainEvent::Assign => &watcher.assign_watchers,
            IntDomainEvent::LowerBound => &watcher.lower_bound_watchers,
            IntDomainEvent::UpperBound => &watcher.upper_bound_watchers,
            IntDomainEvent::Removal => &watcher.removal_watchers,
        }
    }

    fn watch(&mut self, propagator_var: PropagatorVarId, domain: DomainId, event: IntDomainEvent) {
        self.is_watching_anything = true;

        let watcher = &mut self.watchers[domain];
        let event_watcher = match event {
            IntDomainEvent::Assign => &mut watcher.assign_watchers,
            IntDomainEvent::LowerBound => &mut watcher.lower_bound_watchers,
            IntDomainEvent::UpperBound => &mut watcher.upper_bound_watchers,
            IntDomainEvent::Removal => &mut watcher.removal_watchers,
        };

        acorn_assert_moderate!(
            !event_watcher.contains(&propagator_var),
            "registering a watch for an already watched variable/event pair is a modelling error"
        );
        event_watcher.push(propagator_var);
    }
}

/// Used by propagators during initialisation to register themselves for notifications about
/// events to a particular variable.
#[derive(Debug)]
pub struct Watchers<'a> {
    propagator_var: PropagatorVarId,
    watch_list: &'a mut WatchListCP,
}

impl<'a> Watchers<'a> {
    pub(crate) fn new(propagator_var: PropagatorVarId, watch_list: &'a mut WatchListCP) -> Self {
        Watchers {
            propagator_var,
            watch_list,
        }
    }

    pub(crate) fn watch_all(&mut self, domain: DomainId, events: EnumSet<IntDomainEvent>) {
        for event in events.iter() {
            self.watch_list.watch(self.propagator_var, domain, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cp::propagation::LocalId;
    use crate::engine::cp::propagation::PropagatorId;

    #[test]
    fn watchers_are_returned_for_the_registered_event_only() {
        let mut watch_list = WatchListCP::default();
        watch_list.grow();

        let domain = DomainId::new(0);
        let propagator_var = PropagatorVarId {
            propagator: PropagatorId(0),
            variable: LocalId::from(0),
        };

        let mut watchers = Watchers::new(propagator_var, &mut watch_list);
        watchers.watch_all(domain, IntDomainEvent::LowerBound.into());

        assert_eq!(
            watch_list.get_affected_propagators(IntDomainEvent::LowerBound, domain),
            &[propagator_var]
        );
        assert!(watch_list
            .get_affected_propagators(IntDomainEvent::UpperBound, domain)
            .is_empty());
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut watch_list = WatchListCP::default();
        watch_list.grow();

        let domain = DomainId::new(0);
        let first = PropagatorVarId {
            propagator: PropagatorId(0),
            variable: LocalId::from(0),
        };
        let second = PropagatorVarId {
            propagator: PropagatorId(1),
            variable: LocalId::from(1),
        };

        Watchers::new(first, &mut watch_list).watch_all(domain, IntDomainEvent::Assign.into());
        Watchers::new(second, &mut watch_list).watch_all(domain, IntDomainEvent::Assign.into());

        assert_eq!(
            watch_list.get_affected_propagators(IntDomainEvent::Assign, domain),
            &[first, second]
        );
    }
}
