use enumset::EnumSet;

use crate::engine::cp::watch_list_cp::IntDomainEvent;
use crate::engine::variables::DomainId;

/// While propagation runs, the domain changes it performs are captured as events in the event
/// sink. The sink is drained between propagator invocations to notify the propagators that
/// subscribe to those events.
///
/// Insertion is idempotent: a (variable, event) pair that is already pending is not recorded
/// again. Draining until the sink stays empty is the fixpoint condition of the propagation loop.
#[derive(Default, Clone, Debug)]
pub(crate) struct EventSink {
    present: Vec<EnumSet<IntDomainEvent>>,
    events: Vec<(IntDomainEvent, DomainId)>,
}

impl EventSink {
    pub(crate) fn grow(&mut self) {
        self.present.push(EnumSet::new());
    }

    pub(crate) fn event_occurred(&mut self, event: IntDomainEvent, domain: DomainId) {
        let elem = &mut self.present[domain.id as usize];

        if elem.contains(event) {
            // The event was already triggered.
            return;
        }

        let _ = elem.insert(event);
        self.events.push((event, domain));
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (IntDomainEvent, DomainId)> + '_ {
        self.events.drain(..).inspect(|&(event, domain)| {
            let _ = self.present[domain.id as usize].remove(event);
        })
    }
}
