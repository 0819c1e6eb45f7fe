use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use crate::acorn_assert_moderate;
use crate::basic_types::HashSet;
use crate::engine::cp::propagation::PropagatorId;

/// The queue of awakened propagators, split per priority level. Enqueueing is idempotent; within
/// one priority level propagators are popped in first-enqueued order, which makes the propagation
/// order deterministic given a fixed constraint-registration order.
#[derive(Debug)]
pub(crate) struct PropagatorQueue {
    queues: Vec<VecDeque<PropagatorId>>,
    present_propagators: HashSet<PropagatorId>,
    present_priorities: BinaryHeap<Reverse<u32>>,
}

impl PropagatorQueue {
    pub(crate) fn new(num_priority_levels: u32) -> PropagatorQueue {
        PropagatorQueue {
            queues: vec![VecDeque::new(); num_priority_levels as usize],
            present_propagators: HashSet::default(),
            present_priorities: BinaryHeap::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.present_propagators.is_empty()
    }

    pub(crate) fn enqueue_propagator(&mut self, propagator_id: PropagatorId, priority: u32) {
        acorn_assert_moderate!((priority as usize) < self.queues.len());

        if !self.is_propagator_enqueued(propagator_id) {
            if self.queues[priority as usize].is_empty() {
                self.present_priorities.push(Reverse(priority));
            }
            self.queues[priority as usize].push_back(propagator_id);
            let _ = self.present_propagators.insert(propagator_id);
        }
    }

    pub(crate) fn pop(&mut self) -> PropagatorId {
        acorn_assert_moderate!(!self.is_empty());

        let top_priority = self.present_priorities.peek().expect("queue not empty").0 as usize;
        acorn_assert_moderate!(!self.queues[top_priority].is_empty());

        let next_propagator_id = self.queues[top_priority]
            .pop_front()
            .expect("priority level not empty");

        let _ = self.present_propagators.remove(&next_propagator_id);

        if self.queues[top_priority].is_empty() {
            let _ = self.present_priorities.pop();
        }

        next_propagator_id
    }

    pub(crate) fn clear(&mut self) {
        while let Some(Reverse(priority)) = self.present_priorities.pop() {
            self.queues[priority as usize].clear();
        }
        self.present_propagators.clear();
    }

    fn is_propagator_enqueued(&self, propagator_id: PropagatorId) -> bool {
        self.present_propagators.contains(&propagator_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueueing_is_idempotent() {
        let mut queue = PropagatorQueue::new(4);

        queue.enqueue_propagator(PropagatorId(0), 1);
        queue.enqueue_propagator(PropagatorId(0), 1);

        assert_eq!(queue.pop(), PropagatorId(0));
        assert!(queue.is_empty());
    }

    #[test]
    fn lower_priority_values_are_popped_first() {
        let mut queue = PropagatorQueue::new(4);

        queue.enqueue_propagator(PropagatorId(0), 3);
        queue.enqueue_propagator(PropagatorId(1), 0);
        queue.enqueue_propagator(PropagatorId(2), 3);

        assert_eq!(queue.pop(), PropagatorId(1));
        assert_eq!(queue.pop(), PropagatorId(0));
        assert_eq!(queue.pop(), PropagatorId(2));
    }

    #[test]
    fn clearing_empties_the_queue() {
        let mut queue = PropagatorQueue::new(4);

        queue.enqueue_propagator(PropagatorId(0), 1);
        queue.enqueue_propagator(PropagatorId(1), 2);
        queue.clear();

        assert!(queue.is_empty());

        // the queue is usable again after clearing
        queue.enqueue_propagator(PropagatorId(1), 2);
        assert_eq!(queue.pop(), PropagatorId(1));
    }
}
