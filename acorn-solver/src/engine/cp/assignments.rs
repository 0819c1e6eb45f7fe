use crate::acorn_assert_moderate;
use crate::acorn_assert_simple;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::cp::event_sink::EventSink;
use crate::engine::cp::watch_list_cp::IntDomainEvent;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainGeneratorIterator;
use crate::engine::variables::DomainId;

/// The arena of variable domains together with the trail that makes every domain mutation
/// reversible. All domain operations route through this structure: they log an undo entry on the
/// trail and record the corresponding [`IntDomainEvent`]s in the event sink.
#[derive(Clone, Default, Debug)]
pub struct Assignments {
    trail: Trail<ConstraintProgrammingTrailEntry>,
    domains: KeyedVec<DomainId, IntegerDomain>,

    events: EventSink,
}

/// The distinguished contradiction signal: a domain became empty or its bounds crossed. It is
/// raised through `Result` values rather than panics since it is a frequent, expected condition
/// which the search recovers from by backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;

impl Assignments {
    pub fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level()
    }

    pub fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    pub fn num_domains(&self) -> u32 {
        self.domains.len() as u32
    }

    pub fn get_domains(&self) -> DomainGeneratorIterator {
        DomainGeneratorIterator::new(0, self.num_domains())
    }

    pub(crate) fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    /// Registers the domain of a new integer variable with an enumerated (bitset) value
    /// representation.
    pub fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        let id = DomainId {
            id: self.num_domains(),
        };

        let _ = self
            .domains
            .push(IntegerDomain::new_enumerated(lower_bound, upper_bound, id));

        self.events.grow();

        id
    }

    /// Registers the domain of a new integer variable which only tracks its bounds. Bound updates
    /// on such a domain never inspect intermediate values; in exchange, removing a value that is
    /// strictly between the bounds is not representable and is deferred until the value becomes a
    /// bound.
    pub fn grow_interval(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        let id = DomainId {
            id: self.num_domains(),
        };

        let _ = self
            .domains
            .push(IntegerDomain::new_interval(lower_bound, upper_bound, id));

        self.events.grow();

        id
    }

    /// Registers the domain of a new integer variable holding exactly the provided values.
    pub fn grow_sparse(&mut self, values: &[i32]) -> DomainId {
        let id = DomainId {
            id: self.num_domains(),
        };

        let _ = self.domains.push(IntegerDomain::from_values(values, id));

        self.events.grow();

        id
    }

    pub(crate) fn drain_domain_events(
        &mut self,
    ) -> impl Iterator<Item = (IntDomainEvent, DomainId)> + '_ {
        self.events.drain()
    }
}

// methods for getting info about the domains
impl Assignments {
    pub fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound
    }

    pub fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound
    }

    pub fn get_initial_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].initial_lower_bound
    }

    pub fn get_initial_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].initial_upper_bound
    }

    pub fn get_assigned_value(&self, domain_id: DomainId) -> i32 {
        acorn_assert_simple!(self.is_domain_assigned(domain_id));
        self.domains[domain_id].lower_bound
    }

    pub fn is_value_in_domain(&self, domain_id: DomainId, value: i32) -> bool {
        self.domains[domain_id].contains(value)
    }

    pub fn is_domain_assigned(&self, domain_id: DomainId) -> bool {
        self.get_lower_bound(domain_id) == self.get_upper_bound(domain_id)
    }

    pub fn is_domain_assigned_to_value(&self, domain_id: DomainId, value: i32) -> bool {
        self.is_domain_assigned(domain_id) && self.get_lower_bound(domain_id) == value
    }

    pub fn get_domain_iterator(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        let domain = &self.domains[domain_id];
        (domain.lower_bound..=domain.upper_bound).filter(move |&value| domain.contains(value))
    }

    /// Determines whether the provided [`Predicate`] holds in the current state of the
    /// [`Assignments`].
    pub fn does_predicate_hold(&self, predicate: Predicate) -> bool {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => self.get_lower_bound(domain_id) >= lower_bound,
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => self.get_upper_bound(domain_id) <= upper_bound,
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => !self.is_value_in_domain(domain_id, not_equal_constant),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => self.is_domain_assigned_to_value(domain_id, equality_constant),
        }
    }
}

// methods to change the domains
impl Assignments {
    pub fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        new_lower_bound: i32,
    ) -> Result<(), EmptyDomain> {
        if new_lower_bound <= self.get_lower_bound(domain_id) {
            return self.domains[domain_id].verify_consistency();
        }

        let predicate = Predicate::LowerBound {
            domain_id,
            lower_bound: new_lower_bound,
        };

        let old_lower_bound = self.get_lower_bound(domain_id);
        let old_upper_bound = self.get_upper_bound(domain_id);

        self.trail.push(ConstraintProgrammingTrailEntry {
            predicate,
            old_lower_bound,
            old_upper_bound,
        });

        let domain = &mut self.domains[domain_id];
        domain.set_lower_bound(new_lower_bound, &mut self.events);

        domain.verify_consistency()
    }

    pub fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        new_upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        if new_upper_bound >= self.get_upper_bound(domain_id) {
            return self.domains[domain_id].verify_consistency();
        }

        let predicate = Predicate::UpperBound {
            domain_id,
            upper_bound: new_upper_bound,
        };

        let old_lower_bound = self.get_lower_bound(domain_id);
        let old_upper_bound = self.get_upper_bound(domain_id);

        self.trail.push(ConstraintProgrammingTrailEntry {
            predicate,
            old_lower_bound,
            old_upper_bound,
        });

        let domain = &mut self.domains[domain_id];
        domain.set_upper_bound(new_upper_bound, &mut self.events);

        domain.verify_consistency()
    }

    pub fn make_assignment(
        &mut self,
        domain_id: DomainId,
        assigned_value: i32,
    ) -> Result<(), EmptyDomain> {
        acorn_assert_moderate!(!self.is_domain_assigned_to_value(domain_id, assigned_value));

        // only tighten the lower bound if needed
        if self.get_lower_bound(domain_id) < assigned_value {
            self.tighten_lower_bound(domain_id, assigned_value)?;
        }

        // only tighten the upper bound if needed
        if self.get_upper_bound(domain_id) > assigned_value {
            self.tighten_upper_bound(domain_id, assigned_value)?;
        }

        self.domains[domain_id].verify_consistency()
    }

    pub fn remove_value_from_domain(
        &mut self,
        domain_id: DomainId,
        removed_value_from_domain: i32,
    ) -> Result<(), EmptyDomain> {
        if !self.domains[domain_id].contains(removed_value_from_domain) {
            return self.domains[domain_id].verify_consistency();
        }

        if !self.domains[domain_id].can_remove(removed_value_from_domain) {
            // An interval domain cannot represent the removal of an interior value; the request
            // is deferred until the value reaches one of the bounds.
            return Ok(());
        }

        let predicate = Predicate::NotEqual {
            domain_id,
            not_equal_constant: removed_value_from_domain,
        };

        let old_lower_bound = self.get_lower_bound(domain_id);
        let old_upper_bound = self.get_upper_bound(domain_id);

        self.trail.push(ConstraintProgrammingTrailEntry {
            predicate,
            old_lower_bound,
            old_upper_bound,
        });

        let domain = &mut self.domains[domain_id];
        domain.remove_value(removed_value_from_domain, &mut self.events);

        domain.verify_consistency()
    }

    /// Apply the given [`Predicate`] to the integer domains.
    ///
    /// In case the [`Predicate`] is already true this does nothing. If instead applying the
    /// [`Predicate`] leads to an [`EmptyDomain`] the error variant is returned.
    pub fn apply_predicate(&mut self, predicate: Predicate) -> Result<(), EmptyDomain> {
        if self.does_predicate_hold(predicate) {
            return Ok(());
        }

        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => self.tighten_lower_bound(domain_id, lower_bound),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => self.tighten_upper_bound(domain_id, upper_bound),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => self.remove_value_from_domain(domain_id, not_equal_constant),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => self.make_assignment(domain_id, equality_constant),
        }
    }

    /// Synchronises the internal structures of the [`Assignments`] based on the fact that
    /// backtracking to `new_decision_level` is taking place. This method returns the list of
    /// [`DomainId`]s and their values which were fixed (i.e. domain of size one) before
    /// backtracking and are unfixed (i.e. domain of two or more values) after synchronisation.
    pub fn synchronise(&mut self, new_decision_level: usize) -> Vec<(DomainId, i32)> {
        let mut unfixed_variables = Vec::new();

        self.trail.synchronise(new_decision_level).for_each(|entry| {
            let domain_id = entry.predicate.get_domain();

            let fixed_before =
                self.domains[domain_id].lower_bound == self.domains[domain_id].upper_bound;
            let value_before = self.domains[domain_id].lower_bound;

            self.domains[domain_id].undo_trail_entry(&entry);

            if fixed_before
                && self.domains[domain_id].lower_bound != self.domains[domain_id].upper_bound
            {
                // Variable used to be fixed but is not after backtracking.
                unfixed_variables.push((domain_id, value_before));
            }
        });

        unfixed_variables
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ConstraintProgrammingTrailEntry {
    pub(crate) predicate: Predicate,
    /// Explicitly store the bounds before the predicate was applied so that it is easier later on
    /// to update the bounds when backtracking.
    pub(crate) old_lower_bound: i32,
    pub(crate) old_upper_bound: i32,
}

/// The CP representation of one domain. The current bounds are always maintained; enumerated
/// domains additionally store which individual values are present. To support negative values and
/// to avoid allocating more memory than the size of the domain, an offset is used to index into
/// the slice that tracks the individual values.
///
/// When the domain is in an empty state, `lower_bound > upper_bound` and the state of
/// `is_value_in_domain` is unspecified.
#[derive(Clone, Debug)]
struct IntegerDomain {
    id: DomainId,
    lower_bound: i32,
    upper_bound: i32,
    initial_lower_bound: i32,
    initial_upper_bound: i32,
    offset: i32,
    /// `None` encodes a bounds-only (interval) domain.
    is_value_in_domain: Option<Box<[bool]>>,
}

impl IntegerDomain {
    fn new_enumerated(lower_bound: i32, upper_bound: i32, id: DomainId) -> IntegerDomain {
        acorn_assert_simple!(lower_bound <= upper_bound, "cannot create an empty domain");

        let size = upper_bound - lower_bound + 1;
        let is_value_in_domain = vec![true; size as usize];

        IntegerDomain {
            id,
            lower_bound,
            upper_bound,
            initial_lower_bound: lower_bound,
            initial_upper_bound: upper_bound,
            offset: -lower_bound,
            is_value_in_domain: Some(is_value_in_domain.into()),
        }
    }

    fn new_interval(lower_bound: i32, upper_bound: i32, id: DomainId) -> IntegerDomain {
        acorn_assert_simple!(lower_bound <= upper_bound, "cannot create an empty domain");

        IntegerDomain {
            id,
            lower_bound,
            upper_bound,
            initial_lower_bound: lower_bound,
            initial_upper_bound: upper_bound,
            offset: -lower_bound,
            is_value_in_domain: None,
        }
    }

    fn from_values(values: &[i32], id: DomainId) -> IntegerDomain {
        acorn_assert_simple!(
            !values.is_empty(),
            "cannot create a domain without any values"
        );

        let lower_bound = *values.iter().min().expect("at least one value");
        let upper_bound = *values.iter().max().expect("at least one value");

        let size = upper_bound - lower_bound + 1;
        let mut is_value_in_domain = vec![false; size as usize];
        for &value in values {
            is_value_in_domain[(value - lower_bound) as usize] = true;
        }

        IntegerDomain {
            id,
            lower_bound,
            upper_bound,
            initial_lower_bound: lower_bound,
            initial_upper_bound: upper_bound,
            offset: -lower_bound,
            is_value_in_domain: Some(is_value_in_domain.into()),
        }
    }

    fn get_index(&self, value: i32) -> usize {
        (value + self.offset) as usize
    }

    fn contains(&self, value: i32) -> bool {
        if value < self.lower_bound || value > self.upper_bound {
            return false;
        }

        match &self.is_value_in_domain {
            Some(is_value_in_domain) => is_value_in_domain[self.get_index(value)],
            None => true,
        }
    }

    /// Whether the removal of the provided value is representable: always for enumerated
    /// domains, only at the bounds for interval domains.
    fn can_remove(&self, value: i32) -> bool {
        self.is_value_in_domain.is_some()
            || value == self.lower_bound
            || value == self.upper_bound
    }

    fn remove_value(&mut self, removed_value: i32, events: &mut EventSink) {
        if removed_value < self.lower_bound || removed_value > self.upper_bound {
            return;
        }

        if let Some(is_value_in_domain) = &mut self.is_value_in_domain {
            let idx = (removed_value + self.offset) as usize;
            if !is_value_in_domain[idx] {
                return;
            }
            is_value_in_domain[idx] = false;
        }

        events.event_occurred(IntDomainEvent::Removal, self.id);

        // check if removing the value triggers a lower bound update
        if self.lower_bound == removed_value {
            self.set_lower_bound(removed_value + 1, events);
        }
        // check if removing the value triggers an upper bound update
        if self.upper_bound == removed_value {
            self.set_upper_bound(removed_value - 1, events);
        }

        if self.lower_bound == self.upper_bound {
            events.event_occurred(IntDomainEvent::Assign, self.id);
        }
    }

    fn set_lower_bound(&mut self, new_lower_bound: i32, events: &mut EventSink) {
        if new_lower_bound <= self.lower_bound {
            return;
        }

        events.event_occurred(IntDomainEvent::LowerBound, self.id);

        self.lower_bound = new_lower_bound;
        self.update_lower_bound_with_respect_to_holes();

        if self.lower_bound == self.upper_bound {
            events.event_occurred(IntDomainEvent::Assign, self.id);
        }
    }

    fn update_lower_bound_with_respect_to_holes(&mut self) {
        if let Some(is_value_in_domain) = &self.is_value_in_domain {
            while self.get_index(self.lower_bound) < is_value_in_domain.len()
                && !is_value_in_domain[self.get_index(self.lower_bound)]
            {
                self.lower_bound += 1;
            }
        }
    }

    fn set_upper_bound(&mut self, new_upper_bound: i32, events: &mut EventSink) {
        if new_upper_bound >= self.upper_bound {
            return;
        }

        events.event_occurred(IntDomainEvent::UpperBound, self.id);

        self.upper_bound = new_upper_bound;
        self.update_upper_bound_with_respect_to_holes();

        if self.lower_bound == self.upper_bound {
            events.event_occurred(IntDomainEvent::Assign, self.id);
        }
    }

    fn update_upper_bound_with_respect_to_holes(&mut self) {
        if let Some(is_value_in_domain) = &self.is_value_in_domain {
            // the first check ensures that we do not access a location with a negative index
            while self.upper_bound + self.offset >= 0
                && !is_value_in_domain[self.get_index(self.upper_bound)]
            {
                self.upper_bound -= 1;
            }
        }
    }

    fn verify_consistency(&self) -> Result<(), EmptyDomain> {
        if self.lower_bound > self.upper_bound {
            Err(EmptyDomain)
        } else {
            Ok(())
        }
    }

    fn undo_trail_entry(&mut self, entry: &ConstraintProgrammingTrailEntry) {
        if let Predicate::NotEqual {
            domain_id,
            not_equal_constant,
        } = entry.predicate
        {
            acorn_assert_moderate!(domain_id == self.id);

            if let Some(is_value_in_domain) = &mut self.is_value_in_domain {
                let idx = (not_equal_constant + self.offset) as usize;
                is_value_in_domain[idx] = true;
            }
        }

        acorn_assert_moderate!(
            !entry.predicate.is_equality_predicate(),
            "equality predicates are split into bound updates and never appear on the trail"
        );

        // The stored bounds subsume any bound updates the operation triggered, including bounds
        // that were rounded past holes.
        self.lower_bound = entry.old_lower_bound;
        self.upper_bound = entry.old_upper_bound;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bound_change_triggers_lower_bound_event() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment
            .tighten_lower_bound(d1, 2)
            .expect("non-empty domain");

        let events = assignment.drain_domain_events().collect::<Vec<_>>();
        assert_eq!(events.len(), 1);
        assert!(events.contains(&(IntDomainEvent::LowerBound, d1)));
    }

    #[test]
    fn upper_bound_change_triggers_upper_bound_event() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment
            .tighten_upper_bound(d1, 2)
            .expect("non-empty domain");

        let events = assignment.drain_domain_events().collect::<Vec<_>>();
        assert_eq!(events.len(), 1);
        assert!(events.contains(&(IntDomainEvent::UpperBound, d1)));
    }

    #[test]
    fn bounds_change_can_also_trigger_assign_event() {
        let mut assignment = Assignments::default();

        let d1 = assignment.grow(1, 5);
        let d2 = assignment.grow(1, 5);

        assignment
            .tighten_lower_bound(d1, 5)
            .expect("non-empty domain");
        assignment
            .tighten_upper_bound(d2, 1)
            .expect("non-empty domain");

        let events = assignment.drain_domain_events().collect::<Vec<_>>();
        assert_eq!(events.len(), 4);

        assert!(events.contains(&(IntDomainEvent::LowerBound, d1)));
        assert!(events.contains(&(IntDomainEvent::Assign, d1)));
        assert!(events.contains(&(IntDomainEvent::UpperBound, d2)));
        assert!(events.contains(&(IntDomainEvent::Assign, d2)));
    }

    #[test]
    fn removal_triggers_removal_event() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment
            .remove_value_from_domain(d1, 2)
            .expect("non-empty domain");

        let events = assignment.drain_domain_events().collect::<Vec<_>>();
        assert_eq!(events.len(), 1);
        assert!(events.contains(&(IntDomainEvent::Removal, d1)));
    }

    #[test]
    fn removing_the_second_to_last_value_also_queues_an_assign_event() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 2);

        assignment
            .remove_value_from_domain(d1, 1)
            .expect("non-empty domain");

        let events = assignment.drain_domain_events().collect::<Vec<_>>();
        assert!(events.contains(&(IntDomainEvent::Removal, d1)));
        assert!(events.contains(&(IntDomainEvent::Assign, d1)));
    }

    #[test]
    fn removing_a_value_that_is_absent_is_a_noop() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment
            .remove_value_from_domain(d1, 3)
            .expect("non-empty domain");
        let _ = assignment.drain_domain_events().count();

        assignment
            .remove_value_from_domain(d1, 3)
            .expect("removing an absent value is not an error");
        assert_eq!(assignment.drain_domain_events().count(), 0);
    }

    #[test]
    fn removing_the_lower_bound_updates_that_lower_bound() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment
            .remove_value_from_domain(d1, 2)
            .expect("non-empty domain");
        assignment
            .remove_value_from_domain(d1, 1)
            .expect("non-empty domain");

        assert_eq!(assignment.get_lower_bound(d1), 3);
    }

    #[test]
    fn removing_the_upper_bound_updates_the_upper_bound() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment
            .remove_value_from_domain(d1, 4)
            .expect("non-empty domain");
        assignment
            .remove_value_from_domain(d1, 5)
            .expect("non-empty domain");

        assert_eq!(assignment.get_upper_bound(d1), 3);
    }

    #[test]
    fn setting_lower_bound_rounds_up_to_nearest_value_in_domain() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment
            .remove_value_from_domain(d1, 2)
            .expect("non-empty domain");
        assignment
            .tighten_lower_bound(d1, 2)
            .expect("non-empty domain");

        assert_eq!(assignment.get_lower_bound(d1), 3);
    }

    #[test]
    fn setting_upper_bound_rounds_down_to_nearest_value_in_domain() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment
            .remove_value_from_domain(d1, 4)
            .expect("non-empty domain");
        assignment
            .tighten_upper_bound(d1, 4)
            .expect("non-empty domain");

        assert_eq!(assignment.get_upper_bound(d1), 3);
    }

    #[test]
    fn crossing_bounds_signals_a_contradiction() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 10);

        assignment
            .tighten_lower_bound(d1, 8)
            .expect("non-empty domain");
        assert!(assignment.tighten_upper_bound(d1, 5).is_err());
    }

    #[test]
    fn contradiction_round_trip_restores_the_pre_node_state() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 10);

        assignment.increase_decision_level();
        assignment
            .tighten_lower_bound(d1, 8)
            .expect("non-empty domain");
        assert!(assignment.tighten_upper_bound(d1, 5).is_err());

        let _ = assignment.synchronise(0);

        assert_eq!(assignment.get_lower_bound(d1), 1);
        assert_eq!(assignment.get_upper_bound(d1), 10);
    }

    #[test]
    fn domain_size_never_increases_within_a_decision_level() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 10);

        assignment.increase_decision_level();

        let mut previous_size = 10;
        let operations: [&dyn Fn(&mut Assignments) -> Result<(), EmptyDomain>; 3] = [
            &|a| a.tighten_lower_bound(d1, 3),
            &|a| a.remove_value_from_domain(d1, 5),
            &|a| a.tighten_upper_bound(d1, 8),
        ];
        for operation in operations {
            operation(&mut assignment).expect("non-empty domain");
            let size = assignment.get_domain_iterator(d1).count();
            assert!(size <= previous_size);
            previous_size = size;
        }
    }

    #[test]
    fn undo_removal_at_bounds_indexes_into_values_domain_correctly() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(1, 5);

        assignment.increase_decision_level();

        assignment
            .remove_value_from_domain(d1, 5)
            .expect("non-empty domain");

        let _ = assignment.synchronise(0);

        assert_eq!(assignment.get_upper_bound(d1), 5);
        assert!(assignment.is_value_in_domain(d1, 5));
    }

    #[test]
    fn backtracking_reports_unfixed_variables() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow(0, 10);

        assignment.increase_decision_level();
        assignment.make_assignment(d1, 4).expect("non-empty domain");

        let unfixed = assignment.synchronise(0);
        assert_eq!(unfixed, vec![(d1, 4)]);
    }

    #[test]
    fn lower_bound_change_backtrack() {
        let mut assignment = Assignments::default();
        let domain_id1 = assignment.grow(0, 100);
        let domain_id2 = assignment.grow(0, 50);

        // decision level 1
        assignment.increase_decision_level();
        assignment
            .tighten_lower_bound(domain_id1, 2)
            .expect("non-empty domain");
        assignment
            .tighten_lower_bound(domain_id2, 25)
            .expect("non-empty domain");

        // decision level 2
        assignment.increase_decision_level();
        assignment
            .tighten_lower_bound(domain_id1, 5)
            .expect("non-empty domain");

        // decision level 3
        assignment.increase_decision_level();
        assignment
            .tighten_lower_bound(domain_id1, 7)
            .expect("non-empty domain");

        assert_eq!(assignment.get_lower_bound(domain_id1), 7);

        let _ = assignment.synchronise(1);

        assert_eq!(assignment.get_lower_bound(domain_id1), 2);
        assert_eq!(assignment.get_lower_bound(domain_id2), 25);
    }

    #[test]
    fn sparse_domains_start_with_holes() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow_sparse(&[1, 3, 7]);

        assert_eq!(assignment.get_lower_bound(d1), 1);
        assert_eq!(assignment.get_upper_bound(d1), 7);
        assert!(!assignment.is_value_in_domain(d1, 2));
        assert!(assignment.is_value_in_domain(d1, 3));
    }

    #[test]
    fn interval_domains_support_bound_operations() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow_interval(0, 10);

        assignment
            .tighten_lower_bound(d1, 3)
            .expect("non-empty domain");
        assignment
            .remove_value_from_domain(d1, 3)
            .expect("non-empty domain");

        assert_eq!(assignment.get_lower_bound(d1), 4);
    }

    #[test]
    fn interval_domains_defer_interior_removals() {
        let mut assignment = Assignments::default();
        let d1 = assignment.grow_interval(0, 10);

        assignment
            .remove_value_from_domain(d1, 5)
            .expect("interior removals are deferred, not failures");

        assert!(assignment.is_value_in_domain(d1, 5));
        assert_eq!(assignment.drain_domain_events().count(), 0);
    }
}
