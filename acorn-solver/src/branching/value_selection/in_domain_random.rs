use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainId;
use crate::predicate;

/// A [`ValueSelector`] which assigns the variable to a random value in its domain.
#[derive(Debug, Clone, Copy)]
pub struct InDomainRandom;

impl ValueSelector<DomainId> for InDomainRandom {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Predicate {
        let values_in_domain = (context.lower_bound(decision_variable)
            ..=context.upper_bound(decision_variable))
            .filter(|&value| context.contains(decision_variable, value))
            .collect::<Vec<_>>();
        let random_index = context
            .random()
            .generate_usize_in_range(0..values_in_domain.len());
        predicate!(decision_variable == values_in_domain[random_index])
    }

    fn is_restart_pointless(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;

    #[test]
    fn the_programmed_random_value_is_selected() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 10)]);
        let mut test_random = TestRandom {
            usizes: vec![3],
            ..Default::default()
        };
        let mut context = SelectionContext::new(&assignments, &mut test_random);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainRandom;
        let selected = selector.select_value(&mut context, domain_ids[0]);

        assert_eq!(selected, predicate!(domain_ids[0] == 3));
    }

    #[test]
    fn holes_in_the_domain_are_not_selected() {
        let mut assignments = SelectionContext::create_for_testing(vec![(0, 3)]);
        let domain_ids = assignments.get_domains().collect::<Vec<_>>();
        assignments
            .remove_value_from_domain(domain_ids[0], 1)
            .expect("non-empty domain");

        let mut test_random = TestRandom {
            usizes: vec![1],
            ..Default::default()
        };
        let mut context = SelectionContext::new(&assignments, &mut test_random);

        let mut selector = InDomainRandom;
        let selected = selector.select_value(&mut context, domain_ids[0]);

        // the values in the domain are {0, 2, 3}; index 1 is the value 2
        assert_eq!(selected, predicate!(domain_ids[0] == 2));
    }
}
