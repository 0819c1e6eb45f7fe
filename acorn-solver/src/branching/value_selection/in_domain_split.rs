use crate::acorn_assert_moderate;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainId;
use crate::predicate;

/// A [`ValueSelector`] which splits the domain in half (based on the lower-bound and upper-bound,
/// disregarding holes) and removes the upper half from the domain.
///
/// Note that this strategy will not necessarily result in an equal split if there are holes in
/// the domain.
#[derive(Debug, Copy, Clone)]
pub struct InDomainSplit;

impl ValueSelector<DomainId> for InDomainSplit {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Predicate {
        // The domain of the variable always has at least 2 values in it (otherwise it would have
        // been reported as fixed and not selected).
        let bound = context.lower_bound(decision_variable)
            + context.get_size_of_domain(decision_variable) / 2;
        acorn_assert_moderate!(
            bound >= context.lower_bound(decision_variable)
                && bound < context.upper_bound(decision_variable),
            "it should hold that {} <= {bound} < {}",
            context.lower_bound(decision_variable),
            context.upper_bound(decision_variable)
        );
        predicate!(decision_variable <= bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;

    #[test]
    fn the_domain_is_split_in_the_middle() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 10)]);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainSplit;
        let selected = selector.select_value(&mut context, domain_ids[0]);

        assert_eq!(selected, predicate!(domain_ids[0] <= 5));
    }

    #[test]
    fn a_domain_of_size_two_is_split_on_the_lower_bound() {
        let assignments = SelectionContext::create_for_testing(vec![(1, 2)]);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainSplit;
        let selected = selector.select_value(&mut context, domain_ids[0]);

        assert_eq!(selected, predicate!(domain_ids[0] <= 1));
    }
}
