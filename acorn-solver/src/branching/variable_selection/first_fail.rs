use log::warn;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// A [`VariableSelector`] which selects the variable with the smallest domain (based on the
/// lower-bound and upper-bound, disregarding holes). Ties are broken in favour of the variable
/// that occurs first in the provided list.
#[derive(Debug)]
pub struct FirstFail<Var> {
    variables: Vec<Var>,
}

impl<Var: Copy> FirstFail<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        FirstFail {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for FirstFail<DomainId> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        let mut selection: Option<(DomainId, i32)> = None;

        for &variable in self
            .variables
            .iter()
            .filter(|variable| !context.is_integer_fixed(**variable))
        {
            let size = context.get_size_of_domain(variable);
            match selection {
                Some((_, smallest)) if smallest <= size => {}
                _ => selection = Some((variable, size)),
            }
        }

        selection.map(|(variable, _)| variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;

    #[test]
    fn the_smallest_unfixed_domain_is_selected() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 10), (5, 7), (2, 2)]);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        let integer_variables = context.get_domains().collect::<Vec<_>>();

        let mut strategy = FirstFail::new(&integer_variables);
        let selected = strategy.select_variable(&mut context);

        assert_eq!(selected, Some(integer_variables[1]));
    }

    #[test]
    fn ties_are_broken_by_input_order() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 5), (10, 15)]);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        let integer_variables = context.get_domains().collect::<Vec<_>>();

        let mut strategy = FirstFail::new(&integer_variables);
        let selected = strategy.select_variable(&mut context);

        assert_eq!(selected, Some(integer_variables[0]));
    }
}
