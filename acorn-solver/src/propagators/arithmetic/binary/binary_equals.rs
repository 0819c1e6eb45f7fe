use std::cmp::max;
use std::cmp::min;

use crate::basic_types::PropagationStatusCP;
use crate::engine::cp::assignments::EmptyDomain;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::Entailment;
use crate::engine::cp::propagation::LocalId;
use crate::engine::cp::propagation::PropagationContext;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;

use super::BinaryNotEqualsPropagator;

/// Propagator for the constraint `a = b`: the bounds of both variables are kept equal, and holes
/// in either domain are channelled to the other.
#[derive(Clone, Debug)]
pub struct BinaryEqualsPropagator<AVar, BVar> {
    a: AVar,
    b: BVar,
}

impl<AVar, BVar> BinaryEqualsPropagator<AVar, BVar>
where
    AVar: IntegerVariable,
    BVar: IntegerVariable,
{
    pub fn new(a: AVar, b: BVar) -> Self {
        BinaryEqualsPropagator { a, b }
    }
}

impl<AVar, BVar> Propagator for BinaryEqualsPropagator<AVar, BVar>
where
    AVar: IntegerVariable + 'static,
    BVar: IntegerVariable + 'static,
{
    fn name(&self) -> &str {
        "BinaryEq"
    }

    fn priority(&self) -> u32 {
        0
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> Result<(), EmptyDomain> {
        context.register(self.a.clone(), DomainEvents::ANY_INT, LocalId::from(0));
        context.register(self.b.clone(), DomainEvents::ANY_INT, LocalId::from(1));

        Ok(())
    }

    fn propagate(&mut self, mut context: PropagationContextMut<'_>) -> PropagationStatusCP {
        let lower_bound = max(
            context.lower_bound(&self.a),
            context.lower_bound(&self.b),
        );
        let upper_bound = min(
            context.upper_bound(&self.a),
            context.upper_bound(&self.b),
        );

        context.set_lower_bound(&self.a, lower_bound)?;
        context.set_lower_bound(&self.b, lower_bound)?;
        context.set_upper_bound(&self.a, upper_bound)?;
        context.set_upper_bound(&self.b, upper_bound)?;

        // Channel the holes within the common range. Removals of values which bound updates have
        // already pruned are no-ops.
        let lower_bound = max(
            context.lower_bound(&self.a),
            context.lower_bound(&self.b),
        );
        let upper_bound = min(
            context.upper_bound(&self.a),
            context.upper_bound(&self.b),
        );
        for value in lower_bound..=upper_bound {
            if !context.contains(&self.a, value) {
                context.remove(&self.b, value)?;
            } else if !context.contains(&self.b, value) {
                context.remove(&self.a, value)?;
            }
        }

        Ok(())
    }

    fn is_satisfied(&self, context: PropagationContext<'_>) -> bool {
        context.is_fixed(&self.a)
            && context.is_fixed(&self.b)
            && context.lower_bound(&self.a) == context.lower_bound(&self.b)
    }

    fn is_entailed(&self, context: PropagationContext<'_>) -> Entailment {
        if context.upper_bound(&self.a) < context.lower_bound(&self.b)
            || context.upper_bound(&self.b) < context.lower_bound(&self.a)
        {
            return Entailment::Violated;
        }

        if context.is_fixed(&self.a)
            && context.is_fixed(&self.b)
            && context.lower_bound(&self.a) == context.lower_bound(&self.b)
        {
            return Entailment::Entailed;
        }

        Entailment::Unknown
    }

    fn opposite(&self) -> Option<Box<dyn Propagator>> {
        Some(Box::new(BinaryNotEqualsPropagator::new(
            self.a.clone(),
            self.b.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cp::test_solver::TestSolver;

    #[test]
    fn the_bounds_of_both_variables_are_synchronised() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 7);
        let b = solver.new_variable(3, 10);

        let _ = solver
            .new_propagator(BinaryEqualsPropagator::new(a, b))
            .expect("no root conflict");

        solver.assert_bounds(a, 3, 7);
        solver.assert_bounds(b, 3, 7);
    }

    #[test]
    fn holes_are_channelled_to_the_other_domain() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 5);
        let b = solver.new_variable(1, 5);

        let mut propagator = solver
            .new_propagator(BinaryEqualsPropagator::new(a, b))
            .expect("no root conflict");

        solver.remove(a, 3).expect("non-empty domain");
        solver
            .propagate_until_fixed_point(&mut propagator)
            .expect("no conflict");

        assert!(!solver.contains(b, 3));
    }

    #[test]
    fn disjoint_domains_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 3);
        let b = solver.new_variable(5, 8);

        let result = solver.new_propagator(BinaryEqualsPropagator::new(a, b));
        assert!(result.is_err());
    }
}
