use crate::basic_types::Inconsistency;
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

use super::BinaryEqualsPropagator;

/// Propagator for the constraint `a != b`. Only the case where one of the two variables becomes
/// fixed leads to propagation, so the propagator subscribes to assignment events only.
#[derive(Clone, Debug)]
pub struct BinaryNotEqualsPropagator<AVar, BVar> {
    a: AVar,
    b: BVar,
}

impl<AVar, BVar> BinaryNotEqualsPropagator<AVar, BVar>
where
    AVar: IntegerVariable,
    BVar: IntegerVariable,
{
    pub fn new(a: AVar, b: BVar) -> Self {
        BinaryNotEqualsPropagator { a, b }
    }
}

impl<AVar, BVar> Propagator for BinaryNotEqualsPropagator<AVar, BVar>
where
    AVar: IntegerVariable + 'static,
    BVar: IntegerVariable + 'static,
{
    fn name(&self) -> &str {
        "BinaryNotEq"
    }

    fn priority(&self) -> u32 {
        0
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> Result<(), EmptyDomain> {
        // We only care about the case where one of the two becomes assigned.
        context.register(self.a.clone(), DomainEvents::ASSIGN, LocalId::from(0));
        context.register(self.b.clone(), DomainEvents::ASSIGN, LocalId::from(1));

        Ok(())
    }

    fn propagate(&mut self, mut context: PropagationContextMut<'_>) -> PropagationStatusCP {
        let a_fixed = context.is_fixed(&self.a);
        let b_fixed = context.is_fixed(&self.b);

        if a_fixed && b_fixed {
            if context.lower_bound(&self.a) == context.lower_bound(&self.b) {
                return Err(Inconsistency::Conflict);
            }
            return Ok(());
        }

        if a_fixed {
            let value = context.lower_bound(&self.a);
            context.remove(&self.b, value)?;
        }

        if b_fixed {
            let value = context.lower_bound(&self.b);
            context.remove(&self.a, value)?;
        }

        Ok(())
    }

    fn is_satisfied(&self, context: PropagationContext<'_>) -> bool {
        context.is_fixed(&self.a)
            && context.is_fixed(&self.b)
            && context.lower_bound(&self.a) != context.lower_bound(&self.b)
    }

    fn is_entailed(&self, context: PropagationContext<'_>) -> Entailment {
        if context.upper_bound(&self.a) < context.lower_bound(&self.b)
            || context.upper_bound(&self.b) < context.lower_bound(&self.a)
        {
            return Entailment::Entailed;
        }

        if context.is_fixed(&self.a)
            && context.is_fixed(&self.b)
            && context.lower_bound(&self.a) == context.lower_bound(&self.b)
        {
            return Entailment::Violated;
        }

        Entailment::Unknown
    }

    fn opposite(&self) -> Option<Box<dyn Propagator>> {
        Some(Box::new(BinaryEqualsPropagator::new(
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
    fn fixing_one_side_removes_its_value_from_the_other() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 5);
        let b = solver.new_variable(1, 5);

        let mut propagator = solver
            .new_propagator(BinaryNotEqualsPropagator::new(a, b))
            .expect("no root conflict");

        solver.set_lower_bound(a, 3).expect("non-empty domain");
        solver.set_upper_bound(a, 3).expect("non-empty domain");
        solver.propagate(&mut propagator).expect("no conflict");

        assert!(!solver.contains(b, 3));
        assert!(solver.contains(b, 2));
    }

    #[test]
    fn two_equal_assignments_are_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(2, 2);
        let b = solver.new_variable(2, 2);

        let result = solver.new_propagator(BinaryNotEqualsPropagator::new(a, b));
        assert!(result.is_err());
    }

    #[test]
    fn disjoint_domains_are_entailed() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 3);
        let b = solver.new_variable(4, 6);

        let propagator = solver
            .new_propagator(BinaryNotEqualsPropagator::new(a, b))
            .expect("no root conflict");

        assert_eq!(
            propagator.is_entailed(PropagationContext::new(&solver.assignments)),
            Entailment::Entailed
        );
    }

    #[test]
    fn the_opposite_of_a_disequality_is_an_equality() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 3);
        let b = solver.new_variable(2, 6);

        let propagator = solver
            .new_propagator(BinaryNotEqualsPropagator::new(a, b))
            .expect("no root conflict");

        let opposite = propagator.opposite().expect("a disequality has an opposite");
        assert!(opposite
            .downcast_ref::<BinaryEqualsPropagator<crate::variables::DomainId, crate::variables::DomainId>>()
            .is_some());
    }
}
