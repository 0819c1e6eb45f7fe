use crate::acorn_assert_moderate;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::cp::assignments::EmptyDomain;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::EnqueueDecision;
use crate::engine::cp::propagation::Entailment;
use crate::engine::cp::propagation::LocalId;
use crate::engine::cp::propagation::PropagationContext;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::PropagationContextWithTrailedValues;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::engine::cp::trailed::TrailedInteger;
use crate::engine::cp::watch_list_cp::IntDomainEvent;
use crate::engine::variables::IntegerVariable;

/// Propagator for the constraint `\sum x_i <= c`.
///
/// The lower bound of the left-hand side is maintained incrementally in a reversible cell:
/// every lower-bound wake-up adds the delta to the running sum, and backtracking restores the
/// cell together with the domains.
#[derive(Debug)]
pub struct LinearLessOrEqualPropagator<Var> {
    x: Box<[Var]>,
    c: i32,

    /// The lower bound of the sum of the left-hand side. This is incremental state.
    lower_bound_left_hand_side: TrailedInteger,
    /// The value at index `i` is the known lower bound for `x[i]`.
    current_bounds: Box<[TrailedInteger]>,
}

impl<Var: IntegerVariable> LinearLessOrEqualPropagator<Var> {
    pub fn new(x: Box<[Var]>, c: i32) -> Self {
        LinearLessOrEqualPropagator {
            x,
            c,
            lower_bound_left_hand_side: TrailedInteger::default(),
            current_bounds: Box::new([]),
        }
    }

    fn create_conflict(&self) -> Inconsistency {
        Inconsistency::Conflict
    }
}

impl<Var: IntegerVariable + 'static> Propagator for LinearLessOrEqualPropagator<Var> {
    fn name(&self) -> &str {
        "LinearLeq"
    }

    fn priority(&self) -> u32 {
        0
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> Result<(), EmptyDomain> {
        let mut lower_bound_left_hand_side = 0_i64;
        let mut current_bounds = Vec::with_capacity(self.x.len());

        for (i, x_i) in self.x.iter().enumerate() {
            context.register(
                x_i.clone(),
                DomainEvents::LOWER_BOUND,
                LocalId::from(i as u32),
            );
            lower_bound_left_hand_side += context.lower_bound(x_i) as i64;
            current_bounds.push(context.new_trailed_integer(context.lower_bound(x_i) as i64));
        }

        self.lower_bound_left_hand_side =
            context.new_trailed_integer(lower_bound_left_hand_side);
        self.current_bounds = current_bounds.into();

        Ok(())
    }

    fn notify(
        &mut self,
        mut context: PropagationContextWithTrailedValues<'_>,
        local_id: LocalId,
        _event: IntDomainEvent,
    ) -> EnqueueDecision {
        let index = local_id.unpack() as usize;
        let x_i = &self.x[index];

        let old_bound = context.value(self.current_bounds[index]);
        let new_bound = context.lower_bound(x_i) as i64;

        acorn_assert_moderate!(
            old_bound < new_bound,
            "the propagator is only triggered when lower bounds are tightened, old_bound={old_bound}, new_bound={new_bound}"
        );

        context.add_assign(self.lower_bound_left_hand_side, new_bound - old_bound);
        context.assign(self.current_bounds[index], new_bound);

        EnqueueDecision::Enqueue
    }

    fn propagate(&mut self, mut context: PropagationContextMut<'_>) -> PropagationStatusCP {
        let lower_bound_left_hand_side = context.value(self.lower_bound_left_hand_side);

        if (self.c as i64) < lower_bound_left_hand_side {
            return Err(self.create_conflict());
        }

        for x_i in self.x.iter() {
            let bound =
                self.c as i64 - (lower_bound_left_hand_side - context.lower_bound(x_i) as i64);

            if (context.upper_bound(x_i) as i64) > bound {
                // A bound outside the i32 range still empties the domain correctly after
                // clamping, since every i32 upper bound is larger than the clamped minimum.
                let bound = bound.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                context.set_upper_bound(x_i, bound)?;
            }
        }

        Ok(())
    }

    fn is_satisfied(&self, context: PropagationContext<'_>) -> bool {
        self.x.iter().all(|x_i| context.is_fixed(x_i))
            && self
                .x
                .iter()
                .map(|x_i| context.lower_bound(x_i) as i64)
                .sum::<i64>()
                <= self.c as i64
    }

    fn is_entailed(&self, context: PropagationContext<'_>) -> Entailment {
        let lower_bound_sum = self
            .x
            .iter()
            .map(|x_i| context.lower_bound(x_i) as i64)
            .sum::<i64>();
        let upper_bound_sum = self
            .x
            .iter()
            .map(|x_i| context.upper_bound(x_i) as i64)
            .sum::<i64>();

        if upper_bound_sum <= self.c as i64 {
            Entailment::Entailed
        } else if lower_bound_sum > self.c as i64 {
            Entailment::Violated
        } else {
            Entailment::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cp::test_solver::TestSolver;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn bounds_are_tightened_to_respect_the_sum() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagator::new(
                vec![x.scaled(1), y.scaled(1)].into(),
                7,
            ))
            .expect("no root conflict");

        solver.assert_bounds(x, 0, 7);
        solver.assert_bounds(y, 0, 7);
    }

    #[test]
    fn tightening_a_lower_bound_prunes_the_other_side() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 10);

        let mut propagator = solver
            .new_propagator(LinearLessOrEqualPropagator::new(
                vec![x.scaled(1), y.scaled(1)].into(),
                7,
            ))
            .expect("no root conflict");

        let _ = solver.increase_lower_bound_and_notify(&mut propagator, 0, x, 5);
        solver.propagate(&mut propagator).expect("no conflict");

        solver.assert_bounds(y, 0, 2);
    }

    #[test]
    fn an_unsatisfiable_sum_is_a_conflict() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(5, 10);
        let y = solver.new_variable(5, 10);

        let result = solver.new_propagator(LinearLessOrEqualPropagator::new(
            vec![x.scaled(1), y.scaled(1)].into(),
            4,
        ));

        assert!(result.is_err());
    }

    #[test]
    fn negatively_scaled_views_express_greater_or_equal() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 10);

        // -x <= -3, i.e. x >= 3
        let _ = solver
            .new_propagator(LinearLessOrEqualPropagator::new(vec![x.scaled(-1)].into(), -3))
            .expect("no root conflict");

        solver.assert_bounds(x, 3, 10);
    }

    #[test]
    fn entailment_follows_the_bounds() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 3);
        let y = solver.new_variable(0, 3);

        let propagator = solver
            .new_propagator(LinearLessOrEqualPropagator::new(
                vec![x.scaled(1), y.scaled(1)].into(),
                6,
            ))
            .expect("no root conflict");

        assert_eq!(
            propagator.is_entailed(PropagationContext::new(&solver.assignments)),
            Entailment::Entailed
        );
    }
}
