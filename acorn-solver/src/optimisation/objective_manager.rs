use log::debug;

use crate::acorn_assert_moderate;
use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::assignments::EmptyDomain;
use crate::engine::variables::IntegerVariable;

/// Tracks the objective during branch-and-bound. The manager always works on a *minimising* view
/// of the objective; a maximisation problem is handled by scaling the objective variable with -1,
/// which makes the two directions symmetric.
///
/// After every incumbent the target bound is one below the incumbent value. The cut is a plain
/// upper-bound tightening of the objective variable: it is undone together with the decision
/// level it was posted in, which is why [`ObjectiveManager::post_target_bound`] is re-applied at
/// every node of the remaining search.
#[derive(Debug)]
pub(crate) struct ObjectiveManager<Var> {
    /// The objective, expressed so that smaller is better.
    objective: Var,
    /// The objective value of the best solution found so far, in terms of the minimising view.
    best_objective_value: Option<i32>,
}

impl<Var: IntegerVariable> ObjectiveManager<Var> {
    pub(crate) fn new(objective: Var) -> Self {
        ObjectiveManager {
            objective,
            best_objective_value: None,
        }
    }

    pub(crate) fn best_objective_value(&self) -> Option<i32> {
        self.best_objective_value
    }

    /// Records a new incumbent from a full assignment and tightens the target bound.
    pub(crate) fn on_solution(&mut self, assignments: &Assignments) {
        acorn_assert_moderate!(
            self.objective.lower_bound(assignments) == self.objective.upper_bound(assignments),
            "the objective must be fixed in a solution"
        );

        let value = self.objective.lower_bound(assignments);
        acorn_assert_moderate!(
            self.best_objective_value.map_or(true, |best| value < best),
            "the posted cut must make every new incumbent strictly better"
        );

        debug!("new incumbent with objective value {value}");
        self.best_objective_value = Some(value);
    }

    /// The threshold the rest of the tree has to beat, or `None` before the first incumbent.
    pub(crate) fn target_bound(&self) -> Option<i32> {
        self.best_objective_value.map(|best| best - 1)
    }

    /// Posts the target bound as an upper bound on the objective variable. This is idempotent
    /// with respect to the store: once the bound holds at the current node, re-posting does not
    /// touch the trail. An [`EmptyDomain`] at the root means the incumbent is optimal.
    pub(crate) fn post_target_bound(
        &self,
        assignments: &mut Assignments,
    ) -> Result<(), EmptyDomain> {
        match self.target_bound() {
            Some(target_bound) => self.objective.set_upper_bound(assignments, target_bound),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::DomainId;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn posting_before_any_incumbent_is_a_noop() {
        let mut assignments = Assignments::default();
        let objective = assignments.grow(0, 10);

        let manager = ObjectiveManager::new(objective.scaled(1));
        manager
            .post_target_bound(&mut assignments)
            .expect("no cut to post");

        assert_eq!(assignments.get_upper_bound(objective), 10);
    }

    #[test]
    fn an_incumbent_tightens_the_target_bound() {
        let mut assignments = Assignments::default();
        let objective = assignments.grow(0, 10);

        let mut manager = ObjectiveManager::new(objective.scaled(1));

        assignments.increase_decision_level();
        assignments
            .make_assignment(objective, 7)
            .expect("non-empty domain");
        manager.on_solution(&assignments);

        let _ = assignments.synchronise(0);
        manager
            .post_target_bound(&mut assignments)
            .expect("cut leaves values");

        assert_eq!(assignments.get_upper_bound(objective), 6);
    }

    #[test]
    fn the_cut_crossing_the_lower_bound_signals_optimality() {
        let mut assignments = Assignments::default();
        let objective = assignments.grow(3, 10);

        let mut manager = ObjectiveManager::new(objective.scaled(1));

        assignments.increase_decision_level();
        assignments
            .make_assignment(objective, 3)
            .expect("non-empty domain");
        manager.on_solution(&assignments);

        let _ = assignments.synchronise(0);
        assert!(manager.post_target_bound(&mut assignments).is_err());
    }

    #[test]
    fn maximisation_uses_the_scaled_view() {
        let mut assignments = Assignments::default();
        let objective = assignments.grow(0, 10);

        // maximising `objective` is minimising `-objective`
        let mut manager = ObjectiveManager::new(objective.scaled(-1));

        assignments.increase_decision_level();
        assignments
            .make_assignment(objective, 4)
            .expect("non-empty domain");
        manager.on_solution(&assignments);
        assert_eq!(manager.best_objective_value(), Some(-4));

        let _ = assignments.synchronise(0);
        manager
            .post_target_bound(&mut assignments)
            .expect("cut leaves values");

        // the cut [-objective <= -5] is the lower-bound cut [objective >= 5]
        assert_eq!(assignments.get_lower_bound(objective), 5);
    }
}
