//! The search kernel: a chronological depth-first explorer interleaved with event-driven
//! propagation to fixpoint. All state that mutates during search is reversible, either through
//! the domain trail in [`Assignments`] or through the [`TrailedValues`].
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::acorn_assert_moderate;
use crate::acorn_assert_simple;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::SolutionReference;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::propagation::store::PropagatorStore;
use crate::engine::cp::propagation::PropagationContext;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::PropagationContextWithTrailedValues;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagator_queue::PropagatorQueue;
use crate::engine::cp::trailed::TrailedValues;
use crate::engine::cp::watch_list_cp::IntDomainEvent;
use crate::engine::cp::watch_list_cp::WatchListCP;
use crate::engine::debug_helper;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::restart_strategy::RestartOptions;
use crate::engine::restart_strategy::RestartStrategy;
use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::optimisation::ObjectiveManager;

/// Options for the [`ConstraintSatisfactionSolver`] which determine how it behaves.
#[derive(Debug)]
pub struct SolverOptions {
    /// The restart policy; `None` disables restarts. Restarts only pay off in combination with a
    /// randomised brancher or branch-and-bound, where the next descent can differ from the
    /// abandoned one.
    pub restart_options: Option<RestartOptions>,
    /// A random generator which is used by the solver, e.g. for randomised value selection.
    /// Passing it as an argument allows seeding of the randomisation.
    pub random_generator: SmallRng,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            restart_options: None,
            random_generator: SmallRng::seed_from_u64(42),
        }
    }
}

/// The constraint satisfaction solver. It owns the reversible state (domains and trailed
/// values), the posted propagators with their watch lists, and the explicit stack of branching
/// decisions that makes up the current path in the search tree.
///
/// Each search node follows the same cycle: post the objective cut (when optimising), propagate
/// to fixpoint, and either branch on a decision produced by the [`Brancher`] or, on a
/// contradiction, backtrack chronologically by flipping the deepest untried branch. A fully
/// propagated node in which the brancher has no decision left is a solution.
#[derive(Debug)]
pub struct ConstraintSatisfactionSolver {
    /// The solver state: ready, solving, conflicting, containing a solution, infeasible, or
    /// timed out.
    state: CSPSolverState,
    /// The variable domains and the trail which undoes their mutations on backtrack.
    assignments: Assignments,
    /// The reversible cells owned by propagators.
    trailed_values: TrailedValues,
    /// The posted propagators, indexed by their id.
    propagators: PropagatorStore,
    /// For every variable and event kind, the propagators to wake up.
    watch_list_cp: WatchListCP,
    /// The propagators awaiting propagation, ordered by priority then FIFO.
    propagator_queue: PropagatorQueue,
    /// Scratch space for draining domain events.
    event_drain: Vec<(IntDomainEvent, DomainId)>,
    /// The decision taken at each decision level; the vector length equals the current decision
    /// level.
    decisions: Vec<Predicate>,
    /// The restart policy, if any.
    restart_strategy: Option<RestartStrategy>,
    /// Solver-wide counters.
    counters: SolverStatistics,
    internal_parameters: SolverOptions,
}

impl Default for ConstraintSatisfactionSolver {
    fn default() -> Self {
        Self::new(SolverOptions::default())
    }
}

impl ConstraintSatisfactionSolver {
    /// The number of distinct propagator priority levels; see [`Propagator::priority`].
    const NUM_PRIORITY_LEVELS: u32 = 5;

    pub fn new(options: SolverOptions) -> Self {
        ConstraintSatisfactionSolver {
            state: CSPSolverState::default(),
            assignments: Assignments::default(),
            trailed_values: TrailedValues::default(),
            propagators: PropagatorStore::default(),
            watch_list_cp: WatchListCP::default(),
            propagator_queue: PropagatorQueue::new(Self::NUM_PRIORITY_LEVELS),
            event_drain: Vec::new(),
            decisions: Vec::new(),
            restart_strategy: options.restart_options.map(RestartStrategy::new),
            counters: SolverStatistics::default(),
            internal_parameters: options,
        }
    }

    pub fn get_decision_level(&self) -> usize {
        self.assignments.get_decision_level()
    }

    pub fn get_solution_reference(&self) -> SolutionReference<'_> {
        SolutionReference::new(&self.assignments)
    }

    pub fn get_statistics(&self) -> SolverStatistics {
        self.counters
    }

    pub fn log_statistics(&self) {
        self.counters.log_statistics();
    }

    pub fn is_infeasible(&self) -> bool {
        self.state.is_infeasible()
    }

    pub(crate) fn assignments(&self) -> &Assignments {
        &self.assignments
    }
}

// methods for creating variables and adding constraints
impl ConstraintSatisfactionSolver {
    /// Creates an integer variable with an enumerated domain holding all values in the provided
    /// range.
    pub fn create_new_integer_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        acorn_assert_simple!(
            self.get_decision_level() == 0,
            "variables can only be created at the root"
        );

        self.watch_list_cp.grow();
        self.assignments.grow(lower_bound, upper_bound)
    }

    /// Creates an integer variable which only tracks its bounds. Such a domain never inspects
    /// values between the bounds, at the price of deferring interior value removals; it pairs
    /// with bound-based branching such as in-domain splits.
    pub fn create_new_interval_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
    ) -> DomainId {
        acorn_assert_simple!(
            self.get_decision_level() == 0,
            "variables can only be created at the root"
        );

        self.watch_list_cp.grow();
        self.assignments.grow_interval(lower_bound, upper_bound)
    }

    /// Creates an integer variable with a domain holding exactly the provided values.
    pub fn create_new_sparse_integer_variable(&mut self, values: &[i32]) -> DomainId {
        acorn_assert_simple!(
            self.get_decision_level() == 0,
            "variables can only be created at the root"
        );

        self.watch_list_cp.grow();
        self.assignments.grow_sparse(values)
    }

    /// Posts a propagator: registers its watches, initialises it, and propagates the root to
    /// fixpoint. Root infeasibility is reported immediately and puts the solver in a permanently
    /// infeasible state.
    pub fn add_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        if self.state.is_infeasible() {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        acorn_assert_simple!(
            self.get_decision_level() == 0,
            "constraints can only be added at the root"
        );

        let propagator_id = self.propagators.alloc(Box::new(propagator));

        let mut initialisation_context = PropagatorInitialisationContext::new(
            &mut self.watch_list_cp,
            &mut self.trailed_values,
            propagator_id,
            &self.assignments,
        );

        let initialisation_status =
            self.propagators[propagator_id].initialise_at_root(&mut initialisation_context);

        if initialisation_status.is_err() {
            self.state.declare_infeasible();
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }

        let priority = self.propagators[propagator_id].priority();
        self.propagator_queue
            .enqueue_propagator(propagator_id, priority);

        self.propagate_enqueued();
        if self.state.conflicting() {
            self.state.declare_infeasible();
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }

        Ok(())
    }
}

// the main solving methods
impl ConstraintSatisfactionSolver {
    /// Runs the search until a solution is found, infeasibility is proven, or the termination
    /// condition triggers.
    ///
    /// When the solver still holds a solution from a previous call, that solution is first
    /// resolved as if it were a conflict, so consecutive calls enumerate distinct solutions until
    /// [`CSPSolverExecutionFlag::Infeasible`] reports the tree exhausted.
    pub fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        self.solve_with_objective::<DomainId>(termination, brancher, None)
    }

    pub(crate) fn solve_with_objective<Var: IntegerVariable>(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
        objective: Option<&mut ObjectiveManager<Var>>,
    ) -> CSPSolverExecutionFlag {
        if self.state.is_infeasible() {
            return CSPSolverExecutionFlag::Infeasible;
        }

        if self.state.has_solution() {
            // The recorded solution becomes a conflict: flipping its deepest branch moves the
            // search to the unexplored remainder of the tree.
            self.state.declare_solving();
            if self.resolve_conflict_chronologically(brancher).is_err() {
                self.state.declare_infeasible();
                return CSPSolverExecutionFlag::Infeasible;
            }
        } else {
            self.state.declare_solving();
        }

        self.solve_internal(termination, brancher, objective)
    }

    fn solve_internal<Var: IntegerVariable>(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
        objective: Option<&mut ObjectiveManager<Var>>,
    ) -> CSPSolverExecutionFlag {
        let has_objective = objective.is_some();

        loop {
            // Limits are honoured at node and conflict granularity only; a running propagation
            // always completes first.
            if termination.should_stop() {
                self.state.declare_timeout();
                return CSPSolverExecutionFlag::Timeout;
            }

            if self.state.no_conflict() {
                if let Some(manager) = objective.as_ref() {
                    // The cut is a plain bound update which backtracking undoes, so it is
                    // re-posted at every node.
                    if manager.post_target_bound(&mut self.assignments).is_err() {
                        if self.get_decision_level() == 0 {
                            self.state.declare_infeasible();
                            return CSPSolverExecutionFlag::Infeasible;
                        }
                        self.state.declare_conflict();
                    }
                }
            }

            if self.state.no_conflict() {
                self.propagate_enqueued();
            }

            if self.state.no_conflict() {
                let decision = brancher.next_decision(&mut SelectionContext::new(
                    &self.assignments,
                    &mut self.internal_parameters.random_generator,
                ));

                match decision {
                    Some(predicate) => {
                        self.counters.num_decisions += 1;
                        termination.decision_has_been_made();

                        self.declare_new_decision_level();
                        self.decisions.push(predicate);

                        acorn_assert_moderate!(
                            !self.assignments.does_predicate_hold(predicate),
                            "a decision should narrow the domain of the selected variable"
                        );

                        if self.assignments.apply_predicate(predicate).is_err() {
                            self.state.declare_conflict();
                        }
                    }
                    None => {
                        // Every variable the brancher considers is fixed and propagation is at
                        // fixpoint: the current assignment is a solution.
                        self.counters.num_solutions += 1;
                        acorn_assert_moderate!(
                            debug_helper::debug_check_propagator_satisfaction(
                                &self.assignments,
                                &self.propagators
                            ),
                            "a recorded solution violates a posted constraint"
                        );
                        self.state.declare_solution_found();
                        return CSPSolverExecutionFlag::Feasible;
                    }
                }
            } else {
                self.counters.num_conflicts += 1;
                termination.conflict_has_been_encountered();
                brancher.on_conflict();

                if self.get_decision_level() == 0 {
                    self.state.declare_infeasible();
                    return CSPSolverExecutionFlag::Infeasible;
                }

                let restart_triggered = match &mut self.restart_strategy {
                    Some(strategy) => {
                        strategy.notify_conflict();
                        strategy.should_restart()
                    }
                    None => false,
                };

                // Without learning, a restart only makes sense when the next descent can differ
                // from the abandoned one. During solution enumeration it would revisit recorded
                // solutions, hence the restriction to searches without recorded solutions (or
                // with an objective cut, which excludes them).
                if restart_triggered
                    && !brancher.is_restart_pointless()
                    && (has_objective || self.counters.num_solutions == 0)
                {
                    self.restart(brancher);
                    self.state.declare_solving();
                    continue;
                }

                if self.resolve_conflict_chronologically(brancher).is_err() {
                    self.state.declare_infeasible();
                    return CSPSolverExecutionFlag::Infeasible;
                }
                self.state.declare_solving();
            }
        }
    }

    /// Chronological backtracking: pop the deepest decision and deduce its negation at the
    /// parent level. When the negation immediately conflicts as well, the failure moves up one
    /// more choice point; running out of choice points proves infeasibility (`Err`).
    fn resolve_conflict_chronologically(
        &mut self,
        brancher: &mut impl Brancher,
    ) -> Result<(), ()> {
        loop {
            if self.get_decision_level() == 0 {
                return Err(());
            }

            let decision = *self
                .decisions
                .last()
                .expect("every decision level stores its decision");
            let backtrack_level = self.get_decision_level() - 1;
            self.backtrack(backtrack_level, brancher);

            // The flipped branch lives at the parent level, so it is undone together with the
            // parent on later backtracks.
            if self.assignments.apply_predicate(!decision).is_ok() {
                return Ok(());
            }

            self.counters.num_conflicts += 1;
        }
    }

    fn restart(&mut self, brancher: &mut impl Brancher) {
        debug!(
            "restarting after {} conflicts",
            self.counters.num_conflicts
        );
        self.counters.num_restarts += 1;
        if let Some(strategy) = &mut self.restart_strategy {
            strategy.notify_restart();
        }
        self.backtrack(0, brancher);
        brancher.on_restart();
    }

    pub(crate) fn declare_new_decision_level(&mut self) {
        self.assignments.increase_decision_level();
        self.trailed_values.increase_decision_level();
    }

    /// Backtracks to the given decision level, restoring the domains and trailed values and
    /// notifying the brancher of every variable that became unfixed.
    pub(crate) fn backtrack(&mut self, backtrack_level: usize, brancher: &mut impl Brancher) {
        acorn_assert_simple!(
            backtrack_level < self.get_decision_level(),
            "backtracking requires abandoning at least one decision level"
        );

        // Events recorded by the abandoned levels describe undone state.
        let _ = self.assignments.drain_domain_events().count();

        let unfixed_variables = self.assignments.synchronise(backtrack_level);
        unfixed_variables
            .iter()
            .for_each(|&(domain_id, previous_value)| {
                brancher.on_unassign_integer(domain_id, previous_value)
            });

        self.trailed_values.synchronise(backtrack_level);
        self.decisions.truncate(backtrack_level);
        self.propagator_queue.clear();
        self.event_drain.clear();

        for propagator in self.propagators.iter_propagators_mut() {
            propagator.synchronise(PropagationContext::new(&self.assignments));
        }
    }

    /// Restores the solver to the root so that a further solve can start fresh. A proven
    /// infeasible state is permanent.
    pub(crate) fn restore_state_at_root(&mut self, brancher: &mut impl Brancher) {
        if self.get_decision_level() > 0 {
            self.backtrack(0, brancher);
        }
        if !self.state.is_infeasible() {
            self.state.declare_ready();
        }
    }
}

// the propagation loop
impl ConstraintSatisfactionSolver {
    /// Drains the pending domain events and wakes up the watching propagators. Returns false
    /// when there were no events to process.
    fn process_domain_events(&mut self) -> bool {
        if !self.watch_list_cp.is_watching_anything() {
            let _ = self.assignments.drain_domain_events().count();
            return false;
        }

        self.event_drain
            .extend(self.assignments.drain_domain_events());

        if self.event_drain.is_empty() {
            return false;
        }

        for (event, domain) in self.event_drain.drain(..) {
            for &propagator_var in self.watch_list_cp.get_affected_propagators(event, domain) {
                let propagator = &mut self.propagators[propagator_var.propagator];
                let context = PropagationContextWithTrailedValues::new(
                    &mut self.trailed_values,
                    &self.assignments,
                );

                let enqueue_decision =
                    propagator.notify(context, propagator_var.variable, event);

                if enqueue_decision
                    == crate::engine::cp::propagation::EnqueueDecision::Enqueue
                {
                    let priority = propagator.priority();
                    self.propagator_queue
                        .enqueue_propagator(propagator_var.propagator, priority);
                }
            }
        }

        true
    }

    /// The fixpoint loop: alternate between turning domain events into propagator wake-ups and
    /// running the highest-priority awakened propagator, until no events remain (fixpoint) or a
    /// propagator reports a contradiction. On contradiction the queue is cleared and the solver
    /// transitions to the conflicting state; the search loop must backtrack at least one level
    /// before propagating again.
    pub(crate) fn propagate_enqueued(&mut self) {
        acorn_assert_moderate!(self.state.no_conflict());

        loop {
            let _ = self.process_domain_events();

            if self.propagator_queue.is_empty() {
                break;
            }

            let propagator_id = self.propagator_queue.pop();
            self.counters.num_propagations += 1;

            let propagator = &mut self.propagators[propagator_id];
            let context =
                PropagationContextMut::new(&mut self.trailed_values, &mut self.assignments);

            if propagator.propagate(context).is_err() {
                let _ = self.assignments.drain_domain_events().count();
                self.propagator_queue.clear();
                self.event_drain.clear();
                self.state.declare_conflict();
                return;
            }
        }
    }
}

/// The state machine of the solver.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum CSPSolverStateInternal {
    #[default]
    Ready,
    Solving,
    ContainsSolution,
    Conflict,
    Infeasible,
    Timeout,
}

#[derive(Default, Debug, Clone, Copy)]
pub(crate) struct CSPSolverState {
    internal_state: CSPSolverStateInternal,
}

impl CSPSolverState {
    pub(crate) fn no_conflict(&self) -> bool {
        !self.conflicting()
    }

    pub(crate) fn conflicting(&self) -> bool {
        matches!(self.internal_state, CSPSolverStateInternal::Conflict)
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        matches!(self.internal_state, CSPSolverStateInternal::Infeasible)
    }

    pub(crate) fn has_solution(&self) -> bool {
        matches!(self.internal_state, CSPSolverStateInternal::ContainsSolution)
    }

    fn declare(&mut self, state: CSPSolverStateInternal) {
        self.internal_state = state;
    }

    pub(crate) fn declare_ready(&mut self) {
        self.declare(CSPSolverStateInternal::Ready);
    }

    pub(crate) fn declare_solving(&mut self) {
        self.declare(CSPSolverStateInternal::Solving);
    }

    pub(crate) fn declare_conflict(&mut self) {
        self.declare(CSPSolverStateInternal::Conflict);
    }

    pub(crate) fn declare_infeasible(&mut self) {
        self.declare(CSPSolverStateInternal::Infeasible);
    }

    pub(crate) fn declare_solution_found(&mut self) {
        self.declare(CSPSolverStateInternal::ContainsSolution);
    }

    pub(crate) fn declare_timeout(&mut self) {
        self.declare(CSPSolverStateInternal::Timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::branchers::IndependentVariableValueBrancher;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::variable_selection::InputOrder;
    use crate::engine::termination::Indefinite;
    use crate::propagators::arithmetic::LinearLessOrEqualPropagator;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn a_problem_without_constraints_is_feasible() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(1, 5);

        let mut brancher =
            IndependentVariableValueBrancher::new(InputOrder::new(&[x]), InDomainMin);
        let flag = solver.solve(&mut Indefinite, &mut brancher);

        assert_eq!(flag, CSPSolverExecutionFlag::Feasible);
        assert_eq!(solver.assignments().get_assigned_value(x), 1);
    }

    #[test]
    fn a_root_infeasible_propagator_is_rejected_when_posted() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(5, 10);

        // x <= 4 contradicts the domain at the root
        let result = solver.add_propagator(LinearLessOrEqualPropagator::new(
            vec![x.scaled(1)].into(),
            4,
        ));

        assert_eq!(result, Err(ConstraintOperationError::InfeasiblePropagator));
        assert!(solver.is_infeasible());
    }

    #[test]
    fn consecutive_solves_enumerate_distinct_solutions() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(1, 3);

        let mut brancher =
            IndependentVariableValueBrancher::new(InputOrder::new(&[x]), InDomainMin);

        let mut values = Vec::new();
        while let CSPSolverExecutionFlag::Feasible = solver.solve(&mut Indefinite, &mut brancher)
        {
            values.push(solver.assignments().get_assigned_value(x));
        }

        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn backtracking_restores_the_exact_pre_node_state() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(1, 10);

        let mut brancher =
            IndependentVariableValueBrancher::new(InputOrder::new(&[x]), InDomainMin);

        solver.declare_new_decision_level();
        solver.decisions.push(crate::predicate!(x == 1));
        solver
            .assignments
            .apply_predicate(crate::predicate!(x == 1))
            .expect("non-empty domain");

        solver.backtrack(0, &mut brancher);

        assert_eq!(solver.assignments.get_lower_bound(x), 1);
        assert_eq!(solver.assignments.get_upper_bound(x), 10);
        assert_eq!(solver.get_decision_level(), 0);
    }
}
