use super::outputs::solution_iterator::SolutionIterator;
use super::outputs::OptimisationResult;
use super::outputs::SatisfactionResult;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::branching::branchers::IndependentVariableValueBrancher;
use crate::branching::value_selection::InDomainMin;
use crate::branching::variable_selection::InputOrder;
use crate::branching::Brancher;
use crate::engine::cp::propagation::Propagator;
use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::termination::TerminationCondition;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::SolverOptions;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::TransformableVariable;
use crate::optimisation::ObjectiveManager;
use crate::optimisation::OptimisationDirection;

/// The [`Brancher`] returned by [`Solver::default_brancher`]: input-order variable selection with
/// in-domain-min value selection over all variables.
pub type DefaultBrancher =
    IndependentVariableValueBrancher<DomainId, InputOrder<DomainId>, InDomainMin>;

/// The main interaction point which allows the creation of variables, the addition of
/// constraints, and solving problems.
///
/// # Creating variables and posting constraints
/// ```rust
/// # use acorn_solver::Solver;
/// # use acorn_solver::propagators::BinaryNotEqualsPropagator;
/// let mut solver = Solver::default();
///
/// // We can create an integer variable with a domain in the range [0, 10]
/// let x = solver.new_bounded_integer(0, 10);
/// // ...or with a non-contiguous domain
/// let y = solver.new_sparse_integer(vec![0, 3, 5]);
/// // ...or a variable which only tracks its bounds
/// let z = solver.new_interval_integer(0, 10);
///
/// // Constraints are posted as propagators
/// let _ = solver.add_propagator(BinaryNotEqualsPropagator::new(x, y));
/// ```
///
/// # Solving
/// Solving requires a [`Brancher`] (the search strategy) and a
/// [`TerminationCondition`] (the resource limits); see [`Solver::satisfy`],
/// [`Solver::get_solution_iterator`], [`Solver::minimise`] and [`Solver::maximise`].
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    satisfaction_solver: ConstraintSatisfactionSolver,
    /// The function which is called whenever an optimisation procedure finds a new incumbent;
    /// see [`Solver::with_solution_callback`].
    solution_callback: Box<dyn Fn(&Solution)>,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            satisfaction_solver: Default::default(),
            solution_callback: create_empty_function(),
        }
    }
}

/// Creates a place-holder empty function which does not do anything when a solution is found.
fn create_empty_function() -> Box<dyn Fn(&Solution)> {
    Box::new(|_| {})
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("satisfaction_solver", &self.satisfaction_solver)
            .finish()
    }
}

impl Solver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(solver_options: SolverOptions) -> Self {
        Solver {
            satisfaction_solver: ConstraintSatisfactionSolver::new(solver_options),
            solution_callback: create_empty_function(),
        }
    }

    /// Adds a call-back to the [`Solver`] which is called every time an optimisation procedure
    /// finds a new incumbent solution. The callback observes the solution snapshot; it cannot
    /// mutate solver state.
    pub fn with_solution_callback(&mut self, solution_callback: impl Fn(&Solution) + 'static) {
        self.solution_callback = Box::new(solution_callback);
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.satisfaction_solver.log_statistics();
    }

    pub fn get_statistics(&self) -> SolverStatistics {
        self.satisfaction_solver.get_statistics()
    }
}

/// Methods to create variables and retrieve information about them.
impl Solver {
    /// Create a new integer variable with an enumerated domain holding the provided range.
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable(lower_bound, upper_bound)
    }

    /// Create a new integer variable which only tracks its bounds. See
    /// [`ConstraintSatisfactionSolver::create_new_interval_integer_variable`] for the trade-off
    /// this entails.
    pub fn new_interval_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_interval_integer_variable(lower_bound, upper_bound)
    }

    /// Create a new integer variable whose domain holds exactly the provided values.
    pub fn new_sparse_integer(&mut self, values: Vec<i32>) -> DomainId {
        self.satisfaction_solver
            .create_new_sparse_integer_variable(&values)
    }

    /// Get the lower bound of the provided variable under the current assignment.
    pub fn lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.lower_bound(self.satisfaction_solver.assignments())
    }

    /// Get the upper bound of the provided variable under the current assignment.
    pub fn upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.upper_bound(self.satisfaction_solver.assignments())
    }
}

/// Methods for adding constraints.
impl Solver {
    /// Posts the provided propagator. An `Err` result is a model error: either the solver was
    /// already infeasible, or the constraint is infeasible at the root.
    pub fn add_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.add_propagator(propagator)
    }
}

/// Methods for solving.
impl Solver {
    /// Creates the default [`Brancher`] over all currently defined variables: input-order
    /// variable selection combined with in-domain-min value selection.
    pub fn default_brancher(&self) -> DefaultBrancher {
        let variables = self
            .satisfaction_solver
            .assignments()
            .get_domains()
            .collect::<Vec<_>>();
        IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMin)
    }

    /// Searches for a single solution. The solver is restored to the root afterwards, so
    /// repeated calls return the same (first) solution; use [`Solver::get_solution_iterator`] to
    /// enumerate distinct solutions.
    pub fn satisfy(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        match self.satisfaction_solver.solve(termination, brancher) {
            CSPSolverExecutionFlag::Feasible => {
                let solution: Solution = self.satisfaction_solver.get_solution_reference().into();
                brancher.on_solution(solution.as_reference());
                self.satisfaction_solver.restore_state_at_root(brancher);
                SatisfactionResult::Satisfiable(solution)
            }
            CSPSolverExecutionFlag::Infeasible => SatisfactionResult::Unsatisfiable,
            CSPSolverExecutionFlag::Timeout => {
                self.satisfaction_solver.restore_state_at_root(brancher);
                SatisfactionResult::Unknown
            }
        }
    }

    /// Returns an iterator over the solutions of the problem.
    pub fn get_solution_iterator<
        'this,
        'brancher,
        'termination,
        B: Brancher,
        T: TerminationCondition,
    >(
        &'this mut self,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
    ) -> SolutionIterator<'this, 'brancher, 'termination, B, T> {
        SolutionIterator::new(&mut self.satisfaction_solver, brancher, termination)
    }

    /// Minimises the provided objective variable using branch-and-bound: after every incumbent,
    /// a tightened bound on the objective prunes the remainder of the tree, until the tree is
    /// exhausted (optimality) or a termination condition triggers.
    pub fn minimise<Var: IntegerVariable>(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        objective: Var,
    ) -> OptimisationResult {
        self.optimise(
            brancher,
            termination,
            OptimisationDirection::Minimise,
            objective,
        )
    }

    /// Maximises the provided objective variable; see [`Solver::minimise`].
    pub fn maximise<Var: IntegerVariable>(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        objective: Var,
    ) -> OptimisationResult {
        self.optimise(
            brancher,
            termination,
            OptimisationDirection::Maximise,
            objective,
        )
    }

    /// Optimises the provided objective variable in the provided direction. Maximisation is
    /// minimisation of the negatively scaled objective, which makes the directions symmetric.
    pub fn optimise<Var: IntegerVariable>(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        direction: OptimisationDirection,
        objective: Var,
    ) -> OptimisationResult {
        let minimising_view = match direction {
            OptimisationDirection::Maximise => objective.scaled(-1),
            OptimisationDirection::Minimise => objective.scaled(1),
        };
        let mut objective_manager = ObjectiveManager::new(minimising_view);
        let mut best_solution: Option<Solution> = None;

        loop {
            let flag = self.satisfaction_solver.solve_with_objective(
                termination,
                brancher,
                Some(&mut objective_manager),
            );

            match flag {
                CSPSolverExecutionFlag::Feasible => {
                    let solution: Solution =
                        self.satisfaction_solver.get_solution_reference().into();
                    objective_manager.on_solution(self.satisfaction_solver.assignments());
                    brancher.on_solution(solution.as_reference());
                    (self.solution_callback)(&solution);
                    best_solution = Some(solution);
                }
                CSPSolverExecutionFlag::Infeasible => {
                    return match best_solution {
                        Some(solution) => OptimisationResult::Optimal(solution),
                        None => OptimisationResult::Unsatisfiable,
                    };
                }
                CSPSolverExecutionFlag::Timeout => {
                    self.satisfaction_solver.restore_state_at_root(brancher);
                    return match best_solution {
                        Some(solution) => OptimisationResult::Satisfiable(solution),
                        None => OptimisationResult::Unknown,
                    };
                }
            }
        }
    }
}
