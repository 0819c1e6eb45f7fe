//! # Acorn
//! Acorn is a constraint programming solver built around two mechanisms: a reversible (trailing)
//! memory model, which lets domains and propagator state mutate during search and be rolled back
//! exactly on backtrack, and an event-driven propagation loop which narrows variable domains to
//! fixpoint between branching decisions. Search is chronological depth-first branch-and-bound;
//! constraints are external collaborators implementing the
//! [`Propagator`](crate::propagation::Propagator) contract.
//!
//! # Using the solver
//! The first step to solving a problem is creating variables and posting constraints:
//! ```rust
//! # use acorn_solver::Solver;
//! # use acorn_solver::propagators::BinaryNotEqualsPropagator;
//! // We create the solver with default options
//! let mut solver = Solver::default();
//!
//! // We create two variables with domains [1, 3]
//! let x = solver.new_bounded_integer(1, 3);
//! let y = solver.new_bounded_integer(1, 3);
//!
//! // And constrain them to take different values
//! let _ = solver.add_propagator(BinaryNotEqualsPropagator::new(x, y));
//! ```
//!
//! For finding a solution, a [`termination::TerminationCondition`] and a [`branching::Brancher`]
//! are injected, which determine when the solver should stop searching and which
//! variable/value selection strategy is used:
//! ```rust
//! # use acorn_solver::Solver;
//! # use acorn_solver::propagators::BinaryNotEqualsPropagator;
//! # use acorn_solver::results::{ProblemSolution, SatisfactionResult};
//! # use acorn_solver::termination::Indefinite;
//! # let mut solver = Solver::default();
//! # let x = solver.new_bounded_integer(1, 3);
//! # let y = solver.new_bounded_integer(1, 3);
//! # let _ = solver.add_propagator(BinaryNotEqualsPropagator::new(x, y));
//! // We create a termination condition which allows the solver to run indefinitely
//! let mut termination = Indefinite;
//! // And we create a search strategy (in this case, simply the default)
//! let mut brancher = solver.default_brancher();
//!
//! // Then we find a solution to the problem
//! let result = solver.satisfy(&mut brancher, &mut termination);
//!
//! if let SatisfactionResult::Satisfiable(solution) = result {
//!     assert_ne!(solution.get_integer_value(x), solution.get_integer_value(y));
//! } else {
//!     panic!("this problem should have a solution")
//! }
//! ```
//!
//! **Optimising an objective** uses branch-and-bound: every incumbent tightens a bound on the
//! objective which prunes the remainder of the tree:
//! ```rust
//! # use acorn_solver::Solver;
//! # use acorn_solver::propagators::LinearLessOrEqualPropagator;
//! # use acorn_solver::results::{OptimisationResult, ProblemSolution};
//! # use acorn_solver::termination::Indefinite;
//! # use acorn_solver::variables::TransformableVariable;
//! let mut solver = Solver::default();
//! let x = solver.new_bounded_integer(0, 10);
//! let y = solver.new_bounded_integer(0, 10);
//!
//! // x + y <= 12
//! let _ = solver.add_propagator(LinearLessOrEqualPropagator::new(
//!     vec![x.scaled(1), y.scaled(1)].into(),
//!     12,
//! ));
//!
//! let mut termination = Indefinite;
//! let mut brancher = solver.default_brancher();
//!
//! match solver.maximise(&mut brancher, &mut termination, x) {
//!     OptimisationResult::Optimal(solution) => {
//!         assert_eq!(solution.get_integer_value(x), 10);
//!     }
//!     _ => panic!("this problem should have an optimal solution"),
//! }
//! ```
pub mod asserts;
pub mod branching;
pub mod containers;
pub mod optimisation;
pub mod propagators;

pub(crate) mod api;
pub(crate) mod basic_types;
pub(crate) mod engine;
pub(crate) mod math;

pub use crate::api::solver::DefaultBrancher;
pub use crate::api::solver::Solver;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::engine::ConstraintSatisfactionSolver;

/// The conclusions of a solve, and the solution types through which assignments are read.
pub mod results {
    pub use crate::api::outputs::solution_iterator::IteratedSolution;
    pub use crate::api::outputs::solution_iterator::SolutionIterator;
    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::CSPSolverExecutionFlag;
    pub use crate::basic_types::ProblemSolution;
    pub use crate::basic_types::Solution;
    pub use crate::basic_types::SolutionReference;
}

/// The resource limits under which a solve runs.
pub mod termination {
    pub use crate::engine::termination::Combinator;
    pub use crate::engine::termination::ConflictBudget;
    pub use crate::engine::termination::DecisionBudget;
    pub use crate::engine::termination::Indefinite;
    pub use crate::engine::termination::TerminationCondition;
    pub use crate::engine::termination::TimeBudget;
}

/// The variable surface: plain domain ids and affine views over them.
pub mod variables {
    pub use crate::engine::cp::assignments::Assignments;
    pub use crate::engine::cp::assignments::EmptyDomain;
    pub use crate::engine::variables::AffineView;
    pub use crate::engine::variables::DomainGeneratorIterator;
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::IntegerVariable;
    pub use crate::engine::variables::TransformableVariable;
}

/// Atomic constraints over a single variable; the currency of branching decisions.
pub mod predicates {
    pub use crate::engine::predicates::predicate::Predicate;
    pub use crate::engine::predicates::predicate_constructor::PredicateConstructor;
}

/// The contract between the propagation engine and constraint implementations.
pub mod propagation {
    pub use crate::basic_types::Inconsistency;
    pub use crate::basic_types::PropagationStatusCP;
    pub use crate::engine::cp::domain_events::DomainEvents;
    pub use crate::engine::cp::propagation::EnqueueDecision;
    pub use crate::engine::cp::propagation::Entailment;
    pub use crate::engine::cp::propagation::HasAssignments;
    pub use crate::engine::cp::propagation::LocalId;
    pub use crate::engine::cp::propagation::PropagationContext;
    pub use crate::engine::cp::propagation::PropagationContextMut;
    pub use crate::engine::cp::propagation::PropagationContextWithTrailedValues;
    pub use crate::engine::cp::propagation::Propagator;
    pub use crate::engine::cp::propagation::PropagatorId;
    pub use crate::engine::cp::propagation::PropagatorInitialisationContext;
    pub use crate::engine::cp::propagation::PropagatorVarId;
    pub use crate::engine::cp::propagation::ReadDomains;
    pub use crate::engine::cp::trailed::TrailedInteger;
    pub use crate::engine::cp::trailed::TrailedValues;
    pub use crate::engine::cp::watch_list_cp::IntDomainEvent;
    pub use crate::engine::cp::watch_list_cp::Watchers;
}

/// The configuration surface of the solver.
pub mod options {
    pub use crate::basic_types::sequence_generators::SequenceGeneratorType;
    pub use crate::engine::restart_strategy::RestartOptions;
    pub use crate::engine::SolverOptions;
}

/// Solver-wide counters.
pub mod statistics {
    pub use crate::engine::solver_statistics::SolverStatistics;
}
