//! Contains the structures corresponding to solution iteration.
use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::engine::termination::TerminationCondition;
use crate::engine::ConstraintSatisfactionSolver;

/// A struct which allows the retrieval of multiple solutions to a satisfaction problem.
///
/// The iterator resumes the depth-first search where the previous solution left off, so every
/// returned solution is distinct and the enumeration is complete once
/// [`IteratedSolution::Finished`] is returned.
#[derive(Debug)]
pub struct SolutionIterator<'solver, 'brancher, 'termination, B, T> {
    solver: &'solver mut ConstraintSatisfactionSolver,
    brancher: &'brancher mut B,
    termination: &'termination mut T,
    has_solution: bool,
}

impl<'solver, 'brancher, 'termination, B: Brancher, T: TerminationCondition>
    SolutionIterator<'solver, 'brancher, 'termination, B, T>
{
    pub(crate) fn new(
        solver: &'solver mut ConstraintSatisfactionSolver,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
    ) -> Self {
        SolutionIterator {
            solver,
            brancher,
            termination,
            has_solution: false,
        }
    }

    /// Find a new solution by resuming the search after the previous one. Also calls the
    /// [`Brancher::on_solution`] method of the [`Brancher`] for every solution found.
    pub fn next_solution(&mut self) -> IteratedSolution {
        match self
            .solver
            .solve(&mut *self.termination, &mut *self.brancher)
        {
            CSPSolverExecutionFlag::Feasible => {
                self.has_solution = true;
                let solution: Solution = self.solver.get_solution_reference().into();
                self.brancher.on_solution(solution.as_reference());
                IteratedSolution::Solution(solution)
            }
            CSPSolverExecutionFlag::Infeasible => {
                if self.has_solution {
                    IteratedSolution::Finished
                } else {
                    IteratedSolution::Unsatisfiable
                }
            }
            CSPSolverExecutionFlag::Timeout => IteratedSolution::Unknown,
        }
    }
}

/// Enum which specifies the status of the call to
/// [`SolutionIterator::next_solution`].
#[derive(Debug)]
pub enum IteratedSolution {
    /// A new solution was identified.
    Solution(Solution),
    /// No more solutions exist.
    Finished,
    /// The problem was unsatisfiable to begin with.
    Unsatisfiable,
    /// No conclusion was reached, likely due to a termination condition triggering.
    Unknown,
}
