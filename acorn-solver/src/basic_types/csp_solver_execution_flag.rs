/// The outcome of one run of the search loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CSPSolverExecutionFlag {
    /// A solution was found and is present in the current assignment.
    Feasible,
    /// The problem (or the remainder of the search tree) admits no solution.
    Infeasible,
    /// A resource limit triggered before a conclusion was reached.
    Timeout,
}
