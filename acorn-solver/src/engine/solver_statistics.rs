use log::info;

/// Solver-wide counters, kept in the solver rather than in any global state so that independent
/// solver instances do not interfere with one another.
#[derive(Default, Debug, Copy, Clone)]
pub struct SolverStatistics {
    /// The number of branching decisions taken.
    pub num_decisions: u64,
    /// The number of conflicts encountered (including failed branch flips).
    pub num_conflicts: u64,
    /// The number of restarts performed.
    pub num_restarts: u64,
    /// The number of propagator invocations.
    pub num_propagations: u64,
    /// The number of solutions found.
    pub num_solutions: u64,
}

impl SolverStatistics {
    pub fn log_statistics(&self) {
        info!("decisions={}", self.num_decisions);
        info!("conflicts={}", self.num_conflicts);
        info!("restarts={}", self.num_restarts);
        info!("propagations={}", self.num_propagations);
        info!("solutions={}", self.num_solutions);
    }
}
