use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::propagation::HasAssignments;
use crate::engine::variables::DomainGeneratorIterator;
use crate::engine::variables::IntegerVariable;

/// A trait which specifies the common behaviours of [`Solution`] and [`SolutionReference`].
pub trait ProblemSolution: HasAssignments {
    /// Returns the number of defined domains.
    fn num_domains(&self) -> usize {
        self.assignments().num_domains() as usize
    }

    /// Returns the value the provided variable takes in this solution.
    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32 {
        let assignments = self.assignments();
        crate::acorn_assert_simple!(
            var.lower_bound(assignments) == var.upper_bound(assignments),
            "retrieving the value of an unassigned variable from a solution"
        );
        var.lower_bound(assignments)
    }
}

/// A solution which keeps a reference to its inner structures.
#[derive(Debug, Copy, Clone)]
pub struct SolutionReference<'a> {
    assignments: &'a Assignments,
}

impl<'a> SolutionReference<'a> {
    pub fn new(assignments: &'a Assignments) -> SolutionReference<'a> {
        SolutionReference { assignments }
    }

    pub fn get_domains(&self) -> DomainGeneratorIterator {
        self.assignments.get_domains()
    }
}

impl ProblemSolution for SolutionReference<'_> {}

impl<'a> HasAssignments for SolutionReference<'a> {
    fn assignments(&self) -> &'a Assignments {
        self.assignments
    }
}

/// A solution which takes ownership of its inner structures, detached from the solver that
/// produced it.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    assignments: Assignments,
}

impl Solution {
    pub fn get_domains(&self) -> DomainGeneratorIterator {
        self.assignments.get_domains()
    }

    pub fn as_reference(&self) -> SolutionReference<'_> {
        SolutionReference {
            assignments: &self.assignments,
        }
    }
}

impl ProblemSolution for Solution {}

impl HasAssignments for Solution {
    fn assignments(&self) -> &Assignments {
        &self.assignments
    }
}

impl From<SolutionReference<'_>> for Solution {
    fn from(value: SolutionReference) -> Self {
        Self {
            assignments: value.assignments.clone(),
        }
    }
}
