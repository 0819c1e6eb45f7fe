use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::assignments::EmptyDomain;
use crate::engine::cp::trailed::TrailedInteger;
use crate::engine::cp::trailed::TrailedValues;
use crate::engine::variables::IntegerVariable;

/// A trait for structures that hold an [`Assignments`]; used to share the read-only domain
/// queries between the different context types.
pub trait HasAssignments {
    fn assignments(&self) -> &Assignments;
}

/// Read-only domain queries, available on every context handed to a propagator.
pub trait ReadDomains: HasAssignments {
    fn is_fixed<Var: IntegerVariable>(&self, var: &Var) -> bool {
        self.lower_bound(var) == self.upper_bound(var)
    }

    fn lower_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.lower_bound(self.assignments())
    }

    fn upper_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.upper_bound(self.assignments())
    }

    fn contains<Var: IntegerVariable>(&self, var: &Var, value: i32) -> bool {
        var.contains(self.assignments(), value)
    }

    fn iterate_domain<'a, Var: IntegerVariable>(
        &'a self,
        var: &'a Var,
    ) -> impl Iterator<Item = i32> + 'a {
        var.iterate_domain(self.assignments())
    }
}

impl<T: HasAssignments> ReadDomains for T {}

/// A context handed to propagator hooks which may only observe the domains, e.g.
/// [`Propagator::synchronise`](super::Propagator::synchronise).
#[derive(Clone, Copy, Debug)]
pub struct PropagationContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> PropagationContext<'a> {
    pub fn new(assignments: &'a Assignments) -> Self {
        PropagationContext { assignments }
    }
}

impl HasAssignments for PropagationContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

/// The context handed to [`Propagator::notify`](super::Propagator::notify): the domains can be
/// observed, and the propagator's reversible cells can be updated incrementally, but domains
/// cannot be narrowed from a notification.
#[derive(Debug)]
pub struct PropagationContextWithTrailedValues<'a> {
    trailed_values: &'a mut TrailedValues,
    assignments: &'a Assignments,
}

impl<'a> PropagationContextWithTrailedValues<'a> {
    pub fn new(trailed_values: &'a mut TrailedValues, assignments: &'a Assignments) -> Self {
        PropagationContextWithTrailedValues {
            trailed_values,
            assignments,
        }
    }

    pub fn value(&self, trailed_integer: TrailedInteger) -> i64 {
        self.trailed_values.read(trailed_integer)
    }

    pub fn add_assign(&mut self, trailed_integer: TrailedInteger, addition: i64) {
        self.trailed_values.add_assign(trailed_integer, addition);
    }

    pub fn assign(&mut self, trailed_integer: TrailedInteger, value: i64) {
        self.trailed_values.assign(trailed_integer, value);
    }

    pub fn as_readonly(&self) -> PropagationContext<'_> {
        PropagationContext::new(self.assignments)
    }
}

impl HasAssignments for PropagationContextWithTrailedValues<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

/// The context handed to [`Propagator::propagate`](super::Propagator::propagate): on top of
/// observing, the domains can be narrowed. Every narrowing operation may signal [`EmptyDomain`],
/// which the propagator is expected to bubble up with `?`.
#[derive(Debug)]
pub struct PropagationContextMut<'a> {
    trailed_values: &'a mut TrailedValues,
    assignments: &'a mut Assignments,
}

impl<'a> PropagationContextMut<'a> {
    pub fn new(trailed_values: &'a mut TrailedValues, assignments: &'a mut Assignments) -> Self {
        PropagationContextMut {
            trailed_values,
            assignments,
        }
    }

    pub fn value(&self, trailed_integer: TrailedInteger) -> i64 {
        self.trailed_values.read(trailed_integer)
    }

    pub fn add_assign(&mut self, trailed_integer: TrailedInteger, addition: i64) {
        self.trailed_values.add_assign(trailed_integer, addition);
    }

    pub fn assign(&mut self, trailed_integer: TrailedInteger, value: i64) {
        self.trailed_values.assign(trailed_integer, value);
    }

    pub fn set_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_lower_bound(self.assignments, bound)
    }

    pub fn set_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_upper_bound(self.assignments, bound)
    }

    pub fn remove<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        var.remove(self.assignments, value)
    }

    pub fn as_readonly(&self) -> PropagationContext<'_> {
        PropagationContext::new(self.assignments)
    }
}

impl HasAssignments for PropagationContextMut<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
