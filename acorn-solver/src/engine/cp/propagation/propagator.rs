use downcast_rs::impl_downcast;
use downcast_rs::Downcast;

use super::propagation_context::PropagationContext;
use super::propagation_context::PropagationContextMut;
use super::propagation_context::PropagationContextWithTrailedValues;
use super::propagator_initialisation_context::PropagatorInitialisationContext;
use super::LocalId;
use crate::basic_types::PropagationStatusCP;
use crate::engine::cp::assignments::EmptyDomain;
use crate::engine::cp::watch_list_cp::IntDomainEvent;

// We need this to cast from `Box<dyn Propagator>` to a concrete propagator type in tests; Rust
// inherently does not allow downcasting from the trait definition to its concrete type.
impl_downcast!(Propagator);

/// The contract every constraint satisfies. A propagator observes the domains of the variables in
/// its scope through the provided contexts, narrows them in [`Propagator::propagate`], and is
/// woken up through [`Propagator::notify`] for the event kinds it registered during
/// [`Propagator::initialise_at_root`].
///
/// The solver guarantees these methods are invoked only through the propagation engine and only
/// while the domains are in a consistent (non-contradicted) state. Propagators must be stateless
/// across backtracks, except through the domains themselves and through
/// [`TrailedInteger`](crate::engine::cp::trailed::TrailedInteger) cells allocated at
/// initialisation.
pub trait Propagator: Downcast {
    /// Return the name of the propagator; this is a convenience method used for printing.
    fn name(&self) -> &str;

    /// Initialises the propagator at the root and registers its watches: for each variable in the
    /// scope, the event kinds for which the propagator wants to be woken up. Called exactly once,
    /// before any call to [`Propagator::propagate`].
    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_>,
    ) -> Result<(), EmptyDomain>;

    /// Propagate method that is called during the fixpoint loop.
    ///
    /// Extends the current partial assignment with inferred domain changes. In case no conflict
    /// has been detected it returns [`Result::Ok`], otherwise it returns a [`Result::Err`] with
    /// the detected [`Inconsistency`](crate::basic_types::Inconsistency).
    ///
    /// Propagators are not required to propagate until a fixed point in one call; the engine
    /// calls again as long as events are generated.
    fn propagate(&mut self, context: PropagationContextMut<'_>) -> PropagationStatusCP;

    /// Called when an event happens to one of the variables the propagator is subscribed to. It
    /// indicates whether the event should cause the propagator to be enqueued.
    ///
    /// This can be used to incrementally maintain data structures or filter wake-ups, and should
    /// only be used for computationally cheap logic; expensive computation belongs in
    /// [`Propagator::propagate`].
    ///
    /// By default the propagator is always enqueued for every event it watches.
    fn notify(
        &mut self,
        _context: PropagationContextWithTrailedValues<'_>,
        _local_id: LocalId,
        _event: IntDomainEvent,
    ) -> EnqueueDecision {
        EnqueueDecision::Enqueue
    }

    /// Called each time the solver backtracks; the propagator can then update its internal data
    /// structures given the restored variable domains.
    ///
    /// By default this function does nothing. State kept in
    /// [`TrailedInteger`](crate::engine::cp::trailed::TrailedInteger) cells is restored
    /// automatically and needs no handling here.
    fn synchronise(&mut self, _context: PropagationContext<'_>) {}

    /// Returns the priority of the propagator represented as an integer. Lower values mean higher
    /// priority; the priority determines the order in which propagators will be asked to
    /// propagate. It is custom for simpler propagators to have lower priority values.
    fn priority(&self) -> u32 {
        3
    }

    /// Whether the constraint holds under the current assignment. Only meaningful when all
    /// variables in the scope are fixed; used to validate recorded solutions.
    fn is_satisfied(&self, context: PropagationContext<'_>) -> bool;

    /// Whether the constraint is already decided by the current domains, without requiring the
    /// variables to be fixed.
    ///
    /// By default a propagator reports [`Entailment::Unknown`]; implementing this is optional.
    fn is_entailed(&self, _context: PropagationContext<'_>) -> Entailment {
        Entailment::Unknown
    }

    /// The negation of this constraint, when it has a natural one. Used by callers that want to
    /// post the opposite of a constraint without knowing its concrete type.
    fn opposite(&self) -> Option<Box<dyn Propagator>> {
        None
    }
}

/// Indicator of what to do when a propagator is notified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnqueueDecision {
    /// The propagator should be enqueued.
    Enqueue,
    /// The propagator should not be enqueued.
    Skip,
}

/// The three-valued status of a constraint under the current (partial) domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entailment {
    /// Every extension of the current domains satisfies the constraint.
    Entailed,
    /// No extension of the current domains satisfies the constraint.
    Violated,
    /// The constraint is not yet decided.
    Unknown,
}
