//! The propagation contract between the engine and constraint implementations. See
//! [`Propagator`] for the entry point.
mod local_id;
mod propagation_context;
mod propagator;
mod propagator_id;
mod propagator_initialisation_context;
pub(crate) mod store;

pub use local_id::LocalId;
pub use propagation_context::HasAssignments;
pub use propagation_context::PropagationContext;
pub use propagation_context::PropagationContextMut;
pub use propagation_context::PropagationContextWithTrailedValues;
pub use propagation_context::ReadDomains;
pub use propagator::EnqueueDecision;
pub use propagator::Entailment;
pub use propagator::Propagator;
pub use propagator_id::PropagatorId;
pub use propagator_id::PropagatorVarId;
pub use propagator_initialisation_context::PropagatorInitialisationContext;
