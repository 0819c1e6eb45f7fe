//! The propagator implementations shipped with the solver. The set is deliberately small: the
//! engine treats constraints as external collaborators behind the
//! [`Propagator`](crate::propagation::Propagator) contract, and these implementations are the
//! reference consumers of that contract.
pub(crate) mod arithmetic;

pub use arithmetic::binary::BinaryEqualsPropagator;
pub use arithmetic::binary::BinaryNotEqualsPropagator;
pub use arithmetic::LinearLessOrEqualPropagator;
