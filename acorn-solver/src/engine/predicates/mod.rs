//! Atomic constraints over a single [`DomainId`](crate::engine::variables::DomainId). A
//! [`Predicate`](predicate::Predicate) is the currency of branching decisions and objective
//! cuts: applying one narrows a domain, negating one yields the opposite branch.
pub(crate) mod predicate;
pub(crate) mod predicate_constructor;
