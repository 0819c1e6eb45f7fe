//! Reversible integer cells for propagator-owned state. A propagator that maintains incremental
//! counters (e.g. the running lower bound of a linear sum) stores them as [`TrailedInteger`]s in
//! the [`TrailedValues`]; the cells are restored automatically when the search backtracks, which
//! keeps propagators stateless across backtracks.
mod trailed_change;
mod trailed_integer;
mod trailed_values;

pub(crate) use trailed_change::TrailedChange;
pub use trailed_integer::TrailedInteger;
pub use trailed_values::TrailedValues;
