//! Index-based containers used throughout the solver.
mod keyed_vec;

pub use keyed_vec::*;
