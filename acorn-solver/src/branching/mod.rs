//! The search configuration surface: a [`Brancher`] decides which [`Predicate`] to try next at
//! every open node. The provided [`IndependentVariableValueBrancher`] composes a
//! [`VariableSelector`] with a [`ValueSelector`]; custom strategies implement [`Brancher`]
//! directly.
//!
//! [`Predicate`]: crate::predicates::Predicate
//! [`IndependentVariableValueBrancher`]: branchers::IndependentVariableValueBrancher
//! [`VariableSelector`]: variable_selection::VariableSelector
//! [`ValueSelector`]: value_selection::ValueSelector
pub mod branchers;
pub mod value_selection;
pub mod variable_selection;

mod brancher;
mod selection_context;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;

pub use crate::basic_types::Random;
