//! Variable selection strategies: given the unfixed variables under consideration, decide which
//! one to branch on next.
mod anti_first_fail;
mod first_fail;
mod input_order;
mod variable_selector;

pub use anti_first_fail::AntiFirstFail;
pub use first_fail::FirstFail;
pub use input_order::InputOrder;
pub use variable_selector::VariableSelector;
