pub(crate) mod binary;
mod linear_less_or_equal;

pub use linear_less_or_equal::LinearLessOrEqualPropagator;
