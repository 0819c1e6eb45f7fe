//! The variable surface of the solver. A [`DomainId`] is the most basic integer variable: an
//! index into the domain arena. An [`AffineView`] expresses a variable as a linear transformation
//! of another, which lets a single propagator implementation cover scaled and negated uses of a
//! constraint.
mod affine_view;
mod domain_generator_iterator;
mod domain_id;
mod integer_variable;

pub use affine_view::AffineView;
pub use domain_generator_iterator::DomainGeneratorIterator;
pub use domain_id::DomainId;
pub use integer_variable::IntegerVariable;

/// A trait for transforming a variable into an [`AffineView`].
pub trait TransformableVariable<View> {
    /// Get a variable which domain is scaled compared to the domain of self.
    ///
    /// The scaled domain will have holes in it. E.g. if we have `dom(x) = {1, 2}`, then
    /// `dom(x.scaled(2)) = {2, 4}` and *not* `dom(x.scaled(2)) = {1, 2, 3, 4}`.
    fn scaled(&self, scale: i32) -> View;

    /// Get a variable which domain has a constant offset to the domain of self.
    fn offset(&self, offset: i32) -> View;
}
