use enumset::EnumSet;

use super::TransformableVariable;
use crate::engine::cp::assignments::Assignments;
use crate::engine::cp::assignments::EmptyDomain;
use crate::engine::cp::watch_list_cp::IntDomainEvent;
use crate::engine::cp::watch_list_cp::Watchers;
use crate::engine::variables::IntegerVariable;
use crate::math::num_ext::NumExt;

/// Models the constraint `y = ax + b`, by expressing the domain of `y` as a transformation of the
/// domain of `x`.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct AffineView<Inner> {
    inner: Inner,
    scale: i32,
    offset: i32,
}

/// Rounding directions for the inverse transformation.
enum Rounding {
    Up,
    Down,
}

impl<Inner> AffineView<Inner> {
    pub fn new(inner: Inner, scale: i32, offset: i32) -> Self {
        crate::acorn_assert_simple!(scale != 0, "a variable view cannot have scale 0");
        AffineView {
            inner,
            scale,
            offset,
        }
    }

    /// Apply the inverse transformation of this view on a value, to go from the value in the
    /// domain of `self` to a value in the domain of `self.inner`.
    fn invert(&self, value: i32, rounding: Rounding) -> i32 {
        let inverted_translation = value - self.offset;

        match rounding {
            Rounding::Up => NumExt::div_ceil(inverted_translation, self.scale),
            Rounding::Down => NumExt::div_floor(inverted_translation, self.scale),
        }
    }

    fn map(&self, value: i32) -> i32 {
        self.scale * value + self.offset
    }
}

impl<View> IntegerVariable for AffineView<View>
where
    View: IntegerVariable,
{
    type AffineView = Self;

    fn lower_bound(&self, assignment: &Assignments) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.upper_bound(assignment))
        } else {
            self.map(self.inner.lower_bound(assignment))
        }
    }

    fn upper_bound(&self, assignment: &Assignments) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.lower_bound(assignment))
        } else {
            self.map(self.inner.upper_bound(assignment))
        }
    }

    fn contains(&self, assignment: &Assignments, value: i32) -> bool {
        if (value - self.offset) % self.scale == 0 {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.contains(assignment, inverted)
        } else {
            false
        }
    }

    fn iterate_domain(&self, assignment: &Assignments) -> impl Iterator<Item = i32> {
        self.inner
            .iterate_domain(assignment)
            .map(|value| self.map(value))
    }

    fn remove(&self, assignment: &mut Assignments, value: i32) -> Result<(), EmptyDomain> {
        if (value - self.offset) % self.scale == 0 {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.remove(assignment, inverted)
        } else {
            Ok(())
        }
    }

    fn set_lower_bound(
        &self,
        assignment: &mut Assignments,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        if self.scale >= 0 {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.set_lower_bound(assignment, inverted)
        } else {
            let inverted = self.invert(value, Rounding::Down);
            self.inner.set_upper_bound(assignment, inverted)
        }
    }

    fn set_upper_bound(
        &self,
        assignment: &mut Assignments,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        if self.scale >= 0 {
            let inverted = self.invert(value, Rounding::Down);
            self.inner.set_upper_bound(assignment, inverted)
        } else {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.set_lower_bound(assignment, inverted)
        }
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, mut events: EnumSet<IntDomainEvent>) {
        let bound = IntDomainEvent::LowerBound | IntDomainEvent::UpperBound;
        let intersection = events.intersection(bound);
        if intersection.len() == 1 && self.scale.is_negative() {
            events = events.symmetrical_difference(bound);
        }
        self.inner.watch_all(watchers, events);
    }

    fn unpack_event(&self, event: IntDomainEvent) -> IntDomainEvent {
        if self.scale.is_negative() {
            match event {
                IntDomainEvent::LowerBound => IntDomainEvent::UpperBound,
                IntDomainEvent::UpperBound => IntDomainEvent::LowerBound,
                other => other,
            }
        } else {
            event
        }
    }
}

impl<View> TransformableVariable<AffineView<View>> for AffineView<View>
where
    View: IntegerVariable,
{
    fn scaled(&self, scale: i32) -> AffineView<View> {
        let mut result = self.clone();
        result.scale *= scale;
        result.offset *= scale;
        result
    }

    fn offset(&self, offset: i32) -> AffineView<View> {
        let mut result = self.clone();
        result.offset += offset;
        result
    }
}

impl<Inner: std::fmt::Debug> std::fmt::Debug for AffineView<Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale != 1 {
            write!(f, "{} * ", self.scale)?;
        }
        write!(f, "{:?}", self.inner)?;
        if self.offset != 0 {
            write!(f, " + {}", self.offset)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::DomainId;

    #[test]
    fn scaling_an_already_scaled_view_multiplies_the_transformation() {
        let view = AffineView::new(DomainId::new(0), 3, 4);
        let scaled_view = view.scaled(6);

        assert_eq!(scaled_view.scale, 18);
        assert_eq!(scaled_view.offset, 24);
    }

    #[test]
    fn negatively_scaled_views_flip_their_bounds() {
        let mut assignments = Assignments::default();
        let domain = assignments.grow(1, 5);

        let view = domain.scaled(-1);
        assert_eq!(view.lower_bound(&assignments), -5);
        assert_eq!(view.upper_bound(&assignments), -1);
    }

    #[test]
    fn tightening_a_negatively_scaled_view_tightens_the_opposite_bound() {
        let mut assignments = Assignments::default();
        let domain = assignments.grow(1, 5);

        let view = domain.scaled(-1);
        view.set_lower_bound(&mut assignments, -3)
            .expect("non-empty domain");

        assert_eq!(assignments.get_upper_bound(domain), 3);
    }

    #[test]
    fn values_not_on_the_scaled_grid_are_not_contained() {
        let mut assignments = Assignments::default();
        let domain = assignments.grow(1, 5);

        let view = domain.scaled(2);
        assert!(view.contains(&assignments, 4));
        assert!(!view.contains(&assignments, 5));
    }
}
