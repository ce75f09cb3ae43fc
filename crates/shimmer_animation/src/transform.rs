//! Animatable properties and values
//!
//! A transform animates one [`Property`] of one target between two
//! [`AnimValue`]s. Values interpolate component-wise; both endpoints of a
//! transform must be the same kind, which the engine enforces at schedule
//! time.

/// Selector for the property a transform writes.
///
/// One parametric transform type covers every property; widgets needing a
/// property outside the built-in set tag it with `Custom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Width,
    Height,
    Rotation,
    Opacity,
    ScaleX,
    ScaleY,
    Color,
    Custom(u16),
}

/// Kind tag for [`AnimValue`], used for schedule-time validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Pair,
    Color,
}

/// An animatable value: a scalar, a 2-component pair (position, size), or an
/// RGBA colour
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimValue {
    Scalar(f32),
    Pair(f32, f32),
    Color([f32; 4]),
}

impl AnimValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            AnimValue::Scalar(_) => ValueKind::Scalar,
            AnimValue::Pair(_, _) => ValueKind::Pair,
            AnimValue::Color(_) => ValueKind::Color,
        }
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        match self {
            AnimValue::Scalar(v) => v.is_finite(),
            AnimValue::Pair(x, y) => x.is_finite() && y.is_finite(),
            AnimValue::Color(c) => c.iter().all(|v| v.is_finite()),
        }
    }

    /// Component-wise linear interpolation.
    ///
    /// Both operands must be the same kind; the engine validates that before
    /// a transform is ever evaluated. On a kind mismatch the end value wins.
    pub fn lerp(&self, end: &AnimValue, t: f32) -> AnimValue {
        match (self, end) {
            (AnimValue::Scalar(a), AnimValue::Scalar(b)) => AnimValue::Scalar(lerp(*a, *b, t)),
            (AnimValue::Pair(ax, ay), AnimValue::Pair(bx, by)) => {
                AnimValue::Pair(lerp(*ax, *bx, t), lerp(*ay, *by, t))
            }
            (AnimValue::Color(a), AnimValue::Color(b)) => AnimValue::Color([
                lerp(a[0], b[0], t),
                lerp(a[1], b[1], t),
                lerp(a[2], b[2], t),
                lerp(a[3], b[3], t),
            ]),
            _ => *end,
        }
    }

    /// Unwrap a scalar, or `None` for other kinds
    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            AnimValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lerp_is_linear() {
        let a = AnimValue::Scalar(0.0);
        let b = AnimValue::Scalar(10.0);
        assert_eq!(a.lerp(&b, 0.0), AnimValue::Scalar(0.0));
        assert_eq!(a.lerp(&b, 0.5), AnimValue::Scalar(5.0));
        assert_eq!(a.lerp(&b, 1.0), AnimValue::Scalar(10.0));
    }

    #[test]
    fn pair_and_color_lerp_component_wise() {
        let a = AnimValue::Pair(0.0, 100.0);
        let b = AnimValue::Pair(10.0, 0.0);
        assert_eq!(a.lerp(&b, 0.5), AnimValue::Pair(5.0, 50.0));

        let black = AnimValue::Color([0.0, 0.0, 0.0, 1.0]);
        let red = AnimValue::Color([1.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            black.lerp(&red, 0.25),
            AnimValue::Color([0.25, 0.0, 0.0, 1.0])
        );
    }

    #[test]
    fn non_finite_components_are_rejected() {
        assert!(AnimValue::Scalar(1.0).is_finite());
        assert!(!AnimValue::Scalar(f32::NAN).is_finite());
        assert!(!AnimValue::Pair(0.0, f32::INFINITY).is_finite());
        assert!(!AnimValue::Color([0.0, 0.0, f32::NEG_INFINITY, 1.0]).is_finite());
    }
}
