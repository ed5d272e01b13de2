//! Trigonometry on typed angles.
//!
//! Forward functions convert the angle to radians and evaluate the float
//! function. Inverse functions evaluate in radians and convert the result
//! into whichever angle type the caller names, re-normalizing absolute angles.
//!
//! ```
//! use phys_units_core::trig::Angular;
//! use phys_units_core::si::{Degrees, Heading};
//!
//! let s = Degrees::new(30.0_f64).sin();
//! assert!((s - 0.5).abs() < 1e-6);
//!
//! let h = Heading::<f64>::atan2(-1.0, 0.0);
//! assert!((h.value() - 270.0).abs() < 1e-4);
//! ```

use num_traits::{AsPrimitive, Float};

use crate::angle::AbsoluteAngle;
use crate::quantity::Quantity;
use crate::scalar::{Real, Scalar};
use crate::si::Radian;
use crate::unit::{Pair, Single, Unit};

/// Evaluate a float function of the angle's radian value
#[inline]
pub fn apply<A: Angular>(angle: A, f: impl FnOnce(A::Value) -> A::Value) -> A::Value {
    f(angle.to_radians_value())
}

/// Build an angle from a float function returning radians
#[inline]
pub fn invert<A: Angular>(x: A::Value, f: impl FnOnce(A::Value) -> A::Value) -> A {
    A::from_radians_value(f(x))
}

/// Build an angle from a two-argument float function returning radians
#[inline]
pub fn invert2<A: Angular>(
    y: A::Value,
    x: A::Value,
    f: impl FnOnce(A::Value, A::Value) -> A::Value,
) -> A {
    A::from_radians_value(f(y, x))
}

/// Angles that can round-trip through a radian float
pub trait Angular: Sized {
    /// Float type the functions are evaluated in
    type Value: Float;

    /// This angle in radians
    fn to_radians_value(self) -> Self::Value;

    /// Angle of this type for a radian value
    fn from_radians_value(radians: Self::Value) -> Self;

    /// Sine
    fn sin(self) -> Self::Value {
        apply(self, <Self::Value as Float>::sin)
    }

    /// Cosine
    fn cos(self) -> Self::Value {
        apply(self, <Self::Value as Float>::cos)
    }

    /// Tangent
    fn tan(self) -> Self::Value {
        apply(self, <Self::Value as Float>::tan)
    }

    /// Hyperbolic sine
    fn sinh(self) -> Self::Value {
        apply(self, <Self::Value as Float>::sinh)
    }

    /// Hyperbolic cosine
    fn cosh(self) -> Self::Value {
        apply(self, <Self::Value as Float>::cosh)
    }

    /// Hyperbolic tangent
    fn tanh(self) -> Self::Value {
        apply(self, <Self::Value as Float>::tanh)
    }

    /// Arcsine
    fn asin(x: Self::Value) -> Self {
        invert(x, <Self::Value as Float>::asin)
    }

    /// Arccosine
    fn acos(x: Self::Value) -> Self {
        invert(x, <Self::Value as Float>::acos)
    }

    /// Arctangent
    fn atan(x: Self::Value) -> Self {
        invert(x, <Self::Value as Float>::atan)
    }

    /// Four-quadrant arctangent of `y / x`
    fn atan2(y: Self::Value, x: Self::Value) -> Self {
        invert2(y, x, <Self::Value as Float>::atan2)
    }

    /// Inverse hyperbolic sine
    fn asinh(x: Self::Value) -> Self {
        invert(x, <Self::Value as Float>::asinh)
    }

    /// Inverse hyperbolic cosine
    fn acosh(x: Self::Value) -> Self {
        invert(x, <Self::Value as Float>::acosh)
    }

    /// Inverse hyperbolic tangent
    fn atanh(x: Self::Value) -> Self {
        invert(x, <Self::Value as Float>::atanh)
    }
}

impl<V: Real, U: Unit> Angular for Quantity<V, U> {
    type Value = V::Float;

    fn to_radians_value(self) -> V::Float {
        let () = Single::<U>::ANGLE;
        self.value().to_float().scale_by(Pair::<U, Radian>::RATIO)
    }

    fn from_radians_value(radians: V::Float) -> Self {
        let () = Single::<U>::ANGLE;
        Quantity::new(radians.scale_by(Pair::<Radian, U>::RATIO).as_())
    }
}

impl<V: Real, U: Unit, const HALF: bool> Angular for AbsoluteAngle<V, U, HALF> {
    type Value = V::Float;

    fn to_radians_value(self) -> V::Float {
        self.to_offset().to_radians_value()
    }

    fn from_radians_value(radians: V::Float) -> Self {
        AbsoluteAngle::from_offset(Quantity::from_radians_value(radians))
    }
}
