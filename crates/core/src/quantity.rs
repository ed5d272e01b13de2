//! Scaled quantities: a raw number tagged with a unit at the type level.
//!
//! `Quantity<V, U>` stores exactly one `V`. Everything about the unit lives in
//! `U`, so the type is as large as its raw value and every compatibility check
//! happens while the program is compiled.
//!
//! - `+ - += -=` and comparisons need identical dimension and scale.
//! - `* /` between quantities produce [`Product`] / [`Quotient`] units.
//! - Bare numbers scale a quantity; a bare number divided by a quantity yields
//!   the [`Reciprocal`] unit.
//! - Conversions between scales are explicit ([`Quantity::convert`],
//!   [`crate::unit_cast`]).
//!
//! # Usage
//! ```
//! use phys_units_core::si::{Centimeters, Meters, SquareMeters};
//!
//! let a = Meters::new(3.0);
//! let b = Meters::new(7.0);
//! assert_eq!((a + b).value(), 10.0);
//! assert!(a * Meters::new(6.0) == SquareMeters::new(18.0));
//!
//! let cm: Centimeters<f64> = a.convert();
//! assert_eq!(cm.value(), 300.0);
//! ```
//!
//! Mixing dimensions does not compile, and the error names the dimension
//! check before the scale check:
//! ```compile_fail,E0080
//! use phys_units_core::si::{Meters, Seconds};
//!
//! let _ = Meters::new(3.0) + Seconds::new(1.0);
//! ```
//!
//! ```compile_fail,E0080
//! use phys_units_core::si::{Meters, Seconds};
//!
//! let _ = Meters::new(3) < Seconds::new(1);
//! ```
//!
//! Neither does mixing scales without a conversion:
//! ```compile_fail,E0080
//! use phys_units_core::si::{Centimeters, Meters};
//!
//! let _ = Meters::new(3) + Centimeters::new(1);
//! ```
//!
//! Raw types may differ when comparing:
//! ```
//! use phys_units_core::si::Meters;
//!
//! assert!(Meters::new(2_i32) < Meters::new(2.5_f64));
//! ```

use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use tracing::trace;

use crate::scalar::{rescale, Promote, Scalar};
use crate::unit::{ConvertFrom, Pair, Product, Quotient, Reciprocal, Single, Unit, UnitDescriptor};

/// Raw value `V` measured in unit `U`
#[derive(Clone, Copy)]
pub struct Quantity<V, U> {
    value: V,
    unit: PhantomData<U>,
}

impl<V: Scalar, U: Unit> Quantity<V, U> {
    /// Wrap a raw value expressed in `U`
    #[inline]
    #[must_use]
    pub const fn new(value: V) -> Self {
        Quantity {
            value,
            unit: PhantomData,
        }
    }

    /// Raw value in `U`
    #[inline]
    pub const fn value(&self) -> V {
        self.value
    }

    /// Step the raw value up by one
    #[inline]
    pub fn increment(&mut self) {
        self.value = self.value + V::one();
    }

    /// Step the raw value down by one
    #[inline]
    pub fn decrement(&mut self) {
        self.value = self.value - V::one();
    }

    /// Magnitude, same unit
    #[inline]
    pub fn abs(self) -> Self
    where
        V: Signed,
    {
        Self::new(self.value.abs())
    }

    /// Re-express in another unit of the same dimension.
    ///
    /// Integer raw types truncate toward zero.
    #[inline]
    pub fn convert<U2: Unit>(self) -> Quantity<V, U2>
    where
        V: Promote<V>,
    {
        Quantity::convert_from(self)
    }

    /// Value as a bare number, scale applied. Dimensionless units only.
    #[inline]
    pub fn to_scalar(self) -> V {
        let () = Single::<U>::DIMENSIONLESS;
        self.value.scale_by(U::SCALE)
    }

    /// Quantity holding the bare number `value`. Dimensionless units only.
    #[inline]
    pub fn from_scalar(value: V) -> Self {
        let () = Single::<U>::DIMENSIONLESS;
        Self::new(value.scale_by(U::SCALE.reciprocal()))
    }

    /// Run-time copy of the unit metadata
    #[inline]
    pub fn descriptor(&self) -> UnitDescriptor {
        U::descriptor()
    }
}

impl<V: Scalar, U: Unit> Default for Quantity<V, U> {
    fn default() -> Self {
        Self::new(V::zero())
    }
}

impl<V: fmt::Debug, U: Unit> fmt::Debug for Quantity<V, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &U::descriptor())
            .finish()
    }
}

impl<V: fmt::Display, U: Unit> fmt::Display for Quantity<V, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_quantity(f, &self.value, U::SCALE, U::DIM)
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

impl<V, U, V2, U2> ConvertFrom<Quantity<V2, U2>> for Quantity<V, U>
where
    V: Scalar,
    U: Unit,
    V2: Promote<V>,
    U2: Unit,
{
    #[inline]
    fn convert_from(source: Quantity<V2, U2>) -> Self {
        let () = Pair::<U2, U>::SAME_DIMENSION;
        let ratio = Pair::<U2, U>::RATIO;
        trace!(from = %U2::descriptor(), to = %U::descriptor(), %ratio, "converting quantity");
        Self::new(rescale(source.value, ratio))
    }
}

// ============================================================================
// COMPARISON (raw types may differ, compared in their common representation)
// ============================================================================

impl<V: Promote<V2>, U: Unit, V2: Scalar, U2: Unit> PartialEq<Quantity<V2, U2>> for Quantity<V, U> {
    #[inline]
    fn eq(&self, other: &Quantity<V2, U2>) -> bool {
        let () = Pair::<U, U2>::SAME_UNIT;
        self.value.promote() == V::promote_other(other.value)
    }
}

impl<V: Promote<V> + Eq, U: Unit> Eq for Quantity<V, U> {}

impl<V, U, V2, U2> PartialOrd<Quantity<V2, U2>> for Quantity<V, U>
where
    V: Promote<V2>,
    V::Common: PartialOrd,
    U: Unit,
    V2: Scalar,
    U2: Unit,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<V2, U2>) -> Option<Ordering> {
        let () = Pair::<U, U2>::SAME_UNIT;
        self.value.promote().partial_cmp(&V::promote_other(other.value))
    }
}

impl<V, U> Ord for Quantity<V, U>
where
    V: Promote<V> + Ord,
    V::Common: PartialOrd,
    U: Unit,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<V: Hash, U> Hash for Quantity<V, U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ============================================================================
// ADDITIVE ARITHMETIC
// ============================================================================

impl<V: Scalar, U: Unit, U2: Unit> Add<Quantity<V, U2>> for Quantity<V, U> {
    type Output = Quantity<V, U>;

    #[inline]
    fn add(self, rhs: Quantity<V, U2>) -> Self::Output {
        let () = Pair::<U, U2>::SAME_UNIT;
        Self::new(self.value + rhs.value)
    }
}

impl<V: Scalar, U: Unit, U2: Unit> Sub<Quantity<V, U2>> for Quantity<V, U> {
    type Output = Quantity<V, U>;

    #[inline]
    fn sub(self, rhs: Quantity<V, U2>) -> Self::Output {
        let () = Pair::<U, U2>::SAME_UNIT;
        Self::new(self.value - rhs.value)
    }
}

impl<V: Scalar, U: Unit, U2: Unit> AddAssign<Quantity<V, U2>> for Quantity<V, U> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V, U2>) {
        *self = *self + rhs;
    }
}

impl<V: Scalar, U: Unit, U2: Unit> SubAssign<Quantity<V, U2>> for Quantity<V, U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V, U2>) {
        *self = *self - rhs;
    }
}

impl<V: Scalar + Neg<Output = V>, U: Unit> Neg for Quantity<V, U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<V: Scalar + PrimInt, U: Unit, U2: Unit> Rem<Quantity<V, U2>> for Quantity<V, U> {
    type Output = Quantity<V, U>;

    #[inline]
    fn rem(self, rhs: Quantity<V, U2>) -> Self::Output {
        let () = Pair::<U, U2>::SAME_UNIT;
        Self::new(self.value % rhs.value)
    }
}

impl<V: Scalar, U: Unit> Sum for Quantity<V, U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| acc + q)
    }
}

// ============================================================================
// MULTIPLICATIVE ARITHMETIC
// ============================================================================

impl<V: Scalar, U: Unit, U2: Unit> Mul<Quantity<V, U2>> for Quantity<V, U> {
    type Output = Quantity<V, Product<U, U2>>;

    #[inline]
    fn mul(self, rhs: Quantity<V, U2>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<V: Scalar, U: Unit, U2: Unit> Div<Quantity<V, U2>> for Quantity<V, U> {
    type Output = Quantity<V, Quotient<U, U2>>;

    #[inline]
    fn div(self, rhs: Quantity<V, U2>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

// Scaling by a bare number of the raw type. The output type does not depend
// on which primitive the number is, so unsuffixed literals infer.

impl<V: Scalar, U: Unit> Mul<V> for Quantity<V, U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: V) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<V: Scalar, U: Unit> Div<V> for Quantity<V, U> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: V) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<V: Scalar, U: Unit> MulAssign<V> for Quantity<V, U> {
    #[inline]
    fn mul_assign(&mut self, rhs: V) {
        self.value = self.value * rhs;
    }
}

impl<V: Scalar, U: Unit> DivAssign<V> for Quantity<V, U> {
    #[inline]
    fn div_assign(&mut self, rhs: V) {
        self.value = self.value / rhs;
    }
}

/// Bare number on the left and bare-number interop for dimensionless units.
///
/// Coherence only allows these per primitive, so the quantity operand must
/// already have a concrete raw type: `2.0 / Seconds::new(4.0_f64)` infers,
/// `2.0 / Seconds::new(4.0)` leaves the float type open.
macro_rules! impl_primitive_ops {
    ($($t:ty),*) => {
        $(
            impl<U: Unit> Mul<Quantity<$t, U>> for $t {
                type Output = Quantity<$t, U>;
                #[inline]
                fn mul(self, rhs: Quantity<$t, U>) -> Quantity<$t, U> {
                    Quantity::new(self * rhs.value)
                }
            }

            impl<U: Unit> Div<Quantity<$t, U>> for $t {
                type Output = Quantity<$t, Reciprocal<U>>;
                #[inline]
                fn div(self, rhs: Quantity<$t, U>) -> Quantity<$t, Reciprocal<U>> {
                    Quantity::new(self / rhs.value)
                }
            }

            impl<U: Unit> PartialEq<$t> for Quantity<$t, U> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.to_scalar() == *other
                }
            }

            impl<U: Unit> PartialOrd<$t> for Quantity<$t, U> {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.to_scalar().partial_cmp(other)
                }
            }

            impl<U: Unit> From<$t> for Quantity<$t, U> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_scalar(value)
                }
            }

            impl<U: Unit> From<Quantity<$t, U>> for $t {
                #[inline]
                fn from(quantity: Quantity<$t, U>) -> $t {
                    quantity.to_scalar()
                }
            }
        )*
    };
}

impl_primitive_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// ============================================================================
// SERIALIZATION (raw value only)
// ============================================================================

impl<V: Serialize, U> Serialize for Quantity<V, U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, V: Scalar + Deserialize<'de>, U: Unit> Deserialize<'de> for Quantity<V, U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        V::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::ratio::Ratio;
    use crate::si::{
        Centimeter, Centimeters, Hertz, Meter, Meters, Percent, Second, Seconds, SquareMeters,
        Unitless,
    };
    use crate::si::{Ampere, KilometerPerHour, MeterPerSecond};
    use crate::unit;
    use approx::assert_relative_eq;
    use num_complex::Complex;

    unit! {
        /// Same metadata as the metre, declared separately
        Metre: Ratio::ONE, Dimension::LENGTH;
        /// Thousandth of an ampere
        Milliampere: crate::ratio::MILLI, Dimension::CURRENT;
    }

    #[test]
    fn test_additive_arithmetic() {
        let a = Meters::new(3);
        let b = Meters::new(7);
        assert_eq!((a + b).value(), 10);
        assert_eq!((a - b).value(), -4);
        assert_eq!((-a).value(), -3);

        let mut c = a;
        c += b;
        c -= Meters::new(1);
        assert_eq!(c.value(), 9);
    }

    #[test]
    fn test_units_with_identical_metadata_interoperate() {
        let a = Meters::new(2.0);
        let b = Quantity::<f64, Metre>::new(3.0);
        assert_eq!((a + b).value(), 5.0);
        assert!(a < b);
    }

    #[test]
    fn test_product_and_quotient() {
        let area = Meters::new(3.0) * Meters::new(6.0);
        assert_eq!(area.value(), 18.0);
        assert_eq!(area, SquareMeters::new(18.0));

        let side = SquareMeters::new(18.0) / Meters::new(3.0);
        assert_eq!(side, Meters::new(6.0));

        let speed = Meters::new(10.0) / Seconds::new(4.0);
        assert_eq!(speed.descriptor().dim, Dimension::LENGTH.minus(Dimension::TIME));
    }

    #[test]
    fn test_scaling_by_bare_numbers() {
        let a = Meters::new(60);
        assert_eq!((a * 4).value(), 240);
        assert_eq!((a / 6).value(), 10);

        let c = Meters::new(60_i32);
        assert_eq!((2 * c).value(), 120);

        let mut b = Meters::new(1.5);
        b *= 2.0;
        b /= 4.0;
        assert_eq!(b.value(), 0.75);
    }

    #[test]
    fn test_number_over_quantity_is_reciprocal() {
        let period = Seconds::new(0.5_f64);
        let freq = 1.0 / period;
        assert_eq!(freq.value(), 2.0);
        assert_eq!(freq, Quantity::<f64, Hertz>::new(2.0));
    }

    #[test]
    fn test_modulo_on_integers() {
        let a = Meters::new(17);
        let b = Meters::new(5);
        assert_eq!((a % b).value(), 2);
        assert_eq!((Meters::new(-17) % b).value(), -2);
    }

    #[test]
    fn test_comparisons() {
        let a = Meters::new(60);
        let b = Meters::new(30);
        assert!(a > b);
        assert!(b <= a);
        assert!(a != b);
        assert_eq!(a.max(b), a);
        assert_eq!(Meters::new(1.0).partial_cmp(&Meters::new(f64::NAN)), None);
    }

    #[test]
    fn test_integer_conversion_truncates() {
        let cm = Centimeters::new(1399);
        assert_eq!(cm.convert::<Meter>().value(), 13);
        assert_eq!(Centimeters::new(-1399).convert::<Meter>().value(), -13);
        assert_eq!(Meters::new(13).convert::<Centimeter>().value(), 1300);
    }

    #[test]
    fn test_conversion_changes_raw_type() {
        let m: Meters<f64> = crate::unit_cast(Centimeters::new(250_i32));
        assert_eq!(m.value(), 2.5);
    }

    #[test]
    fn test_float_to_integer_conversion_keeps_fraction() {
        let cm: Centimeters<i32> = crate::unit_cast(Meters::new(1.5_f64));
        assert_eq!(cm.value(), 150);
        let m: Meters<i64> = crate::unit_cast(Centimeters::new(-249.9_f64));
        assert_eq!(m.value(), -2);
    }

    #[test]
    fn test_integer_conversion_does_not_overflow() {
        let fast = Quantity::<i32, KilometerPerHour>::new(500_000_000);
        assert_eq!(fast.convert::<MeterPerSecond>().value(), 138_888_888);
        let wide: Quantity<u8, Centimeter> = crate::unit_cast(Meters::new(2_u8));
        assert_eq!(wide.value(), 200);
    }

    #[test]
    fn test_comparison_across_raw_types() {
        assert!(Meters::new(3_i32) == Meters::new(3.0_f64));
        assert!(Meters::new(3_i32) != Meters::new(3.5_f64));
        assert!(Meters::new(3_i32) < Meters::new(3.5_f64));
        assert!(Meters::new(4.0_f32) > Quantity::<u64, Metre>::new(3));
        assert!(Meters::new(-1_i8) < Meters::new(u64::MAX));
    }

    #[test]
    fn test_complex_raw_values() {
        let mut current = Quantity::<Complex<f64>, Ampere>::new(Complex::new(1.0, 0.5));
        let copy = current;
        assert!(current == copy);

        current *= Complex::new(0.5, 1.0);
        assert_relative_eq!(current.value().re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(current.value().im, 1.25, epsilon = 1e-12);
        assert_relative_eq!(current.value().norm(), 1.25, epsilon = 1e-12);
        assert_relative_eq!(current.value().arg(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);

        let total = current + Quantity::<_, Ampere>::new(Complex::new(1.0, 0.0));
        assert_eq!(total.value(), Complex::new(1.0, 1.25));
        let milli: Quantity<Complex<f64>, Milliampere> = total.convert();
        assert_eq!(milli.value(), Complex::new(1000.0, 1250.0));
    }

    #[test]
    fn test_dimensionless_interop() {
        let pct = Quantity::<f64, Percent>::new(50.0);
        assert_eq!(pct.to_scalar(), 0.5);
        assert!(pct == 0.5);
        assert!(pct < 0.6);
        assert_eq!(Quantity::<f64, Percent>::from_scalar(0.25).value(), 25.0);

        let ratio = Meters::new(6.0) / Meters::new(3.0);
        assert_eq!(f64::from(ratio), 2.0);
        let plain: Quantity<i32, Unitless> = 7.into();
        assert_eq!(plain.value(), 7);
    }

    #[test]
    fn test_increment_decrement_abs() {
        let mut t = Seconds::new(9);
        t.increment();
        t.increment();
        t.decrement();
        assert_eq!(t.value(), 10);
        assert_eq!(Seconds::new(-4.5).abs().value(), 4.5);
    }

    #[test]
    fn test_sum() {
        let total: Meters<i64> = (1..=4).map(Meters::new).sum();
        assert_eq!(total.value(), 10);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Quantity::<u32, Second>::default().value(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Meters::new(3).to_string(), "3m");
        assert_eq!(format!("{:.2}", Centimeters::new(1.5)), "1.50cm");
        assert_eq!((Meters::new(3) * Meters::new(6)).to_string(), "18m^2");
    }

    #[test]
    fn test_serde_keeps_raw_value_only() {
        #[derive(Serialize, Deserialize)]
        struct Span {
            length: Centimeters<i32>,
        }
        let text = toml::to_string(&Span { length: Centimeters::new(42) }).unwrap();
        assert_eq!(text.trim(), "length = 42");
        let back: Span = toml::from_str(&text).unwrap();
        assert_eq!(back.length.value(), 42);
    }
}
