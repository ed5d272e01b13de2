//! Affine quantities: points on a scale with an origin.
//!
//! An [`AbsoluteQuantity`] is to its difference type what a timestamp is to a
//! duration. Points subtract to a difference, a difference moves a point, and
//! two points never add. The scale's [`AffineScale::OFFSET`] (position of the
//! scale's zero, in coherent units) only matters when converting between
//! scales.
//!
//! # Usage
//! ```
//! use phys_units_core::si::{TemperatureCelsius, TemperatureFahrenheit, TemperatureKelvin};
//! use phys_units_core::unit_cast;
//!
//! let zero = TemperatureKelvin::new(0.0);
//! let c: TemperatureCelsius<f64> = unit_cast(zero);
//! let f: TemperatureFahrenheit<f64> = unit_cast(zero);
//! assert!((c.value() + 273.15).abs() < 1e-9);
//! assert!((f.value() + 459.67).abs() < 1e-9);
//! ```
//!
//! Adding two points is rejected:
//! ```compile_fail
//! use phys_units_core::si::TemperatureCelsius;
//!
//! let _ = TemperatureCelsius::new(1.0) + TemperatureCelsius::new(2.0);
//! ```

use num_traits::Signed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use tracing::trace;

use crate::quantity::Quantity;
use crate::ratio::Ratio;
use crate::scalar::{rescale_affine, Promote, Scalar};
use crate::unit::{ConvertFrom, Pair, Unit};

/// Origin and step of an affine scale
pub trait AffineScale: Copy + fmt::Debug + 'static {
    /// Unit of differences between two points (also the step of the scale)
    type Delta: Unit;

    /// Where this scale's zero sits, in coherent units of `Delta`'s dimension
    const OFFSET: Ratio;
}

/// Compile-time parameters of a conversion from scale `A` to scale `B`
struct Shift<A, B>(PhantomData<(A, B)>);

impl<A: AffineScale, B: AffineScale> Shift<A, B> {
    const FACTOR: Ratio = Pair::<A::Delta, B::Delta>::RATIO;
    const OFFSET: Ratio = A::OFFSET.minus(B::OFFSET).divided_by(<B::Delta as Unit>::SCALE);
}

/// A point on scale `S`, raw value `V`
#[derive(Clone, Copy)]
pub struct AbsoluteQuantity<V, S> {
    value: V,
    scale: PhantomData<S>,
}

impl<V: Scalar, S: AffineScale> AbsoluteQuantity<V, S> {
    /// Point at raw position `value`
    #[inline]
    #[must_use]
    pub const fn new(value: V) -> Self {
        AbsoluteQuantity {
            value,
            scale: PhantomData,
        }
    }

    /// Raw position on the scale
    #[inline]
    pub const fn value(&self) -> V {
        self.value
    }

    /// Step forward by one raw unit
    #[inline]
    pub fn increment(&mut self) {
        self.value = self.value + V::one();
    }

    /// Step back by one raw unit
    #[inline]
    pub fn decrement(&mut self) {
        self.value = self.value - V::one();
    }

    /// Point mirrored to the non-negative side of the scale's zero
    #[inline]
    pub fn abs(self) -> Self
    where
        V: Signed,
    {
        Self::new(self.value.abs())
    }

    /// Same point expressed on scale `S2`
    #[inline]
    pub fn convert<S2: AffineScale>(self) -> AbsoluteQuantity<V, S2>
    where
        V: Promote<V>,
    {
        AbsoluteQuantity::convert_from(self)
    }

    /// Displacement from the scale's zero
    #[inline]
    pub fn since_origin(self) -> Quantity<V, S::Delta> {
        Quantity::new(self.value)
    }
}

impl<V: Scalar, S: AffineScale> Default for AbsoluteQuantity<V, S> {
    fn default() -> Self {
        Self::new(V::zero())
    }
}

impl<V: fmt::Debug, S: AffineScale> fmt::Debug for AbsoluteQuantity<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbsoluteQuantity")
            .field("value", &self.value)
            .field("scale", &std::any::type_name::<S>())
            .finish()
    }
}

impl<V: fmt::Display, S: AffineScale> fmt::Display for AbsoluteQuantity<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_quantity(
            f,
            &self.value,
            <S::Delta as Unit>::SCALE,
            <S::Delta as Unit>::DIM,
        )
    }
}

impl<V, S, V2, S2> ConvertFrom<AbsoluteQuantity<V2, S2>> for AbsoluteQuantity<V, S>
where
    V: Scalar,
    S: AffineScale,
    V2: Promote<V>,
    S2: AffineScale,
{
    fn convert_from(source: AbsoluteQuantity<V2, S2>) -> Self {
        let () = Pair::<S2::Delta, S::Delta>::SAME_DIMENSION;
        let factor = Shift::<S2, S>::FACTOR;
        let offset = Shift::<S2, S>::OFFSET;
        trace!(
            from = std::any::type_name::<S2>(),
            to = std::any::type_name::<S>(),
            %factor,
            %offset,
            "converting absolute quantity"
        );
        Self::new(rescale_affine(source.value, factor, offset))
    }
}

// ============================================================================
// COMPARISON (same scale only)
// ============================================================================

impl<V: Scalar, S: AffineScale> PartialEq for AbsoluteQuantity<V, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Scalar + Eq, S: AffineScale> Eq for AbsoluteQuantity<V, S> {}

impl<V: Scalar + PartialOrd, S: AffineScale> PartialOrd for AbsoluteQuantity<V, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<V: Scalar + Ord, S: AffineScale> Ord for AbsoluteQuantity<V, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<V: Hash, S> Hash for AbsoluteQuantity<V, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ============================================================================
// AFFINE ARITHMETIC
// ============================================================================

impl<V: Scalar, S: AffineScale> Sub for AbsoluteQuantity<V, S> {
    type Output = Quantity<V, S::Delta>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Quantity::new(self.value - rhs.value)
    }
}

impl<V: Scalar, S: AffineScale, U: Unit> Add<Quantity<V, U>> for AbsoluteQuantity<V, S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Quantity<V, U>) -> Self {
        let () = Pair::<U, S::Delta>::SAME_UNIT;
        Self::new(self.value + rhs.value())
    }
}

impl<V: Scalar, S: AffineScale, U: Unit> Sub<Quantity<V, U>> for AbsoluteQuantity<V, S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Quantity<V, U>) -> Self {
        let () = Pair::<U, S::Delta>::SAME_UNIT;
        Self::new(self.value - rhs.value())
    }
}

impl<V: Scalar, S: AffineScale, U: Unit> AddAssign<Quantity<V, U>> for AbsoluteQuantity<V, S> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V, U>) {
        *self = *self + rhs;
    }
}

impl<V: Scalar, S: AffineScale, U: Unit> SubAssign<Quantity<V, U>> for AbsoluteQuantity<V, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V, U>) {
        *self = *self - rhs;
    }
}

impl<V: Scalar, S: AffineScale, U: Unit> Add<AbsoluteQuantity<V, S>> for Quantity<V, U> {
    type Output = AbsoluteQuantity<V, S>;

    #[inline]
    fn add(self, rhs: AbsoluteQuantity<V, S>) -> AbsoluteQuantity<V, S> {
        rhs + self
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

impl<V: Serialize, S> Serialize for AbsoluteQuantity<V, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, V: Scalar + Deserialize<'de>, S: AffineScale> Deserialize<'de> for AbsoluteQuantity<V, S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        V::deserialize(deserializer).map(Self::new)
    }
}
