//! Periodic angles that always stay inside one turn.
//!
//! [`AbsoluteAngle`] re-normalizes on construction and after every operation
//! that produces a value, so no un-normalized angle can be observed. With
//! `HALF = false` the live range is `[0, turn)`, with `HALF = true` it is
//! `[-turn/2, turn/2)`, where `turn` is 360 degrees expressed in the unit `U`.
//!
//! # Usage
//! ```
//! use phys_units_core::angle::{SignedAngle, WrappedAngle};
//! use phys_units_core::si::{Degree, Degrees};
//!
//! let heading = WrappedAngle::<i32, Degree>::new(350) + Degrees::new(30);
//! assert_eq!(heading.value(), 20);
//!
//! let bearing = SignedAngle::<i32, Degree>::new(270);
//! assert_eq!(bearing.value(), -90);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use tracing::trace;

use crate::quantity::Quantity;
use crate::ratio::Ratio;
use crate::scalar::{rescale, Promote, Scalar};
use crate::si::Degree;
use crate::unit::{ConvertFrom, Pair, Single, Unit};

/// One full turn expressed in unit `U`
struct FullTurn<U>(PhantomData<U>);

impl<U: Unit> FullTurn<U> {
    const IN_UNITS: Ratio = Ratio::integer(360).divided_by(U::SCALE);
}

/// Angle in unit `U`, normalized into `[0, turn)` or, with `HALF`, `[-turn/2, turn/2)`
#[derive(Clone, Copy)]
pub struct AbsoluteAngle<V, U = Degree, const HALF: bool = false> {
    value: V,
    unit: PhantomData<U>,
}

/// Angle kept in `[0, turn)`
pub type WrappedAngle<V, U> = AbsoluteAngle<V, U, false>;

/// Angle kept in `[-turn/2, turn/2)`
pub type SignedAngle<V, U> = AbsoluteAngle<V, U, true>;

/// Reduce `raw` into the live range of a `U` angle.
///
/// The modulo follows the raw type: truncating for integers, `fmod` for floats.
pub fn normalize<V: Scalar + PartialOrd, U: Unit, const HALF: bool>(raw: V) -> V {
    let () = Single::<U>::ANGLE;
    let turn = V::from_ratio(FullTurn::<U>::IN_UNITS);
    let zero = V::zero();
    let r = raw % turn;
    if HALF {
        let half = turn / (V::one() + V::one());
        if r >= half {
            r - turn
        } else if r + turn < half {
            r + turn
        } else {
            r
        }
    } else if r < zero {
        let wrapped = r + turn;
        // a tiny negative float can round up to a whole turn
        if wrapped >= turn {
            zero
        } else {
            wrapped
        }
    } else {
        r
    }
}

impl<V: Scalar + PartialOrd, U: Unit, const HALF: bool> AbsoluteAngle<V, U, HALF> {
    /// Angle at raw position `value`, normalized
    #[inline]
    pub fn new(value: V) -> Self {
        AbsoluteAngle {
            value: normalize::<V, U, HALF>(value),
            unit: PhantomData,
        }
    }

    /// Raw value, always inside the live range
    #[inline]
    pub const fn value(&self) -> V {
        self.value
    }

    /// Angle reached by turning `offset` away from zero
    #[inline]
    pub fn from_offset(offset: Quantity<V, U>) -> Self {
        Self::new(offset.value())
    }

    /// Rotation from zero to this angle, as a relative quantity
    #[inline]
    pub fn to_offset(self) -> Quantity<V, U> {
        Quantity::new(self.value)
    }

    /// Same direction in another unit and interval
    #[inline]
    pub fn convert<U2: Unit, const HALF2: bool>(self) -> AbsoluteAngle<V, U2, HALF2>
    where
        V: Promote<V>,
    {
        AbsoluteAngle::convert_from(self)
    }

    /// One full turn in this unit
    #[inline]
    pub fn full_turn() -> Quantity<V, U> {
        let () = Single::<U>::ANGLE;
        Quantity::new(V::from_ratio(FullTurn::<U>::IN_UNITS))
    }
}

impl<V: Scalar + PartialOrd, U: Unit, const HALF: bool> Default for AbsoluteAngle<V, U, HALF> {
    fn default() -> Self {
        Self::new(V::zero())
    }
}

impl<V: fmt::Debug, U: Unit, const HALF: bool> fmt::Debug for AbsoluteAngle<V, U, HALF> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbsoluteAngle")
            .field("value", &self.value)
            .field("unit", &U::descriptor())
            .field("half_interval", &HALF)
            .finish()
    }
}

impl<V: fmt::Display, U: Unit, const HALF: bool> fmt::Display for AbsoluteAngle<V, U, HALF> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_quantity(f, &self.value, U::SCALE, U::DIM)
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

impl<V, U, const HALF: bool, V2, U2, const HALF2: bool> ConvertFrom<AbsoluteAngle<V2, U2, HALF2>>
    for AbsoluteAngle<V, U, HALF>
where
    V: Scalar + PartialOrd,
    U: Unit,
    V2: Promote<V>,
    U2: Unit,
{
    fn convert_from(source: AbsoluteAngle<V2, U2, HALF2>) -> Self {
        let () = Pair::<U2, U>::SAME_DIMENSION;
        let ratio = Pair::<U2, U>::RATIO;
        trace!(from = %U2::descriptor(), to = %U::descriptor(), half = HALF, "converting angle");
        Self::new(rescale(source.value, ratio))
    }
}

impl<V, U, const HALF: bool, V2, U2> ConvertFrom<Quantity<V2, U2>> for AbsoluteAngle<V, U, HALF>
where
    V: Scalar + PartialOrd,
    U: Unit,
    V2: Promote<V>,
    U2: Unit,
{
    fn convert_from(source: Quantity<V2, U2>) -> Self {
        Self::from_offset(Quantity::convert_from(source))
    }
}

// ============================================================================
// COMPARISON (same unit and interval only)
// ============================================================================

impl<V: Scalar + PartialOrd, U: Unit, const HALF: bool> PartialEq for AbsoluteAngle<V, U, HALF> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Scalar + PartialOrd + Eq, U: Unit, const HALF: bool> Eq for AbsoluteAngle<V, U, HALF> {}

impl<V: Scalar + PartialOrd, U: Unit, const HALF: bool> PartialOrd for AbsoluteAngle<V, U, HALF> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<V: Scalar + Ord, U: Unit, const HALF: bool> Ord for AbsoluteAngle<V, U, HALF> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<V: Hash, U, const HALF: bool> Hash for AbsoluteAngle<V, U, HALF> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ============================================================================
// ARITHMETIC
// ============================================================================

impl<V: Scalar + PartialOrd, U: Unit, const HALF: bool> Sub for AbsoluteAngle<V, U, HALF> {
    type Output = Quantity<V, U>;

    /// Raw difference, not wrapped
    #[inline]
    fn sub(self, rhs: Self) -> Quantity<V, U> {
        Quantity::new(self.value - rhs.value)
    }
}

impl<V: Scalar + PartialOrd, U: Unit, U2: Unit, const HALF: bool> Add<Quantity<V, U2>> for AbsoluteAngle<V, U, HALF> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Quantity<V, U2>) -> Self {
        let () = Pair::<U, U2>::SAME_UNIT;
        Self::new(self.value + rhs.value())
    }
}

impl<V: Scalar + PartialOrd, U: Unit, U2: Unit, const HALF: bool> Sub<Quantity<V, U2>> for AbsoluteAngle<V, U, HALF> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Quantity<V, U2>) -> Self {
        let () = Pair::<U, U2>::SAME_UNIT;
        Self::new(self.value - rhs.value())
    }
}

impl<V: Scalar + PartialOrd, U: Unit, U2: Unit, const HALF: bool> AddAssign<Quantity<V, U2>>
    for AbsoluteAngle<V, U, HALF>
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V, U2>) {
        *self = *self + rhs;
    }
}

impl<V: Scalar + PartialOrd, U: Unit, U2: Unit, const HALF: bool> SubAssign<Quantity<V, U2>>
    for AbsoluteAngle<V, U, HALF>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V, U2>) {
        *self = *self - rhs;
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

impl<V: Serialize, U, const HALF: bool> Serialize for AbsoluteAngle<V, U, HALF> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, V: Scalar + PartialOrd + Deserialize<'de>, U: Unit, const HALF: bool> Deserialize<'de>
    for AbsoluteAngle<V, U, HALF>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        V::deserialize(deserializer).map(Self::new)
    }
}
