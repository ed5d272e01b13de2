//! Unit descriptors: zero-sized marker types carrying scale and dimension.
//!
//! A unit is any type implementing [`Unit`]. Its [`Unit::SCALE`] relates one raw
//! step to the SI-coherent unit of its [`Unit::DIM`]. Composite units
//! ([`Product`], [`Quotient`], [`Reciprocal`], [`SquareRoot`], [`CubeRoot`],
//! [`Scaled`]) derive both constants from their operands at compile time, so
//! `Meter * Meter` and a hand-declared square metre carry identical metadata.
//!
//! # Declaring units
//! ```
//! use phys_units_core::{unit, Dimension, Ratio, Unit};
//!
//! unit! {
//!     /// Nautical mile
//!     pub NauticalMile: Ratio::integer(1852), Dimension::LENGTH;
//! }
//!
//! assert_eq!(NauticalMile::SCALE, Ratio::integer(1852));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::ratio::Ratio;

/// Type-level unit: scale factor and dimension vector, no run-time data.
pub trait Unit: Copy + fmt::Debug + 'static {
    /// Multiplier relating one raw step to the coherent SI unit
    const SCALE: Ratio;

    /// Physical dimension
    const DIM: Dimension;

    /// Run-time copy of the metadata, for diagnostics and dynamic checks
    fn descriptor() -> UnitDescriptor {
        UnitDescriptor::new(Self::SCALE, Self::DIM)
    }
}

/// Declare marker types implementing [`Unit`].
///
/// Each entry is `visibility Name: scale, dimension;`, optionally preceded by
/// attributes and doc comments.
#[macro_export]
macro_rules! unit {
    ($( $(#[$meta:meta])* $vis:vis $name:ident : $scale:expr, $dim:expr; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::unit::Unit for $name {
                const SCALE: $crate::ratio::Ratio = $scale;
                const DIM: $crate::dimension::Dimension = $dim;
            }
        )*
    };
}

// ============================================================================
// COMPOSITE UNITS
// ============================================================================

/// `A · B`: scales multiply, exponents add
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Product<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Product<A, B> {
    const SCALE: Ratio = A::SCALE.times(B::SCALE);
    const DIM: Dimension = A::DIM.plus(B::DIM);
}

/// `A / B`: scales divide, exponents subtract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Quotient<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Quotient<A, B> {
    const SCALE: Ratio = A::SCALE.divided_by(B::SCALE);
    const DIM: Dimension = A::DIM.minus(B::DIM);
}

/// `1 / A`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reciprocal<A>(PhantomData<A>);

impl<A: Unit> Unit for Reciprocal<A> {
    const SCALE: Ratio = A::SCALE.reciprocal();
    const DIM: Dimension = A::DIM.negate();
}

/// `√A`. Only scales that are exact squares of a ratio can be rooted; any
/// other scale fails const evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareRoot<A>(PhantomData<A>);

impl<A: Unit> Unit for SquareRoot<A> {
    const SCALE: Ratio = A::SCALE.sqrt();
    const DIM: Dimension = A::DIM.divided_by_integer(2);
}

/// `∛A`, with the same restriction on scales as [`SquareRoot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CubeRoot<A>(PhantomData<A>);

impl<A: Unit> Unit for CubeRoot<A> {
    const SCALE: Ratio = A::SCALE.cbrt();
    const DIM: Dimension = A::DIM.divided_by_integer(3);
}

/// `A` rescaled by `NUM / DEN`, e.g. `Scaled<Meter, 1, 100>` is a centimetre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scaled<A, const NUM: i64, const DEN: i64>(PhantomData<A>);

impl<A: Unit, const NUM: i64, const DEN: i64> Unit for Scaled<A, NUM, DEN> {
    const SCALE: Ratio = A::SCALE.times(Ratio::new(NUM, DEN));
    const DIM: Dimension = A::DIM;
}

// ============================================================================
// COMPILE-TIME COMPATIBILITY CHECKS
// ============================================================================

/// Assertions over a pair of units. Referencing a constant forces its
/// evaluation when the surrounding generic function is instantiated, turning
/// an incompatible combination into a build error.
pub(crate) struct Pair<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Pair<A, B> {
    pub(crate) const SAME_DIMENSION: () = assert!(
        A::DIM.is_same(B::DIM),
        "dimension mismatch: the units measure different physical quantities"
    );

    /// Dimension is checked first so a dimension error reports as one
    pub(crate) const SAME_UNIT: () = {
        let () = Self::SAME_DIMENSION;
        assert!(
            A::SCALE.is_same(B::SCALE),
            "scale mismatch: operands share a dimension but not a scale, convert one of them explicitly"
        );
    };

    /// Factor turning a raw value in `A` into a raw value in `B`
    pub(crate) const RATIO: Ratio = A::SCALE.divided_by(B::SCALE);
}

/// Assertions over a single unit.
pub(crate) struct Single<A>(PhantomData<A>);

impl<A: Unit> Single<A> {
    pub(crate) const DIMENSIONLESS: () = assert!(
        A::DIM.is_dimensionless(),
        "only dimensionless quantities convert to and from bare numbers"
    );

    pub(crate) const ANGLE: () = assert!(
        A::DIM.is_same(Dimension::ANGLE),
        "angle operations require a unit of dimension angle¹"
    );

    pub(crate) const TIME: () = assert!(
        A::DIM.is_same(Dimension::TIME),
        "duration interchange requires a unit of dimension time¹"
    );

    pub(crate) const SQUARE_ROOTABLE: () = assert!(
        A::SCALE.checked_sqrt().is_some(),
        "unsupported root: the scale has no exact square root, convert to a coherent unit first"
    );

    pub(crate) const CUBE_ROOTABLE: () = assert!(
        A::SCALE.checked_cbrt().is_some(),
        "unsupported root: the scale has no exact cube root, convert to a coherent unit first"
    );
}

// ============================================================================
// CONVERSION ENTRY POINT
// ============================================================================

/// Explicit conversion between compatible quantity types.
///
/// Implemented by every quantity family for every source of the same family;
/// an incompatible dimension is rejected when the conversion is instantiated.
pub trait ConvertFrom<Source>: Sized {
    /// Build `Self` from `source`, rescaling its raw value
    fn convert_from(source: Source) -> Self;
}

/// Convert `source` into the explicitly requested `Target` type.
///
/// ```
/// use phys_units_core::si::{Centimeters, Meters};
/// use phys_units_core::unit_cast;
///
/// let m: Meters<i32> = unit_cast(Centimeters::new(1300));
/// assert_eq!(m.value(), 13);
/// ```
#[inline]
pub fn unit_cast<Target, Source>(source: Source) -> Target
where
    Target: ConvertFrom<Source>,
{
    Target::convert_from(source)
}

// ============================================================================
// RUN-TIME DESCRIPTOR
// ============================================================================

/// Scale and dimension of a unit as plain data.
///
/// Typed quantities never need this; it exists for code that only learns
/// about units at run time and therefore has to check them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitDescriptor {
    /// Multiplier relative to the coherent SI unit
    pub scale: Ratio,
    /// Dimension vector
    pub dim: Dimension,
}

impl UnitDescriptor {
    /// Descriptor from its parts
    pub const fn new(scale: Ratio, dim: Dimension) -> Self {
        Self { scale, dim }
    }

    /// True when both descriptors measure the same dimension
    pub fn is_compatible(&self, other: &UnitDescriptor) -> bool {
        self.dim.is_same(other.dim)
    }

    /// Factor turning a raw value in `self` into a raw value in `target`.
    ///
    /// # Errors
    /// [`UnitError::DimensionMismatch`] when the dimensions differ.
    pub fn conversion_to(&self, target: &UnitDescriptor) -> Result<Ratio, UnitError> {
        if !self.is_compatible(target) {
            debug!(from = %self, to = %target, "rejected conversion between dimensions");
            return Err(UnitError::DimensionMismatch {
                from: self.dim,
                to: target.dim,
            });
        }
        Ok(self.scale.divided_by(target.scale))
    }

    /// Descriptor of a product
    pub fn product(&self, other: &UnitDescriptor) -> UnitDescriptor {
        UnitDescriptor::new(self.scale.times(other.scale), self.dim.plus(other.dim))
    }

    /// Descriptor of a quotient
    pub fn quotient(&self, other: &UnitDescriptor) -> UnitDescriptor {
        UnitDescriptor::new(self.scale.divided_by(other.scale), self.dim.minus(other.dim))
    }

    /// Descriptor of a square root.
    ///
    /// # Errors
    /// [`UnitError::UnsupportedRoot`] when the scale has no exact square root.
    pub fn sqrt(&self) -> Result<UnitDescriptor, UnitError> {
        self.root(2, self.scale.checked_sqrt())
    }

    /// Descriptor of a cube root.
    ///
    /// # Errors
    /// [`UnitError::UnsupportedRoot`] when the scale has no exact cube root.
    pub fn cbrt(&self) -> Result<UnitDescriptor, UnitError> {
        self.root(3, self.scale.checked_cbrt())
    }

    fn root(&self, degree: u32, scale: Option<Ratio>) -> Result<UnitDescriptor, UnitError> {
        match scale {
            Some(scale) => Ok(UnitDescriptor::new(
                scale,
                self.dim.divided_by_integer(i64::from(degree)),
            )),
            None => {
                debug!(scale = %self.scale, degree, "rejected root of unsupported scale");
                Err(UnitError::UnsupportedRoot {
                    scale: self.scale,
                    degree,
                })
            }
        }
    }
}

impl fmt::Display for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::unit_symbol(self.scale, self.dim))
    }
}
