//! Physical Units Core Library
//!
//! Dimensional analysis checked by the compiler. Every quantity carries a
//! raw number at run time and nothing else; its unit (a rational scale factor
//! and a vector of eight rational dimension exponents) lives in the type.
//!
//! ## Quantity families
//!
//! - [`Quantity`]: scaled values (lengths, durations, temperature
//!   differences). Arithmetic composes units, comparisons and `+`/`-` require
//!   identical units, conversions are explicit.
//! - [`AbsoluteQuantity`]: points on an affine scale (temperatures,
//!   timestamps). Point minus point is a [`Quantity`].
//! - [`AbsoluteAngle`]: angles kept inside one turn, either `[0, turn)` or
//!   `[-turn/2, turn/2)`.
//!
//! ## Example
//! ```
//! use phys_units_core::prelude::*;
//!
//! let distance = Kilometers::new(12.0);
//! let time = Minutes::new(30.0);
//! let speed: Velocity<f64> = unit_cast(distance / time);
//! assert!((speed.value() - 6.666_666).abs() < 1e-5);
//! ```

pub mod absolute;
pub mod angle;
pub mod dimension;
pub mod duration;
pub mod error;
pub mod format;
pub mod prelude;
pub mod quantity;
pub mod ratio;
pub mod roots;
pub mod scalar;
pub mod si;
pub mod trig;
pub mod unit;

// Re-export core types
pub use absolute::{AbsoluteQuantity, AffineScale};
pub use angle::{AbsoluteAngle, SignedAngle, WrappedAngle};
pub use dimension::{BaseDimension, Dimension};
pub use duration::DurationParts;
pub use error::UnitError;
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use scalar::{Promote, Real, Scalar};
pub use trig::Angular;
pub use unit::{
    unit_cast, ConvertFrom, CubeRoot, Product, Quotient, Reciprocal, Scaled, SquareRoot, Unit,
    UnitDescriptor,
};
