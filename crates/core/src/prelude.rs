//! Glob-importable set of the commonly used items.

pub use crate::absolute::{AbsoluteQuantity, AffineScale};
pub use crate::angle::{AbsoluteAngle, SignedAngle, WrappedAngle};
pub use crate::dimension::Dimension;
pub use crate::error::UnitError;
pub use crate::quantity::Quantity;
pub use crate::ratio::Ratio;
pub use crate::si::*;
pub use crate::trig::Angular;
pub use crate::unit::{unit_cast, ConvertFrom, Unit};
