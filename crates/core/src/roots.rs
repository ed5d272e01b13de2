//! Powers and roots of scaled quantities.
//!
//! Rooting a quantity roots its unit too: every dimension exponent is divided
//! by the degree and the scale factor must have an exact rational root.
//! Scales such as 360 (no exact square root) are rejected when the call is
//! compiled; convert to a rootable unit first.
//!
//! ```
//! use phys_units_core::si::{Meters, SquareMeters};
//!
//! let side = SquareMeters::new(49.0).sqrt();
//! assert!(side == Meters::new(7.0));
//! ```
//!
//! ```compile_fail
//! use phys_units_core::{unit, Dimension, Quantity, Ratio};
//!
//! unit! {
//!     /// Area with a scale that has no exact root
//!     pub OddArea: Ratio::integer(360), Dimension::LENGTH.times_integer(2);
//! }
//!
//! let _ = Quantity::<f64, OddArea>::new(4.0).sqrt();
//! ```

use num_traits::Float;

use crate::quantity::Quantity;
use crate::scalar::{Real, Scalar};
use crate::unit::{CubeRoot, Product, Single, SquareRoot, Unit};

impl<V: Scalar, U: Unit> Quantity<V, U> {
    /// `self * self`
    #[inline]
    pub fn squared(self) -> Quantity<V, Product<U, U>> {
        self * self
    }

    /// `self * self * self`
    #[inline]
    pub fn cubed(self) -> Quantity<V, Product<Product<U, U>, U>> {
        self * self * self
    }
}

impl<V: Real, U: Unit> Quantity<V, U> {
    /// Square root; dimension exponents halve, scale takes its exact root
    #[inline]
    pub fn sqrt(self) -> Quantity<V::Float, SquareRoot<U>> {
        let () = Single::<U>::SQUARE_ROOTABLE;
        Quantity::new(self.value().to_float().sqrt())
    }

    /// Cube root; dimension exponents divide by three, scale takes its exact root
    #[inline]
    pub fn cbrt(self) -> Quantity<V::Float, CubeRoot<U>> {
        let () = Single::<U>::CUBE_ROOTABLE;
        Quantity::new(self.value().to_float().cbrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{BaseDimension, Dimension};
    use crate::ratio::Ratio;
    use crate::si::{
        CubicMeters, Decimeter, Decimeters, Meter, Meters, Second, SquareMeter, SquareMeters,
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_square_then_root_round_trip() {
        let side = Meters::new(7.0);
        let back = side.squared().sqrt();
        assert_relative_eq!(back.value(), 7.0);
        assert_eq!(back, side);
    }

    #[test]
    fn test_integer_raw_roots_to_float() {
        let area = SquareMeters::new(49_i32);
        let side: Meters<f64> = crate::unit_cast(area.sqrt());
        assert_eq!(side.value(), 7.0);
    }

    #[test]
    fn test_scaled_unit_roots() {
        let area = Decimeters::new(3.0).squared();
        assert_eq!(area.descriptor().scale, Ratio::new(1, 100));
        let side = area.sqrt();
        assert_eq!(side.descriptor().scale, Ratio::new(1, 10));
        assert_relative_eq!(side.value(), 3.0);
        let _: Quantity<f64, Decimeter> = crate::unit_cast(side);
    }

    #[test]
    fn test_cube_root() {
        let volume = CubicMeters::new(27.0);
        let side = volume.cbrt();
        assert_relative_eq!(side.value(), 3.0);
        assert_eq!(side.descriptor().dim, Meter::DIM);
        assert_relative_eq!(Meters::new(2.0).cubed().value(), 8.0);
    }

    #[test]
    fn test_fractional_exponents() {
        let root_second = Quantity::<f64, Second>::new(16.0).sqrt();
        assert_eq!(root_second.descriptor().dim.exponent(BaseDimension::Time), Ratio::new(1, 2));
        assert_relative_eq!(root_second.value(), 4.0);
        let squared_back = root_second * root_second;
        assert_eq!(squared_back.descriptor().dim, Dimension::TIME);
        assert_eq!(SquareMeter::DIM, Meter::DIM.times_integer(2));
    }
}
