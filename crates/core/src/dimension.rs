//! Dimension vectors: eight rational exponents over the base dimensions.
//!
//! A [`Dimension`] only ever exists as an associated constant of a unit type;
//! quantities never store one at run time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ratio::Ratio;

/// The eight base dimensions, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BaseDimension {
    /// Length (metre)
    Length,
    /// Mass (kilogram)
    Mass,
    /// Time (second)
    Time,
    /// Electric current (ampere)
    Current,
    /// Thermodynamic temperature (kelvin)
    Temperature,
    /// Amount of substance (mole)
    Amount,
    /// Luminous intensity (candela)
    Luminosity,
    /// Plane angle (degree)
    Angle,
}

impl BaseDimension {
    /// All base dimensions in vector order
    pub const ALL: [BaseDimension; 8] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::Luminosity,
        BaseDimension::Angle,
    ];

    /// Position inside a [`Dimension`] vector
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the coherent base unit
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::Luminosity => "cd",
            BaseDimension::Angle => "deg",
        }
    }
}

/// Exponent vector identifying the physical shape of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension {
    exponents: [Ratio; 8],
}

impl Dimension {
    /// All exponents zero (pure number)
    pub const NONE: Dimension = Dimension {
        exponents: [Ratio::ZERO; 8],
    };
    /// length¹
    pub const LENGTH: Dimension = Dimension::base(BaseDimension::Length);
    /// mass¹
    pub const MASS: Dimension = Dimension::base(BaseDimension::Mass);
    /// time¹
    pub const TIME: Dimension = Dimension::base(BaseDimension::Time);
    /// current¹
    pub const CURRENT: Dimension = Dimension::base(BaseDimension::Current);
    /// temperature¹
    pub const TEMPERATURE: Dimension = Dimension::base(BaseDimension::Temperature);
    /// amount¹
    pub const AMOUNT: Dimension = Dimension::base(BaseDimension::Amount);
    /// luminosity¹
    pub const LUMINOSITY: Dimension = Dimension::base(BaseDimension::Luminosity);
    /// angle¹
    pub const ANGLE: Dimension = Dimension::base(BaseDimension::Angle);
    /// length²·mass·time⁻³·current⁻¹ (volt)
    pub const VOLTAGE: Dimension = Dimension::from_integers([2, 1, -3, -1, 0, 0, 0, 0]);

    /// Single base dimension with exponent 1
    pub const fn base(base: BaseDimension) -> Self {
        Self::NONE.with(base, Ratio::ONE)
    }

    /// Build from whole-number exponents in vector order
    pub const fn from_integers(exponents: [i64; 8]) -> Self {
        let mut out = [Ratio::ZERO; 8];
        let mut i = 0;
        while i < 8 {
            out[i] = Ratio::integer(exponents[i]);
            i += 1;
        }
        Dimension { exponents: out }
    }

    /// Build from rational exponents in vector order
    pub const fn from_exponents(exponents: [Ratio; 8]) -> Self {
        Dimension { exponents }
    }

    /// Copy with one exponent replaced
    pub const fn with(self, base: BaseDimension, exponent: Ratio) -> Self {
        let mut out = self.exponents;
        out[base.index()] = exponent;
        Dimension { exponents: out }
    }

    /// Exponent of one base dimension
    pub const fn exponent(self, base: BaseDimension) -> Ratio {
        self.exponents[base.index()]
    }

    /// All exponents in vector order
    pub const fn exponents(self) -> [Ratio; 8] {
        self.exponents
    }

    /// Component-wise sum (dimension of a product)
    pub const fn plus(self, rhs: Dimension) -> Dimension {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 8 {
            out[i] = out[i].plus(rhs.exponents[i]);
            i += 1;
        }
        Dimension { exponents: out }
    }

    /// Component-wise difference (dimension of a quotient)
    pub const fn minus(self, rhs: Dimension) -> Dimension {
        self.plus(rhs.negate())
    }

    /// Component-wise negation (dimension of a reciprocal)
    pub const fn negate(self) -> Dimension {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 8 {
            out[i] = out[i].negate();
            i += 1;
        }
        Dimension { exponents: out }
    }

    /// Every exponent divided by `n` (dimension of an n-th root)
    #[track_caller]
    pub const fn divided_by_integer(self, n: i64) -> Dimension {
        let divisor = Ratio::integer(n);
        let mut out = self.exponents;
        let mut i = 0;
        while i < 8 {
            out[i] = out[i].divided_by(divisor);
            i += 1;
        }
        Dimension { exponents: out }
    }

    /// Every exponent multiplied by `n` (dimension of an n-th power)
    pub const fn times_integer(self, n: i64) -> Dimension {
        let factor = Ratio::integer(n);
        let mut out = self.exponents;
        let mut i = 0;
        while i < 8 {
            out[i] = out[i].times(factor);
            i += 1;
        }
        Dimension { exponents: out }
    }

    /// Exact component-wise equality, usable in const contexts
    pub const fn is_same(self, rhs: Dimension) -> bool {
        let mut i = 0;
        while i < 8 {
            if !self.exponents[i].is_same(rhs.exponents[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True when every exponent is zero
    pub const fn is_dimensionless(self) -> bool {
        self.is_same(Self::NONE)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::NONE
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            f.write_str("1")
        } else {
            f.write_str(&crate::format::dimension_suffix(*self))
        }
    }
}
