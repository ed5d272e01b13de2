//! Exact rational arithmetic for scale factors and dimension exponents.
//!
//! Every operation is a `const fn` so unit metadata can be combined by the
//! compiler while it checks a program. Values are kept reduced to lowest terms
//! with a positive denominator, which makes structural equality coincide with
//! cross-multiplied equality.
//!
//! # Usage
//! ```
//! use phys_units_core::ratio::Ratio;
//!
//! const CENTI: Ratio = Ratio::new(1, 100);
//! const PER_CM: Ratio = Ratio::ONE.divided_by(CENTI);
//! assert_eq!(PER_CM, Ratio::integer(100));
//! assert_eq!(Ratio::new(2, 4), Ratio::new(1, 2));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::UnitError;

// ============================================================================
// CONST HELPERS
// ============================================================================

const fn gcd(mut a: i128, mut b: i128) -> i128 {
    if a < 0 {
        a = -a;
    }
    if b < 0 {
        b = -b;
    }
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn pow(base: i128, exp: u32) -> i128 {
    let mut acc = 1;
    let mut i = 0;
    while i < exp {
        acc *= base;
        i += 1;
    }
    acc
}

/// Exact integer root of `value`, or `None` when `value` is not a perfect power.
const fn exact_root(value: i64, degree: u32) -> Option<i64> {
    if value < 0 {
        if degree % 2 == 0 || value == i64::MIN {
            return None;
        }
        return match exact_root(-value, degree) {
            Some(root) => Some(-root),
            None => None,
        };
    }
    // Upper bounds keep `mid^degree` inside i128
    let mut lo: i128 = 0;
    let mut hi: i128 = if degree <= 2 { 3_037_000_500 } else { 2_097_152 };
    let target = value as i128;
    while lo <= hi {
        let mid = (lo + hi) / 2;
        let p = pow(mid, degree);
        if p == target {
            return Some(mid as i64);
        }
        if p < target {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }
    None
}

// ============================================================================
// RATIO
// ============================================================================

/// A rational number `num / den` in lowest terms with `den > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RatioParts")]
pub struct Ratio {
    num: i64,
    den: i64,
}

/// Unvalidated wire form of a [`Ratio`].
#[derive(Debug, Clone, Copy, Deserialize)]
struct RatioParts {
    num: i64,
    den: i64,
}

impl TryFrom<RatioParts> for Ratio {
    type Error = UnitError;

    fn try_from(parts: RatioParts) -> Result<Self, Self::Error> {
        Ratio::try_new(parts.num, parts.den)
    }
}

impl Ratio {
    /// 0/1
    pub const ZERO: Ratio = Ratio { num: 0, den: 1 };
    /// 1/1
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Create a reduced ratio. Asserts `den != 0`.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "Ratio::new: denominator must not be zero");
        Self::reduce(num as i128, den as i128)
    }

    /// Fallible constructor for ratios read at run time.
    ///
    /// # Errors
    /// [`UnitError::ZeroDenominator`] when `den` is zero.
    pub fn try_new(num: i64, den: i64) -> Result<Self, UnitError> {
        if den == 0 {
            return Err(UnitError::ZeroDenominator { numerator: num });
        }
        Ok(Self::reduce(i128::from(num), i128::from(den)))
    }

    /// Whole number `n/1`.
    #[inline]
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Ratio { num: n, den: 1 }
    }

    const fn reduce(num: i128, den: i128) -> Self {
        if num == 0 {
            return Self::ZERO;
        }
        let g = gcd(num, den);
        let mut n = num / g;
        let mut d = den / g;
        if d < 0 {
            n = -n;
            d = -d;
        }
        assert!(
            n >= i64::MIN as i128 && n <= i64::MAX as i128 && d <= i64::MAX as i128,
            "Ratio: result does not fit in 64-bit numerator/denominator"
        );
        Ratio {
            num: n as i64,
            den: d as i64,
        }
    }

    /// Numerator (carries the sign)
    #[inline]
    pub const fn num(self) -> i64 {
        self.num
    }

    /// Denominator (always positive)
    #[inline]
    pub const fn den(self) -> i64 {
        self.den
    }

    /// Sum of two ratios
    pub const fn plus(self, rhs: Ratio) -> Ratio {
        Self::reduce(
            self.num as i128 * rhs.den as i128 + rhs.num as i128 * self.den as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Difference of two ratios
    pub const fn minus(self, rhs: Ratio) -> Ratio {
        self.plus(rhs.negate())
    }

    /// Product of two ratios
    pub const fn times(self, rhs: Ratio) -> Ratio {
        Self::reduce(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Quotient of two ratios. Asserts the divisor is non-zero.
    #[track_caller]
    pub const fn divided_by(self, rhs: Ratio) -> Ratio {
        assert!(rhs.num != 0, "Ratio::divided_by: division by a zero ratio");
        Self::reduce(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        )
    }

    /// `-self`
    pub const fn negate(self) -> Ratio {
        Ratio {
            num: -self.num,
            den: self.den,
        }
    }

    /// `1 / self`
    #[track_caller]
    pub const fn reciprocal(self) -> Ratio {
        Self::ONE.divided_by(self)
    }

    /// Cross-multiplied equality, usable in const contexts.
    pub const fn is_same(self, rhs: Ratio) -> bool {
        self.num as i128 * rhs.den as i128 == rhs.num as i128 * self.den as i128
    }

    /// True for 0
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// True for 1
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// True when the denominator is 1
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Exact square root, if numerator and denominator are both perfect squares.
    pub const fn checked_sqrt(self) -> Option<Ratio> {
        match (exact_root(self.num, 2), exact_root(self.den, 2)) {
            (Some(num), Some(den)) => Some(Ratio { num, den }),
            _ => None,
        }
    }

    /// Exact cube root, if numerator and denominator are both perfect cubes.
    pub const fn checked_cbrt(self) -> Option<Ratio> {
        match (exact_root(self.num, 3), exact_root(self.den, 3)) {
            (Some(num), Some(den)) => Some(Ratio { num, den }),
            _ => None,
        }
    }

    /// Exact square root. Asserts the ratio is a square of a ratio.
    #[track_caller]
    pub const fn sqrt(self) -> Ratio {
        match self.checked_sqrt() {
            Some(root) => root,
            None => panic!("Ratio::sqrt: scale is not a perfect square ratio"),
        }
    }

    /// Exact cube root. Asserts the ratio is a cube of a ratio.
    #[track_caller]
    pub const fn cbrt(self) -> Ratio {
        match self.checked_cbrt() {
            Some(root) => root,
            None => panic!("Ratio::cbrt: scale is not a perfect cube ratio"),
        }
    }

    /// Nearest `f64` value
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ONE
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        (i128::from(self.num) * i128::from(other.den))
            .cmp(&(i128::from(other.num) * i128::from(self.den)))
    }
}

impl Add for Ratio {
    type Output = Ratio;
    fn add(self, rhs: Ratio) -> Ratio {
        self.plus(rhs)
    }
}

impl Sub for Ratio {
    type Output = Ratio;
    fn sub(self, rhs: Ratio) -> Ratio {
        self.minus(rhs)
    }
}

impl Mul for Ratio {
    type Output = Ratio;
    fn mul(self, rhs: Ratio) -> Ratio {
        self.times(rhs)
    }
}

impl Div for Ratio {
    type Output = Ratio;
    fn div(self, rhs: Ratio) -> Ratio {
        self.divided_by(rhs)
    }
}

impl Neg for Ratio {
    type Output = Ratio;
    fn neg(self) -> Ratio {
        self.negate()
    }
}

impl From<i64> for Ratio {
    fn from(n: i64) -> Self {
        Ratio::integer(n)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// ============================================================================
// METRIC PREFIXES
// ============================================================================

/// 10^-18
pub const ATTO: Ratio = Ratio::new(1, 1_000_000_000_000_000_000);
/// 10^-15
pub const FEMTO: Ratio = Ratio::new(1, 1_000_000_000_000_000);
/// 10^-12
pub const PICO: Ratio = Ratio::new(1, 1_000_000_000_000);
/// 10^-9
pub const NANO: Ratio = Ratio::new(1, 1_000_000_000);
/// 10^-6
pub const MICRO: Ratio = Ratio::new(1, 1_000_000);
/// 10^-3
pub const MILLI: Ratio = Ratio::new(1, 1_000);
/// 10^-2
pub const CENTI: Ratio = Ratio::new(1, 100);
/// 10^-1
pub const DECI: Ratio = Ratio::new(1, 10);
/// 10^1
pub const DECA: Ratio = Ratio::integer(10);
/// 10^2
pub const HECTO: Ratio = Ratio::integer(100);
/// 10^3
pub const KILO: Ratio = Ratio::integer(1_000);
/// 10^6
pub const MEGA: Ratio = Ratio::integer(1_000_000);
/// 10^9
pub const GIGA: Ratio = Ratio::integer(1_000_000_000);
/// 10^12
pub const TERA: Ratio = Ratio::integer(1_000_000_000_000);
/// 10^15
pub const PETA: Ratio = Ratio::integer(1_000_000_000_000_000);
/// 10^18
pub const EXA: Ratio = Ratio::integer(1_000_000_000_000_000_000);

// ============================================================================
// TESTS
// ============================================================================
