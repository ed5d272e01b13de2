//! Errors reported by the run-time descriptor API.
//!
//! Typed quantities reject incompatible operations while the program is being
//! built. [`UnitError`] covers the same taxonomy for code that inspects unit
//! descriptors dynamically (configuration, interchange, diagnostics).

use crate::dimension::Dimension;
use crate::ratio::Ratio;

/// Errors that can occur while combining unit descriptors at run time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Two dimension vectors that had to be identical differ
    DimensionMismatch {
        /// Dimension of the source operand
        from: Dimension,
        /// Dimension the operation required
        to: Dimension,
    },
    /// No exact root exists for the scale factor
    UnsupportedRoot {
        /// Scale factor that was rooted
        scale: Ratio,
        /// Root degree (2 or 3)
        degree: u32,
    },
    /// A ratio was built with a zero denominator
    ZeroDenominator {
        /// Numerator supplied alongside the zero denominator
        numerator: i64,
    },
    /// A value could not be represented as an external duration
    InvalidDuration(String),
}

impl std::fmt::Display for UnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitError::DimensionMismatch { from, to } => {
                write!(f, "Dimension mismatch: [{from}] is not [{to}]")
            }
            UnitError::UnsupportedRoot { scale, degree } => {
                write!(f, "Unsupported root: scale {scale} has no exact root of degree {degree}")
            }
            UnitError::ZeroDenominator { numerator } => {
                write!(f, "Zero denominator in ratio {numerator}/0")
            }
            UnitError::InvalidDuration(msg) => write!(f, "Invalid duration: {msg}"),
        }
    }
}

impl std::error::Error for UnitError {}
