//! Interchange between time quantities and external durations.
//!
//! [`DurationParts`] is the exact form: a raw count plus the period of one
//! count in seconds. [`std::time::Duration`] is supported on top of it for
//! code that talks to the standard library.
//!
//! ```
//! use phys_units_core::si::{Milliseconds, Seconds};
//!
//! let parts = Milliseconds::new(1500_i64).to_duration_parts();
//! assert_eq!(parts.count, 1500);
//!
//! let secs = Seconds::<i64>::from_duration_parts(parts);
//! assert_eq!(secs.value(), 1);
//!
//! let d = Milliseconds::new(1500.0).to_std_duration().unwrap();
//! assert_eq!(d.as_millis(), 1500);
//! ```

use num_traits::{cast, NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

use crate::error::UnitError;
use crate::quantity::Quantity;
use crate::ratio::{Ratio, NANO};
use crate::scalar::{rescale, Promote, Scalar};
use crate::unit::{Single, Unit};

/// A raw tick count and the length of one tick in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationParts<V> {
    /// Number of ticks
    pub count: V,
    /// Seconds per tick
    pub period: Ratio,
}

impl<V: Scalar, U: Unit> Quantity<V, U> {
    /// Count and period of this time quantity, without any rescaling
    pub fn to_duration_parts(self) -> DurationParts<V> {
        let () = Single::<U>::TIME;
        DurationParts {
            count: self.value(),
            period: U::SCALE,
        }
    }

    /// Time quantity from a count with an arbitrary period.
    ///
    /// Integer raw types truncate toward zero when the period does not divide
    /// evenly into `U`.
    pub fn from_duration_parts(parts: DurationParts<V>) -> Self
    where
        V: Promote<V>,
    {
        let () = Single::<U>::TIME;
        let ratio = parts.period.divided_by(U::SCALE);
        trace!(period = %parts.period, unit = %U::descriptor(), %ratio, "importing duration");
        Self::new(rescale(parts.count, ratio))
    }

    /// Time quantity from a count whose period already matches `U`
    pub fn from_duration_count(count: V) -> Self {
        let () = Single::<U>::TIME;
        Self::new(count)
    }

    /// Convert into a standard library duration.
    ///
    /// # Errors
    /// [`UnitError::InvalidDuration`] for negative, non-finite or overflowing values.
    pub fn to_std_duration(self) -> Result<Duration, UnitError>
    where
        V: ToPrimitive,
    {
        let () = Single::<U>::TIME;
        let count = self
            .value()
            .to_f64()
            .ok_or_else(|| UnitError::InvalidDuration("count is not representable as f64".to_string()))?;
        let seconds = count * U::SCALE.num() as f64 / U::SCALE.den() as f64;
        trace!(seconds, unit = %U::descriptor(), "exporting duration");
        Duration::try_from_secs_f64(seconds).map_err(|err| UnitError::InvalidDuration(err.to_string()))
    }

    /// Convert from a standard library duration.
    ///
    /// The whole part is computed exactly in nanoseconds; float raw types keep
    /// the fractional remainder, integer raw types truncate it.
    ///
    /// # Errors
    /// [`UnitError::InvalidDuration`] when the value does not fit in `V`.
    pub fn from_std_duration(duration: Duration) -> Result<Self, UnitError>
    where
        V: NumCast,
    {
        let () = Single::<U>::TIME;
        let ratio = NANO.divided_by(U::SCALE);
        let overflow = || UnitError::InvalidDuration(format!("{duration:?} does not fit the raw type"));

        let nanos = i128::try_from(duration.as_nanos()).map_err(|_| overflow())?;
        let scaled = nanos.checked_mul(<i128 as From<i64>>::from(ratio.num())).ok_or_else(overflow)?;
        let den = <i128 as From<i64>>::from(ratio.den());
        let whole: V = cast(scaled / den).ok_or_else(overflow)?;
        // below one tick; integer casts drop it
        let fraction: V = cast((scaled % den) as f64 / den as f64).ok_or_else(overflow)?;
        trace!(?duration, unit = %U::descriptor(), "importing std duration");
        Ok(Self::new(whole + fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{Hours, Microsecond, Millisecond, Milliseconds, Minute, Minutes, Nanosecond, Second, Seconds};
    use approx::assert_relative_eq;

    #[test]
    fn test_parts_round_trip_keeps_count() {
        let s = Seconds::new(1_i32);
        let parts = s.to_duration_parts();
        assert_eq!(parts, DurationParts { count: 1, period: Ratio::ONE });
        assert_eq!(Seconds::<i32>::from_duration_parts(parts), s);
    }

    #[test]
    fn test_parts_with_other_period() {
        let parts = DurationParts {
            count: 90_i64,
            period: Ratio::integer(60),
        };
        assert_eq!(Seconds::<i64>::from_duration_parts(parts).value(), 5400);
        assert_eq!(Hours::<i64>::from_duration_parts(parts).value(), 1);
        assert_relative_eq!(Hours::<f64>::from_duration_parts(DurationParts { count: 90.0, period: Ratio::integer(60) }).value(), 1.5);
    }

    #[test]
    fn test_count_constructor() {
        assert_eq!(Minutes::from_duration_count(3_u32).value(), 3);
    }

    #[test]
    fn test_std_duration_export() {
        let d = Milliseconds::new(2500_u64).to_std_duration().unwrap();
        assert_eq!(d, Duration::from_millis(2500));
        let d = Minutes::new(2.0).to_std_duration().unwrap();
        assert_eq!(d, Duration::from_secs(120));
    }

    #[test]
    fn test_std_duration_rejects_negative() {
        let err = Seconds::new(-1.0).to_std_duration().unwrap_err();
        assert!(matches!(err, UnitError::InvalidDuration(_)));
    }

    #[test]
    fn test_std_duration_import() {
        let d = Duration::from_micros(1_500_250);
        let ms = Quantity::<i64, Millisecond>::from_std_duration(d).unwrap();
        assert_eq!(ms.value(), 1500);
        let ms = Quantity::<f64, Millisecond>::from_std_duration(d).unwrap();
        assert_relative_eq!(ms.value(), 1500.25);
        let us = Quantity::<u64, Microsecond>::from_std_duration(d).unwrap();
        assert_eq!(us.value(), 1_500_250);
        let ns = Quantity::<i64, Nanosecond>::from_std_duration(d).unwrap();
        assert_eq!(ns.value(), 1_500_250_000);
        let s = Quantity::<f32, Second>::from_std_duration(Duration::from_millis(250)).unwrap();
        assert_relative_eq!(s.value(), 0.25);
    }

    #[test]
    fn test_std_duration_import_overflow() {
        let err = Quantity::<u8, Second>::from_std_duration(Duration::from_secs(1000)).unwrap_err();
        assert!(matches!(err, UnitError::InvalidDuration(_)));
    }

    #[test]
    fn test_parts_import_does_not_overflow_narrow_count() {
        // 90 s ticks in minutes is a factor of 3/2; count * 3 exceeds u32
        let parts = DurationParts {
            count: 2_000_000_000_u32,
            period: Ratio::integer(90),
        };
        assert_eq!(Quantity::<u32, Minute>::from_duration_parts(parts).value(), 3_000_000_000);
    }

    #[test]
    fn test_std_duration_import_sub_second_periods() {
        let d = Duration::new(3, 250_000_000);
        let ms = Quantity::<i32, Millisecond>::from_std_duration(d).unwrap();
        assert_eq!(ms.value(), 3250);
        let min = Quantity::<f64, Minute>::from_std_duration(Duration::from_secs(90)).unwrap();
        assert_relative_eq!(min.value(), 1.5);
    }

    #[test]
    fn test_millisecond_parts_round_trip() {
        let original = Milliseconds::new(7_i64);
        let external = original.to_duration_parts();
        let back = Milliseconds::<i64>::from_duration_parts(external);
        assert_eq!(back, original);
    }
}
