//! Predefined units, affine scales and convenience aliases.
//!
//! The coherent unit of every base dimension has scale 1. Plane angle is
//! measured in degrees, so [`Degree`] is the coherent angle unit and
//! [`Radian`] carries the rational scale [`RADIAN_SCALE`].
//!
//! # Usage
//! ```
//! use phys_units_core::si::{Meters, Seconds, SquareMeters};
//!
//! let side = Meters::new(3.0);
//! let area = side * Meters::new(6.0);
//! assert!(area == SquareMeters::new(18.0));
//! let speed = side / Seconds::new(2.0);
//! assert_eq!(speed.value(), 1.5);
//! ```

use std::marker::PhantomData;

use crate::absolute::{AbsoluteQuantity, AffineScale};
use crate::angle::AbsoluteAngle;
use crate::dimension::Dimension;
use crate::quantity::Quantity;
use crate::ratio::{Ratio, CENTI, DECI, KILO, MICRO, MILLI, NANO};
use crate::unit;

/// Degrees per radian as a rational (180·113/355, from π ≈ 355/113).
///
/// One full turn in radians is then exactly 710/113.
pub const RADIAN_SCALE: Ratio = Ratio::new(4068, 71);

const SPEED: Dimension = Dimension::LENGTH.minus(Dimension::TIME);
const ACCELERATION: Dimension = SPEED.minus(Dimension::TIME);
const FORCE: Dimension = Dimension::MASS.plus(ACCELERATION);
const ENERGY: Dimension = FORCE.plus(Dimension::LENGTH);
const POWER: Dimension = ENERGY.minus(Dimension::TIME);
const PRESSURE: Dimension = FORCE.minus(Dimension::LENGTH.times_integer(2));
const CHARGE: Dimension = Dimension::CURRENT.plus(Dimension::TIME);

// ============================================================================
// BASE UNITS
// ============================================================================

unit! {
    /// Metre
    pub Meter: Ratio::ONE, Dimension::LENGTH;
    /// Kilogram
    pub Kilogram: Ratio::ONE, Dimension::MASS;
    /// Second
    pub Second: Ratio::ONE, Dimension::TIME;
    /// Ampere
    pub Ampere: Ratio::ONE, Dimension::CURRENT;
    /// Kelvin (also the unit of temperature differences)
    pub Kelvin: Ratio::ONE, Dimension::TEMPERATURE;
    /// Mole
    pub Mole: Ratio::ONE, Dimension::AMOUNT;
    /// Candela
    pub Candela: Ratio::ONE, Dimension::LUMINOSITY;
    /// Degree of arc
    pub Degree: Ratio::ONE, Dimension::ANGLE;
    /// Pure number
    pub Unitless: Ratio::ONE, Dimension::NONE;
}

// ============================================================================
// DERIVED AND SCALED UNITS
// ============================================================================

unit! {
    /// Kilometre
    pub Kilometer: KILO, Dimension::LENGTH;
    /// Decimetre
    pub Decimeter: DECI, Dimension::LENGTH;
    /// Centimetre
    pub Centimeter: CENTI, Dimension::LENGTH;
    /// Millimetre
    pub Millimeter: MILLI, Dimension::LENGTH;
    /// Micrometre
    pub Micrometer: MICRO, Dimension::LENGTH;
    /// Square metre
    pub SquareMeter: Ratio::ONE, Dimension::LENGTH.times_integer(2);
    /// Cubic metre
    pub CubicMeter: Ratio::ONE, Dimension::LENGTH.times_integer(3);
    /// Litre
    pub Liter: MILLI, Dimension::LENGTH.times_integer(3);

    /// Gram
    pub Gram: MILLI, Dimension::MASS;
    /// Tonne
    pub Tonne: KILO, Dimension::MASS;

    /// Nanosecond
    pub Nanosecond: NANO, Dimension::TIME;
    /// Microsecond
    pub Microsecond: MICRO, Dimension::TIME;
    /// Millisecond
    pub Millisecond: MILLI, Dimension::TIME;
    /// Minute
    pub Minute: Ratio::integer(60), Dimension::TIME;
    /// Hour
    pub Hour: Ratio::integer(3600), Dimension::TIME;
    /// Day
    pub Day: Ratio::integer(86_400), Dimension::TIME;
    /// Hertz
    pub Hertz: Ratio::ONE, Dimension::TIME.negate();

    /// Metre per second
    pub MeterPerSecond: Ratio::ONE, SPEED;
    /// Kilometre per hour
    pub KilometerPerHour: Ratio::new(5, 18), SPEED;
    /// Metre per second squared
    pub MeterPerSecondSquared: Ratio::ONE, ACCELERATION;
    /// Newton
    pub Newton: Ratio::ONE, FORCE;
    /// Joule
    pub Joule: Ratio::ONE, ENERGY;
    /// Watt
    pub Watt: Ratio::ONE, POWER;
    /// Pascal
    pub Pascal: Ratio::ONE, PRESSURE;
    /// Coulomb
    pub Coulomb: Ratio::ONE, CHARGE;
    /// Volt
    pub Volt: Ratio::ONE, Dimension::VOLTAGE;
    /// Millivolt
    pub Millivolt: MILLI, Dimension::VOLTAGE;
    /// Kilovolt
    pub Kilovolt: KILO, Dimension::VOLTAGE;

    /// Degree Fahrenheit / Rankine step (5/9 K)
    pub Rankine: Ratio::new(5, 9), Dimension::TEMPERATURE;

    /// Minute of arc
    pub ArcMinute: Ratio::new(1, 60), Dimension::ANGLE;
    /// Second of arc
    pub ArcSecond: Ratio::new(1, 3600), Dimension::ANGLE;
    /// Radian
    pub Radian: RADIAN_SCALE, Dimension::ANGLE;
    /// Gradian (1/400 turn)
    pub Gradian: Ratio::new(9, 10), Dimension::ANGLE;
    /// Full turn
    pub Turn: Ratio::integer(360), Dimension::ANGLE;

    /// Percent
    pub Percent: CENTI, Dimension::NONE;
}

// ============================================================================
// AFFINE SCALES
// ============================================================================

/// Thermodynamic temperature, origin at absolute zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KelvinScale;

impl AffineScale for KelvinScale {
    type Delta = Kelvin;
    const OFFSET: Ratio = Ratio::ZERO;
}

/// Celsius temperature, origin at 273.15 K
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CelsiusScale;

impl AffineScale for CelsiusScale {
    type Delta = Kelvin;
    const OFFSET: Ratio = Ratio::new(27_315, 100);
}

/// Fahrenheit temperature, origin at 255.372… K (0 °F), steps of 5/9 K
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FahrenheitScale;

impl AffineScale for FahrenheitScale {
    type Delta = Rankine;
    const OFFSET: Ratio = Ratio::new(229_835, 900);
}

/// Rankine temperature, origin at absolute zero, steps of 5/9 K
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RankineScale;

impl AffineScale for RankineScale {
    type Delta = Rankine;
    const OFFSET: Ratio = Ratio::ZERO;
}

/// Points in time counted in `U` from a shared epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timeline<U>(PhantomData<U>);

impl<U: crate::unit::Unit> AffineScale for Timeline<U> {
    type Delta = U;
    const OFFSET: Ratio = Ratio::ZERO;
}

// ============================================================================
// ALIASES
// ============================================================================

/// Length in metres
pub type Meters<V> = Quantity<V, Meter>;
/// Length in kilometres
pub type Kilometers<V> = Quantity<V, Kilometer>;
/// Length in decimetres
pub type Decimeters<V> = Quantity<V, Decimeter>;
/// Length in centimetres
pub type Centimeters<V> = Quantity<V, Centimeter>;
/// Length in millimetres
pub type Millimeters<V> = Quantity<V, Millimeter>;
/// Area in square metres
pub type SquareMeters<V> = Quantity<V, SquareMeter>;
/// Volume in cubic metres
pub type CubicMeters<V> = Quantity<V, CubicMeter>;
/// Mass in kilograms
pub type Kilograms<V> = Quantity<V, Kilogram>;
/// Mass in grams
pub type Grams<V> = Quantity<V, Gram>;
/// Duration in seconds
pub type Seconds<V> = Quantity<V, Second>;
/// Duration in milliseconds
pub type Milliseconds<V> = Quantity<V, Millisecond>;
/// Duration in minutes
pub type Minutes<V> = Quantity<V, Minute>;
/// Duration in hours
pub type Hours<V> = Quantity<V, Hour>;
/// Frequency in hertz
pub type Frequency<V> = Quantity<V, Hertz>;
/// Speed in metres per second
pub type Velocity<V> = Quantity<V, MeterPerSecond>;
/// Electric potential in volts
pub type Volts<V> = Quantity<V, Volt>;
/// Temperature difference in kelvin
pub type KelvinDelta<V> = Quantity<V, Kelvin>;
/// Angle in degrees
pub type Degrees<V> = Quantity<V, Degree>;
/// Angle in minutes of arc
pub type ArcMinutes<V> = Quantity<V, ArcMinute>;
/// Angle in seconds of arc
pub type ArcSeconds<V> = Quantity<V, ArcSecond>;
/// Angle in radians
pub type Radians<V> = Quantity<V, Radian>;
/// Angle in full turns
pub type Turns<V> = Quantity<V, Turn>;
/// Pure number
pub type Dimensionless<V> = Quantity<V, Unitless>;

/// Absolute temperature in kelvin
pub type TemperatureKelvin<V> = AbsoluteQuantity<V, KelvinScale>;
/// Absolute temperature in degrees Celsius
pub type TemperatureCelsius<V> = AbsoluteQuantity<V, CelsiusScale>;
/// Absolute temperature in degrees Fahrenheit
pub type TemperatureFahrenheit<V> = AbsoluteQuantity<V, FahrenheitScale>;
/// Absolute temperature in degrees Rankine
pub type TemperatureRankine<V> = AbsoluteQuantity<V, RankineScale>;
/// Point in time counted in `U`
pub type Timestamp<V, U> = AbsoluteQuantity<V, Timeline<U>>;

/// Heading in `[0°, 360°)`
pub type Heading<V> = AbsoluteAngle<V, Degree, false>;
/// Bearing in `[-180°, 180°)`
pub type Bearing<V> = AbsoluteAngle<V, Degree, true>;
