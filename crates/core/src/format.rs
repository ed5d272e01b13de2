//! Human-readable unit symbols.
//!
//! A quantity renders as `<value><prefix><dimension>`: `3km`, `18m^2`,
//! `2.5m s^-1`. Scales without a metric prefix fall back to the literal
//! fraction, e.g. `1/60deg` for a minute of arc.

use std::fmt;

use crate::dimension::{BaseDimension, Dimension};
use crate::ratio::{
    Ratio, ATTO, CENTI, DECA, DECI, EXA, FEMTO, GIGA, HECTO, KILO, MEGA, MICRO, MILLI, NANO, PETA,
    PICO, TERA,
};

const PREFIXES: [(Ratio, &str); 16] = [
    (ATTO, "a"),
    (FEMTO, "f"),
    (PICO, "p"),
    (NANO, "n"),
    (MICRO, "u"),
    (MILLI, "m"),
    (CENTI, "c"),
    (DECI, "d"),
    (DECA, "da"),
    (HECTO, "h"),
    (KILO, "k"),
    (MEGA, "M"),
    (GIGA, "G"),
    (TERA, "T"),
    (PETA, "P"),
    (EXA, "E"),
];

/// Metric prefix for `scale`, empty for 1, `num/den` when no prefix matches
pub fn unit_prefix(scale: Ratio) -> String {
    if scale.is_one() {
        return String::new();
    }
    PREFIXES
        .iter()
        .find(|(ratio, _)| ratio.is_same(scale))
        .map_or_else(
            || format!("{}/{}", scale.num(), scale.den()),
            |(_, symbol)| (*symbol).to_string(),
        )
}

/// Base-unit symbols with exponents, e.g. `m s^-1` or `m^1/2`.
///
/// The volt combination (length² mass time⁻³ current⁻¹) renders as `V`.
/// A dimensionless vector renders as the empty string.
pub fn dimension_suffix(dim: Dimension) -> String {
    if dim.is_same(Dimension::VOLTAGE) {
        return "V".to_string();
    }
    let mut out = String::new();
    for base in BaseDimension::ALL {
        let exponent = dim.exponent(base);
        if exponent.is_zero() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(base.symbol());
        if !exponent.is_one() {
            out.push('^');
            out.push_str(&exponent.to_string());
        }
    }
    out
}

/// Prefix followed by dimension suffix
pub fn unit_symbol(scale: Ratio, dim: Dimension) -> String {
    let mut out = unit_prefix(scale);
    out.push_str(&dimension_suffix(dim));
    out
}

/// Write `value` honoring the caller's width/precision flags, then the unit.
pub(crate) fn write_quantity<V: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    value: &V,
    scale: Ratio,
    dim: Dimension,
) -> fmt::Result {
    fmt::Display::fmt(value, f)?;
    f.write_str(&unit_symbol(scale, dim))
}
