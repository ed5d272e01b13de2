//! Quantities embedded in TOML configuration, plus the descriptor error path
use phys_units_core::prelude::*;
use phys_units_core::{Dimension, UnitDescriptor};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct StationConfig {
    elevation: Meters<f64>,
    sample_period: Milliseconds<u32>,
    alarm_threshold: TemperatureCelsius<f64>,
    mast_heading: Heading<i32>,
    display_unit: UnitDescriptor,
}

const STATION: &str = r#"
elevation = 412.5
sample_period = 250
alarm_threshold = 45.0
mast_heading = 370

[display_unit]
scale = { num = 1, den = 1000 }
dim = [
    { num = 1, den = 1 },
    { num = 0, den = 1 },
    { num = 0, den = 1 },
    { num = 0, den = 1 },
    { num = 0, den = 1 },
    { num = 0, den = 1 },
    { num = 0, den = 1 },
    { num = 0, den = 1 },
]
"#;

#[test]
fn test_config_loads_typed_quantities() {
    init_tracing();
    let config: StationConfig = toml::from_str(STATION).unwrap();

    assert_eq!(config.elevation.value(), 412.5);
    assert_eq!(config.sample_period.to_std_duration().unwrap().as_millis(), 250);
    assert_eq!(config.mast_heading.value(), 10);
    assert_eq!(config.display_unit, Millimeter::descriptor());

    let kelvin: TemperatureKelvin<f64> = config.alarm_threshold.convert();
    assert!((kelvin.value() - 318.15).abs() < 1e-9);
}

#[test]
fn test_config_round_trip() {
    init_tracing();
    let config: StationConfig = toml::from_str(STATION).unwrap();
    let text = toml::to_string(&config).unwrap();
    let again: StationConfig = toml::from_str(&text).unwrap();
    assert_eq!(again, config);
}

#[test]
fn test_zero_denominator_is_rejected() {
    let text = STATION.replace("den = 1000", "den = 0");
    let err = toml::from_str::<StationConfig>(&text).unwrap_err();
    assert!(err.to_string().contains("Zero denominator"), "{err}");
}

#[test]
fn test_descriptor_checks_at_run_time() {
    init_tracing();
    let configured: UnitDescriptor = toml::from_str::<StationConfig>(STATION).unwrap().display_unit;

    let factor = Meter::descriptor().conversion_to(&configured).unwrap();
    assert_eq!(factor, Ratio::integer(1000));

    let err = Second::descriptor().conversion_to(&configured).unwrap_err();
    assert_eq!(
        err,
        UnitError::DimensionMismatch {
            from: Dimension::TIME,
            to: Dimension::LENGTH,
        }
    );
    assert_eq!(err.to_string(), "Dimension mismatch: [s] is not [m]");

    let odd_area = UnitDescriptor::new(Ratio::integer(360), Dimension::LENGTH.times_integer(2));
    assert!(matches!(odd_area.sqrt(), Err(UnitError::UnsupportedRoot { degree: 2, .. })));
}
