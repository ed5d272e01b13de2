//! Scaled-quantity algebra: arithmetic, conversions and the laws they obey
use phys_units_core::prelude::*;
use phys_units_core::{BaseDimension, Product, Quotient};
use approx::assert_relative_eq;
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

#[test]
fn test_basic_operations() {
    let a = Meters::new(3);
    let b = Meters::new(7);
    assert_eq!((a + b).value(), 10);
    assert_eq!((a - b).value(), -4);
    assert_eq!((b - a).value(), 4);
    assert_eq!((a * 4).value(), 12);
    assert_eq!((b / 7).value(), 1);
    assert_eq!((-a).value(), -3);
    assert!(a < b);
    assert!(a <= b);
    assert!(a != b);
    assert!(a == Meters::new(3));
    assert!(b >= a);
}

#[test]
fn test_simple_conversions() {
    let centimeters: Centimeters<i32> = unit_cast(Meters::new(4));
    assert_eq!(centimeters.value(), 400);
    let meters: Meters<i32> = unit_cast(Centimeters::new(1300));
    assert_eq!(meters.value(), 13);
}

#[test]
fn test_complex_conversions() {
    let a = Meters::new(3);
    let b = Meters::new(6);
    let c = a * b;
    assert_eq!(c.value(), 18);
    assert_eq!(c, SquareMeters::new(18));
    assert_eq!(c / a, b);
    assert!(b / a == 2);
    assert_eq!((b / 2).value(), 3);

    let s = Seconds::new(20.0_f64);
    let h = 1.0 / s;
    assert_relative_eq!(h.value(), 0.05);
    assert!(h == Frequency::new(0.05));
    assert_relative_eq!(f64::from(s * h), 1.0);
}

#[test]
fn test_mixed_raw_types() {
    let cm: Centimeters<i32> = unit_cast(Meters::new(1.5));
    assert_eq!(cm.value(), 150);
    assert!(cm == Centimeters::new(150.0_f64));
    assert!(Meters::new(1_u8) < Meters::new(1.25_f32));

    let fast = Quantity::<i32, KilometerPerHour>::new(500_000_000);
    assert_eq!(fast.convert::<MeterPerSecond>().value(), 138_888_888);
}

#[test]
fn test_complex_impedance() {
    let current = Quantity::<Complex<f64>, Ampere>::new(Complex::new(1.0, 0.5));
    let voltage = Quantity::<Complex<f64>, Volt>::new(Complex::new(230.0, 0.0));
    let impedance = voltage / current;
    assert_eq!(impedance.descriptor().dim, Volt::DIM.minus(Ampere::DIM));
    assert_relative_eq!(impedance.value().re, 184.0, epsilon = 1e-9);
    assert_relative_eq!(impedance.value().im, -92.0, epsilon = 1e-9);

    let mut scaled = current;
    scaled *= Complex::new(0.5, 1.0);
    assert_relative_eq!(scaled.value().norm(), 1.25, epsilon = 1e-12);
    assert_relative_eq!(scaled.value().arg(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert!(scaled != current);
}

#[test]
fn test_support_functions() {
    assert_eq!(Meters::new(-14).abs().value(), 14);
    assert_eq!((Meters::new(14) % Meters::new(4)).value(), 2);
}

#[test]
fn test_product_and_quotient_dimensions() {
    type Speed = Quotient<Meter, Second>;
    type Work = Product<Newton, Meter>;
    assert_eq!(Speed::DIM, MeterPerSecond::DIM);
    assert_eq!(Work::DIM, Joule::DIM);
    assert_eq!(Quotient::<Joule, Second>::DIM, Watt::DIM);
    assert_eq!(Quotient::<Watt, Ampere>::DIM, Volt::DIM);
    assert_eq!(
        Product::<Kilometer, Hour>::SCALE,
        Ratio::integer(3_600_000)
    );
    assert_eq!(Quotient::<Kilometer, Hour>::SCALE, KilometerPerHour::SCALE);
    assert_eq!(Speed::DIM.exponent(BaseDimension::Time), Ratio::integer(-1));
}

#[test]
fn test_unit_speed_conversion() {
    let kmh = Quantity::<f64, KilometerPerHour>::new(90.0);
    let ms: Velocity<f64> = kmh.convert();
    assert_relative_eq!(ms.value(), 25.0);
}

#[test]
fn test_display_strings() {
    assert_eq!(Kilometers::new(3).to_string(), "3km");
    assert_eq!(Volts::new(230).to_string(), "230V");
    assert_eq!(Quantity::<i32, Millivolt>::new(5).to_string(), "5mV");
    assert_eq!(Velocity::new(2.5).to_string(), "2.5m s^-1");
    assert_eq!(format!("{:.1}", Seconds::new(1.26)), "1.3s");
}

#[test]
fn test_addition_laws_hold_for_random_values() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..1_000 {
        let a = Meters::new(rng.random_range(-1_000_000_i64..1_000_000));
        let b = Meters::new(rng.random_range(-1_000_000_i64..1_000_000));
        assert_eq!((a + b) - b, a);
        assert_eq!(a + b, b + a);
    }
}

#[test]
fn test_conversion_round_trip_for_random_values() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let raw: f64 = rng.random_range(-1.0e6..1.0e6);
        let m = Meters::new(raw);
        let back = m.convert::<Millimeter>().convert::<Kilometer>().convert::<Meter>();
        assert_relative_eq!(back.value(), raw, max_relative = 1e-12);

        // integer values survive widening to a finer unit and back
        let whole = Meters::new(raw as i64);
        assert_eq!(whole.convert::<Centimeter>().convert::<Meter>(), whole);
    }
}

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let sides: Vec<Meters<f64>> = (1..=10_000).map(|i| Meters::new(f64::from(i) * 0.5)).collect();

    let area = |s: &Meters<f64>| -> SquareMeters<f64> { unit_cast(s.squared()) };
    let sequential: SquareMeters<f64> = sides.iter().map(area).sum();
    let parallel: SquareMeters<f64> = sides.par_iter().map(area).sum();

    assert_relative_eq!(parallel.value(), sequential.value(), max_relative = 1e-12);
}
