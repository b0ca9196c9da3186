//! Integration tests for the unit algebra
//!
//! End-to-end scenarios through the public API: derived units, conversion,
//! arithmetic across scales, naming and best-fit display.

use std::cmp::Ordering;

use compound_units::units::prelude::*;
use compound_units::units::tolerance::EPSILON;
use compound_units::UnitsConfig;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-10
}

// ============================================================================
// Compound units
// ============================================================================

#[test]
fn test_power_equals_self_multiplication() {
    let m = si::meter();
    assert_eq!(m.power(2.0), m.multiply(&m));
    assert!(m.power(2.0).is_same_dimension(&m.multiply(&m)));
}

#[test]
fn test_definitional_power_length() {
    let dms = CompoundUnit::derive(&si::meter().power(2.0), 2.0, "DMS", "double square meter").unwrap();
    assert!((si::meter().power(2.0).length() * 2.0 - dms.length()).abs() < EPSILON);

    let ddms = CompoundUnit::derive(&si::decimeter().power(2.0), 2.0, "DDMS", "double square decimeter")
        .unwrap();
    assert!((si::decimeter().power(2.0).length() * 2.0 - ddms.length()).abs() < EPSILON);
    assert!((0.1f64.powi(2) * 2.0 - ddms.length()).abs() < EPSILON);
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_liter_identity() {
    let five_liters = UnitValue::new(5.0, si::liter());
    let cubic_decimeters = five_liters.convert(&si::decimeter().power(3.0)).unwrap();
    assert!(approx(cubic_decimeters.magnitude(), 5.0));

    let cubic_meters = five_liters.convert(&si::meter().power(3.0)).unwrap();
    assert_eq!(cubic_meters, five_liters);
}

#[test]
fn test_conversion_preserves_quantity() {
    let five_m = UnitValue::new(5.0, si::meter());
    assert_eq!(five_m.convert(&si::centimeter()).unwrap(), five_m);

    let five_cc = UnitValue::new(5.0, si::cubic_centimeter());
    assert_eq!(five_cc.convert(&si::liter()).unwrap(), five_cc);
}

#[test]
fn test_compound_derived_unit_converts_back() {
    let m_per_kg = si::meter().divide(&si::kilogram());
    let cu = CompoundUnit::derive(&m_per_kg, 0.025, "cu", "compound unit").unwrap();
    let converted = UnitValue::new(1.0, cu).convert(&m_per_kg).unwrap();
    assert_eq!(converted, UnitValue::new(0.025, m_per_kg));

    let dm2 = si::decimeter().power(2.0);
    let ddms = CompoundUnit::derive(&dm2, 2.0, "DDMS", "double square decimeter").unwrap();
    let converted = UnitValue::new(1.0, ddms).convert(&dm2).unwrap();
    assert!(approx(converted.magnitude(), 2.0));
}

#[test]
fn test_definitional_power_values() {
    let m2 = si::meter().power(2.0);
    let dms = CompoundUnit::derive(&m2, 2.0, "DMS", "double square meter").unwrap();
    let one_dms = UnitValue::new(1.0, dms);
    assert_ne!(UnitValue::new(1.0, m2.clone()), one_dms);
    assert_ne!(UnitValue::new(4.0, m2.clone()), one_dms);
    assert_eq!(UnitValue::new(2.0, m2), one_dms);
}

#[test]
fn test_customary_conversions() {
    let mile = UnitValue::new(1.0, si::mile());
    let km = mile.convert(&si::kilometer()).unwrap();
    assert!((km.magnitude() - 1.609344).abs() < 1e-5);

    let gallon = UnitValue::new(1.0, si::gallon());
    let liters = gallon.convert(&si::liter()).unwrap();
    assert!((liters.magnitude() - 3.785411784).abs() < 1e-9);

    let pound = UnitValue::new(1.0, si::pound());
    let kg = pound.convert(&si::kilogram()).unwrap();
    assert!((kg.magnitude() - 0.45359237).abs() < 1e-12);
}

#[test]
fn test_absolute_temperature_conversion() {
    let freezing = UnitValue::new(32.0, si::fahrenheit());
    let celsius = freezing.convert_absolute(&si::celsius()).unwrap();
    assert!(approx(celsius.magnitude(), 0.0));

    let absolute_zero = UnitValue::new(0.0, si::kelvin());
    let fahrenheit = absolute_zero.convert_absolute(&si::fahrenheit()).unwrap();
    assert!(approx(fahrenheit.magnitude(), -459.67));
}

#[test]
fn test_round_trip_conversion() {
    let units = [
        si::meter(),
        si::inch(),
        si::liter(),
        si::cubic_centimeter(),
        si::meter().divide(&si::second()),
        si::newton(),
    ];
    for unit in &units {
        let value = UnitValue::new(42.0, unit.clone());
        for other in units.iter().filter(|u| u.is_same_dimension(unit)) {
            let back = value.convert(other).unwrap().convert(unit).unwrap();
            assert!(approx(back.magnitude(), 42.0), "{unit} via {other}");
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_arithmetic() {
    let three_m = UnitValue::new(3.0, si::meter());
    assert_eq!(three_m.add(&UnitValue::new(2.0, si::meter())).unwrap(), UnitValue::new(5.0, si::meter()));
    assert_eq!(
        three_m.mul(&UnitValue::new(2.0, si::meter())),
        UnitValue::new(6.0, si::meter().power(2.0))
    );

    let area = three_m.mul(&UnitValue::new(50.0, si::centimeter()));
    assert!(approx(area.convert(&si::meter().power(2.0)).unwrap().magnitude(), 1.5));

    let mass_length = UnitValue::new(2.0, si::meter()).mul(&UnitValue::new(3.0, si::kilogram()));
    let expected = UnitValue::new(6.0, si::meter().multiply(&si::kilogram()));
    assert_eq!(mass_length.compare(&expected).unwrap(), Ordering::Equal);
}

#[test]
fn test_power_consistent_with_multiplication() {
    let carl = CompoundUnit::derive(&si::meter().divide(&si::kilogram()), 0.025, "carl", "carl").unwrap();
    let m2_per_kg2 = si::meter()
        .multiply(&si::meter())
        .divide(&si::kilogram())
        .divide(&si::kilogram());

    let two_carl = UnitValue::new(2.0, carl);
    let product = two_carl.mul(&two_carl);
    let converted = product.convert(&m2_per_kg2).unwrap();
    assert_eq!(product, converted);

    let squared = two_carl.pow(2.0).unwrap();
    assert_eq!(converted.compare(&squared).unwrap(), Ordering::Equal);
}

#[test]
fn test_mismatch_surfaced() {
    let length = UnitValue::new(1.0, si::meter());
    let mass = UnitValue::new(1.0, si::kilogram());
    let err = length.add(&mass).unwrap_err();
    assert!(err.is_dimension_mismatch());
    assert!(err.to_string().contains("not the same dimension"));
    assert!(UnitValue::max(&length, &mass).is_err());
}

#[test]
fn test_tolerance_equality() {
    let a = UnitValue::new(0.3, si::second());
    let b = UnitValue::new(0.1 + 0.2, si::second());
    assert_eq!(a.compare(&b).unwrap(), Ordering::Equal);
    assert_eq!(a, b);
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn test_definitional_power_naming() {
    let two_cc = UnitValue::new(2.0, si::cubic_centimeter());
    assert_eq!(two_cc.pow(2.0).unwrap().to_string(), "4.00 cc^2");
    assert_eq!(two_cc.mul(&two_cc).to_string(), "4.00 cc^2");
    assert_eq!(two_cc.add(&two_cc).unwrap().to_string(), "4.00 cc");
    assert_eq!(
        two_cc
            .pow(2.0)
            .unwrap()
            .convert(&si::centimeter().power(6.0))
            .unwrap()
            .to_string(),
        "4.00 cm^6"
    );
}

// ============================================================================
// Registry and best fit
// ============================================================================

#[test]
fn test_auto_conversion() {
    let registry = UnitRegistry::standard();

    let dose = UnitValue::new(0.0005, si::liter());
    assert_eq!(dose.convert_auto(&registry, 1.0).to_string(), "0.50 ml");

    let flow = UnitValue::new(72.0, si::liter().divide(&si::hour()));
    assert_eq!(flow.convert_auto(&registry, 1.0).to_string(), "20.0 ml/s");

    let long = UnitValue::new(90.0, si::day());
    assert_eq!(long.convert_auto(&registry, 1.0).unit().to_string(), "month");
}

#[test]
fn test_registry_from_config() {
    let config = UnitsConfig::from_json_str(r#"{"display_units": ["km/h"]}"#).unwrap();
    let registry = UnitRegistry::from_config(&config).unwrap();
    let speed = UnitValue::new(10.0, si::meter().divide(&si::second()));
    assert_eq!(speed.convert_auto(&registry, 1.0).unit().to_string(), "km/h");

    let bare = UnitRegistry::from_config(&UnitsConfig::bare()).unwrap();
    assert!(bare.is_empty());
    assert!(bare.parse_unit("m").is_err());
}

#[test]
fn test_parsed_units_compute() {
    let registry = UnitRegistry::standard();
    let speed = UnitValue::new(72.0, registry.parse_unit("km/h").unwrap());
    let in_si = speed.convert(&registry.parse_unit("m/s").unwrap()).unwrap();
    assert!(approx(in_si.magnitude(), 20.0));
}

#[test]
fn test_bounded_value_clamps() {
    let mut reservoir = BoundedValue::new(UnitValue::new(1.0, si::liter())).with_soft_limits(0.0, 2.0);
    let applied = reservoir.add(&UnitValue::new(1500.0, si::milliliter())).unwrap();
    assert!(approx(applied.magnitude(), 1000.0));
    assert!(approx(reservoir.value().magnitude(), 2.0));
    assert_eq!(reservoir.to_string(), "2.00 L");
}
