//! Standard Unit Catalog
//!
//! Metric and customary units for the six built-in dimensions, each built
//! fresh by a constructor function. [`catalog`] lists them all in a fixed
//! order for registration.

pub mod base;
pub mod derived;
pub mod prefixes;

pub use base::*;
pub use derived::*;
pub use prefixes::*;

use super::compound::CompoundUnit;

/// `factor` times `source`, for catalog constants.
fn scaled(source: &CompoundUnit, factor: f64, short_name: &str, long_name: &str) -> CompoundUnit {
    CompoundUnit::derive_trusted(source, factor, 1.0, 0.0, short_name, long_name)
}

/// Every catalog unit, in registration order.
pub fn catalog() -> Vec<CompoundUnit> {
    vec![
        none(),
        // distance
        meter(),
        millimeter(),
        centimeter(),
        decimeter(),
        kilometer(),
        inch(),
        foot(),
        yard(),
        mile(),
        lightyear(),
        // area
        square_centimeter(),
        // volume
        liter(),
        milliliter(),
        teaspoon(),
        tablespoon(),
        fluid_ounce(),
        cup(),
        pint(),
        gallon(),
        barrel(),
        cubic_centimeter(),
        // mass
        gram(),
        kilogram(),
        tonne(),
        ounce(),
        pound(),
        long_ton(),
        short_ton(),
        // time
        second(),
        millisecond(),
        minute(),
        hour(),
        day(),
        week(),
        year(),
        month(),
        // rotation
        radian(),
        degree(),
        // temperature
        kelvin(),
        celsius(),
        fahrenheit(),
        // force
        newton(),
    ]
}

/// Default candidates for best-fit display, in search order.
pub fn display_units() -> Vec<CompoundUnit> {
    vec![
        millimeter(),
        centimeter(),
        meter(),
        kilometer(),
        millimeter().power(2.0),
        centimeter().power(2.0),
        decimeter().power(2.0),
        meter().power(2.0),
        milliliter(),
        cubic_centimeter(),
        liter(),
        meter().power(3.0),
        millisecond(),
        second(),
        minute(),
        hour(),
        day(),
        week(),
        month(),
        year(),
        gram(),
        kilogram(),
        tonne(),
        liter().divide(&second()),
        liter().divide(&hour()),
        liter().divide(&day()),
        milliliter().divide(&second()),
        milliliter().divide(&hour()),
        milliliter().divide(&day()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_units_are_named() {
        let units = catalog();
        assert!(units.iter().all(CompoundUnit::is_named));
        assert_eq!(units.len(), 43);
    }

    #[test]
    fn test_display_units_cover_rates() {
        let units = display_units();
        assert_eq!(units.len(), 29);
        let rate = liter().divide(&hour());
        assert!(units.iter().any(|u| *u == rate));
    }
}
