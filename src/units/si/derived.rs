//! Derived Units
//!
//! Volumes defined from cubed lengths, a force defined from a product of
//! dimensions, and the affine temperature scales.

use super::base::{kelvin, meter, second};
use super::prefixes::{centimeter, decimeter, kilogram};
use super::scaled;
use crate::units::compound::CompoundUnit;

// =============================================================================
// Volume
// =============================================================================

/// Liter (L) - dm³, displayed without an exponent
pub fn liter() -> CompoundUnit {
    scaled(&decimeter().power(3.0), 1.0, "L", "liter")
}

/// Milliliter (ml) - 10⁻³ L
pub fn milliliter() -> CompoundUnit {
    scaled(&liter(), 0.001, "ml", "milliliter")
}

pub fn teaspoon() -> CompoundUnit {
    scaled(&milliliter(), 4.92892159375, "tspn", "teaspoon")
}

pub fn tablespoon() -> CompoundUnit {
    scaled(&teaspoon(), 3.0, "tbsp", "tablespoon")
}

pub fn fluid_ounce() -> CompoundUnit {
    scaled(&tablespoon(), 2.0, "fl oz", "fluid ounce")
}

pub fn cup() -> CompoundUnit {
    scaled(&fluid_ounce(), 8.0, "cup", "cup")
}

pub fn pint() -> CompoundUnit {
    scaled(&cup(), 2.0, "pt", "pint")
}

pub fn gallon() -> CompoundUnit {
    scaled(&pint(), 8.0, "gal", "gallon")
}

pub fn barrel() -> CompoundUnit {
    scaled(&gallon(), 31.5, "barrel", "barrel")
}

/// Cubic centimeter (cc) - cm³
pub fn cubic_centimeter() -> CompoundUnit {
    scaled(&centimeter().power(3.0), 1.0, "cc", "cubic centimeter")
}

// =============================================================================
// Area
// =============================================================================

/// Square centimeter (sqcm) - cm²
pub fn square_centimeter() -> CompoundUnit {
    scaled(&centimeter().power(2.0), 1.0, "sqcm", "square centimeter")
}

// =============================================================================
// Force
// =============================================================================

/// Newton (N) - kg·m/s²
pub fn newton() -> CompoundUnit {
    let base = kilogram()
        .multiply(&meter())
        .divide(&second().multiply(&second()));
    scaled(&base, 1.0, "N", "newton")
}

// =============================================================================
// Temperature
// =============================================================================

/// Degree Celsius (°C) - kelvin shifted by 273.15
pub fn celsius() -> CompoundUnit {
    CompoundUnit::derive_trusted(&kelvin(), 1.0, 1.0, 273.15, "°C", "celsius")
}

/// Degree Fahrenheit (°F) - 5/9 of a celsius degree, zero at -459.67 °F
/// above absolute zero
pub fn fahrenheit() -> CompoundUnit {
    CompoundUnit::derive_trusted(&celsius(), 5.0 / 9.0, 1.0, 459.67, "°F", "fahrenheit")
}
