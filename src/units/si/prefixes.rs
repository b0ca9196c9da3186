//! Scaled Units
//!
//! Prefixed metric units and the customary length, mass and time units,
//! each defined as a factor of a unit already in the catalog.

use super::base::{gram, meter, radian, second};
use super::scaled;
use crate::units::compound::CompoundUnit;

// =============================================================================
// Distance
// =============================================================================

/// Millimeter (mm) - 10⁻³ m
pub fn millimeter() -> CompoundUnit {
    scaled(&meter(), 1.0 / 1000.0, "mm", "millimeter")
}

/// Centimeter (cm) - 10⁻² m
pub fn centimeter() -> CompoundUnit {
    scaled(&meter(), 1.0 / 100.0, "cm", "centimeter")
}

/// Decimeter (dm) - 10⁻¹ m
pub fn decimeter() -> CompoundUnit {
    scaled(&meter(), 1.0 / 10.0, "dm", "decimeter")
}

/// Kilometer (km) - 10³ m
pub fn kilometer() -> CompoundUnit {
    scaled(&meter(), 1000.0, "km", "kilometer")
}

/// Inch (in) - 1/39.3701 m
pub fn inch() -> CompoundUnit {
    scaled(&meter(), 1.0 / 39.3701, "in", "inch")
}

/// Foot (ft) - 12 in
pub fn foot() -> CompoundUnit {
    scaled(&inch(), 12.0, "ft", "foot")
}

/// Yard (yd) - 3 ft
pub fn yard() -> CompoundUnit {
    scaled(&foot(), 3.0, "yd", "yard")
}

/// Mile (mi) - 1760 yd
pub fn mile() -> CompoundUnit {
    scaled(&yard(), 1760.0, "mi", "mile")
}

pub fn lightyear() -> CompoundUnit {
    scaled(&meter(), 9_460_730_472_580_800.0, "lightyear", "lightyear")
}

// =============================================================================
// Mass
// =============================================================================

/// Kilogram (kg) - 10³ g
pub fn kilogram() -> CompoundUnit {
    scaled(&gram(), 1000.0, "kg", "kilogram")
}

/// Metric ton - 10³ kg
pub fn tonne() -> CompoundUnit {
    scaled(&kilogram(), 1000.0, "tonne", "metric ton")
}

/// Avoirdupois ounce (oz) - 28.349523125 g
pub fn ounce() -> CompoundUnit {
    scaled(&gram(), 28.349523125, "oz", "ounce")
}

/// Pound (lb) - 16 oz
pub fn pound() -> CompoundUnit {
    scaled(&ounce(), 16.0, "lb", "pound")
}

/// Imperial ton - 2240 lb
pub fn long_ton() -> CompoundUnit {
    scaled(&pound(), 2240.0, "ton", "long ton")
}

/// US ton - 2000 lb
pub fn short_ton() -> CompoundUnit {
    scaled(&pound(), 2000.0, "ton", "short ton")
}

// =============================================================================
// Time
// =============================================================================

/// Millisecond (ms) - 10⁻³ s
pub fn millisecond() -> CompoundUnit {
    scaled(&second(), 0.001, "ms", "millisecond")
}

/// Minute (min) - 60 s
pub fn minute() -> CompoundUnit {
    scaled(&second(), 60.0, "min", "minute")
}

/// Hour (h) - 60 min
pub fn hour() -> CompoundUnit {
    scaled(&minute(), 60.0, "h", "hour")
}

/// Day - 24 h
pub fn day() -> CompoundUnit {
    scaled(&hour(), 24.0, "day", "day")
}

/// Week - 7 days
pub fn week() -> CompoundUnit {
    scaled(&day(), 7.0, "week", "week")
}

/// Julian year - 365.25 days. Not a calendar year.
pub fn year() -> CompoundUnit {
    scaled(&day(), 365.25, "year", "year")
}

/// A twelfth of a Julian year
pub fn month() -> CompoundUnit {
    scaled(&year(), 1.0 / 12.0, "month", "month")
}

// =============================================================================
// Rotation
// =============================================================================

/// Degree (deg) - 0.0174533 rad
pub fn degree() -> CompoundUnit {
    scaled(&radian(), 0.0174533, "deg", "degree")
}
