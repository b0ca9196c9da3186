//! Base Units
//!
//! One reference unit per dimension. Every other catalog unit is derived
//! from these by a scale factor.

use crate::units::compound::CompoundUnit;
use crate::units::dimension::BaseDimension;

/// The dimensionless identity unit
pub fn none() -> CompoundUnit {
    CompoundUnit::dimensionless()
}

/// Meter (m), reference unit of distance
pub fn meter() -> CompoundUnit {
    CompoundUnit::trusted_base(1.0, "m", "meter", BaseDimension::Distance)
}

/// Gram (g), reference unit of mass
pub fn gram() -> CompoundUnit {
    CompoundUnit::trusted_base(1.0, "g", "gram", BaseDimension::Mass)
}

/// Second (s), reference unit of time
pub fn second() -> CompoundUnit {
    CompoundUnit::trusted_base(1.0, "s", "second", BaseDimension::Time)
}

/// Radian (rad), reference unit of rotation
pub fn radian() -> CompoundUnit {
    CompoundUnit::trusted_base(1.0, "rad", "radian", BaseDimension::Rotation)
}

/// Kelvin (K), reference unit of temperature
pub fn kelvin() -> CompoundUnit {
    CompoundUnit::trusted_base(1.0, "K", "kelvin", BaseDimension::Temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_units_are_reference_scale() {
        for unit in [meter(), gram(), second(), radian(), kelvin()] {
            assert!((unit.length() - 1.0).abs() < 1e-15);
            assert_eq!(unit.components().len(), 1);
            assert!(!unit.is_dimensionless());
        }
    }

    #[test]
    fn test_none_is_identity() {
        assert!(none().is_identity());
    }

    #[test]
    fn test_base_units_are_orthogonal() {
        let units = [meter(), gram(), second(), radian(), kelvin()];
        for (i, a) in units.iter().enumerate() {
            for (j, b) in units.iter().enumerate() {
                assert_eq!(a.is_same_dimension(b), i == j, "{a} vs {b}");
            }
        }
    }
}
