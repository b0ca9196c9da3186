//! Runtime Units of Measure
//!
//! Physical quantities as numbers tagged with compound units. Units carry
//! their dimensions at runtime, so values in any two units of the same
//! dimension convert, add and compare, and products derive their unit and
//! scale automatically.
//!
//! # Key Features
//!
//! - **Dimension vectors**: six orthogonal categories with real-valued powers
//! - **Compound units**: products of base units with merge and reduction rules
//! - **Scale-safe arithmetic**: `3 m * 50 cm` is `1.5 m^2`, never `150`
//! - **Best-fit display**: pick the unit that reads closest to a target magnitude
//! - **Affine scales**: absolute conversion between kelvin, celsius and fahrenheit
//!
//! # Example
//!
//! ```
//! use compound_units::units::prelude::*;
//!
//! let registry = UnitRegistry::standard();
//! let flow = UnitValue::new(2.0, si::liter()).div(&UnitValue::new(1.0, si::hour()));
//! let dose = flow.mul(&UnitValue::new(90.0, si::minute()));
//! assert_eq!(dose.convert_auto(&registry, 1.0).to_string(), "3.00 L");
//! ```

pub mod base_unit;
pub mod bounded;
pub mod compound;
pub mod dimension;
pub mod errors;
pub mod format;
pub mod quantity;
pub mod registry;
pub mod si;
pub mod tolerance;

// Re-exports
pub use base_unit::BaseUnit;
pub use bounded::BoundedValue;
pub use compound::CompoundUnit;
pub use dimension::{BaseDimension, DimensionVector};
pub use errors::UnitError;
pub use format::format_magnitude;
pub use quantity::UnitValue;
pub use registry::UnitRegistry;
pub use tolerance::EPSILON;

/// Prelude for common imports
pub mod prelude {
    pub use super::base_unit::BaseUnit;
    pub use super::bounded::BoundedValue;
    pub use super::compound::CompoundUnit;
    pub use super::dimension::{BaseDimension, DimensionVector};
    pub use super::errors::UnitError;
    pub use super::quantity::UnitValue;
    pub use super::registry::UnitRegistry;
    pub use super::si;
}
