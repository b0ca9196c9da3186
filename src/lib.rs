//! Compound Units
//!
//! Physical quantities tagged with runtime compound units:
//! - Dimension algebra over distance, time, mass, rotation and temperature
//! - Conversion between any two units of the same dimension
//! - Arithmetic that derives the resulting unit and its scale
//! - Best-fit display unit selection
//!
//! # Architecture
//!
//! ```text
//! DimensionVector → BaseUnit → CompoundUnit → UnitValue
//!                                   ↑
//!                             UnitRegistry (catalog, parsing, best fit)
//! ```

pub mod config;
pub mod units;

pub use config::{ConfigError, UnitsConfig};
pub use units::{
    BaseDimension, BaseUnit, BoundedValue, CompoundUnit, DimensionVector, UnitError,
    UnitRegistry, UnitValue,
};
