//! Unit Values: a magnitude tagged with a compound unit
//!
//! All arithmetic between values goes through the unit algebra: addition
//! converts the right operand into the left operand's unit, multiplication
//! re-expresses both operands before multiplying so that mixing
//! centimeters and meters never leaks a stray factor of 100.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};

use super::compound::CompoundUnit;
use super::errors::UnitError;
use super::format::format_with_unit;
use super::registry::UnitRegistry;
use super::tolerance::{compare_f64, EPSILON};

/// A numeric value with a runtime unit
///
/// # Examples
///
/// ```
/// use compound_units::units::prelude::*;
///
/// let length = UnitValue::new(3.0, si::meter());
/// let width = UnitValue::new(50.0, si::centimeter());
/// let area = length.mul(&width);
/// assert!((area.magnitude() - 1.5).abs() < 1e-12);
///
/// // Different dimensions do not add up:
/// assert!(length.add(&UnitValue::new(1.0, si::gram())).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnitValue {
    magnitude: f64,
    unit: CompoundUnit,
}

impl UnitValue {
    pub fn new(magnitude: f64, unit: CompoundUnit) -> Self {
        Self { magnitude, unit }
    }

    /// A pure number.
    pub fn dimensionless(magnitude: f64) -> Self {
        Self::new(magnitude, CompoundUnit::dimensionless())
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &CompoundUnit {
        &self.unit
    }

    pub fn into_parts(self) -> (f64, CompoundUnit) {
        (self.magnitude, self.unit)
    }

    /// Re-express in `to` by length ratio alone. Only valid when both
    /// units share a dimension.
    fn rescaled(&self, to: &CompoundUnit) -> UnitValue {
        UnitValue::new(self.magnitude * self.unit.length() / to.length(), to.clone())
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Convert into another unit of the same dimension.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if the dimensions differ.
    pub fn convert(&self, to: &CompoundUnit) -> Result<UnitValue, UnitError> {
        if !self.unit.is_same_dimension(to) {
            return Err(UnitError::mismatch(&self.unit, to));
        }
        Ok(self.rescaled(to))
    }

    /// Convert between affine scales, honoring each unit's zero point
    /// (`0 °C` becomes `273.15 K`).
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if the dimensions differ.
    pub fn convert_absolute(&self, to: &CompoundUnit) -> Result<UnitValue, UnitError> {
        let converted = self.convert(to)?;
        let shift = self.unit.offset() * self.unit.length() / to.length() - to.offset();
        Ok(UnitValue::new(converted.magnitude + shift, converted.unit))
    }

    /// Convert into the registry's display unit whose magnitude lands
    /// closest to `target`. Falls back to the value as it is.
    pub fn convert_auto(&self, registry: &UnitRegistry, target: f64) -> UnitValue {
        registry.best_fit(self, target)
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Sum in this value's unit.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `other` is of another dimension.
    pub fn add(&self, other: &UnitValue) -> Result<UnitValue, UnitError> {
        let other = other.convert(&self.unit)?;
        Ok(UnitValue::new(self.magnitude + other.magnitude, self.unit.clone()))
    }

    /// Difference in this value's unit.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `other` is of another dimension.
    pub fn sub(&self, other: &UnitValue) -> Result<UnitValue, UnitError> {
        let other = other.convert(&self.unit)?;
        Ok(UnitValue::new(self.magnitude - other.magnitude, self.unit.clone()))
    }

    /// Product, in the reduced product unit.
    ///
    /// Each operand is first re-expressed in the unit it contributes to the
    /// reduced result (`result / other`), so the magnitudes multiply on a
    /// common scale.
    pub fn mul(&self, other: &UnitValue) -> UnitValue {
        let magnitude = self.magnitude * other.magnitude;
        if self.unit.is_identity() {
            return UnitValue::new(magnitude, other.unit.clone());
        }
        if other.unit.is_identity() {
            return UnitValue::new(magnitude, self.unit.clone());
        }

        let result = self.unit.multiply(&other.unit).reduce();
        let mine = result.divide(&other.unit).reduce();
        let theirs = result.divide(&self.unit).reduce();

        // Both re-expressions are dimensionally exact by construction.
        let left = self.rescaled(&mine);
        let right = other.rescaled(&theirs);
        let product = UnitValue::new(left.magnitude * right.magnitude, mine.multiply(&theirs));

        // Reduction may have swapped a representative scale; land on `result`.
        product.rescaled(&result)
    }

    /// Quotient: `self * other^-1`.
    pub fn div(&self, other: &UnitValue) -> UnitValue {
        self.mul(&other.inverse())
    }

    pub fn inverse(&self) -> UnitValue {
        UnitValue::new(1.0 / self.magnitude, self.unit.inverse())
    }

    /// Raise to a real power, tagged with `unit^p`.
    ///
    /// The value is first converted into the root of `unit^p` and that
    /// magnitude is raised to `p`.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] when no consistent root exists,
    /// which includes `p == 0` and non-finite `p`.
    pub fn pow(&self, p: f64) -> Result<UnitValue, UnitError> {
        if p == 0.0 || !p.is_finite() {
            return Err(UnitError::DimensionMismatch {
                from: self.unit.describe(),
                to: format!("({})^{}", self.unit.describe(), p),
                difference: None,
            });
        }
        let target = self.unit.power(p);
        let root = target.power(1.0 / p);
        if !self.unit.is_same_dimension(&root) {
            return Err(UnitError::mismatch(&self.unit, &root));
        }
        let base = self.rescaled(&root);
        Ok(UnitValue::new(base.magnitude.powf(p), target))
    }

    pub fn negate(&self) -> UnitValue {
        UnitValue::new(-self.magnitude, self.unit.clone())
    }

    /// `1 - magnitude`, same unit.
    pub fn negate_as_percentage(&self) -> UnitValue {
        UnitValue::new(1.0 - self.magnitude, self.unit.clone())
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compare after converting `other` into this value's unit, with the
    /// default absolute tolerance.
    ///
    /// A NaN magnitude is neither greater nor less than anything and so
    /// compares `Equal`. The `PartialEq`/`PartialOrd` impls treat NaN as
    /// unordered instead.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `other` is of another dimension.
    pub fn compare(&self, other: &UnitValue) -> Result<Ordering, UnitError> {
        self.compare_within(other, EPSILON)
    }

    /// Compare with an explicit absolute tolerance.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `other` is of another dimension.
    pub fn compare_within(&self, other: &UnitValue, epsilon: f64) -> Result<Ordering, UnitError> {
        let other = other.convert(&self.unit)?;
        Ok(compare_f64(self.magnitude, other.magnitude, epsilon))
    }

    /// The larger of two values; `a` on a tie.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if the dimensions differ.
    pub fn max<'a>(a: &'a UnitValue, b: &'a UnitValue) -> Result<&'a UnitValue, UnitError> {
        Ok(match a.compare(b)? {
            Ordering::Less => b,
            _ => a,
        })
    }

    /// The smaller of two values; `a` on a tie.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if the dimensions differ.
    pub fn min<'a>(a: &'a UnitValue, b: &'a UnitValue) -> Result<&'a UnitValue, UnitError> {
        Ok(match a.compare(b)? {
            Ordering::Greater => b,
            _ => a,
        })
    }

    /// Swap in a new value, returning the previous one.
    pub fn replace(&mut self, value: UnitValue) -> UnitValue {
        std::mem::replace(self, value)
    }
}

// =============================================================================
// Comparison traits
// =============================================================================

/// Equal within tolerance; values of different dimensions are never equal.
impl PartialEq for UnitValue {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Values of different dimensions, or with a NaN magnitude, are unordered.
impl PartialOrd for UnitValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.magnitude.is_nan() || other.magnitude.is_nan() {
            return None;
        }
        self.compare(other).ok()
    }
}

// =============================================================================
// Operators
// =============================================================================

impl Neg for UnitValue {
    type Output = UnitValue;

    fn neg(self) -> Self::Output {
        UnitValue::new(-self.magnitude, self.unit)
    }
}

impl Neg for &UnitValue {
    type Output = UnitValue;

    fn neg(self) -> Self::Output {
        UnitValue::negate(self)
    }
}

impl Mul for &UnitValue {
    type Output = UnitValue;

    fn mul(self, rhs: Self) -> Self::Output {
        UnitValue::mul(self, rhs)
    }
}

impl Mul for UnitValue {
    type Output = UnitValue;

    fn mul(self, rhs: Self) -> Self::Output {
        UnitValue::mul(&self, &rhs)
    }
}

impl Div for &UnitValue {
    type Output = UnitValue;

    fn div(self, rhs: Self) -> Self::Output {
        UnitValue::div(self, rhs)
    }
}

impl Div for UnitValue {
    type Output = UnitValue;

    fn div(self, rhs: Self) -> Self::Output {
        UnitValue::div(&self, &rhs)
    }
}

/// Scale the magnitude, keeping the unit
impl Mul<f64> for UnitValue {
    type Output = UnitValue;

    fn mul(self, rhs: f64) -> Self::Output {
        UnitValue::new(self.magnitude * rhs, self.unit)
    }
}

impl Div<f64> for UnitValue {
    type Output = UnitValue;

    fn div(self, rhs: f64) -> Self::Output {
        UnitValue::new(self.magnitude / rhs, self.unit)
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_with_unit(self.magnitude, &self.unit.to_string()))
    }
}
