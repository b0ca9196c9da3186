//! Base Units
//!
//! A base unit binds one scale length to exactly one dimension vector.
//!
//! Ex: meter is `distance` with length 1, kilometer is `distance` with
//! length 1000. The length is what relates units of the same dimension.
//!
//! A base unit may hide an inherent exponent through its *definitional
//! power*: a liter is `distance^3` but is displayed without an exponent.
//! The liter is stored as `distance^3` with definitional power 3, so its
//! effective length is `length^(3/3)` and its display exponent is `3/3 = 1`.

use std::fmt;

use super::dimension::{BaseDimension, DimensionVector};
use super::errors::UnitError;

/// A single-dimension unit with a scale length, an optional definitional
/// power and an optional affine offset.
#[derive(Debug, Clone)]
pub struct BaseUnit {
    length: f64,
    dimension: DimensionVector,
    def_power: f64,
    offset: f64,
    short_name: String,
    long_name: String,
}

impl BaseUnit {
    /// Create a base unit at power 1 with definitional power 1 and no offset.
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidScale`] if `length` is not finite and positive.
    pub fn new(
        length: f64,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
        dimension: DimensionVector,
    ) -> Result<Self, UnitError> {
        let short_name = short_name.into();
        if !(length.is_finite() && length > 0.0) {
            return Err(UnitError::invalid_scale(&short_name, length));
        }
        Ok(Self {
            length,
            dimension,
            def_power: 1.0,
            offset: 0.0,
            short_name,
            long_name: long_name.into(),
        })
    }

    /// Set the power the unit was defined at.
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidDefinition`] if `def_power` is zero or not finite.
    pub fn with_def_power(mut self, def_power: f64) -> Result<Self, UnitError> {
        if def_power == 0.0 || !def_power.is_finite() {
            return Err(UnitError::invalid_definition(
                &self.short_name,
                format!("definitional power {def_power} must be finite and non-zero"),
            ));
        }
        self.def_power = def_power;
        Ok(self)
    }

    /// Set the affine offset used by absolute conversion.
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidDefinition`] if `offset` is not finite.
    pub fn with_offset(mut self, offset: f64) -> Result<Self, UnitError> {
        if !offset.is_finite() {
            return Err(UnitError::invalid_definition(
                &self.short_name,
                format!("offset {offset} must be finite"),
            ));
        }
        self.offset = offset;
        Ok(self)
    }

    /// Assemble a base unit whose callers validate the result.
    pub(crate) fn from_parts(
        length: f64,
        dimension: DimensionVector,
        def_power: f64,
        offset: f64,
        short_name: &str,
        long_name: &str,
    ) -> Self {
        debug_assert!(def_power != 0.0);
        Self {
            length,
            dimension,
            def_power,
            offset,
            short_name: short_name.to_string(),
            long_name: long_name.to_string(),
        }
    }

    /// Same unit at another power.
    pub(crate) fn with_power(&self, power: f64) -> Self {
        Self {
            dimension: self.dimension.with_power(power),
            ..self.clone()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Raw scale length, as defined.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Factor converting one of this unit, at its current power, into the
    /// dimension's reference scale: `length^(power / defPower)`.
    pub fn effective_length(&self) -> f64 {
        self.length.powf(self.power() / self.def_power)
    }

    pub fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    pub fn base(&self) -> BaseDimension {
        self.dimension.base()
    }

    pub fn power(&self) -> f64 {
        self.dimension.power()
    }

    pub fn def_power(&self) -> f64 {
        self.def_power
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// `true` if both are literally the same underlying unit, possibly at
    /// different powers. Only such units merge inside a compound unit.
    pub fn is_same_unit(&self, other: &BaseUnit) -> bool {
        self.base() == other.base()
            && self.length == other.length
            && self.def_power == other.def_power
            && self.offset == other.offset
    }

    // =========================================================================
    // Algebra
    // =========================================================================

    /// Raise to power `p`.
    ///
    /// `p == 0` yields power 1 instead of 0.
    pub fn pow(&self, p: f64) -> Self {
        if p == 0.0 {
            return self.with_power(1.0);
        }
        self.with_power(self.power() * p)
    }

    /// Multiply with the same underlying unit, summing powers.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] unless `other` is the same unit.
    pub fn mul(&self, other: &BaseUnit) -> Result<Self, UnitError> {
        if !self.is_same_unit(other) {
            return Err(self.mismatch(other));
        }
        Ok(self.with_power(self.power() + other.power()))
    }

    /// Divide by the same underlying unit, subtracting powers.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] unless `other` is the same unit.
    pub fn div(&self, other: &BaseUnit) -> Result<Self, UnitError> {
        if !self.is_same_unit(other) {
            return Err(self.mismatch(other));
        }
        Ok(self.with_power(self.power() - other.power()))
    }

    pub fn inverse(&self) -> Self {
        self.with_power(-self.power())
    }

    fn mismatch(&self, other: &BaseUnit) -> UnitError {
        UnitError::DimensionMismatch {
            from: self.long_name(false),
            to: other.long_name(false),
            difference: None,
        }
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Exponent shown next to the name: the power relative to the
    /// definitional power.
    pub(crate) fn display_power(&self, inverted: bool) -> f64 {
        let power = if inverted { -self.power() } else { self.power() };
        power / self.def_power
    }

    /// Short name, e.g. `cm`, `cm^2`, `s^-1`.
    ///
    /// `inverted` flips the sign of the exponent, for denominators.
    pub fn short_name(&self, inverted: bool) -> String {
        short_power_name(&self.short_name, self.display_power(inverted))
    }

    /// Long name, e.g. `centimeter`, `square centimeter`, `cubic centimeter`.
    pub fn long_name(&self, inverted: bool) -> String {
        long_power_name(&self.long_name, self.display_power(inverted))
    }

    /// Developer dump of every field
    pub fn debug_string(&self) -> String {
        format!(
            "[name: {}, power: {}, length: {}, def power: {}, offset: {}, dimension: {}]",
            self.short_name,
            self.power(),
            self.length,
            self.def_power,
            self.offset,
            self.dimension
        )
    }
}

/// Value equality: same dimension vector, same effective length, same offset.
impl PartialEq for BaseUnit {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self.effective_length() == other.effective_length()
            && self.offset == other.offset
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name(false))
    }
}

/// Render an exponent with at most four decimals, trailing zeros trimmed:
/// `2`, `-1`, `0.5`, `1.3333`.
pub(crate) fn format_power(power: f64) -> String {
    let fixed = format!("{:.4}", power);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn short_power_name(name: &str, power: f64) -> String {
    if power == 0.0 || power == 1.0 {
        name.to_string()
    } else {
        format!("{}^{}", name, format_power(power))
    }
}

pub(crate) fn long_power_name(name: &str, power: f64) -> String {
    if power == 0.0 || power == 1.0 {
        name.to_string()
    } else if power == 2.0 {
        format!("square {}", name)
    } else if power == 3.0 {
        format!("cubic {}", name)
    } else {
        format!("{}^{}", name, format_power(power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> BaseUnit {
        BaseUnit::new(1.0, "m", "meter", DimensionVector::of(BaseDimension::Distance)).unwrap()
    }

    fn centimeter() -> BaseUnit {
        BaseUnit::new(0.01, "cm", "centimeter", DimensionVector::of(BaseDimension::Distance))
            .unwrap()
    }

    #[test]
    fn test_rejects_non_positive_length() {
        let dim = DimensionVector::of(BaseDimension::Mass);
        assert!(matches!(
            BaseUnit::new(0.0, "x", "x", dim),
            Err(UnitError::InvalidScale { .. })
        ));
        assert!(BaseUnit::new(-2.0, "x", "x", dim).is_err());
        assert!(BaseUnit::new(f64::NAN, "x", "x", dim).is_err());
        assert!(BaseUnit::new(f64::INFINITY, "x", "x", dim).is_err());
    }

    #[test]
    fn test_rejects_zero_def_power() {
        assert!(matches!(
            meter().with_def_power(0.0),
            Err(UnitError::InvalidDefinition { .. })
        ));
    }

    #[test]
    fn test_effective_length_uses_def_power() {
        let cc = BaseUnit::new(1e-6, "cc", "cubic centimeter", DimensionVector::new(BaseDimension::Distance, 3.0))
            .unwrap()
            .with_def_power(3.0)
            .unwrap();
        assert!((cc.effective_length() - 1e-6).abs() < 1e-20);
        assert!((cc.pow(2.0).effective_length() - 1e-12).abs() < 1e-25);
    }

    #[test]
    fn test_pow_scales_power() {
        let cm = centimeter();
        assert_eq!(cm.pow(3.0).power(), 3.0);
        assert_eq!(cm.pow(-1.0).power(), -1.0);
        assert_eq!(cm.pow(0.5).power(), 0.5);
        assert!((cm.pow(2.0).effective_length() - 1e-4).abs() < 1e-18);
    }

    #[test]
    fn test_pow_zero_yields_power_one() {
        let cubic = centimeter().pow(3.0);
        assert_eq!(cubic.pow(0.0).power(), 1.0);
    }

    #[test]
    fn test_mul_and_div_same_unit() {
        let m = meter();
        let area = m.mul(&m).unwrap();
        assert_eq!(area.power(), 2.0);
        let back = area.div(&m).unwrap();
        assert_eq!(back.power(), 1.0);
    }

    #[test]
    fn test_mul_different_scale_fails() {
        let err = meter().mul(&centimeter()).unwrap_err();
        assert!(err.is_dimension_mismatch());
        assert!(meter().div(&centimeter()).is_err());
    }

    #[test]
    fn test_inverse_negates_power() {
        assert_eq!(meter().inverse().power(), -1.0);
        assert_eq!(meter().inverse().inverse().power(), 1.0);
    }

    #[test]
    fn test_short_names() {
        let cm = centimeter();
        assert_eq!(cm.short_name(false), "cm");
        assert_eq!(cm.pow(2.0).short_name(false), "cm^2");
        assert_eq!(cm.pow(3.0).short_name(false), "cm^3");
        assert_eq!(cm.pow(-1.0).short_name(false), "cm^-1");
        assert_eq!(cm.pow(-2.0).short_name(true), "cm^2");
        assert_eq!(cm.pow(0.5).short_name(false), "cm^0.5");
    }

    #[test]
    fn test_long_names() {
        let cm = centimeter();
        assert_eq!(cm.long_name(false), "centimeter");
        assert_eq!(cm.pow(2.0).long_name(false), "square centimeter");
        assert_eq!(cm.pow(3.0).long_name(false), "cubic centimeter");
        assert_eq!(cm.pow(4.0).long_name(false), "centimeter^4");
        assert_eq!(cm.pow(-3.0).long_name(true), "cubic centimeter");
    }

    #[test]
    fn test_def_power_hides_exponent() {
        let liter = BaseUnit::new(0.001, "L", "liter", DimensionVector::new(BaseDimension::Distance, 3.0))
            .unwrap()
            .with_def_power(3.0)
            .unwrap();
        assert_eq!(liter.short_name(false), "L");
        assert_eq!(liter.pow(2.0).short_name(false), "L^2");
        assert_eq!(liter.inverse().short_name(true), "L");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(meter(), meter());
        assert_ne!(meter(), centimeter());
        assert_ne!(meter(), meter().pow(2.0));
        let hundred_cm = BaseUnit::new(1.0, "hcm", "hundred centimeters", DimensionVector::of(BaseDimension::Distance))
            .unwrap();
        assert_eq!(meter(), hundred_cm);
    }

    #[test]
    fn test_offset_separates_units() {
        let kelvin =
            BaseUnit::new(1.0, "K", "kelvin", DimensionVector::of(BaseDimension::Temperature)).unwrap();
        let celsius = BaseUnit::new(1.0, "°C", "celsius", DimensionVector::of(BaseDimension::Temperature))
            .unwrap()
            .with_offset(273.15)
            .unwrap();
        assert!(!kelvin.is_same_unit(&celsius));
        assert_ne!(kelvin, celsius);
    }

    #[test]
    fn test_format_power() {
        assert_eq!(format_power(2.0), "2");
        assert_eq!(format_power(-1.0), "-1");
        assert_eq!(format_power(0.5), "0.5");
        assert_eq!(format_power(100.0), "100");
        assert_eq!(format_power(4.0 / 3.0), "1.3333");
        assert_eq!(format_power(-2.0 / 3.0), "-0.6667");
    }
}
