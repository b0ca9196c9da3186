//! Compound Units
//!
//! A compound unit is an ordered product of base units times an overall
//! scale multiplier. `kg * m / s^2` is three components; a liter is one
//! component (`distance^3` with definitional power 3).
//!
//! Components merge syntactically: two components only combine when they
//! are the same underlying base unit. `m * cm` stays two line items until
//! [`CompoundUnit::reduce`] folds every dimension base into one
//! representative.

use std::fmt;

use super::base_unit::{long_power_name, short_power_name, BaseUnit};
use super::dimension::{BaseDimension, DimensionVector};
use super::errors::UnitError;
use super::tolerance::{approx_eq, is_zero};

/// Display name carried by a named (registered or derived) unit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UnitName {
    short: String,
    long: String,
}

impl UnitName {
    fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }
}

/// A product of base units with a scale multiplier and an optional name.
#[derive(Debug, Clone)]
pub struct CompoundUnit {
    components: Vec<BaseUnit>,
    scale: f64,
    name: Option<UnitName>,
    /// Exponent printed after the name; `power(p)` multiplies it.
    name_power: f64,
}

// ============================================================================
// COMPONENT INSERTION
// ============================================================================

/// Multiply one base unit into a component list.
///
/// Zero powers are dropped. A component that is the same underlying unit
/// absorbs the new power (and disappears if the sum is zero); anything else
/// is appended.
fn insert(components: &mut Vec<BaseUnit>, unit: BaseUnit) {
    if is_zero(unit.power()) {
        return;
    }
    match components.iter().position(|c| c.is_same_unit(&unit)) {
        Some(i) => {
            let power = components[i].power() + unit.power();
            if is_zero(power) {
                components.remove(i);
            } else {
                components[i] = components[i].with_power(power);
            }
        }
        None => components.push(unit),
    }
}

fn insert_all<'a>(components: &mut Vec<BaseUnit>, units: impl IntoIterator<Item = &'a BaseUnit>) {
    for unit in units {
        insert(components, unit.clone());
    }
}

impl CompoundUnit {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// The identity unit: no components, scale 1, named `none`.
    pub fn dimensionless() -> Self {
        Self {
            components: Vec::new(),
            scale: 1.0,
            name: Some(UnitName::new("none", "none")),
            name_power: 1.0,
        }
    }

    fn unnamed(components: Vec<BaseUnit>) -> Self {
        Self {
            components,
            scale: 1.0,
            name: None,
            name_power: 1.0,
        }
    }

    fn named(components: Vec<BaseUnit>, scale: f64, short: &str, long: &str) -> Self {
        Self {
            components,
            scale,
            name: Some(UnitName::new(short, long)),
            name_power: 1.0,
        }
    }

    /// A fresh single-dimension unit at power 1.
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidScale`] if `length` is not finite and positive.
    pub fn base(
        length: f64,
        short_name: &str,
        long_name: &str,
        base: BaseDimension,
    ) -> Result<Self, UnitError> {
        let unit = BaseUnit::new(length, short_name, long_name, DimensionVector::of(base))?;
        Ok(Self::from_base_unit(unit))
    }

    /// Wrap a base unit, named after it.
    pub fn from_base_unit(unit: BaseUnit) -> Self {
        let name = UnitName::new(unit.short_name(false), unit.long_name(false));
        let mut components = Vec::with_capacity(1);
        insert(&mut components, unit);
        Self {
            components,
            scale: 1.0,
            name: Some(name),
            name_power: 1.0,
        }
    }

    /// Built-in base unit with constants known to be valid.
    pub(crate) fn trusted_base(length: f64, short_name: &str, long_name: &str, base: BaseDimension) -> Self {
        Self::from_base_unit(BaseUnit::from_parts(
            length,
            DimensionVector::of(base),
            1.0,
            0.0,
            short_name,
            long_name,
        ))
    }

    /// Define a new named unit as `factor` times `source`.
    ///
    /// ```
    /// use compound_units::units::prelude::*;
    ///
    /// let hm = CompoundUnit::derive(&si::meter(), 100.0, "hm", "hectometer").unwrap();
    /// assert!((hm.length() - 100.0).abs() < 1e-12);
    /// ```
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidScale`] if `factor` is not finite and positive.
    pub fn derive(source: &CompoundUnit, factor: f64, short_name: &str, long_name: &str) -> Result<Self, UnitError> {
        Self::derive_full(source, factor, 1.0, 0.0, short_name, long_name)
    }

    /// Define a new named unit as `(factor * source)^power`.
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidScale`] for a bad factor,
    /// [`UnitError::InvalidDefinition`] for a zero or non-finite power.
    pub fn derive_with_power(
        source: &CompoundUnit,
        factor: f64,
        power: f64,
        short_name: &str,
        long_name: &str,
    ) -> Result<Self, UnitError> {
        Self::derive_full(source, factor, power, 0.0, short_name, long_name)
    }

    /// Define an affine unit: `factor` times `source`, with a zero point
    /// shifted by `offset` (in the new unit's own scale).
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidDefinition`] if `source` has more than one
    /// dimension, since an offset on a product of dimensions is undefined.
    pub fn derive_affine(
        source: &CompoundUnit,
        factor: f64,
        offset: f64,
        short_name: &str,
        long_name: &str,
    ) -> Result<Self, UnitError> {
        Self::derive_full(source, factor, 1.0, offset, short_name, long_name)
    }

    fn derive_full(
        source: &CompoundUnit,
        factor: f64,
        power: f64,
        offset: f64,
        short_name: &str,
        long_name: &str,
    ) -> Result<Self, UnitError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(UnitError::invalid_scale(short_name, factor));
        }
        if power == 0.0 || !power.is_finite() {
            return Err(UnitError::invalid_definition(
                short_name,
                format!("power {power} must be finite and non-zero"),
            ));
        }
        if !offset.is_finite() {
            return Err(UnitError::invalid_definition(
                short_name,
                format!("offset {offset} must be finite"),
            ));
        }
        if offset != 0.0 && source.reduce().components.len() != 1 {
            return Err(UnitError::invalid_definition(
                short_name,
                "an affine offset needs a single-dimension source unit",
            ));
        }

        let unit = Self::derive_trusted(source, factor, power, offset, short_name, long_name);
        let length = unit.length();
        if !(length.is_finite() && length > 0.0) {
            return Err(UnitError::invalid_scale(short_name, length));
        }
        Ok(unit)
    }

    /// Derivation for arguments already known to be valid.
    ///
    /// A source that reduces to one component folds into a single new base
    /// unit defined at its own power, so it prints as a bare name (`L`, not
    /// `dm^3`). Any other source keeps its components under a scale.
    pub(crate) fn derive_trusted(
        source: &CompoundUnit,
        factor: f64,
        power: f64,
        offset: f64,
        short_name: &str,
        long_name: &str,
    ) -> Self {
        let reduced = source.reduce();
        let factor = factor * source.scale;

        match reduced.components.as_slice() {
            [component] => {
                let length = (component.effective_length() * factor).powf(power);
                let dim_power = component.power() * power;
                let unit = BaseUnit::from_parts(
                    length,
                    component.dimension().with_power(dim_power),
                    dim_power,
                    offset,
                    short_name,
                    long_name,
                );
                Self::named(vec![unit], 1.0, short_name, long_name)
            }
            others => {
                let mut components = Vec::with_capacity(others.len());
                for component in others {
                    insert(&mut components, component.pow(power));
                }
                Self::named(components, factor.powf(power), short_name, long_name)
            }
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn components(&self) -> &[BaseUnit] {
        &self.components
    }

    /// Overall multiplier on top of the components' lengths.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Conversion factor into the reference scale of every dimension:
    /// the scale multiplier times each component's effective length.
    pub fn length(&self) -> f64 {
        self.components
            .iter()
            .fold(self.scale, |len, c| len * c.effective_length())
    }

    /// Sum of the components' affine offsets.
    pub fn offset(&self) -> f64 {
        self.components.iter().map(BaseUnit::offset).sum()
    }

    /// Dimension vectors of the reduced unit, one per dimension base.
    pub fn dimensions(&self) -> Vec<DimensionVector> {
        self.reduce()
            .components
            .iter()
            .map(BaseUnit::dimension)
            .collect()
    }

    /// Reduced dimensions joined with ` * `, e.g. `distance * time^-2`.
    pub fn dimension_signature(&self) -> String {
        let dimensions = self.dimensions();
        if dimensions.is_empty() {
            return DimensionVector::DIMENSIONLESS.to_string();
        }
        dimensions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" * ")
    }

    // ========================================================================
    // ALGEBRA
    // ========================================================================

    /// Product of two units. The result is unnamed with scale 1.
    pub fn multiply(&self, other: &CompoundUnit) -> CompoundUnit {
        let mut components = Vec::with_capacity(self.components.len() + other.components.len());
        insert_all(&mut components, &self.components);
        insert_all(&mut components, &other.components);
        Self::unnamed(components)
    }

    /// Quotient of two units. The result is unnamed with scale 1.
    pub fn divide(&self, other: &CompoundUnit) -> CompoundUnit {
        let mut components = Vec::with_capacity(self.components.len() + other.components.len());
        insert_all(&mut components, &self.components);
        insert_all(&mut components, &other.inverse().components);
        Self::unnamed(components)
    }

    /// Raise every component to `p`. Keeps the name, whose printed exponent
    /// is multiplied by `p` (`cc` squared prints as `cc^2`).
    pub fn power(&self, p: f64) -> CompoundUnit {
        let mut components = Vec::with_capacity(self.components.len());
        for component in &self.components {
            insert(&mut components, component.pow(p));
        }
        Self {
            components,
            scale: self.scale.powf(p),
            name: self.name.clone(),
            name_power: self.name_power * p,
        }
    }

    pub fn inverse(&self) -> CompoundUnit {
        self.power(-1.0)
    }

    /// Collapse the components to at most one per dimension base.
    ///
    /// Powers of every component sharing a base are summed; the first
    /// component seen for that base is kept as the representative. When
    /// same-dimension components of different scale coexist (`m * cm`), the
    /// other components' scales are dropped: `m * cm` reduces to `m^2`.
    pub fn reduce(&self) -> CompoundUnit {
        let mut totals: Vec<(BaseDimension, f64)> = Vec::with_capacity(self.components.len());
        for component in &self.components {
            match totals.iter_mut().find(|(base, _)| *base == component.base()) {
                Some((_, power)) => *power += component.power(),
                None => totals.push((component.base(), component.power())),
            }
        }

        let mut components = Vec::with_capacity(totals.len());
        for (base, power) in totals {
            if is_zero(power) {
                continue;
            }
            if let Some(first) = self.components.iter().find(|c| c.base() == base) {
                insert(&mut components, first.with_power(power));
            }
        }

        Self {
            components,
            scale: self.scale,
            name: self.name.clone(),
            name_power: self.name_power,
        }
    }

    /// The unit that `self` must be multiplied with to become `other`.
    ///
    /// Unmatched components of `self` enter inverted, unmatched components
    /// of `other` enter as they are. Matching is by base unit value.
    pub fn dimension_difference(&self, other: &CompoundUnit) -> CompoundUnit {
        let mut components = Vec::new();
        for component in &self.components {
            if !other.components.contains(component) {
                insert(&mut components, component.inverse());
            }
        }
        for component in &other.components {
            if !self.components.contains(component) {
                insert(&mut components, component.clone());
            }
        }
        Self::unnamed(components)
    }

    /// `true` if a value in `self` can be converted into `other`.
    pub fn is_same_dimension(&self, other: &CompoundUnit) -> bool {
        self.dimension_difference(other).reduce().components.is_empty()
    }

    /// `true` if the unit measures a pure number.
    pub fn is_dimensionless(&self) -> bool {
        self.reduce().components.is_empty()
    }

    /// `true` for a dimensionless unit of length 1, which multiplication
    /// treats as neutral.
    pub fn is_identity(&self) -> bool {
        self.components.is_empty() && approx_eq(self.length(), 1.0)
    }

    // ========================================================================
    // DISPLAY
    // ========================================================================

    fn partitioned(&self) -> (Vec<&BaseUnit>, Vec<&BaseUnit>) {
        let numerators = self
            .components
            .iter()
            .filter(|c| c.display_power(false) > 0.0)
            .collect();
        let denominators = self
            .components
            .iter()
            .filter(|c| c.display_power(false) < 0.0)
            .collect();
        (numerators, denominators)
    }

    /// Name assembled from the components, e.g. `(kg*m)/s^2`, `L/h`, `s^-1`.
    pub fn derived_name(&self) -> String {
        self.assemble_name(|c, inverted| c.short_name(inverted), "*")
    }

    fn derived_long_name(&self) -> String {
        self.assemble_name(|c, inverted| c.long_name(inverted), " * ")
    }

    fn assemble_name(&self, name: impl Fn(&BaseUnit, bool) -> String, joiner: &str) -> String {
        let (numerators, denominators) = self.partitioned();
        let group = |units: &[&BaseUnit], inverted: bool| {
            let joined = units
                .iter()
                .map(|c| name(c, inverted))
                .collect::<Vec<_>>()
                .join(joiner);
            if units.len() > 1 {
                format!("({joined})")
            } else {
                joined
            }
        };

        match (numerators.is_empty(), denominators.is_empty()) {
            (_, true) => group(&numerators, false),
            (true, false) => denominators
                .iter()
                .map(|c| name(c, false))
                .collect::<Vec<_>>()
                .join(joiner),
            (false, false) => format!("{}/{}", group(&numerators, false), group(&denominators, true)),
        }
    }

    /// Display name: the unit's own name with its exponent, or the derived
    /// name for unnamed units.
    pub fn short_name(&self) -> String {
        match &self.name {
            Some(name) => short_power_name(&name.short, self.name_power),
            None => self.derived_name(),
        }
    }

    pub fn long_name(&self) -> String {
        match &self.name {
            Some(name) => long_power_name(&name.long, self.name_power),
            None => self.derived_long_name(),
        }
    }

    /// Same as the `Display` output.
    pub fn describe(&self) -> String {
        self.short_name()
    }

    /// Developer dump of every component.
    pub fn debug_string(&self) -> String {
        let components = self
            .components
            .iter()
            .map(BaseUnit::debug_string)
            .collect::<Vec<_>>()
            .join(" ");
        format!("{{scale: {}, components: {}}}", self.scale, components)
    }
}

impl Default for CompoundUnit {
    fn default() -> Self {
        Self::dimensionless()
    }
}

/// Same dimensions and the same length within tolerance. Affine units
/// must also share their zero point, so celsius is not kelvin.
impl PartialEq for CompoundUnit {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_dimension(other)
            && approx_eq(self.length(), other.length())
            && approx_eq(self.offset(), other.offset())
    }
}

impl fmt::Display for CompoundUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}
