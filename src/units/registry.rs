//! Unit Registry
//!
//! The catalog of named units, used for symbol lookup, unit expression
//! parsing and best-fit display. A registry is an ordinary value: build it
//! once, then share it by reference.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::compound::CompoundUnit;
use super::errors::UnitError;
use super::quantity::UnitValue;
use super::si;
use crate::config::UnitsConfig;

/// Named units plus the candidate list for best-fit display
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    /// Registered units in registration order
    units: Vec<CompoundUnit>,
    /// Short and long names, indexing into `units`
    symbols: FxHashMap<String, usize>,
    /// Best-fit candidates in search order
    display_units: Vec<CompoundUnit>,
}

impl UnitRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Every standard catalog unit plus the default display list.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register_default_units();
        registry
    }

    /// Build from configuration: the standard catalog if enabled, then the
    /// configured extra display units.
    ///
    /// # Errors
    ///
    /// Fails if a configured display unit expression does not parse.
    pub fn from_config(config: &UnitsConfig) -> Result<Self, UnitError> {
        let mut registry = if config.standard_catalog {
            Self::standard()
        } else {
            Self::new()
        };
        for expr in &config.display_units {
            let unit = registry.parse_unit(expr)?;
            registry.add_display_unit(unit);
        }
        Ok(registry)
    }

    fn register_default_units(&mut self) {
        for unit in si::catalog() {
            self.register(unit);
        }
        for unit in si::display_units() {
            self.add_display_unit(unit);
        }
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    /// Register a named unit. Returns `false` if it was not added.
    ///
    /// Unnamed units are rejected, as is a unit equal to one already
    /// registered under the same short name. When two units share a symbol,
    /// lookup finds the first one registered.
    pub fn register(&mut self, unit: CompoundUnit) -> bool {
        if !unit.is_named() {
            debug!(unit = %unit, "rejecting unnamed unit");
            return false;
        }
        let short_name = unit.short_name();
        if self
            .units
            .iter()
            .any(|known| known.short_name() == short_name && *known == unit)
        {
            debug!(unit = %short_name, "unit already registered");
            return false;
        }

        let index = self.units.len();
        for symbol in [short_name, unit.long_name()] {
            if let Some(&existing) = self.symbols.get(&symbol) {
                debug!(symbol = %symbol, existing, index, "symbol already taken");
                continue;
            }
            self.symbols.insert(symbol, index);
        }
        debug!(unit = %unit, dimension = %unit.dimension_signature(), "registered unit");
        self.units.push(unit);
        true
    }

    /// Append a candidate to the best-fit display list.
    pub fn add_display_unit(&mut self, unit: CompoundUnit) {
        trace!(unit = %unit, "adding display unit");
        self.display_units.push(unit);
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// Find a unit by short or long name
    pub fn lookup(&self, symbol: &str) -> Option<&CompoundUnit> {
        self.symbols.get(symbol).and_then(|&i| self.units.get(i))
    }

    /// Like [`lookup`](Self::lookup), failing with
    /// [`UnitError::UnknownUnit`].
    pub fn resolve(&self, symbol: &str) -> Result<&CompoundUnit, UnitError> {
        self.lookup(symbol).ok_or_else(|| UnitError::UnknownUnit {
            symbol: symbol.to_string(),
        })
    }

    pub fn units(&self) -> &[CompoundUnit] {
        &self.units
    }

    pub fn display_units(&self) -> &[CompoundUnit] {
        &self.display_units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    // ========================================================================
    // PARSING
    // ========================================================================

    /// Parse a unit expression such as `m`, `km/h`, `kg*m/s^2`, `m^0.5` or
    /// `1/s`.
    ///
    /// Terms are registered symbols with an optional `^power`, separated by
    /// `*` or `/` and read left to right. `1` is the dimensionless unit. A
    /// lone symbol yields the registered unit itself, name included.
    ///
    /// # Errors
    ///
    /// [`UnitError::UnknownUnit`] for an unregistered symbol,
    /// [`UnitError::InvalidExponent`] for a malformed power.
    pub fn parse_unit(&self, expr: &str) -> Result<CompoundUnit, UnitError> {
        let mut terms = Vec::new();
        let mut op = Op::Mul;
        let mut start = 0;
        for (i, c) in expr.char_indices() {
            let next = match c {
                '*' => Op::Mul,
                '/' => Op::Div,
                _ => continue,
            };
            terms.push((op, &expr[start..i]));
            op = next;
            start = i + c.len_utf8();
        }
        terms.push((op, &expr[start..]));

        let mut unit: Option<CompoundUnit> = None;
        for (op, term) in terms {
            let factor = self.parse_term(term.trim()).map_err(|err| {
                debug!(expr, term, error = %err, "failed to parse unit expression");
                err
            })?;
            unit = Some(match (unit, op) {
                (None, Op::Mul) => factor,
                (None, Op::Div) => factor.inverse(),
                (Some(acc), Op::Mul) => acc.multiply(&factor),
                (Some(acc), Op::Div) => acc.divide(&factor),
            });
        }
        Ok(unit.unwrap_or_default())
    }

    fn parse_term(&self, term: &str) -> Result<CompoundUnit, UnitError> {
        let (symbol, power) = match term.split_once('^') {
            Some((symbol, power)) => {
                let power: f64 = power.trim().parse().map_err(|_| UnitError::InvalidExponent {
                    term: term.to_string(),
                })?;
                if power == 0.0 || !power.is_finite() {
                    return Err(UnitError::InvalidExponent {
                        term: term.to_string(),
                    });
                }
                (symbol.trim(), Some(power))
            }
            None => (term, None),
        };

        let unit = if symbol == "1" {
            CompoundUnit::dimensionless()
        } else {
            self.resolve(symbol)?.clone()
        };
        Ok(match power {
            Some(p) => unit.power(p),
            None => unit,
        })
    }

    // ========================================================================
    // BEST FIT
    // ========================================================================

    /// `value` converted into the display unit whose magnitude lands
    /// closest to `target` on a logarithmic scale.
    ///
    /// Candidates of another dimension are skipped. The first candidate at
    /// the minimum distance wins. Without a usable candidate (wrong
    /// dimension everywhere, or a zero or NaN magnitude) `value` is returned
    /// as it is.
    pub fn best_fit(&self, value: &UnitValue, target: f64) -> UnitValue {
        let mut best: Option<(f64, UnitValue)> = None;

        for candidate in &self.display_units {
            let Ok(converted) = value.convert(candidate) else {
                continue;
            };
            let distance = (converted.magnitude() / target).abs().ln().abs();
            trace!(candidate = %candidate, distance, "best-fit candidate");
            let best_distance = best.as_ref().map_or(f64::MAX, |(d, _)| *d);
            if distance < best_distance {
                best = Some((distance, converted));
            }
        }

        let best = best.map_or_else(|| value.clone(), |(_, converted)| converted);
        trace!(value = %value, best = %best, "best fit");
        best
    }

    /// The unit [`best_fit`](Self::best_fit) converts `value` into.
    pub fn best_fit_unit(&self, value: &UnitValue, target: f64) -> CompoundUnit {
        let (_, unit) = self.best_fit(value, target).into_parts();
        unit
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Mul,
    Div,
}
