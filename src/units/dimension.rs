//! Dimension vectors
//!
//! Every base unit measures exactly one orthogonal physical category raised
//! to a (possibly fractional) power. Compound units are built from these.

use std::fmt;

/// The orthogonal physical categories a unit can measure.
///
/// - Distance: meter, inch, lightyear
/// - Time: second, hour, year
/// - Mass: gram, pound
/// - Rotation: radian, degree
/// - Temperature: kelvin, celsius
///
/// `Dimensionless` is the category of pure numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BaseDimension {
    /// Pure number, no physical category
    #[default]
    Dimensionless,
    /// Length [L]
    Distance,
    /// Time [T]
    Time,
    /// Mass [M]
    Mass,
    /// Plane angle
    Rotation,
    /// Thermodynamic temperature [Θ]
    Temperature,
}

impl BaseDimension {
    /// All categories in declaration order.
    pub const ALL: [BaseDimension; 6] = [
        BaseDimension::Dimensionless,
        BaseDimension::Distance,
        BaseDimension::Time,
        BaseDimension::Mass,
        BaseDimension::Rotation,
        BaseDimension::Temperature,
    ];

    /// Lowercase display name
    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Dimensionless => "none",
            BaseDimension::Distance => "distance",
            BaseDimension::Time => "time",
            BaseDimension::Mass => "mass",
            BaseDimension::Rotation => "rotation",
            BaseDimension::Temperature => "temperature",
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A base category paired with a power.
///
/// `distance^2` is area, but keeping the category and the power apart is
/// what lets `area / distance` come back out as `distance`.
///
/// The constructor normalizes: a zero power or the dimensionless category
/// both collapse to `(Dimensionless, 0)`, so equality is a plain field
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DimensionVector {
    base: BaseDimension,
    power: f64,
}

impl DimensionVector {
    /// The canonical dimensionless vector `(Dimensionless, 0)`.
    pub const DIMENSIONLESS: Self = Self {
        base: BaseDimension::Dimensionless,
        power: 0.0,
    };

    /// Create a dimension vector, normalizing degenerate input.
    pub fn new(base: BaseDimension, power: f64) -> Self {
        if power == 0.0 || base == BaseDimension::Dimensionless {
            Self::DIMENSIONLESS
        } else {
            Self { base, power }
        }
    }

    /// A category at power 1
    pub fn of(base: BaseDimension) -> Self {
        Self::new(base, 1.0)
    }

    pub fn base(&self) -> BaseDimension {
        self.base
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Same category, different power.
    pub fn with_power(&self, power: f64) -> Self {
        Self::new(self.base, power)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.base == BaseDimension::Dimensionless
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() || self.power == 1.0 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}^{}", self.base, self.power)
        }
    }
}
