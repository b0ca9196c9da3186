//! Unit Algebra Errors
//!
//! Every fallible operation in the unit algebra reports one of these.
//! Arithmetic and conversion only ever fail with
//! [`UnitError::DimensionMismatch`]; the other variants guard construction
//! and symbol lookup.

use miette::Diagnostic;
use thiserror::Error;

use super::compound::CompoundUnit;

/// An illegal conversion, arithmetic operation or unit definition
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum UnitError {
    /// Two units that had to share a dimension do not
    #[error("{from} cannot be converted to {to}: they are not the same dimension")]
    #[diagnostic(code(U0001), help("{}", mismatch_help(.difference)))]
    DimensionMismatch {
        from: String,
        to: String,
        difference: Option<String>,
    },

    /// A scale length or factor that is not a positive finite number
    #[error("unit `{name}` has invalid scale {scale}")]
    #[diagnostic(
        code(U0002),
        help("Scale lengths relate a unit to its dimension's reference unit and must be finite and greater than zero.")
    )]
    InvalidScale { name: String, scale: f64 },

    /// A definitional power or affine offset that cannot be honored
    #[error("unit `{name}` cannot be defined: {reason}")]
    #[diagnostic(code(U0003))]
    InvalidDefinition { name: String, reason: String },

    /// A symbol the registry does not know
    #[error("unknown unit `{symbol}`")]
    #[diagnostic(
        code(U0004),
        help("Register the unit first, or use `cunits units` to list the known symbols.")
    )]
    UnknownUnit { symbol: String },

    /// A `symbol^power` term whose power does not parse
    #[error("invalid exponent in `{term}`")]
    #[diagnostic(code(U0005), help("Exponents are decimal numbers, e.g. `m^2`, `s^-1`, `m^0.5`."))]
    InvalidExponent { term: String },
}

fn mismatch_help(difference: &Option<String>) -> String {
    match difference {
        Some(diff) => format!("The residual dimension between them is `{diff}`."),
        None => {
            "Only values of the same dimension can be converted, added, subtracted or compared."
                .to_string()
        }
    }
}

impl UnitError {
    /// Mismatch between two units, carrying their residual difference.
    pub fn mismatch(from: &CompoundUnit, to: &CompoundUnit) -> Self {
        let difference = from.dimension_difference(to).reduce();
        let difference = if difference.is_dimensionless() {
            None
        } else {
            Some(difference.dimension_signature())
        };
        UnitError::DimensionMismatch {
            from: from.describe(),
            to: to.describe(),
            difference,
        }
    }

    pub fn invalid_scale(name: &str, scale: f64) -> Self {
        UnitError::InvalidScale {
            name: name.to_string(),
            scale,
        }
    }

    pub fn invalid_definition(name: &str, reason: impl Into<String>) -> Self {
        UnitError::InvalidDefinition {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// `true` for the arithmetic/conversion failure kind
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, UnitError::DimensionMismatch { .. })
    }
}
