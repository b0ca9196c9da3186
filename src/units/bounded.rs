//! Bounded Values
//!
//! A unit value clamped between a movable soft range and a fixed hard
//! range. Additions that would leave the soft range stop at its edge, and
//! report how much was actually applied.
//!
//! The soft limits can be moved themselves, but never past the hard
//! limits or past each other.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use super::compound::CompoundUnit;
use super::errors::UnitError;
use super::quantity::UnitValue;

/// A clamped accumulator over a [`UnitValue`]
///
/// ```
/// use compound_units::units::prelude::*;
///
/// let mut tank = BoundedValue::new(UnitValue::new(2.0, si::liter()))
///     .with_soft_limits(0.0, 5.0);
/// let applied = tank.add(&UnitValue::new(4000.0, si::milliliter())).unwrap();
/// assert!((applied.magnitude() - 3000.0).abs() < 1e-9);
/// assert!((tank.value().magnitude() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedValue {
    value: UnitValue,
    soft_min: UnitValue,
    soft_max: UnitValue,
    hard_min: UnitValue,
    hard_max: UnitValue,
}

impl BoundedValue {
    /// Wrap `initial` with effectively unlimited soft and hard limits.
    ///
    /// The limits are `±f64::MAX` scaled down by the unit's length, so that
    /// converting them to the reference scale does not overflow.
    pub fn new(initial: UnitValue) -> Self {
        let unit = initial.unit().clone();
        let limit = f64::MAX / unit.length().max(1.0);
        Self {
            soft_min: UnitValue::new(-limit, unit.clone()),
            soft_max: UnitValue::new(limit, unit.clone()),
            hard_min: UnitValue::new(-limit, unit.clone()),
            hard_max: UnitValue::new(limit, unit),
            value: initial,
        }
    }

    /// Set the soft range, in the initial value's unit.
    pub fn with_soft_limits(mut self, min: f64, max: f64) -> Self {
        self.soft_min = UnitValue::new(min, self.unit().clone());
        self.soft_max = UnitValue::new(max, self.unit().clone());
        self
    }

    /// Set the hard range, in the initial value's unit.
    pub fn with_hard_limits(mut self, min: f64, max: f64) -> Self {
        self.hard_min = UnitValue::new(min, self.unit().clone());
        self.hard_max = UnitValue::new(max, self.unit().clone());
        self
    }

    pub fn value(&self) -> &UnitValue {
        &self.value
    }

    pub fn unit(&self) -> &CompoundUnit {
        self.value.unit()
    }

    pub fn soft_min(&self) -> &UnitValue {
        &self.soft_min
    }

    pub fn soft_max(&self) -> &UnitValue {
        &self.soft_max
    }

    pub fn hard_min(&self) -> &UnitValue {
        &self.hard_min
    }

    pub fn hard_max(&self) -> &UnitValue {
        &self.hard_max
    }

    /// Add `delta`, stopping at the soft limits.
    ///
    /// Returns the amount actually applied, in `delta`'s unit.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `delta` is of another dimension.
    pub fn add(&mut self, delta: &UnitValue) -> Result<UnitValue, UnitError> {
        clamped_add(&mut self.value, delta, &self.soft_min, &self.soft_max)
    }

    /// Subtract `delta`, stopping at the soft limits.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `delta` is of another dimension.
    pub fn sub(&mut self, delta: &UnitValue) -> Result<UnitValue, UnitError> {
        self.add(&delta.negate())
    }

    /// Move toward `target`, stopping at the soft limits.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `target` is of another dimension.
    pub fn set(&mut self, target: &UnitValue) -> Result<UnitValue, UnitError> {
        let delta = target.sub(&self.value)?;
        self.add(&delta)
    }

    /// Move the soft maximum by `delta`, within `[soft_min, hard_max]`.
    /// The value is pulled down if it now exceeds the new maximum.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `delta` is of another dimension.
    pub fn add_to_max(&mut self, delta: &UnitValue) -> Result<UnitValue, UnitError> {
        let applied = clamped_add(&mut self.soft_max, delta, &self.soft_min, &self.hard_max)?;
        self.clamp_value()?;
        Ok(applied)
    }

    /// Move the soft minimum by `delta`, within `[hard_min, soft_max]`.
    /// The value is pulled up if it now falls below the new minimum.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] if `delta` is of another dimension.
    pub fn add_to_min(&mut self, delta: &UnitValue) -> Result<UnitValue, UnitError> {
        let applied = clamped_add(&mut self.soft_min, delta, &self.hard_min, &self.soft_max)?;
        self.clamp_value()?;
        Ok(applied)
    }

    fn clamp_value(&mut self) -> Result<(), UnitError> {
        let unit = self.value.unit().clone();
        if self.value.compare(&self.soft_max)? == Ordering::Greater {
            trace!(value = %self.value, max = %self.soft_max, "value above moved maximum");
            self.value.replace(self.soft_max.convert(&unit)?);
        } else if self.value.compare(&self.soft_min)? == Ordering::Less {
            trace!(value = %self.value, min = %self.soft_min, "value below moved minimum");
            self.value.replace(self.soft_min.convert(&unit)?);
        }
        Ok(())
    }
}

/// Add `delta` to `target`, clamped into `[min, max]`. Returns the amount
/// applied in `delta`'s unit; `target` keeps its unit.
fn clamped_add(
    target: &mut UnitValue,
    delta: &UnitValue,
    min: &UnitValue,
    max: &UnitValue,
) -> Result<UnitValue, UnitError> {
    let proposed = target.add(delta)?;
    let unit = target.unit().clone();

    if proposed.compare(max)? == Ordering::Greater {
        trace!(proposed = %proposed, max = %max, "clamping to maximum");
        let applied = max.sub(target)?.convert(delta.unit())?;
        target.replace(max.convert(&unit)?);
        Ok(applied)
    } else if proposed.compare(min)? == Ordering::Less {
        trace!(proposed = %proposed, min = %min, "clamping to minimum");
        let applied = min.sub(target)?.convert(delta.unit())?;
        target.replace(min.convert(&unit)?);
        Ok(applied)
    } else {
        target.replace(proposed);
        Ok(delta.clone())
    }
}

impl fmt::Display for BoundedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
