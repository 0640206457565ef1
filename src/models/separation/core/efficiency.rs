use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::percent};

use crate::support::constraint::{
    Constrained, ConstraintError, NonNegative, StrictlyPositive, UnitInterval,
};

use super::ValidationError;

/// Inlet velocity at which the velocity term reaches its full weight, in m/s.
pub const DEFAULT_BASELINE_VELOCITY: f64 = 15.0;

/// Pressure-drop signal at which the pressure term reaches its full weight, in Pa.
pub const DEFAULT_PRESSURE_DROP_CEILING: f64 = 5000.0;

/// Highest efficiency the estimator will report, in percent.
pub const MAX_EFFICIENCY_PERCENT: f64 = 95.0;

/// Contribution of the velocity term at the baseline velocity, in percent.
pub const VELOCITY_WEIGHT_PERCENT: f64 = 85.0;

/// Contribution of the pressure term at the pressure-drop ceiling, in percent.
pub const PRESSURE_WEIGHT_PERCENT: f64 = 10.0;

/// Estimates separation efficiency in percent using the default baseline
/// velocity and pressure-drop ceiling.
///
/// See [`estimate_efficiency_with`] for the formula.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if either input is negative or `NaN`.
pub fn estimate_efficiency(
    inlet_velocity: f64,
    pressure_drop_signal: f64,
) -> Result<f64, ValidationError> {
    estimate_efficiency_with(
        inlet_velocity,
        pressure_drop_signal,
        DEFAULT_BASELINE_VELOCITY,
        DEFAULT_PRESSURE_DROP_CEILING,
    )
}

/// Estimates separation efficiency in percent.
///
/// ```text
/// efficiency = min(95, (v / v0) * 85 + (dp / dp_max) * 10)
/// ```
///
/// This is a visualization heuristic, not a physical cyclone model. The
/// result always lies in `[0, 95]`, is non-decreasing in each input, and is
/// bit-identical for identical inputs.
///
/// # Example
///
/// ```
/// use plant3d_models::models::separation::estimate_efficiency_with;
///
/// assert_eq!(estimate_efficiency_with(7.5, 2500.0, 15.0, 5000.0).unwrap(), 47.5);
/// assert!(estimate_efficiency_with(7.5, 2500.0, 0.0, 5000.0).is_err());
/// ```
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if `inlet_velocity` or
/// `pressure_drop_signal` is negative, if `baseline_velocity` or
/// `pressure_drop_ceiling` is not strictly positive, or if any is `NaN`.
pub fn estimate_efficiency_with(
    inlet_velocity: f64,
    pressure_drop_signal: f64,
    baseline_velocity: f64,
    pressure_drop_ceiling: f64,
) -> Result<f64, ValidationError> {
    let v = NonNegative::new(inlet_velocity).map_err(invalid("inlet velocity"))?;
    let dp = NonNegative::new(pressure_drop_signal).map_err(invalid("pressure drop signal"))?;
    let v0 = StrictlyPositive::new(baseline_velocity).map_err(invalid("baseline velocity"))?;
    let dp_max =
        StrictlyPositive::new(pressure_drop_ceiling).map_err(invalid("pressure drop ceiling"))?;

    Ok(efficiency_percent(
        v.into_inner(),
        dp.into_inner(),
        v0.into_inner(),
        dp_max.into_inner(),
    ))
}

fn invalid(input: &'static str) -> impl Fn(ConstraintError) -> ValidationError {
    move |source| ValidationError::InvalidInput { input, source }
}

/// Raw formula; inputs must already satisfy the preconditions.
///
/// `f64::min` returns the non-`NaN` operand, so `inf / inf` saturates at the cap.
fn efficiency_percent(v: f64, dp: f64, v0: f64, dp_max: f64) -> f64 {
    let velocity_term = (v / v0) * VELOCITY_WEIGHT_PERCENT;
    let pressure_term = (dp / dp_max) * PRESSURE_WEIGHT_PERCENT;
    (velocity_term + pressure_term).min(MAX_EFFICIENCY_PERCENT)
}

/// An estimated separation efficiency.
///
/// Stored as a ratio in the closed unit interval and dereferences to
/// [`Ratio`], so it can be read in any ratio unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationEfficiency(Constrained<Ratio, UnitInterval>);

impl SeparationEfficiency {
    /// Creates an efficiency from a percentage.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside 0–100 %.
    pub fn from_percent(value: f64) -> Result<Self, ConstraintError> {
        Ok(Self(UnitInterval::new(Ratio::new::<percent>(value))?))
    }

    /// Wraps a value returned by [`estimate_efficiency_with`], which always
    /// lies in `[0, 95]` percent.
    pub(crate) fn from_estimate(value: f64) -> Self {
        debug_assert!((0.0..=MAX_EFFICIENCY_PERCENT).contains(&value));
        Self(Constrained::new_unchecked(Ratio::new::<percent>(value)))
    }

    /// Returns the efficiency in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.get::<percent>()
    }
}

impl Deref for SeparationEfficiency {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
