//! Typed separation-efficiency estimator and its [`Model`] adapter.

use twine_core::Model;
use uom::si::{
    f64::{Pressure, Velocity},
    pressure::pascal,
    velocity::meter_per_second,
};

use super::core::{
    DEFAULT_BASELINE_VELOCITY, DEFAULT_PRESSURE_DROP_CEILING, SeparationEfficiency,
    ValidationError, estimate_efficiency_with,
};

/// Scaling configuration for the efficiency estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    /// Inlet velocity at which the velocity term reaches full weight.
    pub baseline_velocity: Velocity,

    /// Pressure-drop signal at which the pressure term reaches full weight.
    pub pressure_drop_ceiling: Pressure,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            baseline_velocity: Velocity::new::<meter_per_second>(DEFAULT_BASELINE_VELOCITY),
            pressure_drop_ceiling: Pressure::new::<pascal>(DEFAULT_PRESSURE_DROP_CEILING),
        }
    }
}

/// Operating inputs pushed by the host on each interaction.
///
/// Values are unchecked; the estimator validates them on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OperatingInputs {
    pub inlet_velocity: Velocity,
    pub pressure_drop_signal: Pressure,
}

impl OperatingInputs {
    #[must_use]
    pub fn new(inlet_velocity: Velocity, pressure_drop_signal: Pressure) -> Self {
        Self {
            inlet_velocity,
            pressure_drop_signal,
        }
    }
}

/// Stateless separation-efficiency estimator.
///
/// Holds only its configuration. Each call is independent, so one estimator
/// can be shared freely between threads and called as often as the host likes.
///
/// # Example
///
/// ```
/// use plant3d_models::models::separation::{OperatingInputs, PerformanceEstimator};
/// use uom::si::{
///     f64::{Pressure, Velocity},
///     pressure::pascal,
///     velocity::meter_per_second,
/// };
///
/// let estimator = PerformanceEstimator::default();
/// let inputs = OperatingInputs::new(
///     Velocity::new::<meter_per_second>(15.0),
///     Pressure::new::<pascal>(0.0),
/// );
///
/// let efficiency = estimator.estimate(&inputs).unwrap();
/// assert!((efficiency.percent() - 85.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerformanceEstimator {
    config: EstimatorConfig,
}

impl PerformanceEstimator {
    #[must_use]
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimates separation efficiency for the given operating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidInput`] if an input is negative or
    /// `NaN`, or if the configured baseline or ceiling is not strictly positive.
    pub fn estimate(
        &self,
        inputs: &OperatingInputs,
    ) -> Result<SeparationEfficiency, ValidationError> {
        let percent = estimate_efficiency_with(
            inputs.inlet_velocity.get::<meter_per_second>(),
            inputs.pressure_drop_signal.get::<pascal>(),
            self.config.baseline_velocity.get::<meter_per_second>(),
            self.config.pressure_drop_ceiling.get::<pascal>(),
        )?;

        Ok(SeparationEfficiency::from_estimate(percent))
    }
}

impl Model for PerformanceEstimator {
    type Input = OperatingInputs;
    type Output = SeparationEfficiency;
    type Error = ValidationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.estimate(input)
    }
}
