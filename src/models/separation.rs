//! Cyclone separator models.
//!
//! This module provides the equipment descriptor for cyclone separators, a
//! separation-efficiency estimator with a [`twine_core::Model`] adapter, and
//! the pieces a viewer needs around them:
//!
//! - [`EquipmentDescriptor`]: validated, immutable design data.
//! - [`PerformanceEstimator`] / [`estimate_efficiency`]: the efficiency
//!   heuristic driven by inlet velocity and a pressure-drop signal.
//! - [`CycloneGeometry`]: body proportions derived from the diameter.
//! - [`review`]: design margins, off-design, arrangement, wear, and risk
//!   checks against the rating and [`OperatingConditions`].
//! - [`viewer`]: host-facing session types (details callbacks, current inputs).
//! - [`datasheet`] and [`record`]: loading descriptors from datasheet text
//!   and JSON records.
//!
//! The computational core is in the internal `core` module.

mod core;
mod estimator;

pub mod datasheet;
pub mod record;
pub mod review;
pub mod viewer;

pub use self::core::{
    CycloneGeometry, DEFAULT_BASELINE_VELOCITY, DEFAULT_PRESSURE_DROP_CEILING, Dimensions,
    DisplayField, EquipmentDescriptor, InletOpening, MAX_EFFICIENCY_PERCENT, Nozzle, NozzleKind,
    OperatingConditions, PRESSURE_WEIGHT_PERCENT, Proportions, Ratings, SeparationEfficiency,
    VELOCITY_WEIGHT_PERCENT, ValidationError, estimate_efficiency, estimate_efficiency_with,
};
pub use estimator::{EstimatorConfig, OperatingInputs, PerformanceEstimator};
