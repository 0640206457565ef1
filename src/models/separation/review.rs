//! Engineering review heuristics for a cyclone at and around its rating.
//!
//! These are the quick checks an engineer runs against a datasheet before
//! a design review: how much margin the design conditions leave over the
//! operating point, what happens when the flow moves off design, how units
//! behave in parallel or in series, how fine a particle the unit catches,
//! and how fast the inlet wears. Like the efficiency estimate, they are
//! screening rules of thumb and not a physical cyclone model.
//!
//! Every function is pure and validates its inputs, returning a
//! [`ValidationError`](super::ValidationError) for values out of range.

mod arrangement;
mod flow;
mod grade;
mod margin;
mod risk;
mod wear;

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::ValidationError;

pub use arrangement::{
    ParallelArrangement, SERIES_PRESSURE_DROP_LIMIT, SeriesArrangement, parallel, series,
    series_efficiency,
};
pub use flow::{
    BlockageScenario, EROSION_CAUTION_VELOCITY, EROSION_VELOCITY, ErosionRisk, OffDesignPoint,
    PRESSURE_DROP_LIMIT, inlet_blockage, scale_to_flow,
};
pub use grade::{BASE_CUT_SIZE_MICROMETERS, GRADE_SLOPE, GradeCurve, cut_size};
pub use margin::{
    CARBON_STEEL_TEMPERATURE_LIMIT, DesignMargin, DesignMargins, MarginRating, design_margins,
    material_is_suitable, pressure_margin, temperature_margin,
};
pub use risk::{RiskAssessment, RiskFactor, RiskLevel, assess_risk};
pub use wear::{InspectionAction, WearForecast, inspection_interval_months, wear_forecast};

/// Checks that an input is strictly positive and finite.
fn positive(input: &'static str, value: f64) -> Result<f64, ValidationError> {
    StrictlyPositive::new(value)
        .map_err(|source| ValidationError::InvalidInput { input, source })?;
    finite(input, value)
}

/// Checks that an input is zero or greater and finite.
fn non_negative(input: &'static str, value: f64) -> Result<f64, ValidationError> {
    NonNegative::new(value).map_err(|source| ValidationError::InvalidInput { input, source })?;
    finite(input, value)
}

fn finite(input: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { value: input })
    }
}
