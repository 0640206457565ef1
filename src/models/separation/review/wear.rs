use uom::si::{
    f64::{Length, Ratio, Time, Velocity},
    length::millimeter,
    ratio::percent,
    time::{hour, year},
    velocity::meter_per_second,
};

use crate::models::separation::ValidationError;

use super::non_negative;

/// Inlet velocity at which the wall erodes 1 mm per year, in m/s.
const REFERENCE_WEAR_VELOCITY: f64 = 20.0;

/// Efficiency lost per millimetre of wall loss, in percent.
const DEGRADATION_PER_MILLIMETER: f64 = 0.5;
const MAX_DEGRADATION_PERCENT: f64 = 10.0;
const WORN_EFFICIENCY_FLOOR_PERCENT: f64 = 80.0;

const IMMEDIATE_INSPECTION_LOSS_MM: f64 = 5.0;
const PLANNED_INSPECTION_LOSS_MM: f64 = 3.0;

/// What to do about the predicted wall loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InspectionAction {
    /// Keep the normal inspection schedule.
    Routine,
    /// Plan an inspection at the next opportunity.
    Planned,
    /// Inspect now.
    Immediate,
}

/// Predicted inlet wear after a period of operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WearForecast {
    pub erosion_rate: Velocity,
    pub wall_loss: Length,
    pub efficiency: Ratio,
    pub action: InspectionAction,
}

/// Forecasts inlet wear and efficiency loss after `operating` time in service.
///
/// The erosion rate grows with the cube of inlet velocity, 1 mm per year at
/// 20 m/s. Each millimetre of wall loss costs 0.5 % efficiency, at most 10 %,
/// and never below 80 % (or the rated efficiency, if lower).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if an input is negative, or
/// [`ValidationError::NonFinite`] if an input is infinite.
pub fn wear_forecast(
    inlet_velocity: Velocity,
    rated_efficiency: Ratio,
    operating: Time,
) -> Result<WearForecast, ValidationError> {
    let velocity = non_negative("inlet velocity", inlet_velocity.get::<meter_per_second>())?;
    let rated = non_negative("efficiency", rated_efficiency.get::<percent>())?;
    let hours = non_negative("operating time", operating.get::<hour>())?;

    let rate_mm_per_year = (velocity / REFERENCE_WEAR_VELOCITY).powi(3);
    let erosion_rate: Velocity =
        Length::new::<millimeter>(rate_mm_per_year) / Time::new::<year>(1.0);
    let wall_loss: Length = erosion_rate * Time::new::<hour>(hours);
    let loss_mm = wall_loss.get::<millimeter>();

    let degradation = (loss_mm * DEGRADATION_PER_MILLIMETER).min(MAX_DEGRADATION_PERCENT);
    let floor = WORN_EFFICIENCY_FLOOR_PERCENT.min(rated);

    let action = if loss_mm > IMMEDIATE_INSPECTION_LOSS_MM {
        InspectionAction::Immediate
    } else if loss_mm > PLANNED_INSPECTION_LOSS_MM {
        InspectionAction::Planned
    } else {
        InspectionAction::Routine
    };

    Ok(WearForecast {
        erosion_rate,
        wall_loss,
        efficiency: Ratio::new::<percent>((rated - degradation).max(floor)),
        action,
    })
}

/// Months between internal inspections at the given inlet velocity.
///
/// Three months above 22 m/s, six above 20 m/s, otherwise twelve.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if the velocity is negative, or
/// [`ValidationError::NonFinite`] if it is infinite.
pub fn inspection_interval_months(inlet_velocity: Velocity) -> Result<u32, ValidationError> {
    let velocity = non_negative("inlet velocity", inlet_velocity.get::<meter_per_second>())?;
    Ok(if velocity > 22.0 {
        3
    } else if velocity > 20.0 {
        6
    } else {
        12
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn forecast(velocity: f64, efficiency: f64, hours: f64) -> WearForecast {
        wear_forecast(
            Velocity::new::<meter_per_second>(velocity),
            Ratio::new::<percent>(efficiency),
            Time::new::<hour>(hours),
        )
        .unwrap()
    }

    #[test]
    fn one_year_at_reference_velocity() {
        let f = forecast(20.0, 99.2, 8760.0);

        assert_relative_eq!(f.wall_loss.get::<millimeter>(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(f.efficiency.get::<percent>(), 98.7, epsilon = 1e-9);
        assert_eq!(f.action, InspectionAction::Routine);
    }

    #[test]
    fn erosion_grows_with_the_cube_of_velocity() {
        let f = forecast(30.0, 99.2, 17_520.0);
        assert_relative_eq!(f.wall_loss.get::<millimeter>(), 6.75, epsilon = 1e-9);
        assert_relative_eq!(f.efficiency.get::<percent>(), 95.825, epsilon = 1e-9);
        assert_eq!(f.action, InspectionAction::Immediate);

        let f = forecast(25.0, 99.2, 17_520.0);
        assert_relative_eq!(f.wall_loss.get::<millimeter>(), 3.906_25, epsilon = 1e-9);
        assert_eq!(f.action, InspectionAction::Planned);
    }

    #[test]
    fn degradation_is_capped_and_floored() {
        let capped = forecast(40.0, 99.2, 5.0 * 8760.0);
        assert_relative_eq!(capped.efficiency.get::<percent>(), 89.2, epsilon = 1e-9);

        let floored = forecast(40.0, 85.0, 5.0 * 8760.0);
        assert_relative_eq!(floored.efficiency.get::<percent>(), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn negative_time_is_rejected() {
        assert!(
            wear_forecast(
                Velocity::new::<meter_per_second>(20.0),
                Ratio::new::<percent>(99.2),
                Time::new::<hour>(-1.0),
            )
            .is_err()
        );
    }

    #[test]
    fn inspection_intervals() {
        let months = |v: f64| inspection_interval_months(Velocity::new::<meter_per_second>(v));

        assert_eq!(months(25.0), Ok(3));
        assert_eq!(months(21.0), Ok(6));
        assert_eq!(months(20.0), Ok(12));
        assert_eq!(
            months(f64::INFINITY),
            Err(ValidationError::NonFinite {
                value: "inlet velocity"
            })
        );
    }
}
