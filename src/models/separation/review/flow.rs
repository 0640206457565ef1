use uom::si::{
    f64::{MassRate, Pressure, Ratio, Velocity},
    mass_rate::kilogram_per_second,
    ratio::{percent, ratio},
    velocity::meter_per_second,
};

use crate::{
    models::separation::{Ratings, ValidationError},
    support::{constraint::ConstraintError, units::KgfPressure},
};

use super::{non_negative, positive};

/// Inlet velocity above which erosion is severe, in m/s.
pub const EROSION_VELOCITY: f64 = 25.0;

/// Inlet velocity above which erosion needs watching, in m/s.
pub const EROSION_CAUTION_VELOCITY: f64 = 22.0;

/// Pressure drop above which a single unit is considered excessive, in kg/cm².
pub const PRESSURE_DROP_LIMIT: f64 = 1.0;

const OFF_DESIGN_EFFICIENCY_FLOOR_PERCENT: f64 = 85.0;

/// Efficiency lost per unit of flow-ratio deviation from design, in percent.
const OFF_DESIGN_EFFICIENCY_LOSS_PERCENT: f64 = 2.0;

/// Inlet erosion risk at a given inlet velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErosionRisk {
    Low,
    Caution,
    Severe,
}

impl ErosionRisk {
    /// Classifies an inlet velocity.
    #[must_use]
    pub fn at(inlet_velocity: Velocity) -> Self {
        let v = inlet_velocity.get::<meter_per_second>();
        if v > EROSION_VELOCITY {
            Self::Severe
        } else if v > EROSION_CAUTION_VELOCITY {
            Self::Caution
        } else {
            Self::Low
        }
    }
}

/// Rated performance scaled to a different flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffDesignPoint {
    /// Flow relative to the rated flow.
    pub flow_ratio: f64,
    pub inlet_velocity: Velocity,
    pub pressure_drop: Pressure,
    pub efficiency: Ratio,
    pub erosion: ErosionRisk,
    /// Pressure drop above [`PRESSURE_DROP_LIMIT`].
    pub excessive_pressure_drop: bool,
}

/// Scales rated performance to another flow.
///
/// Inlet velocity scales with flow and pressure drop with its square. Every
/// unit of deviation from the rated flow costs 2 % efficiency, down to a
/// floor of 85 % (or the rated efficiency, if lower).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if the rated flow is not strictly
/// positive or the flow or a rating is negative, or
/// [`ValidationError::NonFinite`] if any input is infinite.
pub fn scale_to_flow(
    ratings: &Ratings,
    rated_flow: MassRate,
    flow: MassRate,
) -> Result<OffDesignPoint, ValidationError> {
    let rated_flow = positive("rated flow rate", rated_flow.get::<kilogram_per_second>())?;
    let flow = non_negative("flow rate", flow.get::<kilogram_per_second>())?;
    let (velocity, pressure_drop, efficiency) = rated_performance(ratings)?;

    let flow_ratio = flow / rated_flow;
    let inlet_velocity = Velocity::new::<meter_per_second>(velocity * flow_ratio);
    let pressure_drop = Pressure::from_kgf_per_cm2(pressure_drop * flow_ratio.powi(2));

    let floor = OFF_DESIGN_EFFICIENCY_FLOOR_PERCENT.min(efficiency);
    let efficiency = (efficiency - OFF_DESIGN_EFFICIENCY_LOSS_PERCENT * (flow_ratio - 1.0).abs())
        .max(floor);

    Ok(OffDesignPoint {
        flow_ratio,
        inlet_velocity,
        pressure_drop,
        efficiency: Ratio::new::<percent>(efficiency),
        erosion: ErosionRisk::at(inlet_velocity),
        excessive_pressure_drop: pressure_drop.kgf_per_cm2() > PRESSURE_DROP_LIMIT,
    })
}

/// Rated performance with part of the inlet blocked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockageScenario {
    pub inlet_velocity: Velocity,
    pub pressure_drop: Pressure,
    pub erosion: ErosionRisk,
    /// Pressure drop above [`PRESSURE_DROP_LIMIT`].
    pub excessive_pressure_drop: bool,
}

/// Rated performance with a fraction of the inlet area blocked.
///
/// The same flow through the remaining area raises the inlet velocity by
/// `1 / (1 - blocked)` and the pressure drop by its square.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if `blocked` is negative or not
/// below 100 %, or if a rating is negative.
pub fn inlet_blockage(
    ratings: &Ratings,
    blocked: Ratio,
) -> Result<BlockageScenario, ValidationError> {
    let blocked = non_negative("blocked fraction", blocked.get::<ratio>())?;
    if blocked >= 1.0 {
        return Err(ValidationError::InvalidInput {
            input: "blocked fraction",
            source: ConstraintError::AboveMaximum,
        });
    }
    let (velocity, pressure_drop, _) = rated_performance(ratings)?;

    let open = 1.0 - blocked;
    let inlet_velocity = Velocity::new::<meter_per_second>(velocity / open);
    let pressure_drop = Pressure::from_kgf_per_cm2(pressure_drop / open.powi(2));

    Ok(BlockageScenario {
        inlet_velocity,
        pressure_drop,
        erosion: ErosionRisk::at(inlet_velocity),
        excessive_pressure_drop: pressure_drop.kgf_per_cm2() > PRESSURE_DROP_LIMIT,
    })
}

/// Rated velocity (m/s), pressure drop (kg/cm²), and efficiency (%).
pub(super) fn rated_performance(ratings: &Ratings) -> Result<(f64, f64, f64), ValidationError> {
    Ok((
        non_negative(
            "inlet velocity",
            ratings.inlet_velocity.get::<meter_per_second>(),
        )?,
        non_negative("pressure drop", ratings.pressure_drop.kgf_per_cm2())?,
        non_negative("efficiency", ratings.efficiency.get::<percent>())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass_rate::kilogram_per_hour;

    use crate::models::separation::core::test_support::test_ratings;

    fn kg_per_hour(value: f64) -> MassRate {
        MassRate::new::<kilogram_per_hour>(value)
    }

    #[test]
    fn rated_flow_reproduces_the_ratings() {
        let point = scale_to_flow(&test_ratings(), kg_per_hour(671.0), kg_per_hour(671.0)).unwrap();

        assert_relative_eq!(point.flow_ratio, 1.0, epsilon = 1e-12);
        assert_relative_eq!(point.inlet_velocity.get::<meter_per_second>(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(point.pressure_drop.kgf_per_cm2(), 0.357, epsilon = 1e-9);
        assert_relative_eq!(point.efficiency.get::<percent>(), 99.2, epsilon = 1e-9);
        assert_eq!(point.erosion, ErosionRisk::Low);
        assert!(!point.excessive_pressure_drop);
    }

    #[test]
    fn velocity_is_linear_and_pressure_drop_quadratic() {
        let point =
            scale_to_flow(&test_ratings(), kg_per_hour(671.0), kg_per_hour(1006.5)).unwrap();

        assert_relative_eq!(point.flow_ratio, 1.5, epsilon = 1e-12);
        assert_relative_eq!(point.inlet_velocity.get::<meter_per_second>(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(point.pressure_drop.kgf_per_cm2(), 0.803_25, epsilon = 1e-9);
        assert_relative_eq!(point.efficiency.get::<percent>(), 98.2, epsilon = 1e-9);
        assert_eq!(point.erosion, ErosionRisk::Severe);
        assert!(!point.excessive_pressure_drop);

        let doubled =
            scale_to_flow(&test_ratings(), kg_per_hour(671.0), kg_per_hour(1342.0)).unwrap();
        assert_relative_eq!(doubled.pressure_drop.kgf_per_cm2(), 1.428, epsilon = 1e-9);
        assert!(doubled.excessive_pressure_drop);
    }

    #[test]
    fn efficiency_is_floored() {
        let point =
            scale_to_flow(&test_ratings(), kg_per_hour(671.0), kg_per_hour(671.0 * 10.0)).unwrap();
        assert_relative_eq!(point.efficiency.get::<percent>(), 85.0, epsilon = 1e-9);

        let poor = Ratings {
            efficiency: Ratio::new::<percent>(60.0),
            ..test_ratings()
        };
        let point = scale_to_flow(&poor, kg_per_hour(671.0), kg_per_hour(1342.0)).unwrap();
        assert_relative_eq!(point.efficiency.get::<percent>(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn flows_are_validated() {
        assert_eq!(
            scale_to_flow(&test_ratings(), kg_per_hour(0.0), kg_per_hour(671.0)),
            Err(ValidationError::InvalidInput {
                input: "rated flow rate",
                source: ConstraintError::Zero,
            })
        );
        assert_eq!(
            scale_to_flow(&test_ratings(), kg_per_hour(671.0), kg_per_hour(f64::INFINITY)),
            Err(ValidationError::NonFinite { value: "flow rate" })
        );
    }

    #[test]
    fn blockage_raises_velocity_and_pressure_drop() {
        let clear = inlet_blockage(&test_ratings(), Ratio::new::<percent>(0.0)).unwrap();
        assert_relative_eq!(clear.inlet_velocity.get::<meter_per_second>(), 20.0, epsilon = 1e-9);
        assert_eq!(clear.erosion, ErosionRisk::Low);

        let partial = inlet_blockage(&test_ratings(), Ratio::new::<percent>(10.0)).unwrap();
        assert_relative_eq!(
            partial.inlet_velocity.get::<meter_per_second>(),
            22.222_222_222,
            epsilon = 1e-6
        );
        assert_eq!(partial.erosion, ErosionRisk::Caution);

        let quarter = inlet_blockage(&test_ratings(), Ratio::new::<percent>(25.0)).unwrap();
        assert_relative_eq!(quarter.pressure_drop.kgf_per_cm2(), 0.634_666_667, epsilon = 1e-6);
        assert_eq!(quarter.erosion, ErosionRisk::Severe);
        assert!(!quarter.excessive_pressure_drop);

        let half = inlet_blockage(&test_ratings(), Ratio::new::<percent>(50.0)).unwrap();
        assert_relative_eq!(half.pressure_drop.kgf_per_cm2(), 1.428, epsilon = 1e-9);
        assert!(half.excessive_pressure_drop);
    }

    #[test]
    fn fully_blocked_inlet_is_rejected() {
        assert_eq!(
            inlet_blockage(&test_ratings(), Ratio::new::<percent>(100.0)),
            Err(ValidationError::InvalidInput {
                input: "blocked fraction",
                source: ConstraintError::AboveMaximum,
            })
        );
        assert!(inlet_blockage(&test_ratings(), Ratio::new::<percent>(-5.0)).is_err());
    }
}
