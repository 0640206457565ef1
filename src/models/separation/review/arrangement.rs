use uom::si::{
    f64::{Length, MassRate, Pressure, Ratio, Velocity},
    length::micrometer,
    mass_rate::kilogram_per_second,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::{
    models::separation::{Ratings, ValidationError},
    support::{
        constraint::{ConstraintError, UnitInterval},
        units::KgfPressure,
    },
};

use super::{
    flow::rated_performance,
    grade::{BASE_CUT_SIZE_MICROMETERS, GradeCurve, cut_size},
    positive,
};

/// Total pressure drop above which a series train is considered excessive, in kg/cm².
pub const SERIES_PRESSURE_DROP_LIMIT: f64 = 1.5;

/// Inlet velocity below which a parallel unit separates poorly, in m/s.
const LOW_VELOCITY: f64 = 15.0;

/// Particle size used to compare parallel arrangements, in µm.
const REFERENCE_PARTICLE_MICROMETERS: f64 = 10.0;

/// Identical units sharing one flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelArrangement {
    pub units: u32,
    pub flow_per_unit: MassRate,
    pub inlet_velocity: Velocity,
    pub pressure_drop: Pressure,
    pub cut_size: Length,
    /// Grade efficiency at 10 µm.
    pub efficiency: Ratio,
    /// Inlet velocity below 15 m/s.
    pub low_velocity: bool,
}

/// Splits the rated flow of one unit across `units` identical units.
///
/// Each unit sees `1 / units` of the flow, so its inlet velocity falls by
/// that factor and its pressure drop by its square, while its cut size grows.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if `units` is zero, the flow is
/// not strictly positive, or a rating is negative.
pub fn parallel(
    ratings: &Ratings,
    total_flow: MassRate,
    units: u32,
) -> Result<ParallelArrangement, ValidationError> {
    let count = unit_count("units", units)?;
    let total_flow = positive("flow rate", total_flow.get::<kilogram_per_second>())?;
    let (velocity, pressure_drop, _) = rated_performance(ratings)?;

    let inlet_velocity = Velocity::new::<meter_per_second>(velocity / count);
    let d50 = cut_size(
        Length::new::<micrometer>(BASE_CUT_SIZE_MICROMETERS),
        1.0 / count,
    )?;
    let efficiency = GradeCurve::new(d50)?
        .efficiency(Length::new::<micrometer>(REFERENCE_PARTICLE_MICROMETERS))?;

    Ok(ParallelArrangement {
        units,
        flow_per_unit: MassRate::new::<kilogram_per_second>(total_flow / count),
        inlet_velocity,
        pressure_drop: Pressure::from_kgf_per_cm2(pressure_drop / count.powi(2)),
        cut_size: d50,
        efficiency,
        low_velocity: inlet_velocity.get::<meter_per_second>() < LOW_VELOCITY,
    })
}

/// Identical units in series, each treating the outlet of the one before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesArrangement {
    pub stages: u32,
    pub pressure_drop: Pressure,
    pub efficiency: Ratio,
    /// Total pressure drop above [`SERIES_PRESSURE_DROP_LIMIT`].
    pub excessive_pressure_drop: bool,
}

/// Chains `stages` identical units at their rated flow.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if `stages` is zero, a rating is
/// negative, or the rated efficiency is above 100 %.
pub fn series(ratings: &Ratings, stages: u32) -> Result<SeriesArrangement, ValidationError> {
    let count = unit_count("stages", stages)?;
    let (_, pressure_drop, _) = rated_performance(ratings)?;
    let pressure_drop = Pressure::from_kgf_per_cm2(pressure_drop * count);

    Ok(SeriesArrangement {
        stages,
        pressure_drop,
        efficiency: series_efficiency(ratings.efficiency, stages)?,
        excessive_pressure_drop: pressure_drop.kgf_per_cm2() > SERIES_PRESSURE_DROP_LIMIT,
    })
}

/// Overall efficiency of `stages` units in series: `1 - (1 - η)^stages`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if `stages` is zero or the stage
/// efficiency is outside 0–100 %.
///
/// # Examples
///
/// ```
/// use plant3d_models::models::separation::review::series_efficiency;
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let eta = series_efficiency(Ratio::new::<percent>(90.0), 2).unwrap();
/// assert!((eta.get::<percent>() - 99.0).abs() < 1e-9);
/// ```
pub fn series_efficiency(stage: Ratio, stages: u32) -> Result<Ratio, ValidationError> {
    let count = unit_count("stages", stages)?;
    let stage = UnitInterval::new(stage.get::<ratio>())
        .map_err(|source| ValidationError::InvalidInput {
            input: "stage efficiency",
            source,
        })?
        .into_inner();

    Ok(Ratio::new::<ratio>(1.0 - (1.0 - stage).powf(count)))
}

fn unit_count(input: &'static str, count: u32) -> Result<f64, ValidationError> {
    if count == 0 {
        return Err(ValidationError::InvalidInput {
            input,
            source: ConstraintError::Zero,
        });
    }
    Ok(f64::from(count))
}
