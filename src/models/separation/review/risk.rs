use crate::models::separation::{Ratings, ValidationError};

use super::{
    flow::rated_performance,
    margin::{DesignMargins, MarginRating},
};

const HIGH_SCORE: f64 = 100.0;
const MEDIUM_SCORE: f64 = 50.0;
const LOW_SCORE: f64 = 20.0;

/// Overall risk of operating a unit as rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
}

/// One scored item of a risk assessment, 100 being no concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactor {
    pub name: &'static str,
    pub score: f64,
}

/// Scored risk factors of one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    factors: [RiskFactor; 5],
}

impl RiskAssessment {
    /// Pressure margin, temperature margin, inlet velocity, pressure drop,
    /// and efficiency, in that order.
    #[must_use]
    pub fn factors(&self) -> &[RiskFactor] {
        &self.factors
    }

    /// Mean score of all factors.
    #[must_use]
    pub fn overall(&self) -> f64 {
        let total: f64 = self.factors.iter().map(|f| f.score).sum();
        total / self.factors.len() as f64
    }

    /// Safe above 70, caution above 40, otherwise danger.
    #[must_use]
    pub fn level(&self) -> RiskLevel {
        let overall = self.overall();
        if overall > 70.0 {
            RiskLevel::Safe
        } else if overall > 40.0 {
            RiskLevel::Caution
        } else {
            RiskLevel::Danger
        }
    }
}

/// Scores a unit's design margins and rated performance.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if a rating is negative, or
/// [`ValidationError::NonFinite`] if one is infinite.
///
/// # Examples
///
/// ```
/// use plant3d_models::models::separation::review::{
///     DesignMargins, RiskLevel, assess_risk, pressure_margin, temperature_margin,
/// };
/// use plant3d_models::models::separation::Ratings;
/// use plant3d_models::support::units::KgfPressure;
/// use uom::si::{
///     f64::{Pressure, Ratio, ThermodynamicTemperature, Velocity},
///     ratio::percent,
///     thermodynamic_temperature::degree_celsius,
///     velocity::meter_per_second,
/// };
///
/// let celsius = |value| ThermodynamicTemperature::new::<degree_celsius>(value);
/// let ratings = Ratings {
///     design_pressure: Pressure::from_kgf_per_cm2(24.6),
///     design_temperature: celsius(140.0),
///     efficiency: Ratio::new::<percent>(99.2),
///     pressure_drop: Pressure::from_kgf_per_cm2(0.357),
///     inlet_velocity: Velocity::new::<meter_per_second>(20.0),
/// };
/// let margins = DesignMargins {
///     pressure: pressure_margin(ratings.design_pressure, Pressure::from_kgf_per_cm2(10.2))?,
///     temperature: temperature_margin(ratings.design_temperature, celsius(82.2))?,
/// };
///
/// let risk = assess_risk(&margins, &ratings)?;
/// assert_eq!(risk.level(), RiskLevel::Safe);
/// # Ok::<(), plant3d_models::models::separation::ValidationError>(())
/// ```
pub fn assess_risk(
    margins: &DesignMargins,
    ratings: &Ratings,
) -> Result<RiskAssessment, ValidationError> {
    let (velocity, pressure_drop, efficiency) = rated_performance(ratings)?;

    let velocity_score = if velocity < 20.0 {
        HIGH_SCORE
    } else if velocity < 22.0 {
        MEDIUM_SCORE
    } else {
        LOW_SCORE
    };
    let pressure_drop_score = if pressure_drop < 0.5 {
        HIGH_SCORE
    } else if pressure_drop < 0.7 {
        MEDIUM_SCORE
    } else {
        LOW_SCORE
    };
    let efficiency_score = if efficiency > 95.0 {
        HIGH_SCORE
    } else {
        MEDIUM_SCORE
    };

    Ok(RiskAssessment {
        factors: [
            RiskFactor {
                name: "Pressure Margin",
                score: margin_score(margins.pressure.rating),
            },
            RiskFactor {
                name: "Temperature Margin",
                score: margin_score(margins.temperature.rating),
            },
            RiskFactor {
                name: "Inlet Velocity",
                score: velocity_score,
            },
            RiskFactor {
                name: "Pressure Drop",
                score: pressure_drop_score,
            },
            RiskFactor {
                name: "Efficiency",
                score: efficiency_score,
            },
        ],
    })
}

fn margin_score(rating: MarginRating) -> f64 {
    match rating {
        MarginRating::Sufficient => HIGH_SCORE,
        MarginRating::Adequate => MEDIUM_SCORE,
        MarginRating::Insufficient => LOW_SCORE,
    }
}
