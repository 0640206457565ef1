use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::models::separation::{EquipmentDescriptor, ValidationError};

use super::{finite, positive};

/// Highest operating temperature for carbon steel without further review, in °C.
pub const CARBON_STEEL_TEMPERATURE_LIMIT: f64 = 400.0;

const PRESSURE_SUFFICIENT_PERCENT: f64 = 100.0;
const PRESSURE_ADEQUATE_PERCENT: f64 = 50.0;
const TEMPERATURE_SUFFICIENT_PERCENT: f64 = 50.0;
const TEMPERATURE_ADEQUATE_PERCENT: f64 = 30.0;

/// How comfortably a design condition covers the operating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginRating {
    Sufficient,
    Adequate,
    Insufficient,
}

impl MarginRating {
    fn from_bands(percent: f64, sufficient: f64, adequate: f64) -> Self {
        if percent > sufficient {
            Self::Sufficient
        } else if percent > adequate {
            Self::Adequate
        } else {
            Self::Insufficient
        }
    }
}

/// Excess of a design condition over the operating condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignMargin {
    /// `(design - operating) / operating`, in percent.
    pub percent: f64,
    pub rating: MarginRating,
}

/// Pressure and temperature margins of one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignMargins {
    pub pressure: DesignMargin,
    pub temperature: DesignMargin,
}

/// Margin of the design pressure over the operating pressure, both gauge.
///
/// Sufficient above 100 %, adequate above 50 %.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if the operating pressure is not
/// strictly positive, or [`ValidationError::NonFinite`] if either pressure is
/// infinite or `NaN`.
pub fn pressure_margin(
    design: Pressure,
    operating: Pressure,
) -> Result<DesignMargin, ValidationError> {
    let design = finite("design pressure", design.get::<pascal>())?;
    let operating = positive("operating pressure", operating.get::<pascal>())?;

    let percent = (design - operating) / operating * 100.0;
    Ok(DesignMargin {
        percent,
        rating: MarginRating::from_bands(
            percent,
            PRESSURE_SUFFICIENT_PERCENT,
            PRESSURE_ADEQUATE_PERCENT,
        ),
    })
}

/// Margin of the design temperature over the operating temperature.
///
/// Temperatures are compared on the Celsius scale, as datasheets state them.
/// Sufficient above 50 %, adequate above 30 %.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if the operating temperature is
/// not above 0 °C, or [`ValidationError::NonFinite`] if either temperature is
/// infinite or `NaN`.
pub fn temperature_margin(
    design: ThermodynamicTemperature,
    operating: ThermodynamicTemperature,
) -> Result<DesignMargin, ValidationError> {
    let design = finite("design temperature", design.get::<degree_celsius>())?;
    let operating = positive("operating temperature", operating.get::<degree_celsius>())?;

    let percent = (design - operating) / operating * 100.0;
    Ok(DesignMargin {
        percent,
        rating: MarginRating::from_bands(
            percent,
            TEMPERATURE_SUFFICIENT_PERCENT,
            TEMPERATURE_ADEQUATE_PERCENT,
        ),
    })
}

/// Design margins of a descriptor over its operating conditions.
///
/// # Errors
///
/// Returns [`ValidationError::MissingOperatingConditions`] if the descriptor
/// has none, otherwise the errors of [`pressure_margin`] and
/// [`temperature_margin`].
pub fn design_margins(descriptor: &EquipmentDescriptor) -> Result<DesignMargins, ValidationError> {
    let operating = descriptor
        .operating_conditions()
        .ok_or(ValidationError::MissingOperatingConditions)?;

    Ok(DesignMargins {
        pressure: pressure_margin(descriptor.design_pressure(), operating.pressure)?,
        temperature: temperature_margin(descriptor.design_temperature(), operating.temperature)?,
    })
}

/// Whether the material can run at the operating temperature without review.
///
/// Only carbon steel (`CS`) up to [`CARBON_STEEL_TEMPERATURE_LIMIT`] passes;
/// anything else goes to a materials engineer.
#[must_use]
pub fn material_is_suitable(material: &str, operating: ThermodynamicTemperature) -> bool {
    material.trim().eq_ignore_ascii_case("CS")
        && operating.get::<degree_celsius>() <= CARBON_STEEL_TEMPERATURE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::separation::core::test_support::{flash_gas_cyclone, operating_cyclone},
        support::{constraint::ConstraintError, units::KgfPressure},
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn flash_gas_cyclone_margins() {
        let margins = design_margins(&operating_cyclone()).unwrap();

        assert_relative_eq!(margins.pressure.percent, 141.176_470_588, epsilon = 1e-6);
        assert_eq!(margins.pressure.rating, MarginRating::Sufficient);
        assert_relative_eq!(margins.temperature.percent, 70.316_301_703, epsilon = 1e-6);
        assert_eq!(margins.temperature.rating, MarginRating::Sufficient);
    }

    #[test]
    fn pressure_bands() {
        let operating = Pressure::from_kgf_per_cm2(10.0);
        let rating = |design: f64| {
            pressure_margin(Pressure::from_kgf_per_cm2(design), operating)
                .unwrap()
                .rating
        };

        assert_eq!(rating(21.0), MarginRating::Sufficient);
        assert_eq!(rating(18.0), MarginRating::Adequate);
        assert_eq!(rating(14.0), MarginRating::Insufficient);
        assert_eq!(rating(8.0), MarginRating::Insufficient);
    }

    #[test]
    fn temperature_bands() {
        let rating = |design: f64| temperature_margin(celsius(design), celsius(100.0)).unwrap().rating;

        assert_eq!(rating(160.0), MarginRating::Sufficient);
        assert_eq!(rating(140.0), MarginRating::Adequate);
        assert_eq!(rating(120.0), MarginRating::Insufficient);
    }

    #[test]
    fn operating_point_must_be_positive() {
        assert_eq!(
            pressure_margin(
                Pressure::from_kgf_per_cm2(24.6),
                Pressure::from_kgf_per_cm2(0.0)
            ),
            Err(ValidationError::InvalidInput {
                input: "operating pressure",
                source: ConstraintError::Zero,
            })
        );
        assert!(temperature_margin(celsius(140.0), celsius(-10.0)).is_err());
        assert_eq!(
            temperature_margin(celsius(f64::INFINITY), celsius(80.0)),
            Err(ValidationError::NonFinite {
                value: "design temperature"
            })
        );
    }

    #[test]
    fn margins_need_operating_conditions() {
        assert_eq!(
            design_margins(&flash_gas_cyclone()),
            Err(ValidationError::MissingOperatingConditions)
        );
    }

    #[test]
    fn carbon_steel_limit() {
        assert!(material_is_suitable("CS", celsius(82.2)));
        assert!(material_is_suitable(" cs ", celsius(399.0)));
        assert!(!material_is_suitable("CS", celsius(450.0)));
        assert!(!material_is_suitable("SS316", celsius(82.2)));
    }
}
