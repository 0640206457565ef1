use uom::si::f64::{MassDensity, MassRate, Pressure, ThermodynamicTemperature};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

use super::{ValidationError, descriptor::ensure_finite};

/// Normal process operating conditions from the datasheet.
///
/// Values are unchecked until passed to
/// [`EquipmentDescriptor::with_operating_conditions`](super::EquipmentDescriptor::with_operating_conditions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    /// Normal solids mass flow through the unit.
    pub flow_rate: MassRate,
    /// Normal operating temperature.
    pub temperature: ThermodynamicTemperature,
    /// Normal operating pressure, gauge.
    pub pressure: Pressure,
    /// Gas density at operating conditions.
    pub density: MassDensity,
}

impl OperatingConditions {
    /// Checks that the conditions describe a running unit.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidInput`] if the flow rate or density is not
    ///   strictly positive, or if the temperature or pressure is `NaN`.
    /// - [`ValidationError::NonFinite`] if any value is infinite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        StrictlyPositive::new(self.flow_rate).map_err(|source| ValidationError::InvalidInput {
            input: "operating flow rate",
            source,
        })?;
        ensure_finite("operating flow rate", self.flow_rate.is_finite())?;

        if self.temperature.is_nan() {
            return Err(ValidationError::InvalidInput {
                input: "operating temperature",
                source: ConstraintError::NotANumber,
            });
        }
        ensure_finite("operating temperature", self.temperature.is_finite())?;

        if self.pressure.is_nan() {
            return Err(ValidationError::InvalidInput {
                input: "operating pressure",
                source: ConstraintError::NotANumber,
            });
        }
        ensure_finite("operating pressure", self.pressure.is_finite())?;

        StrictlyPositive::new(self.density).map_err(|source| ValidationError::InvalidInput {
            input: "gas density",
            source,
        })?;
        ensure_finite("gas density", self.density.is_finite())?;

        Ok(())
    }
}
