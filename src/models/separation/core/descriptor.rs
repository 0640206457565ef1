use uom::si::{
    f64::{Length, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    length::millimeter,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive, UnitInterval};

use super::{InletOpening, Nozzle, OperatingConditions, ValidationError};

/// Checks that a length is strictly positive and finite.
pub(super) fn checked_length(
    dimension: &'static str,
    value: Length,
) -> Result<Length, ValidationError> {
    let value = StrictlyPositive::new(value)
        .map_err(|_| ValidationError::NonPositiveDimension { dimension })?
        .into_inner();
    ensure_finite(dimension, value.is_finite())?;
    Ok(value)
}

pub(super) fn ensure_finite(value: &'static str, finite: bool) -> Result<(), ValidationError> {
    if finite {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { value })
    }
}

/// Main body dimensions of a piece of equipment.
///
/// Values are unchecked until passed to [`EquipmentDescriptor::create`],
/// which requires each of them to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Outside diameter of the cylindrical body.
    pub cylinder_diameter: Length,
    /// Overall height, cylinder plus cone.
    pub total_height: Length,
    /// Shell wall thickness.
    pub wall_thickness: Length,
}

impl Dimensions {
    /// Creates dimensions from values in millimetres.
    #[must_use]
    pub fn from_millimeters(cylinder_diameter: f64, total_height: f64, wall_thickness: f64) -> Self {
        Self {
            cylinder_diameter: Length::new::<millimeter>(cylinder_diameter),
            total_height: Length::new::<millimeter>(total_height),
            wall_thickness: Length::new::<millimeter>(wall_thickness),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for (dimension, value) in [
            ("cylinder diameter", self.cylinder_diameter),
            ("total height", self.total_height),
            ("wall thickness", self.wall_thickness),
        ] {
            checked_length(dimension, value)?;
        }
        Ok(())
    }
}

/// Design ratings and rated performance.
///
/// Values are unchecked until passed to [`EquipmentDescriptor::create`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratings {
    /// Design pressure, strictly positive.
    pub design_pressure: Pressure,
    /// Design temperature, any value except `NaN`.
    pub design_temperature: ThermodynamicTemperature,
    /// Rated separation efficiency, within 0–100 %.
    pub efficiency: Ratio,
    /// Rated pressure drop across the unit, non-negative.
    pub pressure_drop: Pressure,
    /// Rated inlet velocity, non-negative.
    pub inlet_velocity: Velocity,
}

impl Ratings {
    fn validate(&self) -> Result<(), ValidationError> {
        StrictlyPositive::new(self.design_pressure).map_err(|source| {
            ValidationError::InvalidRating {
                rating: "design pressure",
                source,
            }
        })?;
        ensure_finite("design pressure", self.design_pressure.is_finite())?;

        if self.design_temperature.get::<kelvin>().is_nan() {
            return Err(ValidationError::InvalidRating {
                rating: "design temperature",
                source: ConstraintError::NotANumber,
            });
        }
        ensure_finite("design temperature", self.design_temperature.is_finite())?;

        UnitInterval::new(self.efficiency).map_err(|_| ValidationError::OutOfRangeEfficiency)?;

        NonNegative::new(self.pressure_drop).map_err(|source| ValidationError::InvalidRating {
            rating: "pressure drop",
            source,
        })?;
        ensure_finite("pressure drop", self.pressure_drop.is_finite())?;
        NonNegative::new(self.inlet_velocity).map_err(|source| ValidationError::InvalidRating {
            rating: "inlet velocity",
            source,
        })?;
        ensure_finite("inlet velocity", self.inlet_velocity.is_finite())?;

        Ok(())
    }
}

/// Validated, immutable design data for a piece of process equipment.
///
/// A descriptor is a value object: two descriptors are equal when every
/// field is equal. It is never mutated in place; the `with_*` methods
/// consume it and return an updated copy.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentDescriptor {
    tag_number: String,
    service: String,
    manufacturer: String,
    model: String,
    dimensions: Dimensions,
    ratings: Ratings,
    material: String,
    nozzles: Vec<Nozzle>,
    inlet: Option<InletOpening>,
    operating: Option<OperatingConditions>,
}

impl EquipmentDescriptor {
    /// Creates a validated descriptor.
    ///
    /// Checks run in order (tag, dimensions, ratings) and the first
    /// failure is returned.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyTag`] if the tag number is empty or blank.
    /// - [`ValidationError::NonPositiveDimension`] if any dimension is ≤ 0.
    /// - [`ValidationError::InvalidRating`] if the design pressure is ≤ 0, the
    ///   design temperature is `NaN`, or the pressure drop or inlet velocity
    ///   is negative.
    /// - [`ValidationError::OutOfRangeEfficiency`] if the efficiency lies
    ///   outside 0–100 %.
    /// - [`ValidationError::NonFinite`] if a dimension or rating is infinite.
    pub fn create(
        tag_number: impl Into<String>,
        service: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        dimensions: Dimensions,
        ratings: Ratings,
        material: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let tag_number = tag_number.into();
        if tag_number.trim().is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        dimensions.validate()?;
        ratings.validate()?;

        Ok(Self {
            tag_number,
            service: service.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            dimensions,
            ratings,
            material: material.into(),
            nozzles: Vec::new(),
            inlet: None,
            operating: None,
        })
    }

    /// Returns a copy with new dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveDimension`] if any dimension is ≤ 0,
    /// or [`ValidationError::NonFinite`] if any is infinite.
    pub fn with_dimensions(self, dimensions: Dimensions) -> Result<Self, ValidationError> {
        dimensions.validate()?;
        Ok(Self { dimensions, ..self })
    }

    /// Returns a copy with new ratings.
    ///
    /// # Errors
    ///
    /// Returns the same rating errors as [`EquipmentDescriptor::create`].
    pub fn with_ratings(self, ratings: Ratings) -> Result<Self, ValidationError> {
        ratings.validate()?;
        Ok(Self { ratings, ..self })
    }

    /// Returns a copy with the given nozzle schedule.
    #[must_use]
    pub fn with_nozzles(self, nozzles: Vec<Nozzle>) -> Self {
        Self { nozzles, ..self }
    }

    /// Returns a copy with a known inlet opening.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveDimension`] or
    /// [`ValidationError::NonFinite`] if either side of the opening is out of
    /// range.
    pub fn with_inlet(self, inlet: InletOpening) -> Result<Self, ValidationError> {
        inlet.validate()?;
        Ok(Self {
            inlet: Some(inlet),
            ..self
        })
    }

    /// Returns a copy with the process operating conditions.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`OperatingConditions::validate`].
    pub fn with_operating_conditions(
        self,
        operating: OperatingConditions,
    ) -> Result<Self, ValidationError> {
        operating.validate()?;
        Ok(Self {
            operating: Some(operating),
            ..self
        })
    }

    #[must_use]
    pub fn tag_number(&self) -> &str {
        &self.tag_number
    }

    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }

    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[must_use]
    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    #[must_use]
    pub fn cylinder_diameter(&self) -> Length {
        self.dimensions.cylinder_diameter
    }

    #[must_use]
    pub fn total_height(&self) -> Length {
        self.dimensions.total_height
    }

    #[must_use]
    pub fn wall_thickness(&self) -> Length {
        self.dimensions.wall_thickness
    }

    #[must_use]
    pub fn design_pressure(&self) -> Pressure {
        self.ratings.design_pressure
    }

    #[must_use]
    pub fn design_temperature(&self) -> ThermodynamicTemperature {
        self.ratings.design_temperature
    }

    /// Rated separation efficiency as a ratio (use `get::<percent>()` for %).
    #[must_use]
    pub fn efficiency(&self) -> Ratio {
        self.ratings.efficiency
    }

    #[must_use]
    pub fn pressure_drop(&self) -> Pressure {
        self.ratings.pressure_drop
    }

    #[must_use]
    pub fn inlet_velocity(&self) -> Velocity {
        self.ratings.inlet_velocity
    }

    /// Nozzle schedule, in the order it was supplied.
    #[must_use]
    pub fn nozzles(&self) -> &[Nozzle] {
        &self.nozzles
    }

    /// Inlet opening, when the datasheet states one.
    #[must_use]
    pub fn inlet(&self) -> Option<InletOpening> {
        self.inlet
    }

    #[must_use]
    pub fn operating_conditions(&self) -> Option<&OperatingConditions> {
        self.operating.as_ref()
    }
}
