use uom::si::{
    f64::{Area, Length},
    length::millimeter,
};

use crate::support::constraint::StrictlyPositive;

use super::{EquipmentDescriptor, ValidationError, descriptor::checked_length};

/// Body proportions of a cyclone, as multiples of the cylinder diameter `D`.
///
/// The [`Default`] is the Stairmand high-efficiency design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    pub cylinder_height: f64,
    pub cone_height: f64,
    /// Diameter at the bottom of the cone, which is also the solids outlet.
    pub cone_outlet_diameter: f64,
    /// Vortex finder diameter.
    pub gas_outlet_diameter: f64,
    /// Vortex finder insertion depth.
    pub gas_outlet_height: f64,
    /// Length of the tangential inlet duct.
    pub inlet_length: f64,
}

impl Proportions {
    /// Stairmand high-efficiency proportions.
    #[must_use]
    pub fn stairmand() -> Self {
        Self {
            cylinder_height: 1.5,
            cone_height: 2.5,
            cone_outlet_diameter: 0.375,
            gas_outlet_diameter: 0.5,
            gas_outlet_height: 0.5,
            inlet_length: 0.5,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for (proportion, value) in [
            ("cylinder height", self.cylinder_height),
            ("cone height", self.cone_height),
            ("cone outlet diameter", self.cone_outlet_diameter),
            ("gas outlet diameter", self.gas_outlet_diameter),
            ("gas outlet height", self.gas_outlet_height),
            ("inlet length", self.inlet_length),
        ] {
            StrictlyPositive::new(value)
                .map_err(|_| ValidationError::InvalidProportion { proportion })?;
            if !value.is_finite() {
                return Err(ValidationError::InvalidProportion { proportion });
            }
        }

        // Outlets must be narrower than the body they leave.
        for (proportion, value) in [
            ("cone outlet diameter", self.cone_outlet_diameter),
            ("gas outlet diameter", self.gas_outlet_diameter),
        ] {
            if value >= 1.0 {
                return Err(ValidationError::InvalidProportion { proportion });
            }
        }

        Ok(())
    }
}

impl Default for Proportions {
    fn default() -> Self {
        Self::stairmand()
    }
}

/// Rectangular tangential inlet opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletOpening {
    pub height: Length,
    pub width: Length,
}

impl InletOpening {
    /// Creates an opening from values in millimetres.
    #[must_use]
    pub fn from_millimeters(height: f64, width: f64) -> Self {
        Self {
            height: Length::new::<millimeter>(height),
            width: Length::new::<millimeter>(width),
        }
    }

    pub(super) fn validate(&self) -> Result<(), ValidationError> {
        checked_length("inlet height", self.height)?;
        checked_length("inlet width", self.width)?;
        Ok(())
    }

    /// Cross-sectional flow area of the opening.
    #[must_use]
    pub fn area(&self) -> Area {
        self.height * self.width
    }
}

/// An 11 in × 5.5 in opening (279 mm × 140 mm).
impl Default for InletOpening {
    fn default() -> Self {
        Self::from_millimeters(279.0, 140.0)
    }
}

/// Resolved body geometry of a cyclone separator.
///
/// Everything a renderer needs to build the body: a cylinder on top of a
/// truncated cone, a vortex finder through the roof, and a tangential inlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycloneGeometry {
    pub cylinder_diameter: Length,
    pub cylinder_height: Length,
    pub cone_height: Length,
    pub cone_outlet_diameter: Length,
    pub gas_outlet_diameter: Length,
    pub gas_outlet_height: Length,
    pub solids_outlet_diameter: Length,
    pub inlet: InletOpening,
    pub inlet_length: Length,
    pub wall_thickness: Length,
}

impl CycloneGeometry {
    /// Resolves the geometry of a cyclone with the given body diameter.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NonPositiveDimension`] if the diameter, wall
    ///   thickness, or an inlet dimension is not strictly positive, or if the
    ///   wall is so thick that no bore remains.
    /// - [`ValidationError::NonFinite`] if any of them is infinite.
    /// - [`ValidationError::InvalidProportion`] if a proportion is not
    ///   strictly positive or an outlet is not narrower than the cylinder.
    pub fn new(
        cylinder_diameter: Length,
        wall_thickness: Length,
        inlet: InletOpening,
        proportions: &Proportions,
    ) -> Result<Self, ValidationError> {
        checked_length("cylinder diameter", cylinder_diameter)?;
        checked_length("wall thickness", wall_thickness)?;
        inlet.validate()?;
        StrictlyPositive::new(cylinder_diameter - wall_thickness * 2.0).map_err(|_| {
            ValidationError::NonPositiveDimension {
                dimension: "bore diameter",
            }
        })?;
        proportions.validate()?;

        let d = cylinder_diameter;
        let cone_outlet_diameter = d * proportions.cone_outlet_diameter;

        Ok(Self {
            cylinder_diameter: d,
            cylinder_height: d * proportions.cylinder_height,
            cone_height: d * proportions.cone_height,
            cone_outlet_diameter,
            gas_outlet_diameter: d * proportions.gas_outlet_diameter,
            gas_outlet_height: d * proportions.gas_outlet_height,
            solids_outlet_diameter: cone_outlet_diameter,
            inlet,
            inlet_length: d * proportions.inlet_length,
            wall_thickness,
        })
    }

    /// Resolves the geometry from a descriptor's diameter, wall thickness,
    /// and inlet opening.
    ///
    /// A descriptor without a stated inlet gets the default opening.
    ///
    /// # Errors
    ///
    /// Same as [`CycloneGeometry::new`].
    pub fn from_descriptor(
        descriptor: &EquipmentDescriptor,
        proportions: &Proportions,
    ) -> Result<Self, ValidationError> {
        Self::new(
            descriptor.cylinder_diameter(),
            descriptor.wall_thickness(),
            descriptor.inlet().unwrap_or_default(),
            proportions,
        )
    }

    /// Height of the cylinder plus the cone.
    #[must_use]
    pub fn total_height(&self) -> Length {
        self.cylinder_height + self.cone_height
    }

    /// Inside diameter of the cylinder.
    #[must_use]
    pub fn bore_diameter(&self) -> Length {
        self.cylinder_diameter - self.wall_thickness * 2.0
    }
}
