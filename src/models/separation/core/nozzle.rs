use uom::si::f64::Length;

use super::{ValidationError, descriptor::checked_length};

/// Role of a nozzle, inferred from its service description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NozzleKind {
    Inlet,
    GasOutlet,
    SolidsOutlet,
    Other,
}

/// A nozzle from an equipment nozzle schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Nozzle {
    tag: String,
    service: String,
    size: Length,
    rating: String,
    facing: String,
}

impl Nozzle {
    /// Creates a nozzle entry.
    ///
    /// `rating` is the flange pressure class (e.g. `300#`) and `facing` the
    /// flange face type (e.g. `RF`); both are free text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveDimension`] if `size` is not
    /// strictly positive, or [`ValidationError::NonFinite`] if it is infinite.
    pub fn new(
        tag: impl Into<String>,
        service: impl Into<String>,
        size: Length,
        rating: impl Into<String>,
        facing: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let size = checked_length("nozzle size", size)?;

        Ok(Self {
            tag: tag.into(),
            service: service.into(),
            size,
            rating: rating.into(),
            facing: facing.into(),
        })
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Nominal pipe size.
    #[must_use]
    pub fn size(&self) -> Length {
        self.size
    }

    #[must_use]
    pub fn rating(&self) -> &str {
        &self.rating
    }

    #[must_use]
    pub fn facing(&self) -> &str {
        &self.facing
    }

    /// Classifies the nozzle from its service text, ignoring case.
    ///
    /// Any service mentioning "inlet" is an inlet. An "outlet" is a gas or
    /// solids outlet when the text also mentions "gas" or "solid".
    #[must_use]
    pub fn kind(&self) -> NozzleKind {
        let service = self.service.to_lowercase();
        let outlet = service.contains("outlet");

        if service.contains("inlet") {
            NozzleKind::Inlet
        } else if outlet && service.contains("gas") {
            NozzleKind::GasOutlet
        } else if outlet && service.contains("solid") {
            NozzleKind::SolidsOutlet
        } else {
            NozzleKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{inch, millimeter};

    fn nozzle(service: &str) -> Nozzle {
        Nozzle::new("N1", service, Length::new::<inch>(6.0), "300#", "RF").unwrap()
    }

    #[test]
    fn classifies_by_service() {
        assert_eq!(nozzle("Gas Inlet").kind(), NozzleKind::Inlet);
        assert_eq!(nozzle("GAS OUTLET").kind(), NozzleKind::GasOutlet);
        assert_eq!(
            nozzle("Solids Outlet to Purge Column").kind(),
            NozzleKind::SolidsOutlet
        );
        assert_eq!(
            nozzle("Cleanout Chamber (w/ blind)").kind(),
            NozzleKind::Other
        );
    }

    #[test]
    fn size_is_a_length() {
        let n = nozzle("Gas Inlet");
        assert_relative_eq!(n.size().get::<millimeter>(), 152.4, epsilon = 1e-9);
        assert_eq!(n.rating(), "300#");
        assert_eq!(n.facing(), "RF");
    }

    #[test]
    fn size_must_be_positive() {
        let result = Nozzle::new("N2", "Vent", Length::new::<inch>(0.0), "150#", "RF");
        assert_eq!(
            result,
            Err(ValidationError::NonPositiveDimension {
                dimension: "nozzle size"
            })
        );
    }
}
