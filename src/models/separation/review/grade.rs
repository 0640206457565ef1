use uom::si::{
    f64::{Length, Ratio},
    length::micrometer,
    ratio::percent,
};

use crate::models::separation::ValidationError;

use super::positive;

/// Cut size of a unit at its rated flow, in µm.
pub const BASE_CUT_SIZE_MICROMETERS: f64 = 5.0;

/// Steepness of the grade efficiency curve.
pub const GRADE_SLOPE: f64 = 2.5;

/// Cut size at a flow ratio relative to the rated flow.
///
/// The cut size falls with the square root of the flow: `d50 / √ratio`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInput`] if either input is not strictly
/// positive, or [`ValidationError::NonFinite`] if either is infinite.
///
/// # Examples
///
/// ```
/// use plant3d_models::models::separation::review::cut_size;
/// use uom::si::{f64::Length, length::micrometer};
///
/// let d50 = cut_size(Length::new::<micrometer>(5.0), 4.0).unwrap();
/// assert!((d50.get::<micrometer>() - 2.5).abs() < 1e-9);
/// ```
pub fn cut_size(rated: Length, flow_ratio: f64) -> Result<Length, ValidationError> {
    let rated = positive("cut size", rated.get::<micrometer>())?;
    let flow_ratio = positive("flow ratio", flow_ratio)?;
    Ok(Length::new::<micrometer>(rated / flow_ratio.sqrt()))
}

/// Fractional collection efficiency by particle size.
///
/// `η(d) = 1 / (1 + (d50 / d)^2.5)`, so particles at the cut size are
/// collected half the time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeCurve {
    cut_size: Length,
}

impl GradeCurve {
    /// Creates a curve with the given cut size.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidInput`] if the cut size is not
    /// strictly positive, or [`ValidationError::NonFinite`] if it is infinite.
    pub fn new(cut_size: Length) -> Result<Self, ValidationError> {
        positive("cut size", cut_size.get::<micrometer>())?;
        Ok(Self { cut_size })
    }

    /// The curve of a unit running at its rated flow.
    #[must_use]
    pub fn at_rated_flow() -> Self {
        Self {
            cut_size: Length::new::<micrometer>(BASE_CUT_SIZE_MICROMETERS),
        }
    }

    #[must_use]
    pub fn cut_size(&self) -> Length {
        self.cut_size
    }

    /// Collection efficiency for particles of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidInput`] if the particle size is not
    /// strictly positive, or [`ValidationError::NonFinite`] if it is infinite.
    pub fn efficiency(&self, particle: Length) -> Result<Ratio, ValidationError> {
        let particle = positive("particle size", particle.get::<micrometer>())?;
        let ratio = self.cut_size.get::<micrometer>() / particle;
        Ok(Ratio::new::<percent>(100.0 / (1.0 + ratio.powf(GRADE_SLOPE))))
    }
}
