use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Operating quantities such as a pressure drop or an inlet velocity use this
/// constraint: a stopped cyclone has zero of both, but never less.
///
/// # Examples
///
/// ```
/// use plant3d_models::support::constraint::NonNegative;
/// use uom::si::{f64::Velocity, velocity::meter_per_second};
///
/// let v = NonNegative::new(Velocity::new::<meter_per_second>(20.0)).unwrap();
/// assert_eq!(v.into_inner().get::<meter_per_second>(), 20.0);
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-0.5).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::pascal};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert!(matches!(
            NonNegative::new(-2.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            NonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn pressure_drops() {
        assert!(NonNegative::new(Pressure::new::<pascal>(350.0)).is_ok());
        assert!(NonNegative::new(Pressure::new::<pascal>(0.0)).is_ok());
        assert!(NonNegative::new(Pressure::new::<pascal>(-1.0)).is_err());
    }
}
