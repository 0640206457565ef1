use uom::si::{f64::Pressure, pressure::pascal};

/// Pascals per kilogram-force per square centimetre (standard gravity).
const PASCAL_PER_KGF_CM2: f64 = 98_066.5;

/// Extension trait for kilogram-force per square centimetre pressures.
///
/// Values are treated as plain pressure differences from the reference, so
/// a gauge reading converts to a gauge [`Pressure`] and an absolute reading
/// to an absolute one. No atmospheric offset is applied.
pub trait KgfPressure {
    /// Creates a pressure from a value in kgf/cm².
    fn from_kgf_per_cm2(value: f64) -> Self;

    /// Returns the pressure in kgf/cm².
    fn kgf_per_cm2(&self) -> f64;
}

impl KgfPressure for Pressure {
    fn from_kgf_per_cm2(value: f64) -> Self {
        Pressure::new::<pascal>(value * PASCAL_PER_KGF_CM2)
    }

    fn kgf_per_cm2(&self) -> f64 {
        self.get::<pascal>() / PASCAL_PER_KGF_CM2
    }
}
