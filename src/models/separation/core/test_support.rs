use uom::si::{
    f64::{MassDensity, MassRate, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_hour,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::units::KgfPressure;

use super::{Dimensions, EquipmentDescriptor, InletOpening, OperatingConditions, Ratings};

/// Body of a Fisher-Klosterman size 11 cyclone.
pub(crate) fn test_dimensions() -> Dimensions {
    Dimensions::from_millimeters(279.0, 1117.0, 12.7)
}

/// Ratings from the flash gas cyclone datasheet.
pub(crate) fn test_ratings() -> Ratings {
    Ratings {
        design_pressure: Pressure::from_kgf_per_cm2(24.6),
        design_temperature: ThermodynamicTemperature::new::<degree_celsius>(140.0),
        efficiency: Ratio::new::<percent>(99.2),
        pressure_drop: Pressure::from_kgf_per_cm2(0.357),
        inlet_velocity: Velocity::new::<meter_per_second>(20.0),
    }
}

/// The flash gas cyclone used throughout the tests.
pub(crate) fn flash_gas_cyclone() -> EquipmentDescriptor {
    EquipmentDescriptor::create(
        "32-C-2222",
        "Flash Gas Cyclone",
        "Fisher-Klosterman",
        "Size 11",
        test_dimensions(),
        test_ratings(),
        "CS",
    )
    .expect("test descriptor should be valid")
}

/// Normal operating point from the same datasheet.
pub(crate) fn test_operating_conditions() -> OperatingConditions {
    OperatingConditions {
        flow_rate: MassRate::new::<kilogram_per_hour>(671.0),
        temperature: ThermodynamicTemperature::new::<degree_celsius>(82.2),
        pressure: Pressure::from_kgf_per_cm2(10.2),
        density: MassDensity::new::<kilogram_per_cubic_meter>(24.63),
    }
}

/// The flash gas cyclone with its inlet opening and operating conditions.
pub(crate) fn operating_cyclone() -> EquipmentDescriptor {
    flash_gas_cyclone()
        .with_inlet(InletOpening::from_millimeters(279.0, 140.0))
        .and_then(|d| d.with_operating_conditions(test_operating_conditions()))
        .expect("test operating conditions should be valid")
}
