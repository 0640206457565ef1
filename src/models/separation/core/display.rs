use uom::si::{
    length::{inch, millimeter},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_hour,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::units::KgfPressure;

use super::{EquipmentDescriptor, Nozzle};

/// Placeholder for free-text fields that were left empty.
const NOT_AVAILABLE: &str = "N/A";

/// A labelled value ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub label: String,
    pub value: String,
}

impl DisplayField {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    fn text(label: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            Self::new(label, NOT_AVAILABLE)
        } else {
            Self::new(label, value)
        }
    }
}

impl EquipmentDescriptor {
    /// Returns the descriptor as ordered `(label, value)` rows for display.
    ///
    /// Identity comes first, then dimensions, ratings, and performance. The
    /// inlet opening and operating conditions follow when known, then one row
    /// per nozzle. Empty text renders as `N/A`.
    ///
    /// # Example
    ///
    /// ```
    /// use plant3d_models::models::separation::{Dimensions, EquipmentDescriptor, Ratings};
    /// use plant3d_models::support::units::KgfPressure;
    /// use uom::si::{
    ///     f64::{Pressure, Ratio, ThermodynamicTemperature, Velocity},
    ///     ratio::percent,
    ///     thermodynamic_temperature::degree_celsius,
    ///     velocity::meter_per_second,
    /// };
    ///
    /// let cyclone = EquipmentDescriptor::create(
    ///     "32-C-2222",
    ///     "Flash Gas Cyclone",
    ///     "",
    ///     "Size 11",
    ///     Dimensions::from_millimeters(279.0, 1117.0, 12.7),
    ///     Ratings {
    ///         design_pressure: Pressure::from_kgf_per_cm2(24.6),
    ///         design_temperature: ThermodynamicTemperature::new::<degree_celsius>(140.0),
    ///         efficiency: Ratio::new::<percent>(99.2),
    ///         pressure_drop: Pressure::from_kgf_per_cm2(0.357),
    ///         inlet_velocity: Velocity::new::<meter_per_second>(20.0),
    ///     },
    ///     "CS",
    /// )
    /// .unwrap();
    ///
    /// let fields = cyclone.to_display_fields();
    /// assert_eq!(fields[0].label, "Tag Number");
    /// assert_eq!(fields[0].value, "32-C-2222");
    /// assert_eq!(fields[2].value, "N/A");
    /// ```
    #[must_use]
    pub fn to_display_fields(&self) -> Vec<DisplayField> {
        let mut fields = vec![
            DisplayField::text("Tag Number", self.tag_number()),
            DisplayField::text("Service", self.service()),
            DisplayField::text("Manufacturer", self.manufacturer()),
            DisplayField::text("Model", self.model()),
            DisplayField::new(
                "Cylinder Diameter",
                format!("{:.1} mm", self.cylinder_diameter().get::<millimeter>()),
            ),
            DisplayField::new(
                "Total Height",
                format!("{:.1} mm", self.total_height().get::<millimeter>()),
            ),
            DisplayField::new(
                "Wall Thickness",
                format!("{:.1} mm", self.wall_thickness().get::<millimeter>()),
            ),
            DisplayField::new(
                "Design Pressure",
                format!("{:.2} kg/cm²(g)", self.design_pressure().kgf_per_cm2()),
            ),
            DisplayField::new(
                "Design Temperature",
                format!(
                    "{:.1} °C",
                    self.design_temperature().get::<degree_celsius>()
                ),
            ),
            DisplayField::text("Material", self.material()),
            DisplayField::new(
                "Efficiency",
                format!("{:.2} %", self.efficiency().get::<percent>()),
            ),
            DisplayField::new(
                "Pressure Drop",
                format!("{:.3} kg/cm²", self.pressure_drop().kgf_per_cm2()),
            ),
            DisplayField::new(
                "Inlet Velocity",
                format!(
                    "{:.1} m/s",
                    self.inlet_velocity().get::<meter_per_second>()
                ),
            ),
        ];

        if let Some(inlet) = self.inlet() {
            fields.push(DisplayField::new(
                "Inlet Opening",
                format!(
                    "{:.1} × {:.1} mm",
                    inlet.height.get::<millimeter>(),
                    inlet.width.get::<millimeter>()
                ),
            ));
        }

        if let Some(operating) = self.operating_conditions() {
            fields.extend([
                DisplayField::new(
                    "Operating Flow Rate",
                    format!("{:.1} kg/h", operating.flow_rate.get::<kilogram_per_hour>()),
                ),
                DisplayField::new(
                    "Operating Temperature",
                    format!("{:.1} °C", operating.temperature.get::<degree_celsius>()),
                ),
                DisplayField::new(
                    "Operating Pressure",
                    format!("{:.2} kg/cm²(g)", operating.pressure.kgf_per_cm2()),
                ),
                DisplayField::new(
                    "Gas Density",
                    format!(
                        "{:.2} kg/m³",
                        operating.density.get::<kilogram_per_cubic_meter>()
                    ),
                ),
            ]);
        }

        fields.extend(self.nozzles().iter().map(nozzle_field));
        fields
    }
}

fn nozzle_field(nozzle: &Nozzle) -> DisplayField {
    let size = nozzle.size().get::<inch>();
    let size = if (size - size.round()).abs() < 1e-9 {
        format!("{size:.0}\"")
    } else {
        format!("{size:.1}\"")
    };

    let service = if nozzle.service().trim().is_empty() {
        NOT_AVAILABLE
    } else {
        nozzle.service()
    };

    DisplayField::new(
        format!("Nozzle {}", nozzle.tag()),
        format!("{service}, {size} {} {}", nozzle.rating(), nozzle.facing())
            .trim_end()
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::f64::Length;

    use crate::models::separation::core::test_support::{flash_gas_cyclone, operating_cyclone};

    fn pairs(fields: &[DisplayField]) -> Vec<(&str, &str)> {
        fields
            .iter()
            .map(|f| (f.label.as_str(), f.value.as_str()))
            .collect()
    }

    #[test]
    fn fields_are_ordered_and_formatted() {
        let fields = flash_gas_cyclone().to_display_fields();

        assert_eq!(
            pairs(&fields),
            vec![
                ("Tag Number", "32-C-2222"),
                ("Service", "Flash Gas Cyclone"),
                ("Manufacturer", "Fisher-Klosterman"),
                ("Model", "Size 11"),
                ("Cylinder Diameter", "279.0 mm"),
                ("Total Height", "1117.0 mm"),
                ("Wall Thickness", "12.7 mm"),
                ("Design Pressure", "24.60 kg/cm²(g)"),
                ("Design Temperature", "140.0 °C"),
                ("Material", "CS"),
                ("Efficiency", "99.20 %"),
                ("Pressure Drop", "0.357 kg/cm²"),
                ("Inlet Velocity", "20.0 m/s"),
            ]
        );
    }

    #[test]
    fn nozzles_follow_the_descriptor_rows() {
        let nozzles = vec![
            Nozzle::new("412", "Gas Inlet", Length::new::<inch>(14.0), "300#", "RF").unwrap(),
            Nozzle::new("B1", "", Length::new::<inch>(1.5), "150#", "").unwrap(),
        ];
        let fields = flash_gas_cyclone().with_nozzles(nozzles).to_display_fields();

        assert_eq!(fields.len(), 15);
        assert_eq!(fields[13].label, "Nozzle 412");
        assert_eq!(fields[13].value, "Gas Inlet, 14\" 300# RF");
        assert_eq!(fields[14].label, "Nozzle B1");
        assert_eq!(fields[14].value, "N/A, 1.5\" 150#");
    }

    #[test]
    fn inlet_and_operating_rows_come_before_nozzles() {
        let nozzle =
            Nozzle::new("412", "Gas Inlet", Length::new::<inch>(14.0), "300#", "RF").unwrap();
        let fields = operating_cyclone().with_nozzles(vec![nozzle]).to_display_fields();

        assert_eq!(
            pairs(&fields[13..]),
            vec![
                ("Inlet Opening", "279.0 × 140.0 mm"),
                ("Operating Flow Rate", "671.0 kg/h"),
                ("Operating Temperature", "82.2 °C"),
                ("Operating Pressure", "10.20 kg/cm²(g)"),
                ("Gas Density", "24.63 kg/m³"),
                ("Nozzle 412", "Gas Inlet, 14\" 300# RF"),
            ]
        );
    }
}
