//! Equipment datasheet extraction.
//!
//! Builds an [`EquipmentDescriptor`] from the plain text of a cyclone
//! datasheet. Turning a PDF into text is left to the caller; this module
//! only reads lines.
//!
//! Each line is matched case-insensitively by its leading label, which must
//! end at a word boundary (`Item Notes` is not `Item No`). The value is
//! whatever follows the first `:` on the line, or the rest of the line when
//! there is no colon, so both of these forms work:
//!
//! ```text
//! Pressure Drop (kg/cm2) : 0.357 @ Max Flowrate
//! Design Pressure 24.6 kg/cm2(g)
//! ```
//!
//! Numeric fields take the first number in the value; trailing unit symbols
//! such as `%` are ignored. The first line matching a label with a
//! non-empty value wins. A parenthesised note after the manufacturer, as in
//! `Fisher-Klosterman (NOTE 1)`, is dropped.
//!
//! | Label                         | Field              | Unit      |
//! |-------------------------------|--------------------|-----------|
//! | `Item No`, `Tag No`           | tag number         |           |
//! | `Service of Unit`, `Service`  | service            |           |
//! | `Manufacturer`, `Vendor`      | manufacturer       |           |
//! | `Model`, `Size`               | model              |           |
//! | `Material`                    | material           |           |
//! | `Cylinder Diameter`           | cylinder diameter  | mm        |
//! | `Total Height`                | total height       | mm        |
//! | `Wall Thickness`              | wall thickness     | mm        |
//! | `Design Pressure`             | design pressure    | kg/cm²(g) |
//! | `Design Temperature`          | design temperature | °C        |
//! | `Efficiency`                  | efficiency         | %         |
//! | `Pressure Drop`               | pressure drop      | kg/cm²    |
//! | `Inlet Velocity`              | inlet velocity     | m/s       |
//! | `Operating Flow Rate`, `Solids Flow Rate`, `Flow Rate` | operating flow rate | kg/h |
//! | `Operating Temperature`       | operating temperature | °C     |
//! | `Operating Pressure`          | operating pressure | kg/cm²(g) |
//! | `Gas Density`, `Density`      | gas density        | kg/m³     |
//!
//! The four operating fields are optional as a group: a datasheet with none
//! of them yields a descriptor without operating conditions, while one with
//! only some of them is rejected. The inlet opening is read from a phrase
//! such as `(279 mm tall by 140 mm wide)` anywhere in the text.
//!
//! Nozzle schedule rows have the form
//! `Nozzle <tag> <service...> <size>" <rating> <facing>`, for example
//! `Nozzle 412 Gas Inlet 14" 300# RF`. A `Nozzle` line with a single word
//! after the label is taken as a heading and skipped.

use log::{debug, warn};
use thiserror::Error;
use uom::si::{
    f64::{Length, MassDensity, MassRate, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    length::inch,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_hour,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::units::KgfPressure;

use super::{
    Dimensions, EquipmentDescriptor, InletOpening, Nozzle, OperatingConditions, Ratings,
    ValidationError,
};

const TAG_LABELS: &[&str] = &["item no", "tag no"];
const SERVICE_LABELS: &[&str] = &["service of unit", "service"];
const MANUFACTURER_LABELS: &[&str] = &["manufacturer", "vendor"];
const MODEL_LABELS: &[&str] = &["model", "size"];
const MATERIAL_LABELS: &[&str] = &["material"];
const FLOW_RATE_LABELS: &[&str] = &["operating flow rate", "solids flow rate", "flow rate"];
const OPERATING_TEMPERATURE_LABELS: &[&str] = &["operating temperature"];
const OPERATING_PRESSURE_LABELS: &[&str] = &["operating pressure"];
const DENSITY_LABELS: &[&str] = &["gas density", "density"];
const NOZZLE_LABEL: &str = "nozzle";

/// Errors that can occur while extracting a descriptor from a datasheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasheetError {
    /// A required field has no matching line, or its value has no number.
    #[error("datasheet is missing {0}")]
    MissingField(&'static str),

    /// A nozzle row could not be read.
    #[error("malformed nozzle row: {0}")]
    MalformedNozzle(String),

    /// The extracted values do not form a valid descriptor.
    #[error("invalid datasheet values")]
    Validation(#[from] ValidationError),
}

/// Extracts an equipment descriptor from datasheet text.
///
/// # Example
///
/// ```
/// use plant3d_models::models::separation::datasheet;
///
/// let text = "\
/// Item No: 32-C-2222
/// Service: Flash Gas Cyclone
/// Cylinder Diameter: 279 mm
/// Total Height: 1117 mm
/// Wall Thickness: 12.7 mm
/// Design Pressure 24.6 kg/cm2(g)
/// Design Temperature 140 / -15 °C
/// Efficiency (total weight recovery): 99.20%
/// Pressure Drop (kg/cm2) : 0.357 @ Max Flowrate
/// Inlet Velocity: 20 m/sec maximum at normal flow rate
/// ";
///
/// let cyclone = datasheet::parse(text).unwrap();
/// assert_eq!(cyclone.tag_number(), "32-C-2222");
/// assert_eq!(cyclone.manufacturer(), "");
/// ```
///
/// # Errors
///
/// - [`DatasheetError::MissingField`] if the tag number or any numeric rating
///   is absent, or if some but not all operating fields are present.
/// - [`DatasheetError::MalformedNozzle`] if a nozzle row lacks a size.
/// - [`DatasheetError::Validation`] if the values fail descriptor validation.
pub fn parse(text: &str) -> Result<EquipmentDescriptor, DatasheetError> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let tag_number = required_text(&lines, TAG_LABELS, "tag number")?;
    let service = optional_text(&lines, SERVICE_LABELS, "service");
    let manufacturer =
        without_note(&optional_text(&lines, MANUFACTURER_LABELS, "manufacturer")).to_string();
    let model = optional_text(&lines, MODEL_LABELS, "model");
    let material = optional_text(&lines, MATERIAL_LABELS, "material");

    let dimensions = Dimensions::from_millimeters(
        required_number(&lines, &["cylinder diameter"], "cylinder diameter")?,
        required_number(&lines, &["total height"], "total height")?,
        required_number(&lines, &["wall thickness"], "wall thickness")?,
    );

    let ratings = Ratings {
        design_pressure: Pressure::from_kgf_per_cm2(required_number(
            &lines,
            &["design pressure"],
            "design pressure",
        )?),
        design_temperature: ThermodynamicTemperature::new::<degree_celsius>(required_number(
            &lines,
            &["design temperature"],
            "design temperature",
        )?),
        efficiency: Ratio::new::<percent>(required_number(
            &lines,
            &["efficiency"],
            "efficiency",
        )?),
        pressure_drop: Pressure::from_kgf_per_cm2(required_number(
            &lines,
            &["pressure drop"],
            "pressure drop",
        )?),
        inlet_velocity: Velocity::new::<meter_per_second>(required_number(
            &lines,
            &["inlet velocity"],
            "inlet velocity",
        )?),
    };

    let nozzles = parse_nozzles(&lines)?;
    if nozzles.is_empty() {
        warn!("datasheet has no nozzle schedule");
    } else {
        debug!("nozzles: {} found", nozzles.len());
    }

    let mut descriptor = EquipmentDescriptor::create(
        tag_number,
        service,
        manufacturer,
        model,
        dimensions,
        ratings,
        material,
    )?
    .with_nozzles(nozzles);

    if let Some(inlet) = parse_inlet(&lines) {
        descriptor = descriptor.with_inlet(inlet)?;
    }
    if let Some(operating) = parse_operating_conditions(&lines)? {
        descriptor = descriptor.with_operating_conditions(operating)?;
    }

    Ok(descriptor)
}

/// Returns the non-empty value of the first line labelled with one of `labels`.
///
/// Labels are lowercase and match whole words only.
fn find_value<'a>(lines: &[&'a str], labels: &[&str]) -> Option<&'a str> {
    lines.iter().copied().find_map(|line| {
        labels.iter().find_map(move |label| {
            let head = line.get(..label.len())?;
            if !head.eq_ignore_ascii_case(label) {
                return None;
            }
            let rest = &line[label.len()..];
            if rest.starts_with(char::is_alphanumeric) {
                return None;
            }
            let value = rest.split_once(':').map_or(rest, |(_, after)| after).trim();
            (!value.is_empty()).then_some(value)
        })
    })
}

fn required_text(
    lines: &[&str],
    labels: &[&str],
    field: &'static str,
) -> Result<String, DatasheetError> {
    let value = find_value(lines, labels).ok_or(DatasheetError::MissingField(field))?;
    debug!("{field}: {value}");
    Ok(value.to_string())
}

fn optional_text(lines: &[&str], labels: &[&str], field: &'static str) -> String {
    match find_value(lines, labels) {
        Some(value) => {
            debug!("{field}: {value}");
            value.to_string()
        }
        None => {
            warn!("datasheet has no {field}");
            String::new()
        }
    }
}

fn required_number(
    lines: &[&str],
    labels: &[&str],
    field: &'static str,
) -> Result<f64, DatasheetError> {
    let value = find_value(lines, labels)
        .and_then(first_number)
        .ok_or(DatasheetError::MissingField(field))?;
    debug!("{field}: {value}");
    Ok(value)
}

/// Returns the first whitespace-separated token that reads as a finite
/// number once trailing non-digits (units like `%` or `"`) are removed.
fn first_number(text: &str) -> Option<f64> {
    text.split_whitespace().find_map(|token| {
        token
            .trim_end_matches(|c: char| !c.is_ascii_digit())
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    })
}

/// Drops a trailing parenthesised note, as in `Fisher-Klosterman (NOTE 1)`.
fn without_note(value: &str) -> &str {
    value.split_once('(').map_or(value, |(before, _)| before).trim()
}

/// Reads the operating conditions, if the datasheet states any.
fn parse_operating_conditions(
    lines: &[&str],
) -> Result<Option<OperatingConditions>, DatasheetError> {
    let groups = [
        FLOW_RATE_LABELS,
        OPERATING_TEMPERATURE_LABELS,
        OPERATING_PRESSURE_LABELS,
        DENSITY_LABELS,
    ];
    if groups.iter().all(|labels| find_value(lines, labels).is_none()) {
        warn!("datasheet has no operating conditions");
        return Ok(None);
    }

    Ok(Some(OperatingConditions {
        flow_rate: MassRate::new::<kilogram_per_hour>(required_number(
            lines,
            FLOW_RATE_LABELS,
            "operating flow rate",
        )?),
        temperature: ThermodynamicTemperature::new::<degree_celsius>(required_number(
            lines,
            OPERATING_TEMPERATURE_LABELS,
            "operating temperature",
        )?),
        pressure: Pressure::from_kgf_per_cm2(required_number(
            lines,
            OPERATING_PRESSURE_LABELS,
            "operating pressure",
        )?),
        density: MassDensity::new::<kilogram_per_cubic_meter>(required_number(
            lines,
            DENSITY_LABELS,
            "gas density",
        )?),
    }))
}

/// Finds an inlet stated as `<h> mm tall by <w> mm wide`.
fn parse_inlet(lines: &[&str]) -> Option<InletOpening> {
    lines.iter().find_map(|line| {
        let lower = line.to_lowercase();
        let tokens: Vec<&str> = lower
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| matches!(c, '(' | ')' | ',' | ';')))
            .collect();
        let height = millimeters_before(&tokens, "tall")?;
        let width = millimeters_before(&tokens, "wide")?;
        debug!("inlet: {height} mm x {width} mm");
        Some(InletOpening::from_millimeters(height, width))
    })
}

/// Returns `n` from a `<n> mm <word>` sequence.
fn millimeters_before(tokens: &[&str], word: &str) -> Option<f64> {
    tokens.windows(3).find_map(|w| {
        if w[1] == "mm" && w[2] == word {
            w[0].parse::<f64>().ok().filter(|v| v.is_finite())
        } else {
            None
        }
    })
}

fn parse_nozzles(lines: &[&str]) -> Result<Vec<Nozzle>, DatasheetError> {
    lines
        .iter()
        .filter_map(|line| nozzle_row(line))
        .map(parse_nozzle)
        .collect()
}

/// Returns the text after a leading `Nozzle` label.
///
/// Headings such as `NOZZLE SCHEDULE`, with a single word after the label,
/// are not rows.
fn nozzle_row(line: &str) -> Option<&str> {
    let head = line.get(..NOZZLE_LABEL.len())?;
    if !head.eq_ignore_ascii_case(NOZZLE_LABEL) {
        return None;
    }
    let row = &line[NOZZLE_LABEL.len()..];
    (row.starts_with(char::is_whitespace) && row.split_whitespace().nth(1).is_some())
        .then_some(row)
}

/// Parses `<tag> <service...> <size>" <rating> <facing>`.
fn parse_nozzle(row: &str) -> Result<Nozzle, DatasheetError> {
    let malformed = || DatasheetError::MalformedNozzle(row.trim().to_string());

    let tokens: Vec<&str> = row.split_whitespace().collect();
    let size_index = tokens
        .iter()
        .position(|t| t.ends_with('"'))
        .ok_or_else(malformed)?;
    if size_index < 1 {
        return Err(malformed());
    }

    let tag = tokens[0];
    let service = tokens[1..size_index].join(" ");
    let size = tokens[size_index]
        .trim_end_matches('"')
        .parse::<f64>()
        .map_err(|_| malformed())?;
    let rating = tokens.get(size_index + 1).copied().unwrap_or_default();
    let facing = tokens.get(size_index + 2).copied().unwrap_or_default();

    let nozzle = Nozzle::new(tag, service, Length::new::<inch>(size), rating, facing)?;
    debug!("nozzle {}: {:?}", nozzle.tag(), nozzle.kind());
    Ok(nozzle)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    use crate::models::separation::NozzleKind;

    fn without_lines(text: &str, markers: &[&str]) -> String {
        text.lines()
            .filter(|line| !markers.iter().any(|m| line.contains(m)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    const FLASH_GAS_CYCLONE: &str = "
        MF PE CYCLONE DATASHEET
        Item No: 32-C-2222
        Service of Unit Flash Gas Cyclone
        Manufacturer : Fisher-Klosterman (NOTE 1)
        Size : 11
        Material: CS
        Cylinder Diameter: 279 mm
        Total Height: 1117 mm
        Wall Thickness: 12.7 mm
        Design Pressure 24.6 kg/cm2(g)
        Design Temperature 140 / -15 °C
        Efficiency (total weight recovery): 99.20%
        Pressure Drop (kg/cm2) : 0.357 @ Max Flowrate
        Inlet Velocity: 20 m/sec maximum at normal flow rate
        Rectangular inlet (279 mm tall by 140 mm wide)

        OPERATING CONDITIONS
        Operating Flow Rate: 671 kg/hr
        Operating Temperature: 82.2 °C
        Operating Pressure: 10.2 kg/cm2(g)
        Gas Density: 24.63 kg/m3

        NOZZLE SCHEDULE
        Nozzle 412 Gas Inlet 14\" 300# RF
        Nozzle 413 Gas Outlet 14\" 300# RF
        Nozzle S1 Solids Outlet to Purge Column 6\" 300# RF
        Nozzle C1 Cleanout Chamber (w/ blind) 2\" 300# RF
    ";

    #[test]
    fn extracts_the_flash_gas_cyclone() {
        let d = parse(FLASH_GAS_CYCLONE).unwrap();

        assert_eq!(d.tag_number(), "32-C-2222");
        assert_eq!(d.service(), "Flash Gas Cyclone");
        assert_eq!(d.manufacturer(), "Fisher-Klosterman");
        assert_eq!(d.model(), "11");
        assert_eq!(d.material(), "CS");
        assert_relative_eq!(d.cylinder_diameter().get::<millimeter>(), 279.0, epsilon = 1e-9);
        assert_relative_eq!(d.total_height().get::<millimeter>(), 1117.0, epsilon = 1e-9);
        assert_relative_eq!(d.wall_thickness().get::<millimeter>(), 12.7, epsilon = 1e-9);
        assert_relative_eq!(d.design_pressure().kgf_per_cm2(), 24.6, epsilon = 1e-12);
        assert_relative_eq!(
            d.design_temperature().get::<degree_celsius>(),
            140.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(d.efficiency().get::<percent>(), 99.2, epsilon = 1e-12);
        assert_relative_eq!(d.pressure_drop().kgf_per_cm2(), 0.357, epsilon = 1e-12);
        assert_relative_eq!(d.inlet_velocity().get::<meter_per_second>(), 20.0);
    }

    #[test]
    fn extracts_the_nozzle_schedule() {
        let d = parse(FLASH_GAS_CYCLONE).unwrap();
        let nozzles = d.nozzles();

        assert_eq!(nozzles.len(), 4);
        assert_eq!(nozzles[0].tag(), "412");
        assert_eq!(nozzles[0].service(), "Gas Inlet");
        assert_eq!(nozzles[0].kind(), NozzleKind::Inlet);
        assert_relative_eq!(nozzles[0].size().get::<inch>(), 14.0, epsilon = 1e-9);
        assert_eq!(nozzles[1].kind(), NozzleKind::GasOutlet);
        assert_eq!(nozzles[2].service(), "Solids Outlet to Purge Column");
        assert_eq!(nozzles[2].kind(), NozzleKind::SolidsOutlet);
        assert_eq!(nozzles[3].service(), "Cleanout Chamber (w/ blind)");
        assert_eq!(nozzles[3].rating(), "300#");
        assert_eq!(nozzles[3].facing(), "RF");
    }

    #[test]
    fn extracts_operating_conditions_and_inlet() {
        let d = parse(FLASH_GAS_CYCLONE).unwrap();

        let inlet = d.inlet().unwrap();
        assert_relative_eq!(inlet.height.get::<millimeter>(), 279.0, epsilon = 1e-9);
        assert_relative_eq!(inlet.width.get::<millimeter>(), 140.0, epsilon = 1e-9);

        let op = d.operating_conditions().unwrap();
        assert_relative_eq!(op.flow_rate.get::<kilogram_per_hour>(), 671.0, epsilon = 1e-9);
        assert_relative_eq!(op.temperature.get::<degree_celsius>(), 82.2, epsilon = 1e-9);
        assert_relative_eq!(op.pressure.kgf_per_cm2(), 10.2, epsilon = 1e-12);
        assert_relative_eq!(
            op.density.get::<kilogram_per_cubic_meter>(),
            24.63,
            epsilon = 1e-12
        );
    }

    #[test]
    fn operating_conditions_are_optional_as_a_group() {
        let text = without_lines(FLASH_GAS_CYCLONE, &["Operating", "Density", "tall by"]);
        let d = parse(&text).unwrap();
        assert_eq!(d.operating_conditions(), None);
        assert_eq!(d.inlet(), None);

        let text = without_lines(FLASH_GAS_CYCLONE, &["Density"]);
        assert_eq!(parse(&text), Err(DatasheetError::MissingField("gas density")));
    }

    #[test]
    fn manufacturer_note_is_dropped() {
        assert_eq!(without_note("Fisher-Klosterman (NOTE 1)"), "Fisher-Klosterman");
        assert_eq!(without_note("Fisher-Klosterman"), "Fisher-Klosterman");
        assert_eq!(without_note("(NOTE 1)"), "");
    }

    #[test]
    fn labels_match_whole_words() {
        let lines = ["Item Notes: see sheet 2", "Item No:", "Item No: 32-C-2222"];
        assert_eq!(find_value(&lines, TAG_LABELS), Some("32-C-2222"));

        let lines = ["Sizes: various", "Size : 11"];
        assert_eq!(find_value(&lines, MODEL_LABELS), Some("11"));

        let text = FLASH_GAS_CYCLONE.replace(
            "Item No: 32-C-2222",
            "Item Notes: revised\nItem No:\nItem No: 32-C-2222",
        );
        assert_eq!(parse(&text).unwrap().tag_number(), "32-C-2222");
    }

    #[test]
    fn missing_tag_is_reported() {
        let text = FLASH_GAS_CYCLONE.replace("Item No: 32-C-2222", "");
        assert_eq!(parse(&text), Err(DatasheetError::MissingField("tag number")));
    }

    #[test]
    fn missing_number_is_reported() {
        let text = FLASH_GAS_CYCLONE.replace("Inlet Velocity: 20 m/sec", "Inlet Velocity: TBD");
        assert_eq!(
            parse(&text),
            Err(DatasheetError::MissingField("inlet velocity"))
        );
    }

    #[test]
    fn optional_text_defaults_to_empty() {
        let text = FLASH_GAS_CYCLONE
            .replace("Manufacturer : Fisher-Klosterman (NOTE 1)", "")
            .replace("Material: CS", "");
        let d = parse(&text).unwrap();

        assert_eq!(d.manufacturer(), "");
        assert_eq!(d.material(), "");
    }

    #[test]
    fn invalid_values_fail_validation() {
        let text = FLASH_GAS_CYCLONE.replace("99.20%", "120%");
        assert_eq!(
            parse(&text),
            Err(DatasheetError::Validation(
                ValidationError::OutOfRangeEfficiency
            ))
        );

        let text = FLASH_GAS_CYCLONE.replace("Cylinder Diameter: 279 mm", "Cylinder Diameter: -5 mm");
        assert_eq!(
            parse(&text),
            Err(DatasheetError::Validation(
                ValidationError::NonPositiveDimension {
                    dimension: "cylinder diameter"
                }
            ))
        );
    }

    #[test]
    fn nozzle_without_size_is_malformed() {
        let text = format!("{FLASH_GAS_CYCLONE}\nNozzle V1 Vent 300# RF");
        assert_eq!(
            parse(&text),
            Err(DatasheetError::MalformedNozzle("V1 Vent 300# RF".into()))
        );
    }

    #[test]
    fn nozzle_headings_are_not_rows() {
        assert_eq!(nozzle_row("NOZZLE SCHEDULE"), None);
        assert_eq!(nozzle_row("Nozzles: see drawing"), None);
        assert_eq!(nozzle_row("Nozzle 412 Gas Inlet"), Some(" 412 Gas Inlet"));
    }

    #[test]
    fn first_number_skips_unit_tokens() {
        assert_eq!(first_number("(kg/cm2) 0.357"), Some(0.357));
        assert_eq!(first_number("99.20%"), Some(99.2));
        assert_eq!(first_number("140 / -15 °C"), Some(140.0));
        assert_eq!(first_number("-15 °C"), Some(-15.0));
        assert_eq!(first_number("TBD"), None);
    }

    #[test]
    fn overflowing_numbers_are_not_read() {
        assert_eq!(first_number("1e400 mm"), None);
        assert_eq!(first_number("1e400 12"), Some(12.0));

        let text = FLASH_GAS_CYCLONE.replace("Cylinder Diameter: 279 mm", "Cylinder Diameter: 1e400 mm");
        assert_eq!(
            parse(&text),
            Err(DatasheetError::MissingField("cylinder diameter"))
        );
    }
}
