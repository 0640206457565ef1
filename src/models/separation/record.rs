//! JSON records of equipment descriptors.
//!
//! An [`EquipmentRecord`] holds a descriptor as plain numbers in SI base
//! units (metres, pascals, kelvin, a 0–1 efficiency ratio), so extracted
//! data can be stored and handed between tools without a units library.
//! Base units are what the descriptor holds internally, so writing a record
//! and reading it back gives an equal descriptor. Records become
//! descriptors only through [`EquipmentDescriptor::create`], so a loaded
//! record is always validated.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{
        Length, MassDensity, MassRate, Pressure, Ratio, ThermodynamicTemperature, Velocity,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use super::{
    Dimensions, EquipmentDescriptor, InletOpening, Nozzle, OperatingConditions, Ratings,
    ValidationError,
};

/// Errors that can occur while reading or writing records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record I/O failed")]
    Io(#[from] io::Error),

    #[error("malformed record JSON")]
    Json(#[from] serde_json::Error),

    #[error("record does not describe valid equipment")]
    Validation(#[from] ValidationError),
}

/// Serialized form of an [`EquipmentDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub tag_number: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    pub cylinder_diameter_m: f64,
    pub total_height_m: f64,
    pub wall_thickness_m: f64,
    /// Gauge.
    pub design_pressure_pa: f64,
    pub design_temperature_k: f64,
    #[serde(default)]
    pub material: String,
    /// Fraction collected, 0–1.
    pub efficiency: f64,
    pub pressure_drop_pa: f64,
    pub inlet_velocity_m_s: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inlet: Option<InletRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating: Option<OperatingRecord>,
    #[serde(default)]
    pub nozzles: Vec<NozzleRecord>,
}

/// Serialized form of an [`InletOpening`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InletRecord {
    pub height_m: f64,
    pub width_m: f64,
}

/// Serialized form of [`OperatingConditions`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingRecord {
    pub flow_rate_kg_s: f64,
    pub temperature_k: f64,
    /// Gauge.
    pub pressure_pa: f64,
    pub density_kg_m3: f64,
}

/// Serialized form of a [`Nozzle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NozzleRecord {
    pub tag: String,
    #[serde(default)]
    pub service: String,
    pub size_m: f64,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub facing: String,
}

impl TryFrom<EquipmentRecord> for EquipmentDescriptor {
    type Error = ValidationError;

    fn try_from(record: EquipmentRecord) -> Result<Self, Self::Error> {
        let nozzles = record
            .nozzles
            .into_iter()
            .map(|n| {
                Nozzle::new(
                    n.tag,
                    n.service,
                    Length::new::<meter>(n.size_m),
                    n.rating,
                    n.facing,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut descriptor = EquipmentDescriptor::create(
            record.tag_number,
            record.service,
            record.manufacturer,
            record.model,
            Dimensions {
                cylinder_diameter: Length::new::<meter>(record.cylinder_diameter_m),
                total_height: Length::new::<meter>(record.total_height_m),
                wall_thickness: Length::new::<meter>(record.wall_thickness_m),
            },
            Ratings {
                design_pressure: Pressure::new::<pascal>(record.design_pressure_pa),
                design_temperature: ThermodynamicTemperature::new::<kelvin>(
                    record.design_temperature_k,
                ),
                efficiency: Ratio::new::<ratio>(record.efficiency),
                pressure_drop: Pressure::new::<pascal>(record.pressure_drop_pa),
                inlet_velocity: Velocity::new::<meter_per_second>(record.inlet_velocity_m_s),
            },
            record.material,
        )?
        .with_nozzles(nozzles);

        if let Some(inlet) = record.inlet {
            descriptor = descriptor.with_inlet(InletOpening {
                height: Length::new::<meter>(inlet.height_m),
                width: Length::new::<meter>(inlet.width_m),
            })?;
        }
        if let Some(op) = record.operating {
            descriptor = descriptor.with_operating_conditions(OperatingConditions {
                flow_rate: MassRate::new::<kilogram_per_second>(op.flow_rate_kg_s),
                temperature: ThermodynamicTemperature::new::<kelvin>(op.temperature_k),
                pressure: Pressure::new::<pascal>(op.pressure_pa),
                density: MassDensity::new::<kilogram_per_cubic_meter>(op.density_kg_m3),
            })?;
        }

        Ok(descriptor)
    }
}

impl From<&EquipmentDescriptor> for EquipmentRecord {
    fn from(descriptor: &EquipmentDescriptor) -> Self {
        Self {
            tag_number: descriptor.tag_number().to_string(),
            service: descriptor.service().to_string(),
            manufacturer: descriptor.manufacturer().to_string(),
            model: descriptor.model().to_string(),
            cylinder_diameter_m: descriptor.cylinder_diameter().get::<meter>(),
            total_height_m: descriptor.total_height().get::<meter>(),
            wall_thickness_m: descriptor.wall_thickness().get::<meter>(),
            design_pressure_pa: descriptor.design_pressure().get::<pascal>(),
            design_temperature_k: descriptor.design_temperature().get::<kelvin>(),
            material: descriptor.material().to_string(),
            efficiency: descriptor.efficiency().get::<ratio>(),
            pressure_drop_pa: descriptor.pressure_drop().get::<pascal>(),
            inlet_velocity_m_s: descriptor.inlet_velocity().get::<meter_per_second>(),
            inlet: descriptor.inlet().map(|inlet| InletRecord {
                height_m: inlet.height.get::<meter>(),
                width_m: inlet.width.get::<meter>(),
            }),
            operating: descriptor
                .operating_conditions()
                .map(|op| OperatingRecord {
                    flow_rate_kg_s: op.flow_rate.get::<kilogram_per_second>(),
                    temperature_k: op.temperature.get::<kelvin>(),
                    pressure_pa: op.pressure.get::<pascal>(),
                    density_kg_m3: op.density.get::<kilogram_per_cubic_meter>(),
                }),
            nozzles: descriptor
                .nozzles()
                .iter()
                .map(|n| NozzleRecord {
                    tag: n.tag().to_string(),
                    service: n.service().to_string(),
                    size_m: n.size().get::<meter>(),
                    rating: n.rating().to_string(),
                    facing: n.facing().to_string(),
                })
                .collect(),
        }
    }
}

/// Parses and validates a descriptor from a JSON string.
///
/// # Errors
///
/// Returns [`RecordError::Json`] if the text is not a record, or
/// [`RecordError::Validation`] if the record fails validation.
pub fn from_json_str(json: &str) -> Result<EquipmentDescriptor, RecordError> {
    let record: EquipmentRecord = serde_json::from_str(json)?;
    Ok(EquipmentDescriptor::try_from(record)?)
}

/// Serializes a descriptor to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns [`RecordError::Json`] if serialization fails.
pub fn to_json_string(descriptor: &EquipmentDescriptor) -> Result<String, RecordError> {
    Ok(serde_json::to_string_pretty(&EquipmentRecord::from(descriptor))?)
}

/// Reads and validates a descriptor from a JSON file.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use plant3d_models::models::separation::record;
///
/// let cyclone = record::read_json(Path::new("32-C-2222.json")).unwrap();
/// println!("{}", cyclone.tag_number());
/// ```
///
/// # Errors
///
/// Returns [`RecordError::Io`] if the file cannot be opened, otherwise as
/// [`from_json_str`].
pub fn read_json(path: &Path) -> Result<EquipmentDescriptor, RecordError> {
    let reader = BufReader::new(File::open(path)?);
    let record: EquipmentRecord = serde_json::from_reader(reader)?;
    let descriptor = EquipmentDescriptor::try_from(record)?;

    info!("read {} from {}", descriptor.tag_number(), path.display());
    Ok(descriptor)
}

/// Writes a descriptor to a JSON file, replacing any existing file.
///
/// # Errors
///
/// Returns [`RecordError::Io`] if the file cannot be created or flushed, or
/// [`RecordError::Json`] if serialization fails.
pub fn write_json(path: &Path, descriptor: &EquipmentDescriptor) -> Result<(), RecordError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &EquipmentRecord::from(descriptor))?;
    writer.flush()?;

    info!("wrote {} to {}", descriptor.tag_number(), path.display());
    Ok(())
}
