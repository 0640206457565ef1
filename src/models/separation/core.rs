//! Cyclone separator core: descriptors, estimation, and derived geometry.
//!
//! Nothing in this module logs, blocks, or holds shared state. Every type
//! is a value object and every computation is a pure function, so all of
//! it can be used from any thread without coordination.

mod descriptor;
mod display;
mod efficiency;
mod error;
mod geometry;
mod nozzle;
mod operating;

pub use descriptor::{Dimensions, EquipmentDescriptor, Ratings};
pub use display::DisplayField;
pub use efficiency::{
    DEFAULT_BASELINE_VELOCITY, DEFAULT_PRESSURE_DROP_CEILING, MAX_EFFICIENCY_PERCENT,
    PRESSURE_WEIGHT_PERCENT, SeparationEfficiency, VELOCITY_WEIGHT_PERCENT, estimate_efficiency,
    estimate_efficiency_with,
};
pub use error::ValidationError;
pub use geometry::{CycloneGeometry, InletOpening, Proportions};
pub use nozzle::{Nozzle, NozzleKind};
pub use operating::OperatingConditions;

#[cfg(test)]
pub(crate) mod test_support;
