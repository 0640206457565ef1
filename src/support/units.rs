//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (lengths, pressures,
//! velocities, temperatures). This module provides extensions that plant
//! datasheets need but [`uom`] doesn't offer directly.
//!
//! ## Kilogram-force pressures
//!
//! Plant datasheets commonly state pressures in kilogram-force per square
//! centimetre, written `kg/cm²` or `kg/cm2(g)` for gauge values. The
//! [`KgfPressure`] trait converts between that unit and [`Pressure`]:
//!
//! ```
//! use plant3d_models::support::units::KgfPressure;
//! use uom::si::{f64::Pressure, pressure::kilopascal};
//!
//! let design = Pressure::from_kgf_per_cm2(24.6);
//! assert!((design.get::<kilopascal>() - 2412.4359).abs() < 1e-4);
//! assert!((design.kgf_per_cm2() - 24.6).abs() < 1e-12);
//! ```
//!
//! [`Pressure`]: uom::si::f64::Pressure

mod kgf_pressure;

pub use kgf_pressure::KgfPressure;
