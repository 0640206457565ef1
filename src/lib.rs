//! # Plant3D Models
//!
//! Engine-independent equipment models for plant-equipment viewers.
//!
//! A viewer (game engine, desktop UI, web page) owns the scene, the camera,
//! and the widgets. This crate owns the data and the numbers it displays:
//! validated equipment descriptors and a cyclone separation-efficiency
//! estimator.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models, including [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use plant3d_models::models::separation::estimate_efficiency;
//!
//! // Baseline velocity with no pressure signal gives the velocity weight.
//! assert_eq!(estimate_efficiency(15.0, 0.0).unwrap(), 85.0);
//! ```
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod models;
pub mod support;
