//! Public equipment models.
//!
//! Models are organized into domain-specific submodules by the kind of
//! process equipment they describe. This organization may evolve as more
//! equipment types are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation and
//! validation in an internal `core` submodule. Types from `core` that form
//! the public vocabulary are re-exported by the model module; helpers stay
//! private.
//!
//! Where a computation fits the [`twine_core::Model`] shape, the model module
//! provides a thin adapter that delegates to the core.

pub mod separation;
