//! Algorithm generators, dispatch registry, and configuration for the
//! molgen service.
//!
//! Nothing in this crate computes chemistry. Each generator turns a partial
//! parameter record into a fixed description of a drug-discovery algorithm
//! (name, prose, resolved parameters, pseudocode, complexity, use cases).
//!
//! # Modules
//!
//! - [`catalog`] -- Names, summaries and parameter defaults per category.
//! - [`config`] -- Configuration loading from `molgen-config.yaml`.
//! - [`error`] -- [`GenerateError`] and [`RegistryError`].
//! - [`generators`] -- One pure generator per category.
//! - [`method`] -- Resolution of the free-form `method` parameter.
//! - [`registry`] -- The immutable category -> generator table.
//! - [`templates`] -- Embedded `minijinja` pseudocode templates.
//!
//! [`GenerateError`]: error::GenerateError
//! [`RegistryError`]: error::RegistryError

pub mod catalog;
pub mod config;
pub mod error;
pub mod generators;
pub mod method;
pub mod registry;
pub mod templates;

pub use error::{GenerateError, RegistryError};
pub use registry::{GeneratorFn, GeneratorRegistry};
