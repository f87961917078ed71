//! Shared wire types for the molgen algorithm generator service.
//!
//! This crate is the single source of truth for the JSON contract served by
//! `molgen-api`. Types flow downstream to `TypeScript` via `ts-rs` for the
//! browser UI.
//!
//! # Modules
//!
//! - [`enums`] -- Algorithm categories and documented similarity methods
//! - [`structs`] -- Request, resolved-parameter and response records

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AlgorithmCategory, SimilarityMethod};
pub use structs::{
    ErrorBody, GenerateRequest, GeneratedAlgorithm, OptimizationParameters, ParameterInput,
    PharmacophoreParameters, QsarParameters, ResolvedParameters, ScreeningParameters,
    ServiceInfo, SimilarityParameters, VirtualScreeningParameters,
};
