//! Error types for algorithm generation.
//!
//! [`GenerateError`] is the per-request failure returned by the registry.
//! [`RegistryError`] covers the one-time startup work of compiling the
//! pseudocode templates.

/// Failure of a single generation request.
///
/// The `Display` output of each variant is exactly the message the HTTP
/// layer returns to clients; internal detail is kept in the variant field
/// and only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The category identifier was missing or not recognized.
    #[error("Invalid algorithm type")]
    InvalidCategory,

    /// A generator failed unexpectedly.
    #[error("Failed to generate algorithm")]
    GenerationFailure(String),
}

impl GenerateError {
    /// Internal detail for diagnostics, when there is any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::InvalidCategory => None,
            Self::GenerationFailure(detail) => Some(detail),
        }
    }
}

/// Failure while building the generator registry at startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A pseudocode template failed to compile.
    #[error("failed to compile pseudocode template {name}: {source}")]
    Template {
        /// Template name.
        name: &'static str,
        /// The underlying template error.
        source: minijinja::Error,
    },
}
