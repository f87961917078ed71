//! The dispatch table from category identifiers to generators.
//!
//! [`GeneratorRegistry`] is built once at startup and never mutated. All
//! request handling goes through [`GeneratorRegistry::generate`], which is
//! the only place that decides between "unknown category" and "run the
//! generator".

use std::collections::BTreeMap;

use molgen_types::{AlgorithmCategory, GeneratedAlgorithm, ParameterInput};
use tracing::debug;

use crate::error::{GenerateError, RegistryError};
use crate::generators::{
    compound_screening, molecular_similarity, pharmacophore, qsar_model, structure_optimization,
    virtual_screening,
};
use crate::templates::PseudocodeTemplates;

/// Signature shared by every generator.
pub type GeneratorFn =
    fn(&ParameterInput, &PseudocodeTemplates) -> Result<GeneratedAlgorithm, GenerateError>;

/// Immutable mapping from category to generator, plus the compiled
/// pseudocode templates the generators render.
#[derive(Debug)]
pub struct GeneratorRegistry {
    generators: BTreeMap<AlgorithmCategory, GeneratorFn>,
    templates: PseudocodeTemplates,
}

impl GeneratorRegistry {
    /// Build the registry with all six generators.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the pseudocode templates fail to compile.
    pub fn new() -> Result<Self, RegistryError> {
        let mut generators: BTreeMap<AlgorithmCategory, GeneratorFn> = BTreeMap::new();
        generators.insert(AlgorithmCategory::MolecularSimilarity, molecular_similarity::generate);
        generators.insert(AlgorithmCategory::QsarModel, qsar_model::generate);
        generators.insert(AlgorithmCategory::CompoundScreening, compound_screening::generate);
        generators.insert(
            AlgorithmCategory::StructureOptimization,
            structure_optimization::generate,
        );
        generators.insert(AlgorithmCategory::Pharmacophore, pharmacophore::generate);
        generators.insert(AlgorithmCategory::VirtualScreening, virtual_screening::generate);

        Self::with_generators(generators)
    }

    /// Build a registry from an explicit table.
    ///
    /// Categories left out of `generators` are still recognized identifiers;
    /// requesting one fails with [`GenerateError::GenerationFailure`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the pseudocode templates fail to compile.
    pub fn with_generators(
        generators: BTreeMap<AlgorithmCategory, GeneratorFn>,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            generators,
            templates: PseudocodeTemplates::new()?,
        })
    }

    /// Categories that have a registered generator, in advertised order.
    pub fn categories(&self) -> Vec<AlgorithmCategory> {
        self.generators.keys().copied().collect()
    }

    /// Validate `algorithm_type` and run the matching generator.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidCategory`] when `algorithm_type` is `None`
    ///   or not one of the six identifiers. No generator runs.
    /// - [`GenerateError::GenerationFailure`] when the generator is missing
    ///   or fails.
    pub fn generate(
        &self,
        algorithm_type: Option<&str>,
        params: &ParameterInput,
    ) -> Result<GeneratedAlgorithm, GenerateError> {
        let category = algorithm_type
            .and_then(AlgorithmCategory::from_identifier)
            .ok_or(GenerateError::InvalidCategory)?;

        let generator = self.generators.get(&category).ok_or_else(|| {
            GenerateError::GenerationFailure(format!("no generator registered for {category}"))
        })?;

        let algorithm = generator(params, &self.templates)?;
        debug!(category = %category, "algorithm generated");
        Ok(algorithm)
    }
}
