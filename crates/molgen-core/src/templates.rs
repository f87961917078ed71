//! Pseudocode template compilation and rendering via `minijinja`.
//!
//! The six pseudocode bodies are compiled into the binary with
//! `include_str!` and parsed once when the registry is built. Template
//! names end in `.txt`, so auto-escaping is off and parameter values are
//! spliced in verbatim.

use minijinja::Environment;
use molgen_types::AlgorithmCategory;

use crate::error::{GenerateError, RegistryError};

/// Embedded template sources, keyed by template name.
const SOURCES: [(&str, &str); 6] = [
    (
        "molecular-similarity.txt",
        include_str!("../templates/molecular-similarity.txt"),
    ),
    ("qsar-model.txt", include_str!("../templates/qsar-model.txt")),
    (
        "compound-screening.txt",
        include_str!("../templates/compound-screening.txt"),
    ),
    (
        "structure-optimization.txt",
        include_str!("../templates/structure-optimization.txt"),
    ),
    ("pharmacophore.txt", include_str!("../templates/pharmacophore.txt")),
    (
        "virtual-screening.txt",
        include_str!("../templates/virtual-screening.txt"),
    ),
];

/// Compiled pseudocode templates for every category.
#[derive(Debug)]
pub struct PseudocodeTemplates {
    env: Environment<'static>,
}

impl PseudocodeTemplates {
    /// Compile all embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Template`] if any template has a syntax error.
    pub fn new() -> Result<Self, RegistryError> {
        let mut env = Environment::new();
        for (name, source) in SOURCES {
            env.add_template(name, source)
                .map_err(|source| RegistryError::Template { name, source })?;
        }
        Ok(Self { env })
    }

    /// Render the pseudocode for `category` with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::GenerationFailure`] if the template is
    /// missing or rendering fails.
    pub fn render<S: serde::Serialize>(
        &self,
        category: AlgorithmCategory,
        context: S,
    ) -> Result<String, GenerateError> {
        let name = template_name(category);
        self.env
            .get_template(name)
            .map_err(|e| GenerateError::GenerationFailure(format!("missing template {name}: {e}")))?
            .render(context)
            .map_err(|e| GenerateError::GenerationFailure(format!("render of {name} failed: {e}")))
    }
}

/// Template name for a category.
const fn template_name(category: AlgorithmCategory) -> &'static str {
    match category {
        AlgorithmCategory::MolecularSimilarity => "molecular-similarity.txt",
        AlgorithmCategory::QsarModel => "qsar-model.txt",
        AlgorithmCategory::CompoundScreening => "compound-screening.txt",
        AlgorithmCategory::StructureOptimization => "structure-optimization.txt",
        AlgorithmCategory::Pharmacophore => "pharmacophore.txt",
        AlgorithmCategory::VirtualScreening => "virtual-screening.txt",
    }
}
