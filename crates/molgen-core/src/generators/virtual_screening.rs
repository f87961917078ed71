//! `virtual-screening`: four-stage ensemble screening pipeline.

use minijinja::context;
use molgen_types::{
    AlgorithmCategory, GeneratedAlgorithm, ParameterInput, ResolvedParameters,
    VirtualScreeningParameters,
};

use super::{count_or, owned};
use crate::catalog;
use crate::error::GenerateError;
use crate::method;
use crate::templates::PseudocodeTemplates;

/// Consensus cutoff used when `threshold` is absent.
pub const DEFAULT_CONSENSUS_THRESHOLD: f64 = 0.7;

/// Library size limit used when `maxCompounds` is absent.
pub const DEFAULT_MAX_COMPOUNDS: u64 = 1_000_000;

const STAGES: [&str; 4] = [
    "ligand_similarity",
    "pharmacophore_filter",
    "molecular_docking",
    "ml_rescoring",
];

const DESCRIPTION: &str = "Runs a library through successively more expensive stages: ligand-based \
similarity to known actives, a pharmacophore filter, molecular docking of the survivors and ensemble \
machine-learning rescoring. Normalized stage scores are combined into a consensus score, and the \
final hits are clustered for diversity.";

const COMPLEXITY: &str = "O(n * s + k * d) for n library compounds at similarity cost s and k docked compounds at docking cost d";

const USE_CASES: [&str; 5] = [
    "Ultra-large library screening",
    "Hit identification for a new target",
    "Reducing docking cost with cheap pre-filters",
    "Consensus ranking to cut false positives",
    "Selecting diverse compounds for purchase",
];

/// Build the `virtual-screening` algorithm description.
///
/// The resolved `maxCompounds` value is spliced into the library load step.
///
/// # Errors
///
/// Returns [`GenerateError::GenerationFailure`] if the template fails to render.
pub fn generate(
    params: &ParameterInput,
    templates: &PseudocodeTemplates,
) -> Result<GeneratedAlgorithm, GenerateError> {
    let max_compounds = count_or(params.max_compounds.as_ref(), DEFAULT_MAX_COMPOUNDS);
    let pseudocode = templates.render(
        AlgorithmCategory::VirtualScreening,
        context! { max_compounds => &max_compounds },
    )?;

    Ok(GeneratedAlgorithm {
        name: catalog::display_name(AlgorithmCategory::VirtualScreening).to_owned(),
        category: AlgorithmCategory::VirtualScreening,
        description: DESCRIPTION.to_owned(),
        parameters: ResolvedParameters::VirtualScreening(VirtualScreeningParameters {
            stages: owned(&STAGES),
            consensus_threshold: params.threshold.unwrap_or(DEFAULT_CONSENSUS_THRESHOLD),
            similarity_method: method::resolve(params.method.as_deref()),
            max_compounds,
        }),
        pseudocode,
        complexity: COMPLEXITY.to_owned(),
        use_cases: owned(&USE_CASES),
    })
}
