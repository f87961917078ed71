//! `pharmacophore`: feature hypothesis building and 3D matching.

use minijinja::context;
use molgen_types::{
    AlgorithmCategory, GeneratedAlgorithm, ParameterInput, PharmacophoreParameters,
    ResolvedParameters,
};

use super::{count_or, owned};
use crate::catalog;
use crate::error::GenerateError;
use crate::templates::PseudocodeTemplates;

/// Fit cutoff used when `threshold` is absent.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

/// Match limit used when `maxCompounds` is absent.
pub const DEFAULT_MAX_RESULTS: u64 = 100;

const DISTANCE_TOLERANCE: f64 = 1.0;

const FEATURES: [&str; 6] = [
    "hydrogen_bond_donor",
    "hydrogen_bond_acceptor",
    "hydrophobic",
    "aromatic",
    "positive_ionizable",
    "negative_ionizable",
];

const DESCRIPTION: &str = "Generates conformers for a set of aligned actives, extracts pharmacophoric \
features, and derives the common feature arrangement within a distance tolerance. Database compounds \
are then conformer-searched and aligned against the hypothesis, with exclusion volumes rejecting clashes.";

const COMPLEXITY: &str = "O(n * c * f^2) for n compounds, c conformers each and f features per hypothesis";

const USE_CASES: [&str; 4] = [
    "Scaffold hopping",
    "Screening when no protein structure is available",
    "Explaining structure-activity relationships",
    "Pre-filtering before docking",
];

/// Build the `pharmacophore` algorithm description.
///
/// # Errors
///
/// Returns [`GenerateError::GenerationFailure`] if the template fails to render.
pub fn generate(
    params: &ParameterInput,
    templates: &PseudocodeTemplates,
) -> Result<GeneratedAlgorithm, GenerateError> {
    let pseudocode = templates.render(AlgorithmCategory::Pharmacophore, context! {})?;

    Ok(GeneratedAlgorithm {
        name: catalog::display_name(AlgorithmCategory::Pharmacophore).to_owned(),
        category: AlgorithmCategory::Pharmacophore,
        description: DESCRIPTION.to_owned(),
        parameters: ResolvedParameters::Pharmacophore(PharmacophoreParameters {
            features: owned(&FEATURES),
            match_threshold: params.threshold.unwrap_or(DEFAULT_MATCH_THRESHOLD),
            distance_tolerance: DISTANCE_TOLERANCE,
            max_results: count_or(params.max_compounds.as_ref(), DEFAULT_MAX_RESULTS),
        }),
        pseudocode,
        complexity: COMPLEXITY.to_owned(),
        use_cases: owned(&USE_CASES),
    })
}
