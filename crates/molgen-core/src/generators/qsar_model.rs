//! `qsar-model`: descriptor-based activity model training.

use minijinja::context;
use molgen_types::{
    AlgorithmCategory, GeneratedAlgorithm, ParameterInput, QsarParameters, ResolvedParameters,
};

use super::{count_or, owned};
use crate::catalog;
use crate::error::GenerateError;
use crate::templates::PseudocodeTemplates;

/// Iteration cap used when `iterations` is absent.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1000;

const MODEL_TYPE: &str = "random-forest";
const CROSS_VALIDATION_FOLDS: u32 = 5;
const TEST_SIZE: f64 = 0.2;

const DESCRIPTORS: [&str; 8] = [
    "molecular_weight",
    "logp",
    "tpsa",
    "h_bond_donors",
    "h_bond_acceptors",
    "rotatable_bonds",
    "aromatic_rings",
    "fraction_sp3",
];

const DESCRIPTION: &str = "Computes physicochemical descriptors for a labelled training set, \
standardizes them, and trains a random forest regressor with k-fold cross-validation. Reports \
cross-validated Q2, hold-out R2 and RMSE, feature importances and a leverage-based applicability domain.";

const COMPLEXITY: &str = "O(t * n log n * d) training for t trees, n compounds and d descriptors; O(t * log n) per prediction";

const USE_CASES: [&str; 5] = [
    "Activity prediction for untested compounds",
    "ADMET property modeling",
    "Prioritizing synthesis candidates",
    "Identifying activity-driving descriptors",
    "Filtering virtual libraries before docking",
];

/// Build the `qsar-model` algorithm description.
///
/// # Errors
///
/// Returns [`GenerateError::GenerationFailure`] if the template fails to render.
pub fn generate(
    params: &ParameterInput,
    templates: &PseudocodeTemplates,
) -> Result<GeneratedAlgorithm, GenerateError> {
    let pseudocode = templates.render(AlgorithmCategory::QsarModel, context! {})?;

    Ok(GeneratedAlgorithm {
        name: catalog::display_name(AlgorithmCategory::QsarModel).to_owned(),
        category: AlgorithmCategory::QsarModel,
        description: DESCRIPTION.to_owned(),
        parameters: ResolvedParameters::Qsar(QsarParameters {
            model_type: MODEL_TYPE.to_owned(),
            descriptors: owned(&DESCRIPTORS),
            cross_validation_folds: CROSS_VALIDATION_FOLDS,
            test_size: TEST_SIZE,
            max_iterations: count_or(params.iterations.as_ref(), DEFAULT_MAX_ITERATIONS),
        }),
        pseudocode,
        complexity: COMPLEXITY.to_owned(),
        use_cases: owned(&USE_CASES),
    })
}
