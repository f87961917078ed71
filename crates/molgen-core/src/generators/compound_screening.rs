//! `compound-screening`: library filtering and activity triage.

use minijinja::context;
use molgen_types::{
    AlgorithmCategory, GeneratedAlgorithm, ParameterInput, ResolvedParameters, ScreeningParameters,
};

use super::{count_or, owned};
use crate::catalog;
use crate::error::GenerateError;
use crate::templates::PseudocodeTemplates;

/// Activity cutoff used when `threshold` is absent.
pub const DEFAULT_ACTIVITY_THRESHOLD: f64 = 0.5;

/// Library size limit used when `maxCompounds` is absent.
pub const DEFAULT_MAX_COMPOUNDS: u64 = 1_000_000;

const FILTERS: [&str; 4] = ["lipinski", "pains", "toxicity", "activity"];

const DESCRIPTION: &str = "Streams a compound library through a cascade of filters: Lipinski's rule \
of five, PAINS substructure alerts and toxicity alerts, then scores the survivors with an activity \
model and keeps those at or above the activity threshold.";

const COMPLEXITY: &str = "O(n * (p + m)) for n compounds, p PAINS patterns and model cost m; O(k) space for k passing compounds";

const USE_CASES: [&str; 4] = [
    "Triage of commercial screening libraries",
    "Removing assay interference compounds",
    "Early toxicity risk reduction",
    "Building focused libraries for a target",
];

/// Build the `compound-screening` algorithm description.
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
        AlgorithmCategory::CompoundScreening,
        context! { max_compounds => &max_compounds },
    )?;

    Ok(GeneratedAlgorithm {
        name: catalog::display_name(AlgorithmCategory::CompoundScreening).to_owned(),
        category: AlgorithmCategory::CompoundScreening,
        description: DESCRIPTION.to_owned(),
        parameters: ResolvedParameters::Screening(ScreeningParameters {
            activity_threshold: params.threshold.unwrap_or(DEFAULT_ACTIVITY_THRESHOLD),
            filters: owned(&FILTERS),
            max_compounds,
        }),
        pseudocode,
        complexity: COMPLEXITY.to_owned(),
        use_cases: owned(&USE_CASES),
    })
}
