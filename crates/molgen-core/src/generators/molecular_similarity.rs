//! `molecular-similarity`: fingerprint similarity search.

use minijinja::context;
use molgen_types::{
    AlgorithmCategory, GeneratedAlgorithm, ParameterInput, ResolvedParameters,
    SimilarityParameters,
};

use super::{count_or, owned};
use crate::catalog;
use crate::error::GenerateError;
use crate::method;
use crate::templates::PseudocodeTemplates;

/// Similarity cutoff used when `threshold` is absent.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Hit limit used when `maxCompounds` is absent.
pub const DEFAULT_MAX_RESULTS: u64 = 100;

const DESCRIPTION: &str = "Computes 2048-bit Morgan (ECFP4) fingerprints for a query compound and every \
compound in a database, scores each pair with the selected similarity metric, keeps the compounds \
at or above the similarity threshold and returns them ranked by score.";

const COMPLEXITY: &str = "O(n * f) time for n database compounds and fingerprint length f; O(n) space for the hit list";

const USE_CASES: [&str; 5] = [
    "Lead hopping from a known active",
    "Analog searching in corporate collections",
    "Duplicate and near-duplicate detection",
    "Library diversity analysis",
    "Hit expansion after primary screening",
];

/// Build the `molecular-similarity` algorithm description.
///
/// The resolved `method` name is spliced into the pseudocode twice.
///
/// # Errors
///
/// Returns [`GenerateError::GenerationFailure`] if the template fails to render.
pub fn generate(
    params: &ParameterInput,
    templates: &PseudocodeTemplates,
) -> Result<GeneratedAlgorithm, GenerateError> {
    let method = method::resolve(params.method.as_deref());
    let pseudocode = templates.render(
        AlgorithmCategory::MolecularSimilarity,
        context! { method => &method },
    )?;

    Ok(GeneratedAlgorithm {
        name: catalog::display_name(AlgorithmCategory::MolecularSimilarity).to_owned(),
        category: AlgorithmCategory::MolecularSimilarity,
        description: DESCRIPTION.to_owned(),
        parameters: ResolvedParameters::Similarity(SimilarityParameters {
            similarity_threshold: params.threshold.unwrap_or(DEFAULT_THRESHOLD),
            method,
            max_results: count_or(params.max_compounds.as_ref(), DEFAULT_MAX_RESULTS),
        }),
        pseudocode,
        complexity: COMPLEXITY.to_owned(),
        use_cases: owned(&USE_CASES),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Number;

    use super::*;

    fn templates() -> PseudocodeTemplates {
        let Ok(templates) = PseudocodeTemplates::new() else {
            panic!("templates failed to compile");
        };
        templates
    }

    fn similarity(algorithm: &GeneratedAlgorithm) -> &SimilarityParameters {
        let ResolvedParameters::Similarity(p) = &algorithm.parameters else {
            panic!("wrong parameter shape: {:?}", algorithm.parameters);
        };
        p
    }

    #[test]
    fn defaults_apply_when_parameters_are_absent() {
        let algorithm = generate(&ParameterInput::default(), &templates());
        let Ok(algorithm) = algorithm else { panic!("generation failed") };

        let p = similarity(&algorithm);
        assert!((p.similarity_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(p.method, "tanimoto");
        assert_eq!(p.max_results, Number::from(100));
        assert!(algorithm.pseudocode.contains("tanimoto_similarity(query_fp, fp)"));
        assert_eq!(algorithm.category, AlgorithmCategory::MolecularSimilarity);
    }

    #[test]
    fn threshold_override_leaves_other_defaults() {
        let input = ParameterInput {
            threshold: Some(0.9),
            ..ParameterInput::default()
        };
        let Ok(algorithm) = generate(&input, &templates()) else { panic!("generation failed") };

        let p = similarity(&algorithm);
        assert!((p.similarity_threshold - 0.9).abs() < f64::EPSILON);
        assert_eq!(p.method, "tanimoto");
        assert_eq!(p.max_results, Number::from(100));
    }

    #[test]
    fn method_is_spliced_into_pseudocode() {
        let input = ParameterInput {
            method: Some("dice".to_owned()),
            ..ParameterInput::default()
        };
        let Ok(algorithm) = generate(&input, &templates()) else { panic!("generation failed") };

        assert!(algorithm.pseudocode.contains("// similarity metric: dice"));
        assert!(algorithm.pseudocode.contains("dice_similarity(query_fp, fp)"));
        assert!(!algorithm.pseudocode.contains("tanimoto"));
        assert_eq!(similarity(&algorithm).method, "dice");
    }

    #[test]
    fn max_compounds_limits_results() {
        let input = ParameterInput {
            max_compounds: Some(Number::from(5)),
            ..ParameterInput::default()
        };
        let Ok(algorithm) = generate(&input, &templates()) else { panic!("generation failed") };
        assert_eq!(similarity(&algorithm).max_results, Number::from(5));
    }
}
