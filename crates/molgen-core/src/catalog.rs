//! Static metadata about every algorithm category.
//!
//! The catalog is what `GET /generate`, the documentation endpoint and the
//! UI page all read from, so names, summaries and parameter defaults are
//! declared once here and in the generator modules they point at.

use molgen_types::{AlgorithmCategory, ServiceInfo};
use serde::Serialize;
use serde_json::{Value, json};

use crate::generators::{
    compound_screening, molecular_similarity, pharmacophore, qsar_model, structure_optimization,
    virtual_screening,
};
use crate::method::DEFAULT_METHOD;

/// Banner returned by `GET /generate`.
pub const SERVICE_MESSAGE: &str = "Drug Discovery Algorithm Generator API";

/// Usage hint returned by `GET /generate`.
pub const USAGE: &str = "POST /generate with JSON body { \"type\": <algorithm>, \"parameters\": { \"threshold\"?: number, \"method\"?: string, \"maxCompounds\"?: number, \"iterations\"?: number } }";

/// One input parameter a category honours.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDoc {
    /// Field name in the request `parameters` object.
    pub input: &'static str,
    /// Key the resolved value appears under in the response.
    pub resolved_as: &'static str,
    /// JSON type of the value.
    pub kind: &'static str,
    /// Value used when the field is absent.
    pub default: Value,
    /// What the parameter controls.
    pub description: &'static str,
}

/// Catalog entry for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDescriptor {
    /// The category identifier.
    #[serde(rename = "type")]
    pub category: AlgorithmCategory,
    /// Human-readable algorithm name.
    pub name: &'static str,
    /// One-line summary.
    pub summary: &'static str,
    /// Input parameters honoured by the generator.
    pub parameters: Vec<ParameterDoc>,
}

/// Human-readable algorithm name for a category.
pub const fn display_name(category: AlgorithmCategory) -> &'static str {
    match category {
        AlgorithmCategory::MolecularSimilarity => "Molecular Similarity Search",
        AlgorithmCategory::QsarModel => "QSAR Model Builder",
        AlgorithmCategory::CompoundScreening => "Compound Library Screening",
        AlgorithmCategory::StructureOptimization => "Genetic Algorithm Structure Optimization",
        AlgorithmCategory::Pharmacophore => "Pharmacophore Modeling",
        AlgorithmCategory::VirtualScreening => "Ensemble Virtual Screening Pipeline",
    }
}

/// One-line summary for a category.
pub const fn summary(category: AlgorithmCategory) -> &'static str {
    match category {
        AlgorithmCategory::MolecularSimilarity => {
            "Rank database compounds by fingerprint similarity to a query structure."
        }
        AlgorithmCategory::QsarModel => {
            "Train and validate a descriptor-based activity prediction model."
        }
        AlgorithmCategory::CompoundScreening => {
            "Filter a compound library by drug-likeness, liabilities and predicted activity."
        }
        AlgorithmCategory::StructureOptimization => {
            "Evolve lead compounds toward multiple objectives with a genetic algorithm."
        }
        AlgorithmCategory::Pharmacophore => {
            "Derive a shared feature hypothesis from actives and search for matching compounds."
        }
        AlgorithmCategory::VirtualScreening => {
            "Combine ligand-based, pharmacophore, docking and ML scores into one ranked hit list."
        }
    }
}

fn param(
    input: &'static str,
    resolved_as: &'static str,
    kind: &'static str,
    default: Value,
    description: &'static str,
) -> ParameterDoc {
    ParameterDoc {
        input,
        resolved_as,
        kind,
        default,
        description,
    }
}

/// Input parameters honoured by a category, with their defaults.
pub fn parameters(category: AlgorithmCategory) -> Vec<ParameterDoc> {
    match category {
        AlgorithmCategory::MolecularSimilarity => vec![
            param(
                "threshold",
                "similarityThreshold",
                "number",
                json!(molecular_similarity::DEFAULT_THRESHOLD),
                "Minimum similarity score for a hit.",
            ),
            param(
                "method",
                "method",
                "string",
                json!(DEFAULT_METHOD.as_str()),
                "Similarity metric: tanimoto, dice, cosine or euclidean.",
            ),
            param(
                "maxCompounds",
                "maxResults",
                "number",
                json!(molecular_similarity::DEFAULT_MAX_RESULTS),
                "Maximum number of hits returned.",
            ),
        ],
        AlgorithmCategory::QsarModel => vec![param(
            "iterations",
            "maxIterations",
            "number",
            json!(qsar_model::DEFAULT_MAX_ITERATIONS),
            "Upper bound on training iterations.",
        )],
        AlgorithmCategory::CompoundScreening => vec![
            param(
                "threshold",
                "activityThreshold",
                "number",
                json!(compound_screening::DEFAULT_ACTIVITY_THRESHOLD),
                "Minimum predicted activity for a compound to pass.",
            ),
            param(
                "maxCompounds",
                "maxCompounds",
                "number",
                json!(compound_screening::DEFAULT_MAX_COMPOUNDS),
                "Maximum number of library compounds screened.",
            ),
        ],
        AlgorithmCategory::StructureOptimization => vec![param(
            "iterations",
            "generations",
            "number",
            json!(structure_optimization::DEFAULT_GENERATIONS),
            "Number of generations evolved.",
        )],
        AlgorithmCategory::Pharmacophore => vec![
            param(
                "threshold",
                "matchThreshold",
                "number",
                json!(pharmacophore::DEFAULT_MATCH_THRESHOLD),
                "Minimum pharmacophore fit score for a match.",
            ),
            param(
                "maxCompounds",
                "maxResults",
                "number",
                json!(pharmacophore::DEFAULT_MAX_RESULTS),
                "Maximum number of matches returned.",
            ),
        ],
        AlgorithmCategory::VirtualScreening => vec![
            param(
                "threshold",
                "consensusThreshold",
                "number",
                json!(virtual_screening::DEFAULT_CONSENSUS_THRESHOLD),
                "Minimum normalized consensus score across stages.",
            ),
            param(
                "method",
                "similarityMethod",
                "string",
                json!(DEFAULT_METHOD.as_str()),
                "Similarity metric used by the ligand-based stage.",
            ),
            param(
                "maxCompounds",
                "maxCompounds",
                "number",
                json!(virtual_screening::DEFAULT_MAX_COMPOUNDS),
                "Size limit of the screened library.",
            ),
        ],
    }
}

/// Full catalog entry for a category.
pub fn describe(category: AlgorithmCategory) -> CategoryDescriptor {
    CategoryDescriptor {
        category,
        name: display_name(category),
        summary: summary(category),
        parameters: parameters(category),
    }
}

/// Catalog entries for every category, in advertised order.
pub fn all() -> Vec<CategoryDescriptor> {
    AlgorithmCategory::ALL.into_iter().map(describe).collect()
}

/// The informational payload for `GET /generate`.
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        message: SERVICE_MESSAGE.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        available_algorithms: AlgorithmCategory::ALL.to_vec(),
        usage: USAGE.to_owned(),
    }
}
