//! Request and response records for the generator API.
//!
//! Covers the inbound [`GenerateRequest`] / [`ParameterInput`] pair, the
//! per-category resolved parameter records, and the outbound
//! [`GeneratedAlgorithm`], [`ServiceInfo`] and [`ErrorBody`] payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Map, Number, Value};
use ts_rs::TS;

use crate::enums::AlgorithmCategory;

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// Optional, partially specified generation parameters.
///
/// Every field is optional. Generators fill in category-specific defaults
/// for anything left out; no range checks are applied, so a negative or
/// fractional count is echoed back exactly as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ParameterInput {
    /// Threshold fraction (similarity, activity, match or consensus cutoff).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Method name, spliced verbatim into pseudocode where used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Maximum number of compounds to consider or return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number")]
    pub max_compounds: Option<Number>,
    /// Iteration or generation count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number")]
    pub iterations: Option<Number>,
}

impl ParameterInput {
    /// Extract parameters from an arbitrary JSON value.
    ///
    /// Fields that are missing, `null`, or of the wrong JSON type are
    /// treated as absent. Any JSON number is kept for the numeric fields.
    /// A non-object value yields all-absent parameters.
    pub fn from_value(value: &Value) -> Self {
        Self {
            threshold: value.get("threshold").and_then(Value::as_f64),
            method: value
                .get("method")
                .and_then(Value::as_str)
                .map(str::to_owned),
            max_compounds: number_field(value, "maxCompounds"),
            iterations: number_field(value, "iterations"),
        }
    }
}

/// A `POST /generate` request body.
///
/// `algorithm_type` is kept as the raw string the client sent so that
/// unknown identifiers reach the dispatcher and are rejected there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GenerateRequest {
    /// The requested category identifier.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub algorithm_type: Option<String>,
    /// Optional parameter overrides.
    #[serde(default)]
    pub parameters: ParameterInput,
}

impl GenerateRequest {
    /// Parse a raw request body leniently.
    ///
    /// An empty body, a body that is not JSON, or a JSON document without a
    /// string `type` all produce a request with no category, which the
    /// dispatcher rejects like any unknown identifier.
    ///
    /// A well-formed object holding a value `serde_json` cannot represent
    /// (such as `1e400`) keeps its other fields; only the offending entry
    /// is dropped.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => serde_json::from_slice::<BTreeMap<String, Box<RawValue>>>(body)
                .map(|fields| Self::from_value(&salvage_fields(fields)))
                .unwrap_or_default(),
        }
    }

    /// Build a request from an already parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        Self {
            algorithm_type: value
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_owned),
            parameters: value
                .get("parameters")
                .map(ParameterInput::from_value)
                .unwrap_or_default(),
        }
    }
}

fn number_field(value: &Value, key: &str) -> Option<Number> {
    match value.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

/// Rebuild an object from raw entries, two levels deep, dropping entries
/// whose value does not parse.
fn salvage_fields(fields: BTreeMap<String, Box<RawValue>>) -> Value {
    let object: Map<String, Value> = fields
        .into_iter()
        .filter_map(|(key, raw)| {
            let parsed = serde_json::from_str::<Value>(raw.get()).ok().or_else(|| {
                serde_json::from_str::<BTreeMap<String, Box<RawValue>>>(raw.get())
                    .ok()
                    .map(salvage_entries)
            })?;
            Some((key, parsed))
        })
        .collect();
    Value::Object(object)
}

fn salvage_entries(fields: BTreeMap<String, Box<RawValue>>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .filter_map(|(key, raw)| {
                serde_json::from_str::<Value>(raw.get())
                    .ok()
                    .map(|value| (key, value))
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Resolved parameters, one record per category
// ---------------------------------------------------------------------------

/// Resolved parameters for `molecular-similarity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SimilarityParameters {
    /// Minimum similarity score for a hit.
    pub similarity_threshold: f64,
    /// Similarity metric name.
    pub method: String,
    /// Maximum number of hits returned.
    #[ts(type = "number")]
    pub max_results: Number,
}

/// Resolved parameters for `qsar-model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct QsarParameters {
    /// Learner family.
    pub model_type: String,
    /// Molecular descriptors used as features.
    pub descriptors: Vec<String>,
    /// Number of cross-validation folds.
    pub cross_validation_folds: u32,
    /// Hold-out fraction for the test split.
    pub test_size: f64,
    /// Upper bound on training iterations.
    #[ts(type = "number")]
    pub max_iterations: Number,
}

/// Resolved parameters for `compound-screening`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ScreeningParameters {
    /// Minimum predicted activity for a compound to pass.
    pub activity_threshold: f64,
    /// Filters applied in order.
    pub filters: Vec<String>,
    /// Maximum number of library compounds screened.
    #[ts(type = "number")]
    pub max_compounds: Number,
}

/// Resolved parameters for `structure-optimization`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct OptimizationParameters {
    /// Candidate molecules per generation.
    pub population_size: u32,
    /// Number of generations evolved.
    #[ts(type = "number")]
    pub generations: Number,
    /// Per-molecule mutation probability.
    pub mutation_rate: f64,
    /// Per-pair crossover probability.
    pub crossover_rate: f64,
    /// Objectives combined into the fitness score.
    pub objectives: Vec<String>,
}

/// Resolved parameters for `pharmacophore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PharmacophoreParameters {
    /// Pharmacophoric feature types considered.
    pub features: Vec<String>,
    /// Minimum fit score for a match.
    pub match_threshold: f64,
    /// Inter-feature distance tolerance in angstroms.
    pub distance_tolerance: f64,
    /// Maximum number of matches returned.
    #[ts(type = "number")]
    pub max_results: Number,
}

/// Resolved parameters for `virtual-screening`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct VirtualScreeningParameters {
    /// Pipeline stages, in execution order.
    pub stages: Vec<String>,
    /// Minimum consensus score across stages.
    pub consensus_threshold: f64,
    /// Similarity metric used by the ligand-based stage.
    pub similarity_method: String,
    /// Size limit of the screened library.
    #[ts(type = "number")]
    pub max_compounds: Number,
}

/// Resolved, defaulted parameters echoed back to the client.
///
/// Serialized without a tag; the shape is implied by the response `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "bindings/")]
pub enum ResolvedParameters {
    /// `molecular-similarity` parameters.
    Similarity(SimilarityParameters),
    /// `qsar-model` parameters.
    Qsar(QsarParameters),
    /// `compound-screening` parameters.
    Screening(ScreeningParameters),
    /// `structure-optimization` parameters.
    Optimization(OptimizationParameters),
    /// `pharmacophore` parameters.
    Pharmacophore(PharmacophoreParameters),
    /// `virtual-screening` parameters.
    VirtualScreening(VirtualScreeningParameters),
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// The result of a successful generation request.
///
/// Built fresh per request and discarded after the response is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct GeneratedAlgorithm {
    /// Human-readable algorithm name.
    pub name: String,
    /// Echo of the requested category.
    #[serde(rename = "type")]
    pub category: AlgorithmCategory,
    /// Prose description of what the algorithm does.
    pub description: String,
    /// Resolved parameter values.
    pub parameters: ResolvedParameters,
    /// Pseudocode text with parameter values substituted.
    pub pseudocode: String,
    /// Free-form asymptotic complexity annotation.
    pub complexity: String,
    /// Typical applications, most common first.
    pub use_cases: Vec<String>,
}

/// Informational payload for `GET /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ServiceInfo {
    /// Service banner.
    pub message: String,
    /// Service version.
    pub version: String,
    /// Every recognized category identifier.
    pub available_algorithms: Vec<AlgorithmCategory>,
    /// How to call `POST /generate`.
    pub usage: String,
}

/// The only error shape the API ever returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}
