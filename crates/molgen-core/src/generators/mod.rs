//! One generator per algorithm category.
//!
//! Every generator has the same shape: take the (possibly partial)
//! [`ParameterInput`](molgen_types::ParameterInput), fill in its own
//! defaults, render its pseudocode template and return a freshly built
//! [`GeneratedAlgorithm`](molgen_types::GeneratedAlgorithm). Generators
//! hold no state and perform no I/O.

pub mod compound_screening;
pub mod molecular_similarity;
pub mod pharmacophore;
pub mod qsar_model;
pub mod structure_optimization;
pub mod virtual_screening;

use serde_json::Number;

/// The count the client sent, as given, or `default` when absent.
fn count_or(requested: Option<&Number>, default: u64) -> Number {
    requested.cloned().unwrap_or_else(|| Number::from(default))
}

/// Convert a static list into owned strings for the response.
fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
