//! Resolution of the free-form `method` parameter.
//!
//! Clients may send any string. Documented names pass through untouched;
//! anything else is still used verbatim, with a warning so operators can
//! see callers drifting off the documented set.

use molgen_types::SimilarityMethod;

/// Method used when the request does not name one.
pub const DEFAULT_METHOD: SimilarityMethod = SimilarityMethod::Tanimoto;

/// Resolve the requested method name, falling back to [`DEFAULT_METHOD`].
pub fn resolve(requested: Option<&str>) -> String {
    match requested {
        None => DEFAULT_METHOD.as_str().to_owned(),
        Some(name) => {
            if SimilarityMethod::from_name(name).is_none() {
                tracing::warn!(method = name, "undocumented similarity method, interpolating as given");
            }
            name.to_owned()
        }
    }
}
