//! Enumeration types for the algorithm generator.
//!
//! [`AlgorithmCategory`] is the routing key of the whole service. The six
//! identifiers are fixed at compile time and serialized exactly as clients
//! send them (case-sensitive, hyphenated).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Algorithm categories
// ---------------------------------------------------------------------------

/// One of the six algorithm families a client can request.
///
/// Each category routes to exactly one generator in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "bindings/")]
pub enum AlgorithmCategory {
    /// Fingerprint-based similarity search against a compound database.
    MolecularSimilarity,
    /// Quantitative structure-activity relationship model training.
    QsarModel,
    /// Rule- and model-based filtering of a compound library.
    CompoundScreening,
    /// Genetic-algorithm lead optimization.
    StructureOptimization,
    /// Pharmacophore feature extraction and 3D matching.
    Pharmacophore,
    /// Multi-stage ensemble virtual screening pipeline.
    VirtualScreening,
}

impl AlgorithmCategory {
    /// Every category, in the order they are advertised to clients.
    pub const ALL: [Self; 6] = [
        Self::MolecularSimilarity,
        Self::QsarModel,
        Self::CompoundScreening,
        Self::StructureOptimization,
        Self::Pharmacophore,
        Self::VirtualScreening,
    ];

    /// The wire identifier for this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MolecularSimilarity => "molecular-similarity",
            Self::QsarModel => "qsar-model",
            Self::CompoundScreening => "compound-screening",
            Self::StructureOptimization => "structure-optimization",
            Self::Pharmacophore => "pharmacophore",
            Self::VirtualScreening => "virtual-screening",
        }
    }

    /// Resolve a wire identifier. Matching is exact: no trimming, no case folding.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == identifier)
    }
}

impl core::fmt::Display for AlgorithmCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Similarity methods
// ---------------------------------------------------------------------------

/// Documented fingerprint similarity metrics.
///
/// The `method` request parameter is a free-form string; this enum only
/// names the values the documentation advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SimilarityMethod {
    /// Tanimoto (Jaccard) coefficient over bit fingerprints.
    Tanimoto,
    /// Dice coefficient.
    Dice,
    /// Cosine similarity.
    Cosine,
    /// Euclidean distance, converted to a similarity score.
    Euclidean,
}

impl SimilarityMethod {
    /// Every documented method.
    pub const ALL: [Self; 4] = [Self::Tanimoto, Self::Dice, Self::Cosine, Self::Euclidean];

    /// The lowercase name used in requests and pseudocode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tanimoto => "tanimoto",
            Self::Dice => "dice",
            Self::Cosine => "cosine",
            Self::Euclidean => "euclidean",
        }
    }

    /// Resolve a method name exactly as documented.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == name)
    }
}

impl core::fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
