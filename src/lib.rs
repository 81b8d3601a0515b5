// lib.rs - motifdist library root

//! # motifdist - Seed-derived sequences and motif similarity for labeled samples
//!
//! Samples (identifier, region, age, seed) are registered in bulk. Each
//! sample's seed deterministically derives a fixed-length sequence over
//! `A, T, C, G`, generated at most once per identifier and memoised. Two
//! samples are compared by the Jaccard similarity of their non-overlapping
//! k-mer sets.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use motifdist::prelude::*;
//!
//! let engine = MotifEngine::new(EngineConfig::default())?;
//! let records = load_samples(std::path::Path::new("samples.csv"))?;
//! let report = engine.ingest(&records)?;
//! println!("{} samples registered", report.total_records);
//!
//! let sequence = engine.get_sequence("X001")?;
//! let result = engine.compare("X001", "X002")?;
//! println!("{} vs {}: {}", result.identifier_a, result.identifier_b, result.similarity_score);
//! # Ok::<(), motifdist::MotifError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod generators;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{similarity, CachePolicy, MotifWindow, SimilarityConfig};
    pub use crate::core::{ComparisonResult, EngineConfig, MotifEngine, SequenceResponse};
    pub use crate::data::{load_samples, IngestReport, Sample, SampleRecord, SampleRegistry};
    pub use crate::error::{ErrorKind, MotifError};
    pub use crate::generators::{GeneratorRegistry, SequenceGenerator};
    pub use crate::generators::{Crc32Generator, Md5Generator, Sha256Generator};
    pub use crate::output::{write_fasta, write_matrix};
}

// Re-export main types at the root level for convenience
pub use crate::core::{EngineConfig, MotifEngine};
pub use crate::data::{Sample, SampleRecord};
pub use crate::error::{ErrorKind, MotifError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "motifdist v{} - Seed-derived sequences and motif similarity",
        VERSION
    )
}
