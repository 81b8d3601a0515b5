// mod.rs - Core logic module

pub mod cache;
pub mod engine;
pub mod similarity;

// Re-export main types for convenience
pub use cache::{CachePolicy, SequenceCache};
pub use engine::{ComparisonResult, EngineConfig, MotifEngine, SequenceResponse};
pub use similarity::{
    extract_motifs, jaccard, round4, similarity, MotifWindow, SimilarityConfig, DEFAULT_K,
};
