// mod.rs - Data structures module

pub mod loaders;
pub mod sample;

// Re-export main types for convenience
pub use loaders::load_samples;
pub use sample::{IngestReport, RegistryStats, Sample, SampleRecord, SampleRegistry};
