// engine.rs - Sample registry + sequence cache + similarity, behind one owner

use crate::core::cache::{CachePolicy, SequenceCache};
use crate::core::similarity::{similarity, SimilarityConfig};
use crate::data::{IngestReport, Sample, SampleRecord, SampleRegistry};
use crate::error::{MotifError, Result};
use crate::generators::{
    GeneratorRegistry, SequenceGenerator, DEFAULT_GENERATOR, DEFAULT_SEQUENCE_LENGTH,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Engine construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub generator: String,
    pub sequence_length: usize,
    pub similarity: SimilarityConfig,
    pub cache_policy: CachePolicy,
    /// Draw a progress bar on stderr while the matrix is computed
    pub show_progress: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            similarity: SimilarityConfig::default(),
            cache_policy: CachePolicy::default(),
            show_progress: true,
        }
    }
}

/// Result of `get_sequence`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceResponse {
    pub identifier: String,
    pub sequence: String,
}

/// Result of `compare`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub identifier_a: String,
    pub identifier_b: String,
    pub similarity_score: f64,
}

/// Owns the sample registry and the sequence cache.
///
/// All three operations take `&self`; the engine can be shared across
/// threads behind an `Arc`.
pub struct MotifEngine {
    registry: SampleRegistry,
    cache: SequenceCache,
    generator: Arc<dyn SequenceGenerator>,
    sequence_length: usize,
    similarity: SimilarityConfig,
    cache_policy: CachePolicy,
    show_progress: bool,
}

impl MotifEngine {
    /// Build an engine, resolving the generator by name
    pub fn new(config: EngineConfig) -> Result<Self> {
        let registry = GeneratorRegistry::new();
        let generator = registry.get_generator(&config.generator).ok_or_else(|| {
            MotifError::invalid_input(format!(
                "Unknown generator '{}'. Available: {}",
                config.generator,
                registry.get_generator_names().join(", ")
            ))
        })?;
        Self::with_generator(config, generator)
    }

    /// Build an engine around a caller-supplied generator (`config.generator` is ignored)
    pub fn with_generator(
        config: EngineConfig,
        generator: Arc<dyn SequenceGenerator>,
    ) -> Result<Self> {
        config.similarity.validate()?;
        if config.sequence_length == 0 {
            return Err(MotifError::invalid_input("sequence length must be at least 1"));
        }
        Ok(Self {
            registry: SampleRegistry::new(),
            cache: SequenceCache::new(),
            generator,
            sequence_length: config.sequence_length,
            similarity: config.similarity,
            cache_policy: config.cache_policy,
            show_progress: config.show_progress,
        })
    }

    pub fn registry(&self) -> &SampleRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &SequenceCache {
        &self.cache
    }

    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    pub fn similarity_config(&self) -> &SimilarityConfig {
        &self.similarity
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    pub fn cache_policy(&self) -> CachePolicy {
        self.cache_policy
    }

    /// Bulk upsert; rows missing a field are dropped, a bad age fails the batch
    pub fn ingest(&self, records: &[SampleRecord]) -> Result<IngestReport> {
        let (report, reseeded) = self.registry.upsert_batch(records)?;

        if self.cache_policy == CachePolicy::InvalidateOnReseed && !reseeded.is_empty() {
            let dropped = self.cache.invalidate(&reseeded);
            log::debug!("Invalidated {} cached sequences after re-seed", dropped);
        }
        Ok(report)
    }

    /// Fetch a sample's attributes
    pub fn sample(&self, identifier: &str) -> Result<Sample> {
        self.registry.get(identifier)
    }

    /// Get-or-generate the sequence for an identifier
    pub fn get_sequence(&self, identifier: &str) -> Result<SequenceResponse> {
        let sequence = self.sequence_for(identifier)?;
        Ok(SequenceResponse {
            identifier: identifier.to_string(),
            sequence,
        })
    }

    /// Similarity between two registered samples
    pub fn compare(&self, identifier_a: &str, identifier_b: &str) -> Result<ComparisonResult> {
        // Check both before generating anything
        self.registry.get(identifier_a)?;
        self.registry.get(identifier_b)?;

        let sequence_a = self.sequence_for(identifier_a)?;
        let sequence_b = self.sequence_for(identifier_b)?;
        let similarity_score = similarity(&sequence_a, &sequence_b, &self.similarity)?;

        Ok(ComparisonResult {
            identifier_a: identifier_a.to_string(),
            identifier_b: identifier_b.to_string(),
            similarity_score,
        })
    }

    fn sequence_for(&self, identifier: &str) -> Result<String> {
        // The seed is read under the cache entry lock, so a concurrent
        // invalidation either sees this insert or happens before the read
        self.cache.get_or_try_insert_with(identifier, || {
            let sample = self.registry.get(identifier)?;
            log::debug!(
                "Generating {} symbols for {} with {}",
                self.sequence_length,
                identifier,
                self.generator.name()
            );
            Ok::<_, MotifError>(self.generator.generate(&sample.seed, self.sequence_length))
        })
    }

    /// All-vs-all similarity for the given identifiers.
    ///
    /// Row/column order follows `identifiers`. Sequences are resolved first so
    /// an unknown identifier fails before any scoring starts.
    pub fn similarity_matrix(&self, identifiers: &[String]) -> Result<Vec<Vec<f64>>> {
        let sequences: Vec<String> = identifiers
            .par_iter()
            .map(|id| self.sequence_for(id))
            .collect::<Result<Vec<_>>>()?;

        let n_samples = sequences.len();
        let mut matrix = vec![vec![0.0; n_samples]; n_samples];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = similarity(&sequences[i], &sequences[i], &self.similarity)?;
        }
        if n_samples < 2 {
            return Ok(matrix);
        }

        let start = Instant::now();
        let total_comparisons = n_samples * (n_samples - 1) / 2;
        log::info!(
            "Computing similarity matrix ({} × {} = {} comparisons)...",
            n_samples, n_samples, total_comparisons
        );

        let pb = if self.show_progress {
            ProgressBar::new(total_comparisons as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }

        let update_interval = std::cmp::max(1, total_comparisons / 100);
        let progress_counter = AtomicUsize::new(0);

        let upper_triangle: Vec<(usize, usize, f64)> = (0..n_samples)
            .into_par_iter()
            .flat_map(|i| {
                let sequences = &sequences;
                let progress_counter = &progress_counter;
                let pb = &pb;
                (i + 1..n_samples).into_par_iter().map(move |j| {
                    let score = similarity(&sequences[i], &sequences[j], &self.similarity)?;
                    let count = progress_counter.fetch_add(1, Ordering::Relaxed) + 1;
                    if count % update_interval == 0 {
                        pb.set_position(count as u64);
                    }
                    Ok::<_, MotifError>((i, j, score))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        pb.finish_with_message("✅ Similarity matrix computation completed!");

        for (i, j, score) in upper_triangle {
            matrix[i][j] = score;
            matrix[j][i] = score;
        }

        log::info!(
            "Similarity matrix computed in {:.2}s",
            start.elapsed().as_secs_f64()
        );
        Ok(matrix)
    }
}
