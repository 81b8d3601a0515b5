// cache.rs - Per-identifier memo of generated sequences

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What happens to a cached sequence when its sample is re-ingested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CachePolicy {
    /// Never recompute once stored, even if the seed changes
    #[default]
    Sticky,
    /// Drop the cached sequence when re-ingest changes the seed
    InvalidateOnReseed,
}

impl FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sticky" => Ok(CachePolicy::Sticky),
            "invalidate" | "invalidate-on-reseed" => Ok(CachePolicy::InvalidateOnReseed),
            _ => Err(format!("Invalid cache policy: {}. Use: sticky, invalidate", s)),
        }
    }
}

impl CachePolicy {
    pub fn description(&self) -> &str {
        match self {
            CachePolicy::Sticky => "sticky (first sequence pinned for the process lifetime)",
            CachePolicy::InvalidateOnReseed => "invalidate when a re-ingest changes the seed",
        }
    }
}

/// Sequence memo keyed by sample identifier
#[derive(Debug, Default)]
pub struct SequenceCache {
    sequences: DashMap<String, String>,
}

impl SequenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<String> {
        self.sequences.get(identifier).map(|s| s.value().clone())
    }

    /// Return the cached sequence or store the one produced by `generate`.
    ///
    /// The entry stays locked while `generate` runs, so concurrent callers for
    /// the same identifier see a single generation. Nothing is stored if
    /// `generate` fails.
    pub fn get_or_try_insert_with<E, F>(&self, identifier: &str, generate: F) -> Result<String, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        if let Some(hit) = self.get(identifier) {
            log::debug!("Sequence cache hit: {}", identifier);
            return Ok(hit);
        }

        match self.sequences.entry(identifier.to_string()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let sequence = generate()?;
                log::debug!("Sequence cache miss, stored: {}", identifier);
                entry.insert(sequence.clone());
                Ok(sequence)
            }
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.sequences.contains_key(identifier)
    }

    /// Remove cached sequences, returning how many were present
    pub fn invalidate<S: AsRef<str>>(&self, identifiers: &[S]) -> usize {
        identifiers
            .iter()
            .filter(|id| {
                let key: &str = (*id).as_ref();
                self.sequences.remove(key).is_some()
            })
            .count()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
