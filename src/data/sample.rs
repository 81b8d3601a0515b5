// sample.rs - Sample records, ingest validation and the sample registry

use crate::error::{MotifError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Markers treated as an absent value, matching common tabular exports
const MISSING_MARKERS: [&str; 5] = ["NA", "NaN", "N/A", "null", "nan"];

/// A registered sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub identifier: String,
    pub region: String,
    pub age: i64,
    pub seed: String,
}

/// Candidate row handed to ingest; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(default, alias = "identifier")]
    pub id: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub seed: Option<String>,
}

impl SampleRecord {
    pub fn new(id: &str, region: &str, age: &str, seed: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            region: Some(region.to_string()),
            age: Some(age.to_string()),
            seed: Some(seed.to_string()),
        }
    }

    /// True when any of the four required fields is absent
    pub fn has_missing_field(&self) -> bool {
        [&self.id, &self.region, &self.age, &self.seed]
            .into_iter()
            .any(|field| present(field).is_none())
    }
}

/// Outcome of one ingest batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Rows inserted or overwritten
    pub accepted: usize,
    /// Rows dropped for a missing field
    pub rejected: usize,
    /// Records held by the registry after the batch
    pub total_records: usize,
}

/// Registry-wide summary used by `--stats-only`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryStats {
    pub total_samples: usize,
    pub region_counts: BTreeMap<String, usize>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    pub mean_age: Option<f64>,
}

fn present(field: &Option<String>) -> Option<&str> {
    let value = field.as_deref()?.trim();
    if value.is_empty() || MISSING_MARKERS.contains(&value) {
        None
    } else {
        Some(value)
    }
}

/// Coerce an age value to an integer.
///
/// Integer text parses directly; decimal text such as `"120.0"` is truncated
/// toward zero. Anything else is rejected.
pub fn coerce_age(value: &str) -> std::result::Result<i64, String> {
    let cleaned = value.trim();
    if let Ok(age) = cleaned.parse::<i64>() {
        return Ok(age);
    }

    let float = cleaned
        .parse::<f64>()
        .map_err(|_| format!("Failed to parse '{}' as an integer", cleaned))?;

    if !float.is_finite() {
        return Err(format!("Age '{}' is not a finite number", cleaned));
    }
    if float.trunc() < i64::MIN as f64 || float.trunc() > i64::MAX as f64 {
        return Err(format!("Age '{}' is out of range", cleaned));
    }
    Ok(float.trunc() as i64)
}

/// Validate a batch without touching any shared state.
///
/// Rows with a missing field are dropped (counted in the second value);
/// the first uncoercible age fails the whole batch.
pub fn validate_batch(records: &[SampleRecord]) -> Result<(Vec<Sample>, usize)> {
    let mut accepted = Vec::with_capacity(records.len());
    let mut rejected = 0;

    for (index, record) in records.iter().enumerate() {
        let (id, region, age, seed) = match (
            present(&record.id),
            present(&record.region),
            present(&record.age),
            present(&record.seed),
        ) {
            (Some(id), Some(region), Some(age), Some(seed)) => (id, region, age, seed),
            _ => {
                log::warn!("Dropping row {}: missing id, region, age or seed", index + 1);
                rejected += 1;
                continue;
            }
        };

        let age = coerce_age(age)
            .map_err(|e| MotifError::invalid_field(index + 1, "age", age, e.as_str()))?;

        accepted.push(Sample {
            identifier: id.to_string(),
            region: region.to_string(),
            age,
            seed: seed.to_string(),
        });
    }

    Ok((accepted, rejected))
}

/// Identifier-keyed sample store, last write wins
#[derive(Debug, Default)]
pub struct SampleRegistry {
    samples: RwLock<HashMap<String, Sample>>,
}

impl SampleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate then insert a batch under a single write lock.
    ///
    /// Returns the report together with the identifiers whose seed changed.
    pub fn upsert_batch(&self, records: &[SampleRecord]) -> Result<(IngestReport, Vec<String>)> {
        let (valid, rejected) = validate_batch(records)?;
        let accepted = valid.len();

        let mut reseeded = Vec::new();
        let mut samples = self.samples.write();
        for sample in valid {
            if let Some(previous) = samples.get(&sample.identifier) {
                if previous.seed != sample.seed {
                    reseeded.push(sample.identifier.clone());
                }
            }
            samples.insert(sample.identifier.clone(), sample);
        }

        let report = IngestReport {
            accepted,
            rejected,
            total_records: samples.len(),
        };
        log::info!(
            "Ingested {} rows ({} dropped), registry now holds {} samples",
            report.accepted,
            report.rejected,
            report.total_records
        );
        Ok((report, reseeded))
    }

    pub fn get(&self, identifier: &str) -> Result<Sample> {
        self.samples
            .read()
            .get(identifier)
            .cloned()
            .ok_or_else(|| MotifError::not_found(identifier))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.samples.read().contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.samples.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.read().is_empty()
    }

    /// All identifiers, sorted
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.samples.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Snapshot of every sample, sorted by identifier
    pub fn samples(&self) -> Vec<Sample> {
        let mut samples: Vec<Sample> = self.samples.read().values().cloned().collect();
        samples.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        samples
    }

    pub fn statistics(&self) -> RegistryStats {
        let samples = self.samples.read();
        let mut region_counts = BTreeMap::new();
        for sample in samples.values() {
            *region_counts.entry(sample.region.clone()).or_insert(0) += 1;
        }

        let ages: Vec<i64> = samples.values().map(|s| s.age).collect();
        let mean_age = if ages.is_empty() {
            None
        } else {
            Some(ages.iter().map(|&a| a as f64).sum::<f64>() / ages.len() as f64)
        };

        RegistryStats {
            total_samples: samples.len(),
            region_counts,
            min_age: ages.iter().copied().min(),
            max_age: ages.iter().copied().max(),
            mean_age,
        }
    }
}
