// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub samples: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub fasta: Option<String>,

    // Sequence derivation
    pub generator: Option<String>,
    pub length: Option<usize>,

    // Similarity
    pub kmer: Option<usize>,
    pub window: Option<String>,
    pub cache_policy: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Sample selection
    pub include_samples: Option<String>,
    pub exclude_samples: Option<String>,
    pub include_regions: Option<String>,

    // Flags
    pub json: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        log::info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        log::info!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# motifdist.toml - Configuration file for motifdist
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Sample table with columns id, region, age, seed (.csv or .tsv)
samples = "/path/to/samples.csv"

# Output similarity matrix file (used with --matrix)
output = "similarity.tsv"

# Output format: tsv, csv, phylip, nexus
format = "tsv"

# Write derived sequences to FASTA
# fasta = "sequences.fasta"

# =============================================================================
# SEQUENCE DERIVATION
# =============================================================================

# Generator: sha256, md5, crc32
# Changing it changes every derived sequence
generator = "sha256"

# Number of symbols per derived sequence
length = 100

# =============================================================================
# SIMILARITY
# =============================================================================

# Motif length
kmer = 4

# Motif window: tiled (non-overlapping, stride k) or sliding (stride 1)
window = "tiled"

# Cache policy when a sample is re-ingested with a new seed:
# sticky (keep the first sequence) or invalidate (regenerate)
cache_policy = "sticky"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# SAMPLE SELECTION (matrix and FASTA output)
# =============================================================================

# include_samples = "^X0.*"
# exclude_samples = "control.*"
# include_regions = "^(EU|AS)$"

# =============================================================================
# FLAGS
# =============================================================================

# Print results as JSON lines only
json = false
"#
        .to_string()
    }
}
