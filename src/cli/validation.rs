// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{CachePolicy, EngineConfig, MotifWindow, SimilarityConfig};
use crate::data::Sample;
use crate::generators::GeneratorRegistry;
use regex::Regex;
use std::str::FromStr;

const OUTPUT_FORMATS: [&str; 4] = ["tsv", "csv", "phylip", "nexus"];

#[derive(Debug)]
pub struct ValidationResult {
    pub engine_config: EngineConfig,
    pub comparisons: Vec<(String, String)>,
    pub sample_include_regex: Option<Regex>,
    pub sample_exclude_regex: Option<Regex>,
    pub region_include_regex: Option<Regex>,
}

impl ValidationResult {
    /// Apply the ID/region filters used for matrix and FASTA selection
    pub fn is_selected(&self, sample: &Sample) -> bool {
        if let Some(regex) = &self.sample_include_regex {
            if !regex.is_match(&sample.identifier) {
                return false;
            }
        }
        if let Some(regex) = &self.sample_exclude_regex {
            if regex.is_match(&sample.identifier) {
                return false;
            }
        }
        if let Some(regex) = &self.region_include_regex {
            if !regex.is_match(&sample.region) {
                return false;
            }
        }
        true
    }
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate generator
    let registry = GeneratorRegistry::new();
    if !registry.has_generator(&args.generator) {
        return Err(format!(
            "Invalid generator '{}'. Available: {}",
            args.generator,
            registry.get_generator_names().join(", ")
        ));
    }

    if args.length == 0 {
        return Err("Sequence length must be at least 1".to_string());
    }
    if args.kmer == 0 {
        return Err("Motif length (--kmer) must be at least 1".to_string());
    }
    if args.kmer > args.length {
        log::warn!(
            "Motif length {} exceeds sequence length {}: every score will be 0.0",
            args.kmer,
            args.length
        );
    }

    let window = MotifWindow::from_str(&args.window)?;
    let cache_policy = CachePolicy::from_str(&args.cache_policy)?;

    if !OUTPUT_FORMATS.contains(&args.format.to_lowercase().as_str()) {
        return Err(format!(
            "Unsupported output format: {}. Use: {}",
            args.format,
            OUTPUT_FORMATS.join(", ")
        ));
    }
    if args.matrix && args.output.is_none() {
        return Err("--matrix requires --output to specify where to write the matrix".to_string());
    }
    if args.threads == Some(0) {
        return Err("--threads must be at least 1".to_string());
    }

    let comparisons = args
        .compare
        .iter()
        .map(|pair| parse_pair(pair))
        .collect::<Result<Vec<_>, String>>()?;

    // Compile regex patterns
    let sample_include_regex = compile_optional(&args.include_samples, "include_samples")?;
    let sample_exclude_regex = compile_optional(&args.exclude_samples, "exclude_samples")?;
    let region_include_regex = compile_optional(&args.include_regions, "include_regions")?;

    Ok(ValidationResult {
        engine_config: EngineConfig {
            generator: args.generator.clone(),
            sequence_length: args.length,
            similarity: SimilarityConfig {
                k: args.kmer,
                window,
            },
            cache_policy,
            show_progress: !args.json,
        },
        comparisons,
        sample_include_regex,
        sample_exclude_regex,
        region_include_regex,
    })
}

/// Split an `ID_A,ID_B` argument
fn parse_pair(pair: &str) -> Result<(String, String), String> {
    match pair.split_once(',') {
        Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() && !b.contains(',') => {
            Ok((a.trim().to_string(), b.trim().to_string()))
        }
        _ => Err(format!(
            "Invalid --compare value '{}': expected ID_A,ID_B",
            pair
        )),
    }
}

fn compile_optional(pattern: &Option<String>, name: &str) -> Result<Option<Regex>, String> {
    pattern
        .as_ref()
        .map(|p| Regex::new(p).map_err(|e| format!("Invalid {} regex: {}", name, e)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, region: &str) -> Sample {
        Sample {
            identifier: id.to_string(),
            region: region.to_string(),
            age: 0,
            seed: "s".to_string(),
        }
    }

    #[test]
    fn test_defaults_validate() {
        let result = validate_args(&Args::with_defaults()).unwrap();
        assert_eq!(result.engine_config, EngineConfig::default());
        assert!(result.comparisons.is_empty());
    }

    #[test]
    fn test_json_mode_hides_progress() {
        let mut args = Args::with_defaults();
        args.json = true;
        let result = validate_args(&args).unwrap();
        assert!(!result.engine_config.show_progress);
    }

    #[test]
    fn test_compare_pairs() {
        let mut args = Args::with_defaults();
        args.compare = vec!["X001,X002".to_string(), " A , B ".to_string()];
        let result = validate_args(&args).unwrap();
        assert_eq!(
            result.comparisons,
            vec![
                ("X001".to_string(), "X002".to_string()),
                ("A".to_string(), "B".to_string())
            ]
        );

        for bad in ["X001", "X001,", ",X002", "A,B,C"] {
            args.compare = vec![bad.to_string()];
            assert!(validate_args(&args).is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut args = Args::with_defaults();
        args.kmer = 0;
        assert!(validate_args(&args).is_err());

        let mut args = Args::with_defaults();
        args.generator = "blake3".to_string();
        assert!(validate_args(&args).unwrap_err().contains("sha256"));

        let mut args = Args::with_defaults();
        args.window = "diagonal".to_string();
        assert!(validate_args(&args).is_err());

        let mut args = Args::with_defaults();
        args.matrix = true;
        assert!(validate_args(&args).unwrap_err().contains("--output"));

        let mut args = Args::with_defaults();
        args.include_samples = Some("(".to_string());
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_selection_filters() {
        let mut args = Args::with_defaults();
        args.include_samples = Some("^X".to_string());
        args.exclude_samples = Some("ctrl".to_string());
        args.include_regions = Some("^EU$".to_string());
        let result = validate_args(&args).unwrap();

        assert!(result.is_selected(&sample("X001", "EU")));
        assert!(!result.is_selected(&sample("Y001", "EU")));
        assert!(!result.is_selected(&sample("X001-ctrl", "EU")));
        assert!(!result.is_selected(&sample("X002", "AS")));
    }
}
