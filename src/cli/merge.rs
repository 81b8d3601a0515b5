// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.samples.is_none() {
            self.samples = config.samples;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.fasta.is_none() {
            self.fasta = config.fasta;
        }
        if self.format == "tsv" {
            if let Some(format) = config.format {
                self.format = format;
            }
        }

        // Sequence derivation (only override defaults, not explicit CLI values)
        if self.generator == "sha256" {
            if let Some(generator) = config.generator {
                self.generator = generator;
            }
        }
        if self.length == 100 {
            if let Some(length) = config.length {
                self.length = length;
            }
        }

        // Similarity
        if self.kmer == 4 {
            if let Some(kmer) = config.kmer {
                self.kmer = kmer;
            }
        }
        if self.window == "tiled" {
            if let Some(window) = config.window {
                self.window = window;
            }
        }
        if self.cache_policy == "sticky" {
            if let Some(policy) = config.cache_policy {
                self.cache_policy = policy;
            }
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Sample selection
        if self.include_samples.is_none() {
            self.include_samples = config.include_samples;
        }
        if self.exclude_samples.is_none() {
            self.exclude_samples = config.exclude_samples;
        }
        if self.include_regions.is_none() {
            self.include_regions = config.include_regions;
        }

        // Flags (config only sets if not explicitly set)
        if !self.json && config.json.unwrap_or(false) {
            self.json = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_fills_defaults() {
        let config = Config {
            samples: Some("samples.csv".to_string()),
            kmer: Some(3),
            generator: Some("md5".to_string()),
            json: Some(true),
            ..Config::default()
        };
        let args = Args::with_defaults().merge_with_config(config);

        assert_eq!(args.samples.as_deref(), Some("samples.csv"));
        assert_eq!(args.kmer, 3);
        assert_eq!(args.generator, "md5");
        assert!(args.json);
        assert_eq!(args.window, "tiled");
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let mut args = Args::with_defaults();
        args.samples = Some("cli.csv".to_string());
        args.kmer = 6;
        args.format = "nexus".to_string();

        let config = Config {
            samples: Some("config.csv".to_string()),
            kmer: Some(3),
            format: Some("csv".to_string()),
            ..Config::default()
        };
        let args = args.merge_with_config(config);

        assert_eq!(args.samples.as_deref(), Some("cli.csv"));
        assert_eq!(args.kmer, 6);
        assert_eq!(args.format, "nexus");
    }
}
