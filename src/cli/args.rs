// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// motifdist - Seed-derived sequences and motif similarity for labeled samples
pub struct Args {
    /// path to sample table (.csv, or .tsv/.txt for tab-separated) with columns id, region, age, seed
    #[argh(option)]
    pub samples: Option<String>,

    /// print the derived sequence for a sample ID (repeatable)
    #[argh(option)]
    pub sequence: Vec<String>,

    /// compare two samples, given as ID_A,ID_B (repeatable)
    #[argh(option)]
    pub compare: Vec<String>,

    /// compute the all-vs-all similarity matrix (requires --output)
    #[argh(switch)]
    pub matrix: bool,

    /// output similarity matrix file
    #[argh(option)]
    pub output: Option<String>,

    /// output format: tsv, csv, phylip, nexus (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// write every selected sample's derived sequence to a FASTA file
    #[argh(option)]
    pub fasta: Option<String>,

    /// sequence generator: sha256, md5, crc32 (default: sha256)
    #[argh(option, default = "String::from(\"sha256\")")]
    pub generator: String,

    /// derived sequence length (default: 100)
    #[argh(option, default = "100")]
    pub length: usize,

    /// motif length k (default: 4)
    #[argh(option, default = "4")]
    pub kmer: usize,

    /// motif window: tiled (stride k), sliding (stride 1) (default: tiled)
    #[argh(option, default = "String::from(\"tiled\")")]
    pub window: String,

    /// cache policy on re-ingest: sticky, invalidate (default: sticky)
    #[argh(option, default = "String::from(\"sticky\")")]
    pub cache_policy: String,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// include only samples whose ID matches regex pattern (matrix/FASTA selection)
    #[argh(option)]
    pub include_samples: Option<String>,

    /// exclude samples whose ID matches regex pattern (matrix/FASTA selection)
    #[argh(option)]
    pub exclude_samples: Option<String>,

    /// include only samples whose region matches regex pattern (matrix/FASTA selection)
    #[argh(option)]
    pub include_regions: Option<String>,

    /// print results as JSON lines only
    #[argh(switch)]
    pub json: bool,

    /// enable debug logging
    #[argh(switch)]
    pub verbose: bool,

    /// show registry statistics only, then exit
    #[argh(switch)]
    pub stats_only: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

impl Args {
    /// Arguments with every value at its default, as argh would produce
    pub fn with_defaults() -> Self {
        Self {
            samples: None,
            sequence: Vec::new(),
            compare: Vec::new(),
            matrix: false,
            output: None,
            format: String::from("tsv"),
            fasta: None,
            generator: String::from("sha256"),
            length: 100,
            kmer: 4,
            window: String::from("tiled"),
            cache_policy: String::from("sticky"),
            threads: None,
            include_samples: None,
            exclude_samples: None,
            include_regions: None,
            json: false,
            verbose: false,
            stats_only: false,
            dry_run: false,
            config: None,
            generate_config: false,
        }
    }
}
