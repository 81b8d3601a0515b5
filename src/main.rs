// main.rs - CLI entry point

use motifdist::cli::Config;
use motifdist::output::to_json_line;
use motifdist::prelude::*;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    init_logging(args.verbose);

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let samples_path = args.samples.clone().ok_or("--samples is required")?;
    let validation = validate_args(&args)?;
    let banner = !args.json;

    if banner {
        println!("🚀 motifdist v{}", env!("CARGO_PKG_VERSION"));
    }

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if banner {
            println!("🧵 Threads: {}", n);
        }
    } else if banner {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let engine = MotifEngine::new(validation.engine_config.clone()).map_err(|e| e.to_string())?;
    if banner {
        let config = engine.similarity_config();
        println!(
            "🔨 Generator: {} | length {} | k = {} ({})",
            engine.generator_name(),
            engine.sequence_length(),
            config.k,
            config.window.description()
        );
        println!("🗃️  Cache policy: {}", engine.cache_policy().description());
    }

    let total_start = Instant::now();

    // Ingest
    let records = load_samples(std::path::Path::new(&samples_path)).map_err(|e| e.to_string())?;
    let report = engine.ingest(&records).map_err(|e| e.to_string())?;
    if banner {
        println!(
            "📊 Samples loaded: {} accepted, {} dropped (missing fields), {} total records",
            report.accepted, report.rejected, report.total_records
        );
    }

    if args.dry_run {
        if banner {
            println!("✅ Dry run completed successfully");
        } else {
            println!("{}", to_json_line(&report).map_err(|e| e.to_string())?);
        }
        return Ok(());
    }

    if args.stats_only {
        if banner {
            print_statistics(engine.registry());
        } else {
            let stats = engine.registry().statistics();
            println!("{}", to_json_line(&stats).map_err(|e| e.to_string())?);
        }
        return Ok(());
    }

    for identifier in &args.sequence {
        let response = engine.get_sequence(identifier).map_err(|e| e.to_string())?;
        if banner {
            println!("🧬 {}: {}", response.identifier, response.sequence);
        } else {
            println!("{}", to_json_line(&response).map_err(|e| e.to_string())?);
        }
    }

    for (identifier_a, identifier_b) in &validation.comparisons {
        let result = engine
            .compare(identifier_a, identifier_b)
            .map_err(|e| e.to_string())?;
        if banner {
            println!(
                "🎯 {} vs {}: similarity {:.4}",
                result.identifier_a, result.identifier_b, result.similarity_score
            );
        } else {
            println!("{}", to_json_line(&result).map_err(|e| e.to_string())?);
        }
    }

    // Matrix and FASTA outputs run over the filtered selection
    if args.matrix || args.fasta.is_some() {
        let selected: Vec<Sample> = engine
            .registry()
            .samples()
            .into_iter()
            .filter(|s| validation.is_selected(s))
            .collect();
        if banner {
            println!(
                "🔍 Selected {} of {} samples",
                selected.len(),
                report.total_records
            );
        }
        let ids: Vec<String> = selected.iter().map(|s| s.identifier.clone()).collect();

        if args.matrix {
            let matrix = engine.similarity_matrix(&ids).map_err(|e| e.to_string())?;
            if let Some(output) = &args.output {
                write_matrix(output, &args.format, &ids, &matrix, &command_line)
                    .map_err(|e| e.to_string())?;
                if banner {
                    println!(
                        "✅ Similarity matrix written to: {} ({})",
                        output,
                        args.format.to_lowercase()
                    );
                }
            }
        }

        if let Some(fasta_path) = &args.fasta {
            let mut records = Vec::with_capacity(selected.len());
            for sample in selected {
                let response = engine
                    .get_sequence(&sample.identifier)
                    .map_err(|e| e.to_string())?;
                records.push((sample, response.sequence));
            }
            write_fasta(fasta_path, &records).map_err(|e| e.to_string())?;
            if banner {
                println!("✅ {} sequences written to: {}", records.len(), fasta_path);
            }
        }
    }

    if banner {
        println!(
            "⏱️  Completed in {:.2}s ({} sequences generated)",
            total_start.elapsed().as_secs_f64(),
            engine.cache().len()
        );
    }
    Ok(())
}

fn print_statistics(registry: &SampleRegistry) {
    let stats = registry.statistics();
    println!("\n📈 === SAMPLE REGISTRY ===");
    println!("  • Samples: {}", stats.total_samples);
    println!("  • Regions: {}", stats.region_counts.len());
    for (region, count) in &stats.region_counts {
        println!("      {:<16} {}", region, count);
    }
    match (stats.min_age, stats.max_age, stats.mean_age) {
        (Some(min), Some(max), Some(mean)) => {
            println!("  • Age range: {} – {} (mean {:.1})", min, max, mean)
        }
        _ => println!("  • Age range: n/a"),
    }
    println!("\n✅ Statistics analysis completed");
}
