// engine_scenarios.rs - End-to-end ingest / generate / compare scenarios

use motifdist::generators::{is_valid_sequence, Sha256Generator};
use motifdist::prelude::*;
use std::io::Write;

fn engine() -> MotifEngine {
    MotifEngine::new(EngineConfig::default()).unwrap()
}

fn write_samples(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn alpha_seed_is_stable_and_self_similar() {
    let generator = Sha256Generator;
    let first = generator.generate("alpha", 16);
    let second = generator.generate("alpha", 16);

    assert_eq!(first, second);
    assert_eq!(first.len(), 16);
    assert!(is_valid_sequence(&first));

    let config = SimilarityConfig::default();
    assert_eq!(similarity(&first, &first, &config).unwrap(), 1.0);
}

// Fixed outputs for seed "alpha"; any change here changes every stored sequence
const ALPHA_SHA256: &str = "ATAGCTCAAACATCTAAATAAATTCGCCGTTTAGGGTACCTTAGAGCATATCGGCCTGACGGTATTCGCGGCTGTCAGTAGCCGATTGCCGTCTACGCTC";
const ALPHA_MD5: &str = "CTCTTTTACCTACGTTGGGGGAAACGCGCCGGATCTAATGCGCCGATTTGGGTGGTGCGGTTGCTCGAGTATGAATGTGTGTATCCCAAGGTGTTGTGGC";
const ALPHA_CRC32: &str = "AATTGCAGTTTCGACCTGTAACGTACTCTCAGGCATCGCCGCCATTCGCTCGCCTGGGCATTAGAACGCAATCCGTTAGGACAGGCGACCGCCAGTGGGG";

#[test]
fn alpha_seed_matches_recorded_sequences() {
    assert_eq!(Sha256Generator.generate("alpha", 16), "ATAGCTCAAACATCTA");
    assert_eq!(Sha256Generator.generate("alpha", 100), ALPHA_SHA256);
    assert_eq!(Md5Generator.generate("alpha", 100), ALPHA_MD5);
    assert_eq!(Crc32Generator.generate("alpha", 100), ALPHA_CRC32);

    // Shorter requests are prefixes of longer ones
    assert_eq!(Md5Generator.generate("alpha", 16), &ALPHA_MD5[..16]);
    assert_eq!(Crc32Generator.generate("alpha", 16), &ALPHA_CRC32[..16]);
}

#[test]
fn engine_serves_recorded_sequence() {
    let engine = engine();
    engine
        .ingest(&[SampleRecord::new("X001", "EU", "120", "alpha")])
        .unwrap();
    assert_eq!(engine.get_sequence("X001").unwrap().sequence, ALPHA_SHA256);
}

#[test]
fn csv_upload_then_compare() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_samples(
        &dir,
        "samples.csv",
        "id,region,age,seed\nX001,EU,120,s1\nX002,AS,200,s2\nX003,AF,80,\n",
    );

    let engine = engine();
    let records = load_samples(&path).unwrap();
    let report = engine.ingest(&records).unwrap();

    assert_eq!(report.total_records, 2);
    assert_eq!(report.rejected, 1);

    let result = engine.compare("X001", "X002").unwrap();
    assert_eq!(result.identifier_a, "X001");
    assert!((0.0..=1.0).contains(&result.similarity_score));

    assert_eq!(engine.compare("X001", "X001").unwrap().similarity_score, 1.0);
    assert!(engine.get_sequence("X003").unwrap_err().is_not_found());
}

#[test]
fn tsv_upload_with_decimal_ages() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_samples(
        &dir,
        "samples.tsv",
        "id\tregion\tage\tseed\nX001\tEU\t120.0\ts1\n",
    );

    let engine = engine();
    engine.ingest(&load_samples(&path).unwrap()).unwrap();
    assert_eq!(engine.sample("X001").unwrap().age, 120);
}

#[test]
fn uncoercible_age_fails_the_upload() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_samples(
        &dir,
        "samples.csv",
        "id,region,age,seed\nX001,EU,120,s1\nX002,AS,ancient,s2\n",
    );

    let engine = engine();
    let err = engine.ingest(&load_samples(&path).unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert!(err.to_string().contains("ancient"));
    assert!(engine.registry().is_empty());
}

#[test]
fn reingest_overwrites_but_sequence_stays_pinned() {
    let engine = engine();
    engine
        .ingest(&[SampleRecord::new("X001", "EU", "120", "s1")])
        .unwrap();
    let pinned = engine.get_sequence("X001").unwrap().sequence;

    let report = engine
        .ingest(&[SampleRecord::new("X001", "AS", "200", "s2")])
        .unwrap();
    assert_eq!(report.total_records, 1);

    let sample = engine.sample("X001").unwrap();
    assert_eq!(
        sample,
        Sample {
            identifier: "X001".to_string(),
            region: "AS".to_string(),
            age: 200,
            seed: "s2".to_string(),
        }
    );
    assert_eq!(engine.get_sequence("X001").unwrap().sequence, pinned);
}

#[test]
fn engines_are_isolated_and_reproducible() {
    let records = [
        SampleRecord::new("X001", "EU", "120", "s1"),
        SampleRecord::new("X002", "AS", "200", "s2"),
    ];

    let first = engine();
    first.ingest(&records).unwrap();
    let second = engine();
    second.ingest(&records).unwrap();

    // Different call orders, same answers
    let a_then_b = first.compare("X001", "X002").unwrap();
    second.get_sequence("X002").unwrap();
    let b_then_a = second.compare("X002", "X001").unwrap();

    assert_eq!(a_then_b.similarity_score, b_then_a.similarity_score);
    assert_eq!(
        first.get_sequence("X001").unwrap(),
        second.get_sequence("X001").unwrap()
    );
}

#[test]
fn shared_engine_under_concurrent_load() {
    let engine = std::sync::Arc::new(engine());
    let records: Vec<SampleRecord> = (0..20)
        .map(|i| SampleRecord::new(&format!("S{:02}", i), "EU", "100", &format!("seed-{}", i)))
        .collect();
    engine.ingest(&records).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                (0..20)
                    .map(|i| {
                        let a = format!("S{:02}", i);
                        let b = format!("S{:02}", (i + t + 1) % 20);
                        engine.compare(&a, &b).unwrap().similarity_score
                    })
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    for handle in handles {
        let scores = handle.join().unwrap();
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }
    assert_eq!(engine.cache().len(), 20);
}

#[test]
fn json_shapes_match_the_operations() {
    let engine = engine();
    let report = engine
        .ingest(&[SampleRecord::new("X001", "EU", "120", "s1")])
        .unwrap();

    let report: serde_json::Value = serde_json::to_value(report).unwrap();
    assert_eq!(report["total_records"], 1);

    let seq: serde_json::Value =
        serde_json::to_value(engine.get_sequence("X001").unwrap()).unwrap();
    assert_eq!(seq["identifier"], "X001");
    assert_eq!(seq["sequence"].as_str().unwrap().len(), 100);

    let cmp: serde_json::Value =
        serde_json::to_value(engine.compare("X001", "X001").unwrap()).unwrap();
    assert_eq!(cmp["similarity_score"], 1.0);
}
