// mod.rs - Sample file loaders

pub mod delimited;

pub use delimited::{delimiter_for_path, load_records_from_reader, load_samples};
