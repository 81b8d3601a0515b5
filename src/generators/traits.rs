// traits.rs - Core trait and helpers for the sequence generator system

use rand::rngs::StdRng;
use rand::Rng;
use std::fmt::Debug;

/// Symbol alphabet, indexed by the uniform draw in `0..4`
pub const NUCLEOTIDES: [char; 4] = ['A', 'T', 'C', 'G'];

/// Length used when the caller does not ask for one
pub const DEFAULT_SEQUENCE_LENGTH: usize = 100;

/// Strategy for turning an opaque seed string into a reproducible sequence.
///
/// Implementations only decide how the seed initialises the random stream;
/// the mapping of draws onto [`NUCLEOTIDES`] is shared so that every
/// generator emits exactly `length` symbols from the same alphabet.
pub trait SequenceGenerator: Send + Sync + Debug {
    /// Build the random stream for a seed. Must depend on `seed` alone.
    fn rng_for_seed(&self, seed: &str) -> StdRng;

    /// Derive the sequence for a seed
    fn generate(&self, seed: &str, length: usize) -> String {
        let mut rng = self.rng_for_seed(seed);
        emit_symbols(&mut rng, length)
    }

    /// Get a human-readable name for this generator
    fn name(&self) -> &'static str;

    /// Get a description of this generator
    fn description(&self) -> &'static str;
}

/// Draw `length` symbols, one uniform index per symbol
pub fn emit_symbols<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
        .collect()
}

/// True when every symbol of `sequence` belongs to the alphabet
pub fn is_valid_sequence(sequence: &str) -> bool {
    sequence.chars().all(|c| NUCLEOTIDES.contains(&c))
}
