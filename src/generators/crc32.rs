// crc32.rs - CRC32-seeded generator implementation

use super::traits::SequenceGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// CRC32 generator - fast, but only 2^32 distinct streams
#[derive(Debug, Clone)]
pub struct Crc32Generator;

impl SequenceGenerator for Crc32Generator {
    fn rng_for_seed(&self, seed: &str) -> StdRng {
        let crc = crc32fast::hash(seed.as_bytes());
        StdRng::seed_from_u64(crc as u64)
    }

    fn name(&self) -> &'static str {
        "CRC32"
    }

    fn description(&self) -> &'static str {
        "CRC32 checksum of the seed initialises a ChaCha stream (collision-prone)"
    }
}
