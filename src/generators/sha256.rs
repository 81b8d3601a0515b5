// sha256.rs - SHA256-seeded generator implementation

use super::traits::SequenceGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// SHA256 generator - the full 32-byte digest of the seed becomes the RNG seed
#[derive(Debug, Clone)]
pub struct Sha256Generator;

impl SequenceGenerator for Sha256Generator {
    fn rng_for_seed(&self, seed: &str) -> StdRng {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(seed.as_bytes());
        let mut rng_seed = [0u8; 32];
        rng_seed.copy_from_slice(&digest);
        StdRng::from_seed(rng_seed)
    }

    fn name(&self) -> &'static str {
        "SHA256"
    }

    fn description(&self) -> &'static str {
        "SHA256 digest of the seed initialises a ChaCha stream (default)"
    }
}
