// md5.rs - MD5-seeded generator implementation

use super::traits::SequenceGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// MD5 generator - the 16-byte digest is repeated to fill the 32-byte RNG seed
#[derive(Debug, Clone)]
pub struct Md5Generator;

impl SequenceGenerator for Md5Generator {
    fn rng_for_seed(&self, seed: &str) -> StdRng {
        let digest = md5::compute(seed.as_bytes());
        let mut rng_seed = [0u8; 32];
        rng_seed[..16].copy_from_slice(&digest.0);
        rng_seed[16..].copy_from_slice(&digest.0);
        StdRng::from_seed(rng_seed)
    }

    fn name(&self) -> &'static str {
        "MD5"
    }

    fn description(&self) -> &'static str {
        "MD5 digest of the seed initialises a ChaCha stream"
    }
}
