// similarity.rs - Motif extraction and Jaccard similarity

use crate::error::{MotifError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Default motif length
pub const DEFAULT_K: usize = 4;

/// How motif windows are laid over a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotifWindow {
    /// Non-overlapping windows at stride `k`, trailing partial window dropped
    #[default]
    Tiled,
    /// Overlapping windows at stride 1
    Sliding,
}

impl FromStr for MotifWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tiled" | "non-overlapping" => Ok(MotifWindow::Tiled),
            "sliding" | "overlapping" => Ok(MotifWindow::Sliding),
            _ => Err(format!("Invalid motif window: {}. Use: tiled, sliding", s)),
        }
    }
}

impl MotifWindow {
    pub fn description(&self) -> &str {
        match self {
            MotifWindow::Tiled => "non-overlapping windows (stride k)",
            MotifWindow::Sliding => "overlapping windows (stride 1)",
        }
    }
}

/// Parameters of the similarity metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    pub k: usize,
    pub window: MotifWindow,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            window: MotifWindow::Tiled,
        }
    }
}

impl SimilarityConfig {
    pub fn new(k: usize, window: MotifWindow) -> Result<Self> {
        let config = Self { k, window };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(MotifError::computation("motif length k must be at least 1"));
        }
        Ok(())
    }
}

/// Collect the distinct motifs of a sequence
pub fn extract_motifs(sequence: &str, k: usize, window: MotifWindow) -> HashSet<&[u8]> {
    let bytes = sequence.as_bytes();
    match window {
        MotifWindow::Tiled => bytes.chunks_exact(k).collect(),
        MotifWindow::Sliding => bytes.windows(k).collect(),
    }
}

/// |a ∩ b| / |a ∪ b|, or 0.0 when both sets are empty
pub fn jaccard<T: Eq + std::hash::Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Round to 4 decimal places, ties to even.
///
/// The decision is made on the exact binary value of `value` rather than on
/// `value * 10_000.0`, whose product rounding can create or hide a tie
/// (`1/32` is a true tie and goes down to `0.0312`; `1/160` sits just above
/// one and goes up to `0.0063`).
pub fn round4(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    // |value| = mantissa * 2^exponent
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if exponent >= 0 {
        return value;
    }

    let shift = (-exponent) as u32;
    // mantissa * 10_000 < 2^67, so anything shifted further is below one half
    if shift >= 68 {
        return 0.0_f64.copysign(value);
    }
    let scaled = u128::from(mantissa) * 10_000;
    let mut quotient = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    if remainder > half || (remainder == half && (quotient & 1) == 1) {
        quotient += 1;
    }

    (quotient as f64 / 10_000.0).copysign(value)
}

/// Score two sequences in [0.0, 1.0]
pub fn similarity(sequence_a: &str, sequence_b: &str, config: &SimilarityConfig) -> Result<f64> {
    config.validate()?;
    let motifs_a = extract_motifs(sequence_a, config.k, config.window);
    let motifs_b = extract_motifs(sequence_b, config.k, config.window);
    Ok(round4(jaccard(&motifs_a, &motifs_b)))
}
