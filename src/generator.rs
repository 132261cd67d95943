//! `generator` — fill a fresh grid with letters drawn by frequency.
//!
//! Draws come from [`XorShiftRng`], a small Xorshift128+ generator, so a round
//! can be replayed exactly from its seed (the CLI's `--seed`, the wasm
//! `generate_grid(size, seed)`).

use crate::grid::Grid;
use crate::letters::{LetterWeights, FALLBACK_LETTER};

/// Deterministic Xorshift128+ generator.
#[derive(Debug, Clone)]
pub struct XorShiftRng {
    s0: u64,
    s1: u64,
}

impl XorShiftRng {
    /// Expand a 64-bit seed into the 128-bit state with SplitMix64.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut sm = seed;
        let mut split_mix = || {
            sm = sm.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = sm;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        };
        let s0 = split_mix();
        let s1 = split_mix();
        // all-zero state would only ever produce zeros
        if s0 == 0 && s1 == 0 {
            Self { s0: 1, s1: 0 }
        } else {
            Self { s0, s1 }
        }
    }

    /// Seed from the wall clock. Native only; wasm callers pass a seed.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        // keep both halves of the u128
        Self::seed_from_u64((nanos as u64) ^ ((nanos >> 64) as u64))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.s0;
        let y = self.s1;
        self.s0 = y;
        x ^= x << 23;
        x ^= x >> 17;
        x ^= y ^ (y >> 26);
        self.s1 = x;
        x.wrapping_add(y)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // top 53 bits fill the mantissa exactly
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Pick one letter with probability proportional to its weight.
///
/// Entries with non-positive weight are never chosen. If the table has no
/// positive weight at all, [`FALLBACK_LETTER`] is returned.
pub fn generate_letter(weights: &LetterWeights, rng: &mut XorShiftRng) -> char {
    let total: f64 = weights.iter().map(|&(_, w)| w).filter(|w| *w > 0.0).sum();
    let target = rng.next_f64() * total;

    let mut cumulative = 0.0;
    for &(letter, weight) in weights {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        if target <= cumulative {
            return letter;
        }
    }

    // float rounding can leave `target` a hair above the final sum
    weights
        .iter()
        .rev()
        .find(|&&(_, w)| w > 0.0)
        .map_or(FALLBACK_LETTER, |&(letter, _)| letter)
}

/// Generate a `size` x `size` grid of weighted random letters.
pub fn generate_grid(size: usize, weights: &LetterWeights, rng: &mut XorShiftRng) -> Grid {
    let cells = (0..size * size)
        .map(|_| generate_letter(weights, rng).to_lowercase().collect::<String>())
        .collect();
    Grid::from_normalized(size, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::ITALIAN_ALPHABET;
    use std::collections::HashMap;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = XorShiftRng::seed_from_u64(42);
        let mut b = XorShiftRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = XorShiftRng::seed_from_u64(1);
        let mut b = XorShiftRng::seed_from_u64(2);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x), "{x} out of [0, 1)");
        }
    }

    #[test]
    fn test_generate_letter_only_from_table() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let c = generate_letter(ITALIAN_ALPHABET, &mut rng);
            assert!(ITALIAN_ALPHABET.iter().any(|&(l, _)| l == c));
        }
    }

    #[test]
    fn test_generate_letter_skips_zero_weights() {
        let table = [('x', 0.0), ('q', 1.0), ('z', 0.0)];
        let mut rng = XorShiftRng::seed_from_u64(9);
        for _ in 0..200 {
            assert_eq!(generate_letter(&table, &mut rng), 'q');
        }
    }

    #[test]
    fn test_generate_letter_fallback() {
        let mut rng = XorShiftRng::seed_from_u64(9);
        assert_eq!(generate_letter(&[], &mut rng), FALLBACK_LETTER);
        assert_eq!(generate_letter(&[('b', 0.0)], &mut rng), FALLBACK_LETTER);
    }

    #[test]
    fn test_generate_letter_follows_weights() {
        let table = [('a', 9.0), ('b', 1.0)];
        let mut rng = XorShiftRng::seed_from_u64(11);
        let mut counts: HashMap<char, usize> = HashMap::new();
        for _ in 0..10_000 {
            *counts.entry(generate_letter(&table, &mut rng)).or_default() += 1;
        }
        let a = counts.get(&'a').copied().unwrap_or(0);
        assert!((8_500..9_500).contains(&a), "expected ~9000 a's, got {a}");
    }

    #[test]
    fn test_generate_grid_shape_and_determinism() {
        let g1 = generate_grid(5, ITALIAN_ALPHABET, &mut XorShiftRng::seed_from_u64(123));
        let g2 = generate_grid(5, ITALIAN_ALPHABET, &mut XorShiftRng::seed_from_u64(123));
        assert_eq!(g1.size(), 5);
        assert_eq!(g1.rows().count(), 5);
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_generate_empty_grid() {
        let g = generate_grid(0, ITALIAN_ALPHABET, &mut XorShiftRng::seed_from_u64(0));
        assert!(g.is_empty());
    }
}
