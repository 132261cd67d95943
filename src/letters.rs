//! Letter normalization and the alphabet frequency table used to fill grids.

/// Relative weight of each letter when generating a grid.
pub type LetterWeights = [(char, f64)];

/// Italian letter frequencies (percent). The 21-letter Italian alphabet has no
/// j, k, w, x, y.
pub const ITALIAN_ALPHABET: &LetterWeights = &[
    ('a', 11.74),
    ('b', 0.92),
    ('c', 4.50),
    ('d', 3.73),
    ('e', 11.79),
    ('f', 0.95),
    ('g', 1.64),
    ('h', 1.54),
    ('i', 11.28),
    ('l', 6.51),
    ('m', 2.51),
    ('n', 6.88),
    ('o', 9.83),
    ('p', 3.05),
    ('q', 0.51),
    ('r', 6.37),
    ('s', 4.98),
    ('t', 5.62),
    ('u', 3.01),
    ('v', 2.10),
    ('z', 0.49),
];

/// Letter returned when a weight table cannot produce one (empty or all-zero).
pub const FALLBACK_LETTER: char = 'a';

/// Normalize one cell (or one word) for comparison: surrounding whitespace
/// removed, lowercased.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("A"), "a");
        assert_eq!(normalize("CaSa"), "casa");
        assert_eq!(normalize("È"), "è");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  q \n"), "q");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_italian_alphabet_constants() {
        assert_eq!(ITALIAN_ALPHABET.len(), 21);
        assert!(ITALIAN_ALPHABET.iter().all(|&(c, w)| c.is_ascii_lowercase() && w > 0.0));
        for missing in ['j', 'k', 'w', 'x', 'y'] {
            assert!(ITALIAN_ALPHABET.iter().all(|&(c, _)| c != missing));
        }
        let total: f64 = ITALIAN_ALPHABET.iter().map(|&(_, w)| w).sum();
        assert!((total - 100.0).abs() < 1.0, "weights should sum to ~100, got {total}");
    }
}
