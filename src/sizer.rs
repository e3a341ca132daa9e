use crate::{Error, Result};

/// Largest grid side the sizer will hand out
pub const MAX_DIMENSION: usize = 1000;

/// Picks a square grid dimension from the words that will be hidden in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSizer {
    density_factor: f64,
}

impl GridSizer {
    pub fn new(density_factor: f64) -> Self {
        Self { density_factor }
    }

    /// The larger of
    /// - the side of a square whose area holds all letters at `density_factor` fill, and
    /// - the longest word plus 30% of its length.
    pub fn size<S: AsRef<str>>(&self, words: &[S]) -> Result<usize> {
        let longest_len = words
            .iter()
            .map(|word| word.as_ref().len())
            .max()
            .ok_or(Error::EmptyWordList)?;
        let total_chars: usize = words.iter().map(|word| word.as_ref().len()).sum();

        let density_side = (total_chars as f64 / self.density_factor).sqrt().floor();
        if !density_side.is_finite() || density_side > MAX_DIMENSION as f64 {
            return Err(Error::GridTooLarge {
                side: density_side,
                max: MAX_DIMENSION,
            });
        }
        let density_dimension = density_side as usize;
        let longest_dimension = longest_len + longest_len * 3 / 10;

        let dimension = density_dimension.max(longest_dimension);
        if dimension > MAX_DIMENSION {
            return Err(Error::GridTooLarge {
                side: dimension as f64,
                max: MAX_DIMENSION,
            });
        }
        Ok(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_an_error() {
        let words: [&str; 0] = [];
        assert!(matches!(
            GridSizer::new(0.5).size(&words),
            Err(Error::EmptyWordList)
        ));
    }

    #[test]
    fn two_short_words() {
        // sqrt(6 / 0.5) = 3.46, 3 + 0
        assert_eq!(GridSizer::new(0.5).size(&["CAT", "DOG"]).unwrap(), 3);
    }

    #[test]
    fn single_long_word_uses_buffer() {
        // sqrt(8 / 0.5) = 4, 8 + 2
        assert_eq!(GridSizer::new(0.5).size(&["LONGWORD"]).unwrap(), 10);
        // 10 * 0.3 must not round down to 2
        assert_eq!(GridSizer::new(0.5).size(&["ABCDEFGHIJ"]).unwrap(), 13);
    }

    #[test]
    fn longest_word_wins_over_density() {
        let words = ["ABCDEFGHIJKLMNOPQRST", "AB"];
        // sqrt(22 / 0.5) = 6.6, 20 + 6
        assert_eq!(GridSizer::new(0.5).size(&words).unwrap(), 26);
    }

    #[test]
    fn density_wins_for_many_short_words() {
        let words = vec!["WORD"; 50];
        // sqrt(200 / 0.5) = 20, 4 + 1
        assert_eq!(GridSizer::new(0.5).size(&words).unwrap(), 20);
        // sparser target, bigger grid: sqrt(200 / 0.4) = 22.36
        assert_eq!(GridSizer::new(0.4).size(&words).unwrap(), 22);
    }

    #[test]
    fn tiny_density_is_rejected_instead_of_allocating() {
        for density in [1e-300, 1e-9, f64::MIN_POSITIVE] {
            assert!(matches!(
                GridSizer::new(density).size(&["CAT"]),
                Err(Error::GridTooLarge { max: MAX_DIMENSION, .. })
            ));
        }
        // sqrt(3 / 1e-5) = 547.7 still fits
        assert_eq!(GridSizer::new(1e-5).size(&["CAT"]).unwrap(), 547);
    }

    #[test]
    fn overlong_word_is_rejected() {
        let word = "A".repeat(800);
        assert!(matches!(
            GridSizer::new(0.5).size(&[word.as_str()]),
            Err(Error::GridTooLarge { .. })
        ));
    }

    #[test]
    fn never_smaller_than_longest_word() {
        for density in [0.1, 0.4, 0.7, 0.99] {
            for len in 1..40 {
                let word = "A".repeat(len);
                assert!(GridSizer::new(density).size(&[word.as_str()]).unwrap() >= len);
            }
        }
    }
}
