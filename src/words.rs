use crate::{Error, Result};
use rand::Rng;

/// A word as it will be hidden in the grid, alongside the text it is listed as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchWord {
    /// Entry as supplied, used for the printed word list
    pub original: String,
    /// Uppercase ASCII letters in grid order
    pub letters: String,
    pub reversed: bool,
}

impl AsRef<str> for SearchWord {
    fn as_ref(&self) -> &str {
        &self.letters
    }
}

/// Turns list entries into grid-ready words, longest first.
///
/// Anything that is not an ASCII letter is dropped, so "Pearl Harbor" becomes
/// `PEARLHARBOR`. Each word is reversed with a `reverse_percent` in 100 chance.
pub fn prepare<S, R>(words: &[S], reverse_percent: u8, rng: &mut R) -> Result<Vec<SearchWord>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut prepared = words
        .iter()
        .map(|word| {
            let original = word.as_ref();
            let letters: String = original
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_uppercase())
                .collect();
            if letters.is_empty() {
                return Err(Error::BlankWord(original.to_owned()));
            }

            let reversed = rng.gen_range(0..100u8) < reverse_percent;
            let letters = if reversed {
                letters.chars().rev().collect()
            } else {
                letters
            };

            Ok(SearchWord {
                original: original.to_owned(),
                letters,
                reversed,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable, so equal-length words keep list order
    prepared.sort_by(|a, b| b.letters.len().cmp(&a.letters.len()));
    Ok(prepared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn strips_and_uppercases() {
        let mut rng = StdRng::seed_from_u64(1);
        let words = prepare(&["Pearl Harbor", "d-day", "O'Neill"], 0, &mut rng).unwrap();
        let letters: Vec<_> = words.iter().map(|w| w.letters.as_str()).collect();
        assert_eq!(letters, ["PEARLHARBOR", "ONEILL", "DDAY"]);
        assert_eq!(words[0].original, "Pearl Harbor");
        assert!(words.iter().all(|w| !w.reversed));
    }

    #[test]
    fn sorts_longest_first_keeping_ties_in_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let words = prepare(&["CAT", "ELEPHANT", "DOG", "HORSE"], 0, &mut rng).unwrap();
        let letters: Vec<_> = words.iter().map(|w| w.letters.as_str()).collect();
        assert_eq!(letters, ["ELEPHANT", "HORSE", "CAT", "DOG"]);
    }

    #[test]
    fn always_reverses_at_one_hundred_percent() {
        let mut rng = StdRng::seed_from_u64(3);
        let words = prepare(&["RADAR", "TANK", "SHIP"], 100, &mut rng).unwrap();
        assert!(words.iter().all(|w| w.reversed));
        assert_eq!(words[0].letters, "RADAR");
        assert_eq!(words[1].letters, "KNAT");
        assert_eq!(words[2].letters, "PIHS");
    }

    #[test]
    fn reverses_some_at_default_rate() {
        let mut rng = StdRng::seed_from_u64(4);
        let list = vec!["ABC"; 400];
        let reversed = prepare(&list, 25, &mut rng)
            .unwrap()
            .iter()
            .filter(|w| w.reversed)
            .count();
        assert!((50..150).contains(&reversed), "{reversed}");
    }

    #[test]
    fn word_without_letters_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            prepare(&["TANK", "1944"], 0, &mut rng),
            Err(Error::BlankWord(w)) if w == "1944"
        ));
    }
}
