use crate::{
    grid::{Grid, Orientation},
    words::SearchWord,
    Config, Error, Result,
};
use enum_iterator::all;
use rand::{seq::SliceRandom, Rng};
use tracing::{debug, trace};

/// How a start position is searched for each word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Score every start for a random orientation and keep the ones that
    /// cross the most existing words. Other orientations are tried when the
    /// first has no room.
    #[default]
    Enumerate,
    /// Draw random starts up to the attempt budget, preferring one that
    /// crosses an existing word, then enumerate.
    Sample,
}

/// A conflict-free start for a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    /// Cells already holding the letter the word needs there
    pub intersections: usize,
}

/// Where a word ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub letters: String,
    pub reversed: bool,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordPlacer {
    strategy: Strategy,
    max_attempts: usize,
}

impl WordPlacer {
    pub fn new(strategy: Strategy, max_attempts: usize) -> Self {
        Self {
            strategy,
            max_attempts,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.strategy, config.max_attempts)
    }

    /// Places `words` one after another, in the order given. Callers pass the
    /// longest words first. Stops at the first word that does not fit.
    pub fn place<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        words: &[SearchWord],
        rng: &mut R,
    ) -> Result<Vec<Placement>> {
        words
            .iter()
            .map(|word| {
                let candidate = self.place_word(grid, &word.letters, rng)?;
                Ok(Placement {
                    word: word.original.clone(),
                    letters: word.letters.clone(),
                    reversed: word.reversed,
                    row: candidate.row,
                    col: candidate.col,
                    orientation: candidate.orientation,
                })
            })
            .collect()
    }

    /// Finds a start for `word` and writes it into the grid.
    pub fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &str,
        rng: &mut R,
    ) -> Result<Candidate> {
        let sampled = match self.strategy {
            Strategy::Enumerate => None,
            Strategy::Sample => self.sample(grid, word, rng),
        };
        let candidate = sampled
            .or_else(|| self.enumerate(grid, word, rng))
            .ok_or_else(|| Error::UnplaceableWord(word.to_owned()))?;

        grid.write_word(candidate.row, candidate.col, candidate.orientation, word);
        debug!(
            word,
            row = candidate.row,
            col = candidate.col,
            orientation = %candidate.orientation,
            intersections = candidate.intersections,
            "placed word"
        );
        Ok(candidate)
    }

    /// Every conflict-free start for `word` along `orientation`. Starts where
    /// every letter is already on the grid are left out, since the word would
    /// hide inside another one.
    pub fn candidates(&self, grid: &Grid, word: &str, orientation: Orientation) -> Vec<Candidate> {
        let Some((last_row, last_col)) = orientation.last_start(grid.dimension(), word.len())
        else {
            return vec![];
        };

        let mut candidates = vec![];
        for row in 0..=last_row {
            for col in 0..=last_col {
                match grid.measure(row, col, orientation, word) {
                    Ok(intersections) if intersections < word.len() => candidates.push(Candidate {
                        row,
                        col,
                        orientation,
                        intersections,
                    }),
                    _ => (),
                }
            }
        }
        candidates
    }

    /// Tries each orientation in random order and picks from the first that has room.
    fn enumerate<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        word: &str,
        rng: &mut R,
    ) -> Option<Candidate> {
        let mut orientations: Vec<Orientation> = all::<Orientation>().collect();
        orientations.shuffle(rng);

        orientations.into_iter().find_map(|orientation| {
            let candidates = self.candidates(grid, word, orientation);
            if candidates.is_empty() {
                debug!(word, %orientation, "no room");
            }
            choose(&candidates, rng)
        })
    }

    /// Draws random starts. A draw that crosses an existing word wins at once;
    /// otherwise the first conflict-free draw is kept once the budget is spent.
    fn sample<R: Rng + ?Sized>(&self, grid: &Grid, word: &str, rng: &mut R) -> Option<Candidate> {
        let orientations: Vec<Orientation> = all::<Orientation>().collect();
        let mut fallback = None;
        for attempt in 1..=self.max_attempts {
            let orientation = *orientations.choose(rng)?;
            let Some((last_row, last_col)) = orientation.last_start(grid.dimension(), word.len())
            else {
                continue;
            };
            let row = rng.gen_range(0..=last_row);
            let col = rng.gen_range(0..=last_col);
            match grid.measure(row, col, orientation, word) {
                Ok(intersections) if intersections == word.len() => {
                    trace!(word, attempt, row, col, %orientation, "already covered")
                }
                Ok(intersections) => {
                    let candidate = Candidate {
                        row,
                        col,
                        orientation,
                        intersections,
                    };
                    if intersections > 0 {
                        return Some(candidate);
                    }
                    if fallback.is_none() {
                        fallback = Some(candidate);
                    }
                }
                Err(err) => trace!(word, attempt, row, col, %orientation, ?err, "rejected"),
            }
        }
        if fallback.is_none() {
            debug!(
                word,
                attempts = self.max_attempts,
                "attempt budget spent, enumerating"
            );
        }
        fallback
    }

    /// Replaces every remaining blank with a random letter.
    pub fn fill<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) {
        let filled = grid.fill_blanks(rng);
        debug!(filled, "filled blank cells");
    }
}

/// Uniform pick, restricted to candidates that cross an existing word when there are any.
pub fn choose<R: Rng + ?Sized>(candidates: &[Candidate], rng: &mut R) -> Option<Candidate> {
    let crossing: Vec<Candidate> = candidates
        .iter()
        .filter(|c| c.intersections > 0)
        .copied()
        .collect();
    if crossing.is_empty() {
        candidates.choose(rng).copied()
    } else {
        crossing.choose(rng).copied()
    }
}
