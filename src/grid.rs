use enum_iterator::Sequence;
use itertools::{Itertools, Position};
use rand::Rng;
use std::fmt::{self, Write as _};

/// How an unassigned cell is rendered before the grid is filled
pub const BLANK: char = '_';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Blank,
    Letter(char),
}

impl Cell {
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Blank => None,
            Cell::Letter(c) => Some(c),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank => f.write_char(BLANK),
            Cell::Letter(c) => f.write_char(*c),
        }
    }
}

/// Axis a word is laid out along. Words always read left-to-right and/or top-to-bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Sequence)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
}

impl Orientation {
    /// `(row, col)` offset between consecutive letters
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
        }
    }

    /// Last valid start `(row, col)`, inclusive, for a word of `len` letters in a
    /// `dim` x `dim` grid. `None` if the word is longer than the grid.
    pub fn last_start(self, dim: usize, len: usize) -> Option<(usize, usize)> {
        if len == 0 {
            return None;
        }
        let last = dim.checked_sub(len)?;
        let edge = dim - 1;
        Some(match self {
            Orientation::Horizontal => (edge, last),
            Orientation::Vertical => (last, edge),
            Orientation::Diagonal => (last, last),
        })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureError {
    DoesntFit,
    Conflicts,
}

/// Square letter grid. Cells only ever go from blank to a letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(dim: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Blank; dim]; dim],
        }
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Counts the cells `word` would share with letters already on the grid if
    /// it started at `(start_row, start_col)`.
    ///
    /// `word` must be uppercase ASCII.
    pub fn measure(
        &self,
        start_row: usize,
        start_col: usize,
        orientation: Orientation,
        word: &str,
    ) -> Result<usize, MeasureError> {
        debug_assert!(is_grid_word(word), "{word:?} is not uppercase ASCII");
        let mut intersections = 0;
        let (dy, dx) = orientation.step();

        // Work from the end so that we can quickly fail if it doesn't fit
        for (i, b) in word.bytes().enumerate().rev() {
            let cell = self
                .cell(start_row + dy * i, start_col + dx * i)
                .ok_or(MeasureError::DoesntFit)?;
            match cell {
                Cell::Blank => (),
                Cell::Letter(c) if c == char::from(b) => intersections += 1,
                Cell::Letter(_) => return Err(MeasureError::Conflicts),
            }
        }

        Ok(intersections)
    }

    /// Writes `word` along `orientation`. Callers check the slot with
    /// [`Grid::measure`] first.
    pub fn write_word(
        &mut self,
        start_row: usize,
        start_col: usize,
        orientation: Orientation,
        word: &str,
    ) {
        debug_assert!(is_grid_word(word), "{word:?} is not uppercase ASCII");
        debug_assert!(self
            .measure(start_row, start_col, orientation, word)
            .is_ok());
        let (dy, dx) = orientation.step();
        for (i, b) in word.bytes().enumerate() {
            if let Some(cell) = self
                .rows
                .get_mut(start_row + dy * i)
                .and_then(|r| r.get_mut(start_col + dx * i))
            {
                *cell = Cell::Letter(char::from(b));
            }
        }
    }

    /// Reads `len` cells starting at `(start_row, start_col)`. Blank cells read as [`BLANK`].
    pub fn read(
        &self,
        start_row: usize,
        start_col: usize,
        orientation: Orientation,
        len: usize,
    ) -> Option<String> {
        let (dy, dx) = orientation.step();
        (0..len)
            .map(|i| {
                self.cell(start_row + dy * i, start_col + dx * i)
                    .map(|cell| cell.letter().unwrap_or(BLANK))
            })
            .collect()
    }

    pub fn blank_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Cell::Blank))
            .count()
    }

    /// Replaces every blank cell with a random letter. Returns how many were filled.
    pub fn fill_blanks<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut filled = 0;
        for cell in self.rows.iter_mut().flatten() {
            if matches!(cell, Cell::Blank) {
                *cell = Cell::Letter(rand_letter(rng));
                filled += 1;
            }
        }
        filled
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (position, cell) in row.iter().with_position() {
                match position {
                    Position::First | Position::Only => write!(f, "{cell}")?,
                    Position::Middle | Position::Last => write!(f, " {cell}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn is_grid_word(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_uppercase())
}

fn rand_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new(4);
        assert_eq!(grid.dimension(), 4);
        assert_eq!(grid.blank_count(), 16);
        assert_eq!(grid.to_string(), "_ _ _ _\n".repeat(4));
    }

    #[test]
    fn last_start_is_inclusive() {
        assert_eq!(Orientation::Horizontal.last_start(5, 5), Some((4, 0)));
        assert_eq!(Orientation::Vertical.last_start(5, 3), Some((2, 4)));
        assert_eq!(Orientation::Diagonal.last_start(5, 2), Some((3, 3)));
        assert_eq!(Orientation::Diagonal.last_start(2, 3), None);
    }

    #[test]
    fn write_then_read() {
        let mut grid = Grid::new(5);
        grid.write_word(1, 0, Orientation::Horizontal, "HELLO");
        grid.write_word(0, 2, Orientation::Vertical, "ALE");
        grid.write_word(0, 0, Orientation::Diagonal, "XE");

        assert_eq!(
            grid.read(1, 0, Orientation::Horizontal, 5).as_deref(),
            Some("HELLO")
        );
        assert_eq!(
            grid.read(0, 2, Orientation::Vertical, 3).as_deref(),
            Some("ALE")
        );
        assert_eq!(
            grid.read(0, 0, Orientation::Diagonal, 3).as_deref(),
            Some("XEE")
        );
        assert_eq!(grid.read(0, 3, Orientation::Horizontal, 3), None);
        assert_eq!(
            grid.read(0, 3, Orientation::Horizontal, 2).as_deref(),
            Some("__")
        );
    }

    #[test]
    fn measure_counts_intersections_and_rejects_conflicts() {
        let mut grid = Grid::new(5);
        grid.write_word(0, 0, Orientation::Horizontal, "HELLO");

        assert_eq!(grid.measure(0, 2, Orientation::Vertical, "LOW"), Ok(1));
        assert_eq!(grid.measure(1, 0, Orientation::Horizontal, "LOW"), Ok(0));
        assert_eq!(
            grid.measure(0, 0, Orientation::Vertical, "LOW"),
            Err(MeasureError::Conflicts)
        );
        assert_eq!(
            grid.measure(3, 3, Orientation::Diagonal, "LOW"),
            Err(MeasureError::DoesntFit)
        );
        // A word always fully overlaps itself
        assert_eq!(grid.measure(0, 0, Orientation::Horizontal, "HELLO"), Ok(5));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not uppercase ASCII")]
    fn measure_rejects_non_ascii_words() {
        let _ = Grid::new(5).measure(0, 0, Orientation::Horizontal, "ÉTÉ");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not uppercase ASCII")]
    fn write_rejects_lowercase_words() {
        Grid::new(5).write_word(0, 0, Orientation::Horizontal, "tank");
    }

    #[test]
    fn fill_leaves_no_blanks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(6);
        grid.write_word(2, 0, Orientation::Horizontal, "PUZZLE");

        assert_eq!(grid.fill_blanks(&mut rng), 30);
        assert_eq!(grid.blank_count(), 0);
        assert!(grid
            .rows()
            .flatten()
            .all(|cell| cell.letter().is_some_and(|c| c.is_ascii_uppercase())));
        assert_eq!(
            grid.read(2, 0, Orientation::Horizontal, 6).as_deref(),
            Some("PUZZLE")
        );
    }
}
