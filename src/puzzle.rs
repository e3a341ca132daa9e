use crate::{
    grid::Grid,
    placer::{Placement, WordPlacer},
    sizer::GridSizer,
    words, Config, Error, Result, WordList,
};
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng as _};
use std::{fmt, time::Instant};
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

/// A finished puzzle: every word placed, every cell a letter.
#[derive(Clone, Debug)]
pub struct Puzzle {
    grid: Grid,
    seed: [u8; 32],
    title: Option<String>,
    word_list: Vec<String>,
    placements: Vec<Placement>,
}

impl Puzzle {
    /// Builds a puzzle from `word_list`. The same seed and config always give
    /// the same puzzle; without a seed one is drawn from the OS.
    pub fn generate(word_list: &WordList, config: &Config, seed: Option<[u8; 32]>) -> Result<Self> {
        config.validate()?;
        let seed = match seed {
            Some(seed) => seed,
            None => {
                let mut seed = [0u8; 32];
                getrandom::getrandom(&mut seed).map_err(|e| Error::Entropy(e.to_string()))?;
                seed
            }
        };
        let mut rng = StdRng::from_seed(seed);
        let start_time = Instant::now();

        let search_words = words::prepare(word_list.as_slice(), config.reverse_percent, &mut rng)?;
        let dimension = GridSizer::new(config.density_factor).size(&search_words)?;
        let mut grid = Grid::new(dimension);

        let placer = WordPlacer::from_config(config);
        let placements = placer.place(&mut grid, &search_words, &mut rng)?;
        placer.fill(&mut grid, &mut rng);

        info!(
            words = placements.len(),
            dimension,
            reversed = placements.iter().filter(|p| p.reversed).count(),
            elapsed = %humantime::format_duration(start_time.elapsed()),
            "generated puzzle"
        );

        Ok(Self {
            grid,
            seed,
            title: word_list.title().map(str::to_owned),
            word_list: word_list.to_vec(),
            placements,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> [u8; 32] {
        self.seed
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    /// In placement order, longest word first
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn answer_key(&self) -> AnswerKey<'_> {
        AnswerKey(&self.placements)
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.to_string(),
            OutputFormat::Html => self.to_html(),
        }
    }

    fn to_html(&self) -> String {
        use html::tables::{Table, TableCell, TableRow};

        let mut doc = html::root::Html::builder();
        let mut body = html::root::Body::builder();
        let title = self.title().unwrap_or("Word Search").to_string();
        doc.style("font-family: Arial");
        body.push(
            html::content::Heading1::builder()
                .style("text-align: center")
                .text(title)
                .build(),
        );

        let mut puzzle_table = Table::builder();
        puzzle_table
            .style(r#"font-family: Monaco, monospace; font-size: 20px; border: 1px solid; margin-left: auto; margin-right: auto; margin-top: 40px; padding: 20px"#);
        for row in self.grid.rows() {
            let mut html_row = TableRow::builder();
            html_row.style("height: 30px");
            for cell in row {
                html_row.push(
                    TableCell::builder()
                        .text(cell.to_string())
                        .style("text-align: center; width: 30px")
                        .build(),
                );
            }
            puzzle_table.push(html_row.build());
        }
        body.push(puzzle_table.build());

        body.push(
            html::content::Heading1::builder()
                .style("padding-top: 20px; text-align: center")
                .text("Word List")
                .build(),
        );
        let mut words_table = Table::builder();
        words_table.style("font-family: Monaco, monospace; margin-left: auto; margin-right: auto; border: 0px solid black");
        let mut words_table_row = TableRow::builder();
        for words_in_col in &self
            .word_list
            .iter()
            .chunks((self.word_list.len() + 2) / 3)
        {
            let mut word_col = TableCell::builder();
            word_col.style("font-family: Monaco, monospace; font-size: 14px; vertical-align: top; padding-right: 2em; padding-left: 2em");
            for word in words_in_col {
                word_col.text(word.to_string()).text("</br>");
            }
            words_table_row.push(word_col.build());
        }
        words_table.push(words_table_row.build());
        body.push(words_table.build());

        doc.push(body.build());
        doc.build().to_string()
    }
}

/// Grid rows, a blank line, then the word list as it was supplied.
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(f)?;
        for word in &self.word_list {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Where each word was hidden, 1-based.
pub struct AnswerKey<'a>(&'a [Placement]);

impl fmt::Display for AnswerKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for placement in self.0 {
            write!(
                f,
                "{}: (row {}, col {}, {}",
                placement.word,
                placement.row + 1,
                placement.col + 1,
                placement.orientation,
            )?;
            if placement.reversed {
                write!(f, ", reversed")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

/// Decodes a 64-character hex seed as printed after a previous run.
pub fn parse_seed(hex_seed: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(hex_seed)
        .map_err(|decode_err| Error::InvalidSeed(format!("decoding hex seed: {decode_err}")))?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| Error::InvalidSeed(format!("expected 32 bytes, got {}", bytes.len())))
}
