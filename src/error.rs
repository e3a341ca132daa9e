use thiserror::Error;

/// Errors that can be returned while reading word lists or building a puzzle
#[derive(Error, Debug)]
pub enum Error {
    /// Sizing needs at least one word
    #[error("empty word list")]
    EmptyWordList,

    /// The sized grid side exceeds [`MAX_DIMENSION`](crate::sizer::MAX_DIMENSION)
    #[error("a grid {side} cells wide is over the limit of {max}")]
    GridTooLarge { side: f64, max: usize },

    /// No conflict-free position exists for this word in the grid
    #[error("could not place \"{0}\" in the grid")]
    UnplaceableWord(String),

    /// The entry has no letters left once spaces and punctuation are removed
    #[error("\"{0}\" contains no letters")]
    BlankWord(String),

    /// A word-list line is not of the form `<ordinal>.<word>`
    #[error("line {line_no}: expected \"<number>.<word>\", got \"{line}\"")]
    MalformedLine { line_no: usize, line: String },

    #[error("could not read word list")]
    Read(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// The OS random source could not produce a seed
    #[error("could not gather entropy: {0}")]
    Entropy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
