use crate::{Error, Result};
use std::{
    io::{BufRead, BufReader},
    path::Path,
};

/// Words to hide, in the order they were listed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    title: Option<String>,
    words: Vec<String>,
}

impl std::ops::Deref for WordList {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl WordList {
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: None,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Parses numbered entries, one per line:
    ///
    /// ```text
    /// # World War II
    /// 1. Pearl Harbor
    /// 2. D-Day
    /// ```
    ///
    /// Everything up to the first `.` is dropped and the rest is trimmed and
    /// uppercased. A `#` line sets the title; blank lines are skipped.
    pub fn from_reader(input: impl BufRead) -> Result<Self> {
        let mut list = WordList::default();
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(title) = trimmed.strip_prefix('#') {
                list.title = Some(title.trim().to_owned());
                continue;
            }

            let entry = trimmed
                .split_once('.')
                .map(|(_ordinal, entry)| entry.trim())
                .filter(|entry| !entry.is_empty())
                .ok_or_else(|| Error::MalformedLine {
                    line_no: idx + 1,
                    line: line.clone(),
                })?;
            list.words.push(entry.to_uppercase());
        }
        Ok(list)
    }

    /// Reads a word list file, or stdin when `path` is `-`.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.as_os_str() == "-" {
            Self::from_reader(std::io::stdin().lock())
        } else {
            Self::from_reader(BufReader::new(std::fs::File::open(path)?))
        }
    }
}
