use crate::{Error, Result, Strategy};

pub const DEFAULT_REVERSE_PERCENT: u8 = 25;
pub const DEFAULT_DENSITY_FACTOR: f64 = 0.5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 150;

/// Knobs for a single puzzle generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Chance, in percent, that a word is hidden backwards
    pub reverse_percent: u8,
    /// Target share of grid cells covered by word letters. Lower means a larger, sparser grid.
    pub density_factor: f64,
    /// Random draws per word before [`Strategy::Sample`] falls back to enumeration
    pub max_attempts: usize,
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reverse_percent: DEFAULT_REVERSE_PERCENT,
            density_factor: DEFAULT_DENSITY_FACTOR,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.reverse_percent > 100 {
            return Err(Error::InvalidConfig(format!(
                "reverse_percent must be within 0..=100, got {}",
                self.reverse_percent
            )));
        }
        if !(self.density_factor > 0.0 && self.density_factor < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "density_factor must be between 0 and 1, got {}",
                self.density_factor
            )));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
