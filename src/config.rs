//! Quiz configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! batch_size = 5
//! rng_seed = 42        # omit for OS entropy
//! data_dir = "data"
//! ```

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{error::QuizError, sampler::seeded_rng};

/// Questions per quiz run.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Directory scanned for CSV question banks.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    pub batch_size: usize,
    /// Fixed seed for reproducible draws; `None` uses OS entropy.
    pub rng_seed: Option<u64>,
    pub data_dir: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            batch_size: DEFAULT_BATCH_SIZE,
            rng_seed: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl QuizConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, QuizError> {
        let config: QuizConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| QuizError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded quiz config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.batch_size == 0 {
            return Err(QuizError::InvalidBatchSize);
        }
        Ok(())
    }

    /// Random source for a new engine, honouring `rng_seed`.
    pub fn rng(&self) -> StdRng {
        seeded_rng(self.rng_seed)
    }
}
