//! Discovery of question banks on disk.
//!
//! Each `.csv` file in a data directory is one category.  The display label
//! comes from the file stem: `mental-math.csv` is shown as "Mental Math".

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::quiz_engine::{bank::QuestionBank, error::{LoadError, QuizError}};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub label: String,
    pub file_name: String,
    pub path: PathBuf,
}

impl CategoryEntry {
    pub fn load(&self) -> Result<QuestionBank, LoadError> {
        QuestionBank::load(&self.path)
    }
}

/// All CSV banks directly inside `dir`, sorted by file name.
pub fn list_categories(dir: impl AsRef<Path>) -> Result<Vec<CategoryEntry>, QuizError> {
    let dir = dir.as_ref();
    let io_err = |source: std::io::Error| QuizError::Io { path: dir.to_path_buf(), source };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let (Some(file_name), Some(stem)) = (
            path.file_name().and_then(|n| n.to_str()),
            path.file_stem().and_then(|s| s.to_str()),
        ) else {
            tracing::warn!(path = %path.display(), "skipping bank with non UTF-8 name");
            continue;
        };
        entries.push(CategoryEntry {
            label: label_for(stem),
            file_name: file_name.to_string(),
            path: path.clone(),
        });
    }

    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    tracing::debug!(dir = %dir.display(), categories = entries.len(), "listed categories");
    Ok(entries)
}

/// `"prob-and-stats"` -> `"Prob And Stats"`.
///
/// Dashes become spaces, then every run of letters is capitalised: a letter
/// starts a new word unless it follows another letter, so `prob_stats` gives
/// `Prob_Stats` and `3d-geometry` gives `3D Geometry`.
pub fn label_for(stem: &str) -> String {
    let mut prev_letter = false;
    let mut out = String::with_capacity(stem.len());
    for c in stem.chars() {
        let c = if c == '-' { ' ' } else { c };
        if prev_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_letter = c.is_alphabetic();
    }
    out
}
