use std::path::PathBuf;
use thiserror::Error;

use crate::quiz_engine::models::QuestionId;

/// Why a question bank could not be built.  No partial bank is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read question source: {0}")]
    Csv(#[from] csv::Error),

    #[error("question source has no `answer` column")]
    MissingAnswerColumn,

    #[error("row {row} has an empty `answer` cell")]
    MissingAnswer { row: usize },
}

/// An identifier that does not index into the loaded bank.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown question identifier {0}")]
pub struct UnknownIdentifier(pub QuestionId);

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    UnknownIdentifier(#[from] UnknownIdentifier),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("batch size must be > 0")]
    InvalidBatchSize,

    #[error("no questions available{}", in_category(.category))]
    NoQuestions { category: Option<String> },

    #[error("the current question has already been graded")]
    NotAwaitingAnswer,

    #[error("no question is active")]
    NoActiveQuestion,
}

fn in_category(category: &Option<String>) -> String {
    match category {
        Some(c) => format!(" in category `{c}`"),
        None => String::new(),
    }
}
