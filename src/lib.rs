//! # quant_quiz
//!
//! Question selection and scoring for quantitative-interview practice.
//!
//! Questions live in CSV files, one file per category. This library loads a
//! file into a read-only [`QuestionBank`], draws questions the user has not
//! seen yet, and grades typed answers against the stored one. Rendering,
//! dialogs and styling belong to whatever front end drives it.
//!
//! ## How it works
//!
//! 1. Load a bank with [`QuestionBank::load`] (or [`QuestionBank::from_reader`]).
//!    Row order defines question ids; only the `answer` column is required.
//! 2. Wrap it in an `Arc` and hand it to an engine:
//!    - [`BatchSelectionEngine`] draws N unseen questions at a time, records
//!      every graded answer and keeps a running [`Score`].
//!    - [`SequentialSelectionEngine`] draws one unseen question at a time and
//!      checks answers against the current one without recording them.
//! 3. Optionally drive a fixed-size quiz with [`QuizRun`], which adds
//!    per-question feedback, override-to-correct and an elapsed-seconds counter.
//!
//! Answers are compared after trimming surrounding whitespace and case-folding,
//! so `" Paris "`, `"paris"` and `"PARIS"` all match a stored `"Paris"`.
//!
//! ## Key features
//!
//! - **Deterministic**: engines take any `rand::Rng`; `with_seed(bank, Some(u64))`
//!   reproduces the exact same draws every time.
//! - **No repeats**: a question drawn once is not drawn again until `reset()`.
//! - **Exhaustion is not an error**: an empty batch or `None` tells the caller
//!   the pool has run dry.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use quant_quiz::{BatchSelectionEngine, QuestionBank, Score};
//!
//! let csv = "category,question,answer\nmath,2+2?,4\nmath,3+3?,6\n";
//! let bank = Arc::new(QuestionBank::from_reader(csv.as_bytes())?);
//!
//! let mut engine = BatchSelectionEngine::with_seed(bank, Some(42));
//! let batch = engine.get_batch(5, Some("math"));
//! assert_eq!(batch.len(), 2);
//!
//! for q in &batch {
//!     let guess = if q.question == "2+2?" { " 4 " } else { "7" };
//!     engine.submit_answer(q.id, guess)?;
//! }
//! assert_eq!(engine.score(), Score { correct: 1, answered: 2 });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod config;
pub mod quiz_engine;

// Convenience re-exports so callers can use `quant_quiz::QuestionBank`
// directly without reaching into `quiz_engine::`.
pub use catalog::{list_categories, CategoryEntry};
pub use config::QuizConfig;
pub use quiz_engine::{
    AnswerRecord, BatchSelectionEngine, Feedback, LoadError, Question, QuestionBank,
    QuestionId, QuestionResult, QuizError, QuizRun, QuizSummary, Score,
    SelectionSession, SequentialSelectionEngine, UnknownIdentifier,
};

#[cfg(test)]
mod tests;
