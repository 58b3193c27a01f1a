//! Question selection and scoring engine.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: questions, answer records, score |
//! | `error`      | Load, identifier and run errors |
//! | `bank`       | CSV-backed, read-only `QuestionBank` |
//! | `answer`     | Trim + case-fold answer comparison |
//! | `sampler`    | Seedable draw-without-replacement over question ids |
//! | `session`    | Per-engine seen / answered state |
//! | `batch`      | `BatchSelectionEngine` — N questions at a time, keeps score |
//! | `sequential` | `SequentialSelectionEngine` — one question at a time, pass/fail |
//! | `run`        | `QuizRun` — fixed-size quiz flow with override and timer |

pub mod answer;
pub mod bank;
pub mod batch;
pub mod error;
pub mod models;
pub mod run;
pub mod sampler;
pub mod sequential;
pub mod session;

// Re-export the public API surface so callers can use
// `quiz_engine::BatchSelectionEngine` without reaching into sub-modules.
pub use bank::QuestionBank;
pub use batch::BatchSelectionEngine;
pub use error::{LoadError, QuizError, UnknownIdentifier};
pub use models::{AnswerRecord, Question, QuestionId, Score};
pub use run::{Feedback, QuestionResult, QuizRun, QuizSummary};
pub use sequential::SequentialSelectionEngine;
pub use session::SelectionSession;
