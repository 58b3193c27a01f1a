//! A fixed-size quiz: draw a batch, then walk through it one question at a
//! time with grading, optional override, and an elapsed-seconds counter.
//!
//! All grading goes through the owned [`BatchSelectionEngine`], so overrides
//! are reflected in the final tally rather than only in what the caller shows.

use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    batch::BatchSelectionEngine,
    error::QuizError,
    models::{Question, QuestionId},
};

/// Outcome of submitting an answer in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    /// Carries the stored answer text as written in the bank.
    Incorrect { expected: String },
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub id: QuestionId,
    pub question: String,
    pub expected: String,
    /// `None` when the question was skipped.
    pub submitted: Option<String>,
    pub correct: bool,
    pub overridden: bool,
}

/// End-of-run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub category: Option<String>,
    pub correct: usize,
    pub answered: usize,
    pub total_questions: usize,
    pub elapsed_secs: u64,
    pub results: Vec<QuestionResult>,
}

impl QuizSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct QuizRun<R = StdRng> {
    engine: BatchSelectionEngine<R>,
    category: Option<String>,
    questions: Vec<Question>,
    cursor: usize,
    /// Grade of the current question; `None` while awaiting an answer.
    graded: Option<bool>,
    overridden: bool,
    elapsed_secs: u64,
    active: bool,
}

impl<R: Rng> QuizRun<R> {
    /// Draw `batch_size` fresh questions from `category` and start the run.
    pub fn start(
        mut engine: BatchSelectionEngine<R>,
        batch_size: usize,
        category: Option<&str>,
    ) -> Result<Self, QuizError> {
        if batch_size == 0 {
            return Err(QuizError::InvalidBatchSize);
        }
        let questions = engine.get_batch(batch_size, category);
        if questions.is_empty() {
            return Err(QuizError::NoQuestions { category: category.map(str::to_string) });
        }

        tracing::info!(questions = questions.len(), ?category, "quiz started");
        Ok(QuizRun {
            engine,
            category: category.map(str::to_string),
            questions,
            cursor: 0,
            graded: None,
            overridden: false,
            elapsed_secs: 0,
            active: true,
        })
    }

    pub fn current(&self) -> Option<&Question> {
        if !self.active {
            return None;
        }
        self.questions.get(self.cursor)
    }

    /// 1-based position of the current question and the run length.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor + 1, self.questions.len())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn submit(&mut self, answer: &str) -> Result<Feedback, QuizError> {
        let question = self.current().ok_or(QuizError::NoActiveQuestion)?;
        if self.graded.is_some() {
            return Err(QuizError::NotAwaitingAnswer);
        }
        let (id, expected) = (question.id, question.answer.clone());

        let correct = self.engine.submit_answer(id, answer)?;
        self.graded = Some(correct);
        Ok(if correct { Feedback::Correct } else { Feedback::Incorrect { expected } })
    }

    /// Only an incorrect grade can be overridden, and only once.
    pub fn can_override(&self) -> bool {
        self.active && self.graded == Some(false) && !self.overridden
    }

    pub fn override_correct(&mut self) -> Result<bool, QuizError> {
        let id = self.current().ok_or(QuizError::NoActiveQuestion)?.id;
        if !self.can_override() {
            return Ok(false);
        }
        let changed = self.engine.mark_correct(id)?;
        self.overridden = true;
        Ok(changed)
    }

    /// Move to the next question.  Returns `false` and ends the run after the
    /// last one.  Unanswered questions count as skipped.
    pub fn advance(&mut self) -> Result<bool, QuizError> {
        if !self.active {
            return Err(QuizError::NoActiveQuestion);
        }
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            self.graded = None;
            self.overridden = false;
            Ok(true)
        } else {
            self.finish();
            Ok(false)
        }
    }

    /// One second of wall time passed; ignored once the run is over.
    pub fn tick(&mut self) {
        if self.active {
            self.elapsed_secs += 1;
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn finish(&mut self) {
        if self.active {
            self.active = false;
            tracing::info!(elapsed_secs = self.elapsed_secs, score = %self.engine.score(), "quiz finished");
        }
    }

    pub fn is_finished(&self) -> bool {
        !self.active
    }

    /// Tally for the questions of this run only.
    pub fn summary(&self) -> QuizSummary {
        let results: Vec<QuestionResult> = self
            .questions
            .iter()
            .map(|q| {
                let record = self.engine.answer(q.id);
                QuestionResult {
                    id: q.id,
                    question: q.question.clone(),
                    expected: q.answer.clone(),
                    submitted: record.map(|r| r.submitted.clone()),
                    correct: record.is_some_and(|r| r.correct),
                    overridden: record.is_some_and(|r| r.overridden),
                }
            })
            .collect();

        QuizSummary {
            category: self.category.clone(),
            correct: results.iter().filter(|r| r.correct).count(),
            answered: results.iter().filter(|r| r.submitted.is_some()).count(),
            total_questions: self.questions.len(),
            elapsed_secs: self.elapsed_secs,
            results,
        }
    }

    /// Hand the engine back, e.g. to start another run without repeats.
    pub fn into_engine(self) -> BatchSelectionEngine<R> {
        self.engine
    }
}
