//! Batch selection: draw N fresh questions at a time and keep score.

use std::sync::Arc;

use rand::{rngs::StdRng, Rng};

use crate::quiz_engine::{
    answer::normalize,
    bank::QuestionBank,
    error::UnknownIdentifier,
    models::{AnswerRecord, Question, QuestionId, Score},
    sampler,
    session::SelectionSession,
};

/// Draws batches of previously-unseen questions and records graded answers.
///
/// The bank is shared read-only; the session and the random source belong to
/// this engine alone.
pub struct BatchSelectionEngine<R = StdRng> {
    bank: Arc<QuestionBank>,
    session: SelectionSession,
    rng: R,
}

impl BatchSelectionEngine<StdRng> {
    /// Engine over `StdRng`, seeded for reproducible draws when `seed` is set.
    pub fn with_seed(bank: Arc<QuestionBank>, seed: Option<u64>) -> Self {
        Self::new(bank, sampler::seeded_rng(seed))
    }
}

impl<R: Rng> BatchSelectionEngine<R> {
    pub fn new(bank: Arc<QuestionBank>, rng: R) -> Self {
        BatchSelectionEngine { bank, session: SelectionSession::new(), rng }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    /// Unseen questions left in `category`.
    pub fn remaining(&self, category: Option<&str>) -> usize {
        self.session.unseen(&self.bank, category).len()
    }

    /// Draw up to `n` distinct unseen questions from `category`.
    ///
    /// Returns `min(n, remaining)` questions in random order; an exhausted
    /// pool yields an empty batch.  Every drawn id is marked seen.
    pub fn get_batch(&mut self, n: usize, category: Option<&str>) -> Vec<Question> {
        let pool = self.session.unseen(&self.bank, category);
        let pool_size = pool.len();
        let drawn = sampler::draw(&mut self.rng, pool, n);
        self.session.mark_seen(drawn.iter().copied());

        tracing::debug!(requested = n, pool = pool_size, drawn = drawn.len(), ?category, "drew batch");
        drawn.into_iter().filter_map(|id| self.bank.get(id).cloned()).collect()
    }

    /// Grade `user_answer` against question `id` and record the result.
    ///
    /// A second submission for the same id replaces the first.
    pub fn submit_answer(&mut self, id: QuestionId, user_answer: &str) -> Result<bool, UnknownIdentifier> {
        let expected = normalize(&self.bank.require(id)?.answer);
        let submitted = normalize(user_answer);
        let correct = submitted == expected;

        tracing::debug!(id, correct, "graded answer");
        self.session.record(id, AnswerRecord { submitted, correct, overridden: false });
        Ok(correct)
    }

    /// Flip a recorded incorrect answer to correct.
    ///
    /// Returns `Ok(true)` when a grade changed and `Ok(false)` when `id` has no
    /// answer yet or is already correct.
    pub fn mark_correct(&mut self, id: QuestionId) -> Result<bool, UnknownIdentifier> {
        self.bank.require(id)?;
        match self.session.answer_mut(id) {
            Some(record) if !record.correct => {
                record.correct = true;
                record.overridden = true;
                tracing::debug!(id, "answer overridden to correct");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn answer(&self, id: QuestionId) -> Option<&AnswerRecord> {
        self.session.answer(id)
    }

    /// Correct answers out of answered questions.
    pub fn score(&self) -> Score {
        self.session.score()
    }

    /// Forget everything seen and answered.  The bank is untouched.
    pub fn reset(&mut self) {
        self.session.clear();
    }
}
