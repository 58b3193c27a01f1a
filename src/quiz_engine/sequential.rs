//! One-question-at-a-time selection with pass/fail checking.

use std::sync::Arc;

use rand::{rngs::StdRng, Rng};

use crate::quiz_engine::{
    answer::answers_match,
    bank::QuestionBank,
    models::{Question, QuestionId},
    sampler,
    session::SelectionSession,
};

/// Draws unseen questions one by one and checks answers against the most
/// recent draw.  Nothing is recorded in `answered`; callers drive "next".
pub struct SequentialSelectionEngine<R = StdRng> {
    bank: Arc<QuestionBank>,
    session: SelectionSession,
    current: Option<QuestionId>,
    rng: R,
}

impl SequentialSelectionEngine<StdRng> {
    pub fn with_seed(bank: Arc<QuestionBank>, seed: Option<u64>) -> Self {
        Self::new(bank, sampler::seeded_rng(seed))
    }
}

impl<R: Rng> SequentialSelectionEngine<R> {
    pub fn new(bank: Arc<QuestionBank>, rng: R) -> Self {
        SequentialSelectionEngine { bank, session: SelectionSession::new(), current: None, rng }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    /// The most recently drawn question, if any.
    pub fn current(&self) -> Option<&Question> {
        self.current.and_then(|id| self.bank.get(id))
    }

    pub fn remaining(&self, category: Option<&str>) -> usize {
        self.session.unseen(&self.bank, category).len()
    }

    /// Draw one unseen question from `category`, or `None` once exhausted.
    ///
    /// Exhaustion leaves `current` untouched.
    pub fn get_next(&mut self, category: Option<&str>) -> Option<Question> {
        let pool = self.session.unseen(&self.bank, category);
        let Some(id) = sampler::pick(&mut self.rng, &pool) else {
            tracing::debug!(?category, "question pool exhausted");
            return None;
        };

        self.session.mark_seen([id]);
        self.current = Some(id);
        tracing::debug!(id, pool = pool.len(), ?category, "drew next question");
        self.bank.get(id).cloned()
    }

    /// Does `user_answer` match the current question?  Always `false` when no
    /// question has been drawn.
    pub fn check_answer(&self, user_answer: &str) -> bool {
        self.current()
            .map(|q| answers_match(user_answer, &q.answer))
            .unwrap_or(false)
    }

    /// Forget seen questions and drop the current one.
    pub fn reset(&mut self) {
        self.session.clear();
        self.current = None;
    }
}
