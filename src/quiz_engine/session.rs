use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    bank::QuestionBank,
    models::{AnswerRecord, QuestionId, Score},
};

/// Mutable per-engine state between construction and `reset`.
///
/// `seen` only grows; `answered` grows too, except that answering the same id
/// twice overwrites the earlier record.  An id may be seen without an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSession {
    seen: BTreeSet<QuestionId>,
    answered: BTreeMap<QuestionId, AnswerRecord>,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_seen(&self, id: QuestionId) -> bool {
        self.seen.contains(&id)
    }

    pub fn mark_seen(&mut self, ids: impl IntoIterator<Item = QuestionId>) {
        self.seen.extend(ids);
    }

    /// Ids in `category` not yet drawn, ascending.
    pub fn unseen(&self, bank: &QuestionBank, category: Option<&str>) -> Vec<QuestionId> {
        bank.filter_by_category(category)
            .into_iter()
            .map(|q| q.id)
            .filter(|id| !self.seen.contains(id))
            .collect()
    }

    pub fn seen(&self) -> &BTreeSet<QuestionId> {
        &self.seen
    }

    /// Record an answer; last write wins.
    pub fn record(&mut self, id: QuestionId, record: AnswerRecord) {
        self.answered.insert(id, record);
    }

    pub fn answer(&self, id: QuestionId) -> Option<&AnswerRecord> {
        self.answered.get(&id)
    }

    pub fn answer_mut(&mut self, id: QuestionId) -> Option<&mut AnswerRecord> {
        self.answered.get_mut(&id)
    }

    pub fn answered(&self) -> &BTreeMap<QuestionId, AnswerRecord> {
        &self.answered
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.answered.values().filter(|r| r.correct).count(),
            answered: self.answered.len(),
        }
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.answered.clear();
    }
}
