use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Bank rows
// ---------------------------------------------------------------------------

/// Row position of a question inside its bank (0-based, assigned on load).
pub type QuestionId = usize;

/// One row of a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// `None` when the bank has no `category` column or the cell is blank.
    pub category: Option<String>,
    pub question: String,
    /// Ground truth, compared after trimming and case-folding.
    pub answer: String,
    /// Every other column of the row, keyed by header.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Question {
    /// Does this question belong to `category`?  An absent or empty filter
    /// matches everything.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match category {
            None | Some("") => true,
            Some(wanted) => self.category.as_deref() == Some(wanted),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(cat) => write!(f, "#{} [{}] {}", self.id, cat, self.question),
            None => write!(f, "#{} {}", self.id, self.question),
        }
    }
}

// ---------------------------------------------------------------------------
// Session results
// ---------------------------------------------------------------------------

/// What was recorded for one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The submitted answer after normalisation.
    pub submitted: String,
    pub correct: bool,
    /// Set when the grade was flipped to correct after the fact.
    #[serde(default)]
    pub overridden: bool,
}

/// Running tally: correct answers out of answered questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
}

impl Score {
    /// Share of answered questions that are correct, 0.0 when nothing is answered.
    pub fn ratio(self) -> f32 {
        if self.answered == 0 {
            0.0
        } else {
            self.correct as f32 / self.answered as f32
        }
    }
}

impl From<Score> for (usize, usize) {
    fn from(s: Score) -> Self {
        (s.correct, s.answered)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.answered)
    }
}
