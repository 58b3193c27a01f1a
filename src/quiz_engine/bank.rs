//! Read-only question bank loaded from a CSV source.
//!
//! Row order defines identifiers: the first data row is question 0. Only the
//! `answer` column is required; `category` and `question` are recognised when
//! present and every other column is kept verbatim in [`Question::extra`].

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::quiz_engine::{
    error::{LoadError, UnknownIdentifier},
    models::{Question, QuestionId},
};

const ANSWER: &str = "answer";
const CATEGORY: &str = "category";
const QUESTION: &str = "question";

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load a bank from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let reader = builder().from_path(path)?;
        let bank = Self::from_csv(reader)?;
        tracing::info!(path = %path.display(), questions = bank.len(), "loaded question bank");
        Ok(bank)
    }

    /// Load a bank from any CSV byte stream (in-memory fixtures, stdin, ...).
    pub fn from_reader<R: io::Read>(source: R) -> Result<Self, LoadError> {
        let bank = Self::from_csv(builder().from_reader(source))?;
        tracing::debug!(questions = bank.len(), "loaded question bank from reader");
        Ok(bank)
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, LoadError> {
        let headers = unique_headers(reader.headers()?);
        let columns = Columns::locate(&headers)?;

        let mut questions = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            questions.push(columns.question(row, &headers, &record)?);
        }
        Ok(QuestionBank { questions })
    }

    /// The full bank, by identifier ascending.
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    /// Questions in `category`, bank order preserved.  An absent or empty
    /// category returns the whole bank.
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.matches(category)).collect()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id)
    }

    /// Like [`get`](Self::get) but reports a contract violation for bad ids.
    pub fn require(&self, id: QuestionId) -> Result<&Question, UnknownIdentifier> {
        self.get(id).ok_or(UnknownIdentifier(id))
    }

    /// Distinct non-empty categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut added = HashSet::new();
        self.questions
            .iter()
            .filter_map(|q| q.category.as_deref())
            .filter(|cat| added.insert(*cat))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.trim(csv::Trim::Headers);
    b
}

/// Header names with repeats suffixed `.1`, `.2`, ... so no column is lost.
/// The first occurrence keeps its plain name.
fn unique_headers(headers: &StringRecord) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(headers.len());
    for name in headers {
        let mut candidate = name.to_string();
        let mut n = 0;
        while used.contains(&candidate) {
            n += 1;
            candidate = format!("{name}.{n}");
        }
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

/// Header positions of the recognised columns.
struct Columns {
    answer: usize,
    category: Option<usize>,
    question: Option<usize>,
}

impl Columns {
    fn locate(headers: &[String]) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Ok(Columns {
            answer: find(ANSWER).ok_or(LoadError::MissingAnswerColumn)?,
            category: find(CATEGORY),
            question: find(QUESTION),
        })
    }

    fn question(
        &self,
        row: usize,
        headers: &[String],
        record: &StringRecord,
    ) -> Result<Question, LoadError> {
        let answer = record.get(self.answer).unwrap_or_default();
        if answer.trim().is_empty() {
            return Err(LoadError::MissingAnswer { row });
        }

        let category = self
            .category
            .and_then(|i| record.get(i))
            .filter(|c| !c.trim().is_empty())
            .map(str::to_string);
        let question = self
            .question
            .and_then(|i| record.get(i))
            .unwrap_or_default()
            .to_string();

        let known = [Some(self.answer), self.category, self.question];
        let extra: BTreeMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .enumerate()
            .filter(|(i, _)| !known.contains(&Some(*i)))
            .map(|(_, (h, v))| (h.clone(), v.to_string()))
            .collect();

        Ok(Question { id: row, category, question, answer: answer.to_string(), extra })
    }
}
