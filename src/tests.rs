//! Cross-module tests for the `quant_quiz` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Distinctness | Batches never repeat an id within a session, across many seeds |
//! | Size bound | `get_batch(n)` returns `min(n, remaining)` |
//! | Category filter | Every drawn question carries the requested category |
//! | Normalisation | Trim + case-fold on both engines |
//! | Score | k correct + m incorrect gives `(k, k+m)` |
//! | Reset / exhaustion | Reset restores the full pool; exhausted pools give empty / `None` |
//! | Scenarios | Two-question math bank through both engines; missing `answer` column |
//! | Determinism | Same seed gives same draws; injected RNG is honoured |
//! | QuizRun | Feedback, override, timer, summary, misuse errors |

use std::collections::HashSet;
use std::sync::Arc;

use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

use crate::{
    quiz_engine::{
        BatchSelectionEngine, Feedback, LoadError, QuestionBank, QuestionId, QuizError, QuizRun,
        Score, SequentialSelectionEngine,
    },
    QuizConfig,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// `n` questions alternating between the "math" and "prob" categories.
/// Question `i` has answer `a{i}`.
fn bank_of(n: usize) -> Arc<QuestionBank> {
    let mut csv = String::from("category,question,answer\n");
    for i in 0..n {
        let cat = if i % 2 == 0 { "math" } else { "prob" };
        csv.push_str(&format!("{cat},q{i},a{i}\n"));
    }
    Arc::new(QuestionBank::from_reader(csv.as_bytes()).unwrap())
}

/// The two-question bank used by the worked scenarios.
fn math_bank() -> Arc<QuestionBank> {
    let csv = "category,question,answer\nmath,2+2?,4\nmath,3+3?,6\n";
    Arc::new(QuestionBank::from_reader(csv.as_bytes()).unwrap())
}

fn ids(questions: &[crate::Question]) -> Vec<QuestionId> {
    let mut ids: Vec<_> = questions.iter().map(|q| q.id).collect();
    ids.sort_unstable();
    ids
}

// ── distinctness and size ────────────────────────────────────────────────────

#[test]
fn batches_never_repeat_within_a_session() {
    for seed in SEEDS {
        let mut engine = BatchSelectionEngine::with_seed(bank_of(20), Some(seed));
        let mut seen = HashSet::new();
        loop {
            let batch = engine.get_batch(3, None);
            if batch.is_empty() {
                break;
            }
            for q in &batch {
                assert!(seen.insert(q.id), "id {} drawn twice with seed={seed}", q.id);
            }
        }
        assert_eq!(seen.len(), 20, "every question should eventually be drawn (seed={seed})");
    }
}

#[test]
fn batch_size_is_min_of_request_and_remaining() {
    let mut engine = BatchSelectionEngine::with_seed(bank_of(10), Some(42));
    assert_eq!(engine.get_batch(4, None).len(), 4);
    assert_eq!(engine.get_batch(4, None).len(), 4);
    assert_eq!(engine.get_batch(4, None).len(), 2);
    assert_eq!(engine.get_batch(4, None).len(), 0);
}

#[test]
fn batch_size_respects_category_pool() {
    let mut engine = BatchSelectionEngine::with_seed(bank_of(10), Some(1));
    // five "math" questions: ids 0, 2, 4, 6, 8
    assert_eq!(engine.get_batch(3, Some("math")).len(), 3);
    assert_eq!(engine.get_batch(3, Some("math")).len(), 2);
    assert_eq!(engine.remaining(Some("math")), 0);
    assert_eq!(engine.remaining(Some("prob")), 5);
}

// ── category filter ──────────────────────────────────────────────────────────

#[test]
fn every_drawn_question_matches_the_category() {
    for seed in SEEDS {
        let mut batch_engine = BatchSelectionEngine::with_seed(bank_of(12), Some(seed));
        for q in batch_engine.get_batch(10, Some("prob")) {
            assert_eq!(q.category.as_deref(), Some("prob"), "seed={seed}");
        }

        let mut seq_engine = SequentialSelectionEngine::with_seed(bank_of(12), Some(seed));
        while let Some(q) = seq_engine.get_next(Some("math")) {
            assert_eq!(q.category.as_deref(), Some("math"), "seed={seed}");
        }
    }
}

#[test]
fn unknown_category_is_an_empty_pool() {
    let mut engine = BatchSelectionEngine::with_seed(bank_of(4), Some(1));
    assert!(engine.get_batch(5, Some("geometry")).is_empty());
    assert_eq!(engine.remaining(None), 4, "an empty draw marks nothing seen");
}

// ── normalisation ────────────────────────────────────────────────────────────

#[test]
fn both_engines_normalise_answers() {
    let bank = Arc::new(
        QuestionBank::from_reader("question,answer\nCapital of France?,Paris\n".as_bytes()).unwrap(),
    );

    let mut batch = BatchSelectionEngine::with_seed(bank.clone(), Some(1));
    for input in [" Paris ", "paris", "PARIS"] {
        assert!(batch.submit_answer(0, input).unwrap(), "batch rejected {input:?}");
    }

    let mut seq = SequentialSelectionEngine::with_seed(bank, Some(1));
    seq.get_next(None);
    for input in [" Paris ", "paris", "PARIS"] {
        assert!(seq.check_answer(input), "sequential rejected {input:?}");
    }
}

// ── score accounting ─────────────────────────────────────────────────────────

#[test]
fn score_counts_correct_out_of_answered() {
    let mut engine = BatchSelectionEngine::with_seed(bank_of(10), Some(3));
    assert_eq!(engine.score(), Score { correct: 0, answered: 0 });

    let batch = engine.get_batch(7, None);
    let (right, wrong) = batch.split_at(4);
    for q in right {
        assert!(engine.submit_answer(q.id, &q.answer.to_uppercase()).unwrap());
    }
    for q in wrong {
        assert!(!engine.submit_answer(q.id, "nope").unwrap());
    }
    assert_eq!(<(usize, usize)>::from(engine.score()), (4, 7));
}

// ── reset and exhaustion ─────────────────────────────────────────────────────

#[test]
fn reset_restores_the_full_pool() {
    let mut engine = BatchSelectionEngine::with_seed(bank_of(10), Some(5));
    let first = engine.get_batch(10, None);
    engine.submit_answer(first[0].id, "x").unwrap();
    assert!(engine.get_batch(10, None).is_empty());

    engine.reset();
    assert_eq!(engine.score(), Score::default());
    assert_eq!(ids(&engine.get_batch(10, None)), (0..10).collect::<Vec<_>>());
}

#[test]
fn exhausted_pools_return_empty_and_none() {
    let mut batch = BatchSelectionEngine::with_seed(bank_of(3), Some(2));
    assert_eq!(batch.get_batch(3, None).len(), 3);
    assert!(batch.get_batch(5, None).is_empty());

    let mut seq = SequentialSelectionEngine::with_seed(bank_of(3), Some(2));
    for _ in 0..3 {
        assert!(seq.get_next(None).is_some());
    }
    assert!(seq.get_next(None).is_none());
}

#[test]
fn sequential_reset_allows_redraw() {
    let mut seq = SequentialSelectionEngine::with_seed(bank_of(2), Some(8));
    seq.get_next(None);
    seq.get_next(None);
    assert!(seq.get_next(None).is_none());
    seq.reset();
    assert!(seq.current().is_none());
    assert!(seq.get_next(None).is_some());
}

// ── worked scenarios ─────────────────────────────────────────────────────────

#[test]
fn scenario_batch_over_math_bank() {
    let mut engine = BatchSelectionEngine::with_seed(math_bank(), Some(11));
    let batch = engine.get_batch(5, Some("math"));
    assert_eq!(ids(&batch), vec![0, 1]);

    assert!(engine.submit_answer(0, "4").unwrap());
    assert!(!engine.submit_answer(1, " 7 ").unwrap());
    assert_eq!(engine.score(), Score { correct: 1, answered: 2 });
}

#[test]
fn scenario_sequential_over_math_bank() {
    for seed in SEEDS {
        let mut engine = SequentialSelectionEngine::with_seed(math_bank(), Some(seed));
        let first = engine.get_next(Some("math")).expect("first draw");
        let second = engine.get_next(Some("math")).expect("second draw");
        assert_ne!(first.id, second.id, "seed={seed}");
        assert!(engine.get_next(Some("math")).is_none(), "seed={seed}");
    }
}

#[test]
fn scenario_missing_answer_column() {
    let err = QuestionBank::from_reader("category,question\nmath,2+2?\n".as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::MissingAnswerColumn));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "category,question\nmath,2+2?\n").unwrap();
    assert!(matches!(QuestionBank::load(&path), Err(LoadError::MissingAnswerColumn)));
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_draws() {
    for seed in SEEDS {
        let mut a = BatchSelectionEngine::with_seed(bank_of(30), Some(seed));
        let mut b = BatchSelectionEngine::with_seed(bank_of(30), Some(seed));
        for _ in 0..4 {
            let x: Vec<_> = a.get_batch(5, None).into_iter().map(|q| q.id).collect();
            let y: Vec<_> = b.get_batch(5, None).into_iter().map(|q| q.id).collect();
            assert_eq!(x, y, "seed={seed}");
        }
    }
}

#[test]
fn injected_rng_drives_the_draw() {
    // An all-zero source never swaps, so the draw is the pool prefix.
    let mut engine = BatchSelectionEngine::new(bank_of(6), StepRng::new(0, 0));
    let drawn: Vec<_> = engine.get_batch(3, None).into_iter().map(|q| q.id).collect();
    assert_eq!(drawn, vec![0, 1, 2]);

    let mut seq = SequentialSelectionEngine::new(bank_of(6), StepRng::new(0, 0));
    assert_eq!(seq.get_next(Some("prob")).map(|q| q.id), Some(1));
    assert_eq!(seq.get_next(Some("prob")).map(|q| q.id), Some(3));
}

#[test]
fn entropy_engine_still_satisfies_invariants() {
    let mut engine = BatchSelectionEngine::with_seed(bank_of(8), None);
    let batch = engine.get_batch(8, None);
    assert_eq!(ids(&batch), (0..8).collect::<Vec<_>>());
}

// ── quiz run ─────────────────────────────────────────────────────────────────

fn run_over(bank: Arc<QuestionBank>, size: usize) -> QuizRun {
    let config = QuizConfig { rng_seed: Some(21), ..QuizConfig::default() };
    QuizRun::start(BatchSelectionEngine::new(bank, config.rng()), size, None).unwrap()
}

#[test]
fn run_walks_through_the_batch() {
    let mut run = run_over(bank_of(8), 3);
    assert_eq!(run.progress(), (1, 3));

    let first = run.current().unwrap().clone();
    assert_eq!(run.submit(&format!(" {} ", first.answer)).unwrap(), Feedback::Correct);
    assert!(!run.can_override());
    assert!(run.advance().unwrap());

    let second = run.current().unwrap().clone();
    assert_eq!(
        run.submit("wrong").unwrap(),
        Feedback::Incorrect { expected: second.answer.clone() }
    );
    assert!(run.advance().unwrap());
    assert_eq!(run.progress(), (3, 3));

    // third question skipped
    assert!(!run.advance().unwrap());
    assert!(run.is_finished());
    assert!(run.current().is_none());

    let summary = run.summary();
    assert_eq!(summary.total_questions, 3);
    assert_eq!(summary.answered, 2);
    assert_eq!(summary.correct, 1);
    assert_eq!(summary.results[0].submitted.as_deref(), Some(first.answer.as_str()));
    assert_eq!(summary.results[2].submitted, None);
}

#[test]
fn override_counts_toward_the_final_score() {
    let mut run = run_over(bank_of(4), 2);
    run.submit("wrong").unwrap();
    assert!(run.can_override());
    assert!(run.override_correct().unwrap());
    assert!(!run.override_correct().unwrap(), "override is allowed once");

    let summary = run.summary();
    assert_eq!((summary.correct, summary.answered), (1, 1));
    assert!(summary.results[0].overridden);
    assert_eq!(run.into_engine().score(), Score { correct: 1, answered: 1 });
}

#[test]
fn run_rejects_double_submission_and_use_after_finish() {
    let mut run = run_over(bank_of(2), 1);
    run.submit("a0").unwrap();
    assert!(matches!(run.submit("a0"), Err(QuizError::NotAwaitingAnswer)));

    assert!(!run.advance().unwrap());
    assert!(matches!(run.submit("a0"), Err(QuizError::NoActiveQuestion)));
    assert!(matches!(run.advance(), Err(QuizError::NoActiveQuestion)));
    assert!(matches!(run.override_correct(), Err(QuizError::NoActiveQuestion)));
}

#[test]
fn timer_only_runs_while_active() {
    let mut run = run_over(bank_of(2), 1);
    run.tick();
    run.tick();
    run.finish();
    run.tick();
    assert_eq!(run.elapsed_secs(), 2);
    assert_eq!(run.summary().elapsed_secs, 2);
}

#[test]
fn run_start_errors() {
    let engine = BatchSelectionEngine::new(bank_of(4), StdRng::seed_from_u64(1));
    assert!(matches!(QuizRun::start(engine, 0, None), Err(QuizError::InvalidBatchSize)));

    let engine = BatchSelectionEngine::new(bank_of(4), StdRng::seed_from_u64(1));
    let err = QuizRun::start(engine, 5, Some("geometry")).err().unwrap();
    assert!(matches!(err, QuizError::NoQuestions { category: Some(ref c) } if c == "geometry"));
    assert_eq!(err.to_string(), "no questions available in category `geometry`");
}

#[test]
fn consecutive_runs_on_one_engine_do_not_repeat() {
    let mut first = run_over(bank_of(6), 3);
    let first_ids = ids(first.questions());
    let answer = first.current().unwrap().answer.clone();
    first.submit(&answer).unwrap();
    first.advance().unwrap();
    first.submit("wrong").unwrap();

    let mut second = QuizRun::start(first.into_engine(), 3, None).unwrap();
    let second_ids = ids(second.questions());
    assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
    assert_eq!(first_ids.len() + second_ids.len(), 6);

    // the engine still holds the first run's answers; the summary must not
    second.submit("wrong").unwrap();
    let summary = second.summary();
    assert_eq!((summary.correct, summary.answered, summary.total_questions), (0, 1, 3));
    assert_eq!(second.into_engine().score(), Score { correct: 1, answered: 3 });
}

#[test]
fn summary_serialises_to_json() {
    let mut run = run_over(math_bank(), 5);
    run.submit("4").unwrap();
    let json = run.summary().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_questions"], 2);
    assert_eq!(value["answered"], 1);
    assert!(value["results"].as_array().is_some_and(|r| r.len() == 2));
}
