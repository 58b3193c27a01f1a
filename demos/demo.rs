//! End-to-end walk through the bundled question banks.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Catalog** — every CSV under `data/` is listed as a category.
//! 2. **Quiz run** — a seeded five-question quiz over the first bank: one
//!    right answer, one wrong answer that gets overridden, the rest skipped.
//!    The summary is printed as JSON.
//! 3. **Sequential drill** — one question at a time from the second bank
//!    until the pool runs dry.
//!
//! Set `RUST_LOG=quant_quiz=debug` to see every draw and grade.

use std::path::Path;
use std::sync::Arc;

use quant_quiz::{
    list_categories, BatchSelectionEngine, Feedback, QuizConfig, QuizRun,
    SequentialSelectionEngine,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "quant_quiz=info".into()),
        )
        .init();

    let config = QuizConfig {
        rng_seed: Some(42),
        data_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("data"),
        ..QuizConfig::default()
    };

    let categories = list_categories(&config.data_dir)?;
    println!("Categories:");
    for cat in &categories {
        println!("  {:<14} ({})", cat.label, cat.file_name);
    }
    let (Some(first), Some(second)) = (categories.first(), categories.get(1)) else {
        return Err("demo needs at least two banks under data/".into());
    };

    // ── quiz run ────────────────────────────────────────────────────────────
    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Quiz: {}", first.label);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let bank = Arc::new(first.load()?);
    let engine = BatchSelectionEngine::new(bank, config.rng());
    let mut run = QuizRun::start(engine, config.batch_size, None)?;

    while let Some(q) = run.current().cloned() {
        let (pos, total) = run.progress();
        println!("  Q{pos}/{total}: {}", q.question);

        let guess = match pos {
            1 => q.answer.to_uppercase(),
            2 => "no idea".to_string(),
            _ => {
                println!("    (skipped)");
                run.tick();
                run.advance()?;
                continue;
            }
        };
        match run.submit(&guess)? {
            Feedback::Correct => println!("    {guess:?} -> correct"),
            Feedback::Incorrect { expected } => {
                println!("    {guess:?} -> incorrect, expected {expected}");
                if run.override_correct()? {
                    println!("    marked correct by override");
                }
            }
        }
        run.tick();
        run.advance()?;
    }
    println!();
    println!("{}", run.summary().to_json()?);

    // ── sequential drill ────────────────────────────────────────────────────
    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Drill: {}", second.label);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let bank = Arc::new(second.load()?);
    let mut drill = SequentialSelectionEngine::new(bank, config.rng());
    while let Some(q) = drill.get_next(None) {
        let ok = drill.check_answer(&format!("  {}  ", q.answer));
        let cat = q.category.as_deref().unwrap_or("-");
        println!("  [{cat:<6}] {:<65} {}", q.question, if ok { "✓" } else { "✗" });
    }
    println!("  pool exhausted");

    Ok(())
}
