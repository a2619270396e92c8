use std::path::Path;

use anyhow::Result;

use crate::services::analyzer;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let draft = super::read_draft(file)?;
    let meta = draft.metadata();
    let content = draft.snapshot();
    tracing::info!(words = content.word_count, "auditing draft");

    let report = analyzer::analyze(&meta, &content);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Score: {}/100 ({})", report.score, report.band());
    println!(
        "Words: {} (~{} min read)",
        content.word_count,
        content.reading_time_minutes()
    );
    if report.suggestions.is_empty() {
        println!("No suggestions. Ready to publish.");
    } else {
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  - {}", suggestion);
        }
    }

    Ok(())
}
