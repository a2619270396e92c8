use std::path::Path;

use anyhow::Result;

use crate::services::preview;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let draft = super::read_draft(file)?;
    let record = preview::render_preview(&draft.metadata());

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}", record.display_title);
    println!("/blog/{}", record.slug);
    println!("{}", record.display_description);

    Ok(())
}
