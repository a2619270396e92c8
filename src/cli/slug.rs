use anyhow::Result;

use crate::services::slug::generate_slug;

pub fn run(title: &str) -> Result<()> {
    println!("{}", generate_slug(title));
    Ok(())
}
