pub mod audit;
pub mod preview;
pub mod slug;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::models::PostDraft;

#[derive(Parser)]
#[command(name = "seocheck")]
#[command(version)]
#[command(about = "Pre-publish SEO review for blog posts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Audit {
        /// Draft JSON file, or "-" for stdin
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Preview {
        /// Draft JSON file, or "-" for stdin
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Slug {
        title: String,
    },
}

pub(crate) fn read_draft(path: &Path) -> Result<PostDraft> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read draft from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft file {}", path.display()))?
    };

    serde_json::from_str(&raw).context("Draft is not valid JSON")
}
