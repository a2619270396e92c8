pub mod cli;
pub mod models;
pub mod services;


pub use models::{
    ContentSnapshot, DocumentMetadata, PostDraft, PreviewRecord, ScoreBand, SeoReport,
};
