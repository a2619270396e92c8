pub mod analyzer;
pub mod preview;
pub mod slug;
pub mod snapshot;
