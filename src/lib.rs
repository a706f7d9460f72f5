//! Life Commit - commit your life
//!
//! A journal kept as dated, emoji-tagged "commits" in a local JSON file,
//! with a cached lifemoji vocabulary and a static viewer export.

pub mod config;
pub mod error;
pub mod journal;
pub mod lifemoji;
pub mod site;
pub mod storage;

pub use error::JournalError;
