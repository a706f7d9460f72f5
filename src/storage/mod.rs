//! Storage layer for the journal

pub mod models;
pub mod store;

pub use models::*;
pub use store::CommitStore;
