// src/application/commands/syndication/mod.rs
mod import;
mod service;

pub use import::{ImportFeedCommand, ImportFeedOutcome};
pub use service::SyndicationCommandService;
