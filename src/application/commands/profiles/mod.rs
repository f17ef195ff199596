// src/application/commands/profiles/mod.rs
mod save;
mod service;

pub use save::{SaveProfileCommand, SaveProfileCommandBuilder, SaveProfileOutcome};
pub use service::ProfileCommandService;
