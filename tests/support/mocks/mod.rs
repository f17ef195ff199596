// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod persistence;
pub mod security;
pub mod syndication;
pub mod themes;
pub mod time;

pub use persistence::{InMemoryStore, InMemoryUnitOfWorkFactory};
pub use security::{FakeTokenManager, INVALID_TOKEN, token_for};
pub use syndication::RecordingImporter;
pub use themes::StaticThemes;
pub use time::{FixedClock, fixed_now};
