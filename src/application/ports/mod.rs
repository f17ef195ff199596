// src/application/ports/mod.rs
pub mod security;
pub mod syndication;
pub mod themes;
pub mod time;
pub mod util;

