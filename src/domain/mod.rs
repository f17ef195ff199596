// src/domain/mod.rs
pub mod errors;
pub mod post;
pub mod profile;
pub mod syndication;
pub mod theme;
pub mod unit_of_work;
pub mod validation;
