pub mod database;
pub mod repositories;
pub mod security;
pub mod syndication;
pub mod themes;
pub mod time;
pub mod util;
