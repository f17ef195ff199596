pub mod profiles;
pub mod syndication;
