pub mod admin;
pub mod auth;
pub mod posts;
pub mod profiles;

pub use admin::{AdminPageDto, DashboardDto, ProfilePageDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use posts::BlogPostDto;
pub use profiles::{ProfileDto, ThemeOptionDto};
