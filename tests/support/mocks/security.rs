// tests/support/mocks/security.rs
use async_trait::async_trait;
use blog_admin::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use blog_admin::domain::profile::IdentityName;
use chrono::Duration;

pub const INVALID_TOKEN: &str = "not-a-token";
const PREFIX: &str = "token-";

/// Bearer value the fake manager accepts for `name`.
pub fn token_for(name: &str) -> String {
    format!("{PREFIX}{name}")
}

/// Accepts `token-<identity>` and nothing else.
#[derive(Clone, Debug, Default)]
pub struct FakeTokenManager;

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.identity_name.as_str()),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let name = token
            .strip_prefix(PREFIX)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        let identity_name = IdentityName::new(name)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let issued_at = super::time::fixed_now();
        Ok(AuthenticatedUser {
            identity_name,
            issued_at,
            expires_at: issued_at + Duration::hours(1),
        })
    }
}
