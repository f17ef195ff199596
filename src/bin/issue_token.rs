// src/bin/issue_token.rs
//! Mints a bearer token for an identity: `issue_token <identity-name>`.
use anyhow::{Context, Result};
use blog_admin::application::{dto::TokenSubject, ports::security::TokenManager};
use blog_admin::config::AppConfig;
use blog_admin::domain::profile::IdentityName;
use blog_admin::infrastructure::security::BiscuitTokenManager;

#[tokio::main]
async fn main() -> Result<()> {
    let name = std::env::args()
        .nth(1)
        .context("usage: issue_token <identity-name>")?;

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;

    let subject = TokenSubject {
        identity_name: IdentityName::new(name)?,
    };
    let token = manager.issue(subject).await?;

    println!("{}", token.token);
    eprintln!("expires at {}", token.expires_at);
    Ok(())
}
