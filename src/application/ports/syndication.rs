// src/application/ports/syndication.rs
use crate::application::ApplicationResult;
use crate::domain::syndication::FeedImport;
use async_trait::async_trait;

/// Pulls posts from an external feed into a profile.
#[async_trait]
pub trait SyndicationImporter: Send + Sync {
    /// `base_url` is the public root of this site, used to rewrite links.
    async fn import(&self, request: FeedImport, base_url: &str) -> ApplicationResult<()>;
}
