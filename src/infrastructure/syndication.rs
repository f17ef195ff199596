// src/infrastructure/syndication.rs
use crate::application::{
    error::ApplicationResult,
    ports::syndication::SyndicationImporter,
};
use crate::domain::syndication::FeedImport;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::PgPool;

/// Records accepted import requests in `syndication_imports`; a separate
/// worker fetches and parses the feeds.
#[derive(Clone)]
pub struct PostgresImportQueue {
    pool: PgPool,
}

impl PostgresImportQueue {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SyndicationImporter for PostgresImportQueue {
    async fn import(&self, request: FeedImport, base_url: &str) -> ApplicationResult<()> {
        let FeedImport {
            profile_id,
            settings,
        } = request;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO syndication_imports (profile_id, feed_url, domain, sub_domain, import_images, import_attachments, base_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(i64::from(profile_id))
        .bind(settings.feed_url)
        .bind(settings.domain)
        .bind(settings.sub_domain)
        .bind(settings.import_images)
        .bind(settings.import_attachments)
        .bind(base_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        tracing::info!(import_id = id, %profile_id, "feed import queued");
        Ok(())
    }
}
