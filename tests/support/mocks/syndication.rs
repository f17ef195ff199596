// tests/support/mocks/syndication.rs
use async_trait::async_trait;
use blog_admin::application::{ApplicationResult, ports::syndication::SyndicationImporter};
use blog_admin::domain::syndication::FeedImport;
use std::sync::{Arc, Mutex};

/// Remembers every import request together with the base URL it was given.
#[derive(Clone, Debug, Default)]
pub struct RecordingImporter {
    calls: Arc<Mutex<Vec<(FeedImport, String)>>>,
}

impl RecordingImporter {
    pub fn calls(&self) -> Vec<(FeedImport, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SyndicationImporter for RecordingImporter {
    async fn import(&self, request: FeedImport, base_url: &str) -> ApplicationResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((request, base_url.to_string()));
        Ok(())
    }
}
