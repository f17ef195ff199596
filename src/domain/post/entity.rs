// src/domain/post/entity.rs
use crate::domain::post::value_objects::PostId;
use crate::domain::profile::ProfileId;
use chrono::{DateTime, Utc};

/// A post as listed on the admin dashboard. Editing posts happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: PostId,
    pub profile_id: ProfileId,
    pub title: String,
    pub slug: String,
    pub published_at: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}
