// src/domain/syndication.rs
use crate::domain::profile::ProfileId;
use crate::domain::validation::ValidationErrors;

pub const FEED_URL_MAX: usize = 450;
pub const DOMAIN_MAX: usize = 150;
pub const SUB_DOMAIN_MAX: usize = 150;

/// Options of a feed import as entered on the syndication form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSettings {
    pub feed_url: String,
    pub domain: Option<String>,
    pub sub_domain: Option<String>,
    pub import_images: bool,
    pub import_attachments: bool,
}

impl FeedSettings {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.required_with_max("feed_url", &self.feed_url, FEED_URL_MAX);
        errors.optional_max("domain", self.domain.as_deref(), DOMAIN_MAX);
        errors.optional_max("sub_domain", self.sub_domain.as_deref(), SUB_DOMAIN_MAX);
        errors
    }

    pub fn for_profile(self, profile_id: ProfileId) -> FeedImport {
        FeedImport {
            profile_id,
            settings: self,
        }
    }
}

/// A validated import request bound to the profile that will own the posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedImport {
    pub profile_id: ProfileId,
    pub settings: FeedSettings,
}
