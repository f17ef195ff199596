// src/domain/profile/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::value_objects::{IdentityName, ProfileId, ProfileSlug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub title: String,
    pub description: String,
    pub slug: ProfileSlug,
    pub author_name: String,
    pub author_email: String,
    pub identity_name: IdentityName,
    pub blog_theme: Option<String>,
    pub admin_theme: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl Profile {
    pub fn is_owned_by(&self, identity: &IdentityName) -> bool {
        &self.identity_name == identity
    }
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub title: String,
    pub description: String,
    pub slug: ProfileSlug,
    pub author_name: String,
    pub author_email: String,
    pub identity_name: IdentityName,
    pub blog_theme: Option<String>,
    pub admin_theme: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// Columns an owner may change once the profile exists.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: ProfileId,
    pub blog_theme: Option<String>,
    pub admin_theme: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// A profile form submission on its way to persistence.
///
/// Each branch of the upsert derives a new draft from the previous one; the
/// draft is validated as a whole and only then turned into a [`NewProfile`]
/// or a [`ProfileUpdate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub id: Option<ProfileId>,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub author_name: String,
    pub author_email: String,
    pub identity_name: String,
    pub blog_theme: Option<String>,
    pub admin_theme: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl ProfileDraft {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn with_slug(self, slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..self
        }
    }

    pub fn with_identity(self, identity: &IdentityName) -> Self {
        Self {
            identity_name: identity.as_str().to_string(),
            ..self
        }
    }

    /// Title, description, author and ownership are fixed after creation; the
    /// stored values replace whatever the form sent.
    pub fn with_stored_fields(self, stored: &Profile) -> Self {
        Self {
            id: Some(stored.id),
            title: stored.title.clone(),
            description: stored.description.clone(),
            slug: stored.slug.as_str().to_string(),
            author_name: stored.author_name.clone(),
            author_email: stored.author_email.clone(),
            identity_name: stored.identity_name.as_str().to_string(),
            ..self
        }
    }

    pub fn into_new_profile(self) -> DomainResult<NewProfile> {
        if self.id.is_some() {
            return Err(DomainError::Validation(
                "draft already refers to a saved profile".into(),
            ));
        }
        Ok(NewProfile {
            slug: ProfileSlug::new(self.slug)?,
            identity_name: IdentityName::new(self.identity_name)?,
            title: self.title,
            description: self.description,
            author_name: self.author_name,
            author_email: self.author_email,
            blog_theme: self.blog_theme,
            admin_theme: self.admin_theme,
            last_updated: self.last_updated,
        })
    }

    pub fn into_update(self) -> DomainResult<ProfileUpdate> {
        let id = self.id.ok_or_else(|| {
            DomainError::Validation("draft does not refer to a saved profile".into())
        })?;
        Ok(ProfileUpdate {
            id,
            blog_theme: self.blog_theme,
            admin_theme: self.admin_theme,
            last_updated: self.last_updated,
        })
    }
}
