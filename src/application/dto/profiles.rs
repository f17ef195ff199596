use crate::domain::profile::Profile;
use crate::domain::theme::ThemeOption;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub author_name: String,
    pub author_email: String,
    pub identity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_theme: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.into(),
            title: profile.title,
            description: profile.description,
            slug: profile.slug.into(),
            author_name: profile.author_name,
            author_email: profile.author_email,
            identity_name: profile.identity_name.into(),
            blog_theme: profile.blog_theme,
            admin_theme: profile.admin_theme,
            last_updated: profile.last_updated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ThemeOptionDto {
    pub text: String,
    pub value: String,
    pub selected: bool,
}

impl ThemeOptionDto {
    pub fn list(options: Vec<ThemeOption>, selected: Option<&str>) -> Vec<Self> {
        options
            .into_iter()
            .map(|option| Self {
                selected: selected == Some(option.value.as_str()),
                text: option.text,
                value: option.value,
            })
            .collect()
    }
}
