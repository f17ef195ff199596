// View models of the admin pages.
use super::{BlogPostDto, ProfileDto, ThemeOptionDto};
use crate::domain::{post::BlogPost, profile::Profile, theme::ThemeChoices};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared by the syndication and about pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminPageDto {
    pub profile: Option<ProfileDto>,
    pub blog_exists: bool,
}

impl AdminPageDto {
    pub fn new(profile: Option<Profile>) -> Self {
        let profile = profile.map(ProfileDto::from);
        Self {
            blog_exists: profile.is_some(),
            profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub profile: ProfileDto,
    pub blog_exists: bool,
    pub posts: Vec<BlogPostDto>,
}

impl DashboardDto {
    pub fn new(profile: Profile, posts: Vec<BlogPost>) -> Self {
        Self {
            profile: profile.into(),
            blog_exists: true,
            posts: posts.into_iter().map(BlogPostDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfilePageDto {
    pub profile: Option<ProfileDto>,
    pub blog_exists: bool,
    pub admin_themes: Vec<ThemeOptionDto>,
    pub blog_themes: Vec<ThemeOptionDto>,
}

impl ProfilePageDto {
    pub fn new(profile: Option<Profile>, themes: ThemeChoices) -> Self {
        let admin_selected = profile.as_ref().and_then(|p| p.admin_theme.clone());
        let blog_selected = profile.as_ref().and_then(|p| p.blog_theme.clone());
        let profile = profile.map(ProfileDto::from);
        Self {
            blog_exists: profile.is_some(),
            profile,
            admin_themes: ThemeOptionDto::list(themes.admin, admin_selected.as_deref()),
            blog_themes: ThemeOptionDto::list(themes.blog, blog_selected.as_deref()),
        }
    }
}
