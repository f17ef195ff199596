// src/application/queries/admin/pages.rs
use super::AdminQueryService;
use crate::application::{
    dto::{AdminPageDto, AuthenticatedUser, ProfilePageDto},
    error::ApplicationResult,
};

impl AdminQueryService {
    /// Empty profile form plus theme lists when the identity has no profile yet.
    pub async fn profile_page(&self, actor: &AuthenticatedUser) -> ApplicationResult<ProfilePageDto> {
        let profile = self.current_profile(actor).await?;
        let themes = self.themes.theme_choices().await?;
        Ok(ProfilePageDto::new(profile, themes))
    }

    pub async fn syndication_page(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<AdminPageDto> {
        Ok(AdminPageDto::new(self.current_profile(actor).await?))
    }

    pub async fn about_page(&self, actor: &AuthenticatedUser) -> ApplicationResult<AdminPageDto> {
        Ok(AdminPageDto::new(self.current_profile(actor).await?))
    }
}
