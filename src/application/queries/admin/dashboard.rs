// src/application/queries/admin/dashboard.rs
use super::AdminQueryService;
use crate::application::{
    dto::{AuthenticatedUser, DashboardDto},
    error::ApplicationResult,
};

#[derive(Debug)]
pub enum DashboardOutcome {
    Ready(DashboardDto),
    /// No profile is bound to the identity yet.
    NoProfile,
}

impl AdminQueryService {
    pub async fn dashboard(&self, actor: &AuthenticatedUser) -> ApplicationResult<DashboardOutcome> {
        let mut uow = self.uow.begin().await?;
        let Some(profile) = uow.profile_by_identity_name(&actor.identity_name).await? else {
            tracing::debug!(identity = %actor.identity_name, "no profile bound to identity");
            return Ok(DashboardOutcome::NoProfile);
        };

        let posts = uow.posts_for_profile(profile.id).await?;
        Ok(DashboardOutcome::Ready(DashboardDto::new(profile, posts)))
    }
}
