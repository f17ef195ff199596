// src/application/queries/admin/service.rs
use std::sync::Arc;

use crate::{
    application::{ApplicationResult, dto::AuthenticatedUser, ports::themes::ThemeStorage},
    domain::{profile::Profile, unit_of_work::UnitOfWorkFactory},
};

pub struct AdminQueryService {
    pub(super) uow: Arc<dyn UnitOfWorkFactory>,
    pub(super) themes: Arc<dyn ThemeStorage>,
}

impl AdminQueryService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>, themes: Arc<dyn ThemeStorage>) -> Self {
        Self { uow, themes }
    }

    pub(super) async fn current_profile(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Option<Profile>> {
        let mut uow = self.uow.begin().await?;
        Ok(uow.profile_by_identity_name(&actor.identity_name).await?)
    }
}
