// src/application/commands/profiles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{themes::ThemeStorage, time::Clock},
    domain::{profile::ProfileSlugService, unit_of_work::UnitOfWorkFactory},
};

pub struct ProfileCommandService {
    pub(super) uow: Arc<dyn UnitOfWorkFactory>,
    pub(super) themes: Arc<dyn ThemeStorage>,
    pub(super) slug_service: Arc<ProfileSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(
        uow: Arc<dyn UnitOfWorkFactory>,
        themes: Arc<dyn ThemeStorage>,
        slug_service: Arc<ProfileSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            uow,
            themes,
            slug_service,
            clock,
        }
    }
}
