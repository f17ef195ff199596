// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{profiles::ProfileCommandService, syndication::SyndicationCommandService},
        ports::{
            security::TokenManager, syndication::SyndicationImporter, themes::ThemeStorage,
            time::Clock, util::SlugGenerator,
        },
        queries::admin::AdminQueryService,
    },
    domain::{profile::ProfileSlugService, unit_of_work::UnitOfWorkFactory},
};

pub struct ApplicationServices {
    pub profile_commands: Arc<ProfileCommandService>,
    pub syndication_commands: Arc<SyndicationCommandService>,
    pub admin_queries: Arc<AdminQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        uow: Arc<dyn UnitOfWorkFactory>,
        themes: Arc<dyn ThemeStorage>,
        importer: Arc<dyn SyndicationImporter>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ProfileSlugService::new(Arc::clone(&slugger)));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&uow),
            Arc::clone(&themes),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let syndication_commands = Arc::new(SyndicationCommandService::new(
            Arc::clone(&uow),
            Arc::clone(&importer),
        ));

        let admin_queries = Arc::new(AdminQueryService::new(
            Arc::clone(&uow),
            Arc::clone(&themes),
        ));

        Self {
            profile_commands,
            syndication_commands,
            admin_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
