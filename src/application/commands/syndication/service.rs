// src/application/commands/syndication/service.rs
use std::sync::Arc;

use crate::{
    application::ports::syndication::SyndicationImporter,
    domain::unit_of_work::UnitOfWorkFactory,
};

pub struct SyndicationCommandService {
    pub(super) uow: Arc<dyn UnitOfWorkFactory>,
    pub(super) importer: Arc<dyn SyndicationImporter>,
}

impl SyndicationCommandService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>, importer: Arc<dyn SyndicationImporter>) -> Self {
        Self { uow, importer }
    }
}
