// src/application/commands/syndication/import.rs
use super::SyndicationCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::{syndication::FeedSettings, validation::ValidationErrors},
};

#[derive(Debug, Clone, Default)]
pub struct ImportFeedCommand {
    pub feed_url: String,
    pub domain: Option<String>,
    pub sub_domain: Option<String>,
    pub import_images: bool,
    pub import_attachments: bool,
}

impl From<ImportFeedCommand> for FeedSettings {
    fn from(command: ImportFeedCommand) -> Self {
        Self {
            feed_url: command.feed_url.trim().to_string(),
            domain: command.domain.filter(|d| !d.trim().is_empty()),
            sub_domain: command.sub_domain.filter(|d| !d.trim().is_empty()),
            import_images: command.import_images,
            import_attachments: command.import_attachments,
        }
    }
}

#[derive(Debug)]
pub enum ImportFeedOutcome {
    Imported,
    /// The importer was not called.
    Invalid(ValidationErrors),
    /// The caller has to create a profile first.
    NoProfile,
}

impl SyndicationCommandService {
    #[tracing::instrument(skip(self, actor, command), fields(identity = %actor.identity_name))]
    pub async fn import_feed(
        &self,
        actor: &AuthenticatedUser,
        command: ImportFeedCommand,
        base_url: &str,
    ) -> ApplicationResult<ImportFeedOutcome> {
        let profile = {
            let mut uow = self.uow.begin().await?;
            uow.profile_by_identity_name(&actor.identity_name).await?
        };
        let Some(profile) = profile else {
            return Ok(ImportFeedOutcome::NoProfile);
        };

        let settings = FeedSettings::from(command);
        let errors = settings.validate();
        if !errors.is_valid() {
            tracing::warn!(%errors, "feed import rejected");
            return Ok(ImportFeedOutcome::Invalid(errors));
        }

        let request = settings.for_profile(profile.id);
        tracing::info!(
            profile_id = %profile.id,
            feed_url = %request.settings.feed_url,
            "importing feed"
        );
        self.importer.import(request, base_url).await?;
        Ok(ImportFeedOutcome::Imported)
    }
}
