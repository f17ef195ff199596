// src/application/commands/profiles/save.rs
use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfilePageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        profile::{IdentityName, Profile, ProfileConstraints, ProfileDraft, ProfileId},
        unit_of_work::UnitOfWork,
        validation::ValidationErrors,
    },
};
use chrono::{DateTime, Utc};

/// Profile form as submitted. `id == 0` asks for a new profile.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author_name: String,
    pub author_email: String,
    pub blog_theme: Option<String>,
    pub admin_theme: Option<String>,
}

impl SaveProfileCommand {
    pub fn builder() -> SaveProfileCommandBuilder {
        SaveProfileCommandBuilder::default()
    }

    fn into_draft(self, now: DateTime<Utc>) -> ApplicationResult<ProfileDraft> {
        Ok(ProfileDraft {
            id: ProfileId::from_submission(self.id)?,
            title: self.title,
            description: self.description,
            slug: String::new(),
            author_name: self.author_name,
            author_email: self.author_email,
            identity_name: String::new(),
            blog_theme: non_blank(self.blog_theme),
            admin_theme: non_blank(self.admin_theme),
            last_updated: now,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Default)]
pub struct SaveProfileCommandBuilder {
    id: i64,
    title: String,
    description: String,
    author_name: String,
    author_email: String,
    blog_theme: Option<String>,
    admin_theme: Option<String>,
}

impl SaveProfileCommandBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author_name = name.into();
        self.author_email = email.into();
        self
    }

    pub fn blog_theme(mut self, theme: impl Into<String>) -> Self {
        self.blog_theme = Some(theme.into());
        self
    }

    pub fn admin_theme(mut self, theme: impl Into<String>) -> Self {
        self.admin_theme = Some(theme.into());
        self
    }

    pub fn build(self) -> SaveProfileCommand {
        SaveProfileCommand {
            id: self.id,
            title: self.title,
            description: self.description,
            author_name: self.author_name,
            author_email: self.author_email,
            blog_theme: self.blog_theme,
            admin_theme: self.admin_theme,
        }
    }
}

#[derive(Debug)]
pub enum SaveProfileOutcome {
    /// Persisted and reloaded; carries the profile page to redisplay.
    Saved(ProfilePageDto),
    /// Nothing was written.
    Invalid(ValidationErrors),
}

impl ProfileCommandService {
    #[tracing::instrument(
        skip(self, actor, command),
        fields(identity = %actor.identity_name, profile_id = command.id)
    )]
    pub async fn save_profile(
        &self,
        actor: &AuthenticatedUser,
        command: SaveProfileCommand,
    ) -> ApplicationResult<SaveProfileOutcome> {
        let themes = self.themes.theme_choices().await?;
        let submitted = command.into_draft(self.clock.now())?;

        let mut uow = self.uow.begin().await?;
        let existing_id = submitted.id;
        let draft = match existing_id {
            None => self.prepare_new(uow.as_mut(), actor, submitted).await?,
            Some(id) => prepare_existing(uow.as_mut(), actor, id, submitted).await?,
        };

        let errors = ProfileConstraints::new(&themes).validate(&draft);
        if !errors.is_valid() {
            tracing::warn!(%errors, "profile submission rejected");
            return Ok(SaveProfileOutcome::Invalid(errors));
        }

        let identity = IdentityName::new(draft.identity_name.clone())?;
        if draft.is_new() {
            uow.add_profile(draft.into_new_profile()?).await?;
        } else {
            uow.update_profile(draft.into_update()?).await?;
        }
        uow.commit().await?;

        let saved = self.reload(&identity).await?;
        tracing::info!(profile_id = %saved.id, slug = %saved.slug, "profile saved");
        Ok(SaveProfileOutcome::Saved(ProfilePageDto::new(
            Some(saved),
            themes,
        )))
    }

    async fn prepare_new(
        &self,
        uow: &mut dyn UnitOfWork,
        actor: &AuthenticatedUser,
        submitted: ProfileDraft,
    ) -> ApplicationResult<ProfileDraft> {
        if uow
            .profile_by_identity_name(&actor.identity_name)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict(
                "a profile already exists for this identity",
            ));
        }

        let slug = self
            .slug_service
            .generate_unique_slug(uow, &submitted.title)
            .await?;
        tracing::debug!(%slug, "creating profile");
        Ok(submitted.with_slug(slug).with_identity(&actor.identity_name))
    }

    /// Reads back the committed row in a fresh unit of work.
    async fn reload(&self, identity: &IdentityName) -> ApplicationResult<Profile> {
        let mut uow = self.uow.begin().await?;
        uow.profile_by_identity_name(identity)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("saved profile could not be reloaded"))
    }
}

async fn prepare_existing(
    uow: &mut dyn UnitOfWork,
    actor: &AuthenticatedUser,
    id: ProfileId,
    submitted: ProfileDraft,
) -> ApplicationResult<ProfileDraft> {
    let stored = uow
        .profile_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found(format!("profile {id} not found")))?;

    if !stored.is_owned_by(&actor.identity_name) {
        return Err(ApplicationError::forbidden(
            "profile belongs to another identity",
        ));
    }

    tracing::debug!(profile_id = %id, "updating profile");
    Ok(submitted.with_stored_fields(&stored))
}
