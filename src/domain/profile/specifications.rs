// src/domain/profile/specifications.rs
use crate::domain::profile::entity::ProfileDraft;
use crate::domain::theme::{ThemeChoices, ThemeKind};
use crate::domain::validation::ValidationErrors;

pub const TITLE_MAX: usize = 160;
pub const DESCRIPTION_MAX: usize = 450;
pub const SLUG_MAX: usize = 160;
pub const AUTHOR_NAME_MAX: usize = 100;
pub const AUTHOR_EMAIL_MAX: usize = 100;
pub const IDENTITY_NAME_MAX: usize = 100;
pub const THEME_MAX: usize = 160;

/// Field rules applied to every profile submission.
pub struct ProfileConstraints<'a> {
    themes: &'a ThemeChoices,
}

impl<'a> ProfileConstraints<'a> {
    pub fn new(themes: &'a ThemeChoices) -> Self {
        Self { themes }
    }

    /// Produces a fresh validation state; nothing from an earlier pass leaks in.
    pub fn validate(&self, draft: &ProfileDraft) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        errors.required_with_max("title", &draft.title, TITLE_MAX);
        errors.required_with_max("description", &draft.description, DESCRIPTION_MAX);
        errors.required_with_max("slug", &draft.slug, SLUG_MAX);
        errors.required_with_max("author_name", &draft.author_name, AUTHOR_NAME_MAX);
        errors.required_with_max("author_email", &draft.author_email, AUTHOR_EMAIL_MAX);
        errors.email("author_email", &draft.author_email);
        errors.required_with_max("identity_name", &draft.identity_name, IDENTITY_NAME_MAX);

        self.check_theme(&mut errors, "blog_theme", ThemeKind::Blog, draft.blog_theme.as_deref());
        self.check_theme(&mut errors, "admin_theme", ThemeKind::Admin, draft.admin_theme.as_deref());

        errors
    }

    fn check_theme(
        &self,
        errors: &mut ValidationErrors,
        field: &str,
        kind: ThemeKind,
        value: Option<&str>,
    ) {
        let Some(value) = value else {
            return;
        };
        errors.max_length(field, value, THEME_MAX);
        if !self.themes.offers(kind, value) {
            errors.add(field, format!("unknown {kind} theme '{value}'"));
        }
    }
}
