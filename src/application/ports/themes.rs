// src/application/ports/themes.rs
use crate::application::ApplicationResult;
use crate::domain::theme::{ThemeChoices, ThemeKind, ThemeOption};
use async_trait::async_trait;

#[async_trait]
pub trait ThemeStorage: Send + Sync {
    /// Selectable themes of one kind, in display order.
    async fn list_themes(&self, kind: ThemeKind) -> ApplicationResult<Vec<ThemeOption>>;

    async fn theme_choices(&self) -> ApplicationResult<ThemeChoices> {
        Ok(ThemeChoices {
            admin: self.list_themes(ThemeKind::Admin).await?,
            blog: self.list_themes(ThemeKind::Blog).await?,
        })
    }
}
