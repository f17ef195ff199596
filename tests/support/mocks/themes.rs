// tests/support/mocks/themes.rs
use async_trait::async_trait;
use blog_admin::application::{ApplicationResult, ports::themes::ThemeStorage};
use blog_admin::domain::theme::{ThemeKind, ThemeOption};

/// Admin: `Standard`. Blog: `Clean`, `Dark`.
#[derive(Clone, Debug, Default)]
pub struct StaticThemes;

#[async_trait]
impl ThemeStorage for StaticThemes {
    async fn list_themes(&self, kind: ThemeKind) -> ApplicationResult<Vec<ThemeOption>> {
        let names: &[&str] = match kind {
            ThemeKind::Admin => &["Standard"],
            ThemeKind::Blog => &["Clean", "Dark"],
        };
        Ok(names.iter().copied().map(ThemeOption::named).collect())
    }
}
