// src/infrastructure/themes.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::themes::ThemeStorage,
};
use crate::domain::theme::{ThemeKind, ThemeOption};
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};

/// Themes laid out on disk as `<root>/admin/<name>/` and `<root>/blog/<name>/`.
#[derive(Debug, Clone)]
pub struct FsThemeStorage {
    root: PathBuf,
}

impl FsThemeStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn dir_for(&self, kind: ThemeKind) -> PathBuf {
        self.root.join(kind.as_str())
    }
}

#[async_trait]
impl ThemeStorage for FsThemeStorage {
    async fn list_themes(&self, kind: ThemeKind) -> ApplicationResult<Vec<ThemeOption>> {
        let dir = self.dir_for(kind);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "theme directory missing");
                return Ok(Vec::new());
            }
            Err(err) => return Err(io_error(err)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            if !entry.file_type().await.map_err(io_error)?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();

        Ok(names.into_iter().map(ThemeOption::named).collect())
    }
}

fn io_error(err: std::io::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("theme storage: {err}"))
}
