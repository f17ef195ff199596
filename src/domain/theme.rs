// src/domain/theme.rs
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Admin,
    Blog,
}

impl ThemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Admin => "admin",
            ThemeKind::Blog => "blog",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable entry of a theme drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOption {
    pub text: String,
    pub value: String,
}

impl ThemeOption {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            text: name.clone(),
            value: name,
        }
    }
}

/// Theme lists offered on the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeChoices {
    pub admin: Vec<ThemeOption>,
    pub blog: Vec<ThemeOption>,
}

impl ThemeChoices {
    pub fn offers(&self, kind: ThemeKind, value: &str) -> bool {
        let options = match kind {
            ThemeKind::Admin => &self.admin,
            ThemeKind::Blog => &self.blog,
        };
        options.iter().any(|option| option.value == value)
    }
}
