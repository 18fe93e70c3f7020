//! Page theme

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    #[serde(rename = "theme-cyber")]
    Cyber,
    #[serde(rename = "theme-scandi")]
    Scandi,
}

impl Theme {
    /// CSS class on `<body>`, also the persisted value
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Cyber => "theme-cyber",
            Theme::Scandi => "theme-scandi",
        }
    }

    /// Unknown values fall back to the default theme
    pub fn from_class(s: &str) -> Self {
        match s {
            "theme-scandi" => Theme::Scandi,
            _ => Theme::Cyber,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Cyber => Theme::Scandi,
            Theme::Scandi => Theme::Cyber,
        }
    }
}
