//! Display language preference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI language of the session. Only affects string rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Human-readable name of the language, in that language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
        }
    }

    /// The other supported language.
    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Language::En => "en",
            Language::Hi => "hi",
        };
        write!(f, "{}", s)
    }
}
