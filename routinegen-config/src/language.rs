//! Language types for code generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for the generated constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C# static classes
    #[default]
    CSharp,
    /// Rust modules
    Rust,
    /// TypeScript `as const` objects
    TypeScript,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
            Language::Rust => "rust",
            Language::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            "rust" | "rs" => Ok(Language::Rust),
            "typescript" | "ts" => Ok(Language::TypeScript),
            _ => Err(format!(
                "unknown language '{}', expected 'csharp', 'rust' or 'typescript'",
                s
            )),
        }
    }
}
