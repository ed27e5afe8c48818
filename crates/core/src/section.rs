//! The fixed set of editable content sections.
//!
//! Each section maps to exactly one JSON document in the bucket
//! (`content/{section}.json`). The set is closed: sections are never
//! created or deleted at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A named content area of the marketing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Gallery,
    Clients,
    Footer,
    Metadata,
}

/// All sections, in the order they appear on the public site.
pub const ALL_SECTIONS: &[Section] = &[
    Section::Hero,
    Section::About,
    Section::Gallery,
    Section::Clients,
    Section::Footer,
    Section::Metadata,
];

impl Section {
    /// The lowercase name used in URLs and storage keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Gallery => "gallery",
            Self::Clients => "clients",
            Self::Footer => "footer",
            Self::Metadata => "metadata",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "about" => Ok(Self::About),
            "gallery" => Ok(Self::Gallery),
            "clients" => Ok(Self::Clients),
            "footer" => Ok(Self::Footer),
            "metadata" => Ok(Self::Metadata),
            other => Err(CoreError::Validation(format!(
                "Invalid content section '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_known_sections() {
        for section in ALL_SECTIONS {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), *section);
        }
    }

    #[test]
    fn parse_unknown_section_rejected() {
        assert!("blog".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
        assert!("Hero".parse::<Section>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Section::Hero).unwrap();
        assert_eq!(json, "\"hero\"");
        let parsed: Section = serde_json::from_str("\"footer\"").unwrap();
        assert_eq!(parsed, Section::Footer);
    }
}
