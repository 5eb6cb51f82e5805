//! Schema domains: the static table mapping a document domain to its schema.
//!
//! # Design
//!
//! `SchemaDomain` is a pure value type. The table is closed: a domain key
//! that does not parse is an `UnknownDomain`, never a guess. Every schema is
//! pinned to [`SCHEMA_VERSION`] and lives at
//! `<schema-root>/<schema-id>/<version>.json`.
//!
//! # Adding New Domains
//!
//! 1. Add the enum variant and its entry in [`SchemaDomain::ALL`]
//! 2. Add the `key`, `schema_id` and `FromStr` arms
//! 3. Ship `schemas/<schema-id>/1.0.0.json`

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Version every schema lookup is pinned to.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// A document domain with a registered schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaDomain {
    ColdEmail,
    LandingPage,
    CompetitorAnalysis,
}

impl SchemaDomain {
    /// Every registered domain, in table order.
    pub const ALL: [SchemaDomain; 3] = [
        Self::ColdEmail,
        Self::LandingPage,
        Self::CompetitorAnalysis,
    ];

    /// The key documents carry in `metadata.domain`.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ColdEmail => "cold_email",
            Self::LandingPage => "landing_page",
            Self::CompetitorAnalysis => "competitor_analysis",
        }
    }

    /// The schema identifier, which is also the schema's directory name.
    pub const fn schema_id(&self) -> &'static str {
        match self {
            Self::ColdEmail => "cold-email",
            Self::LandingPage => "landing-page",
            Self::CompetitorAnalysis => "competitor-analysis",
        }
    }

    /// Path of this domain's schema relative to the schema root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.schema_id()).join(format!("{SCHEMA_VERSION}.json"))
    }
}

impl fmt::Display for SchemaDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SchemaDomain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cold_email" => Ok(Self::ColdEmail),
            "landing_page" => Ok(Self::LandingPage),
            "competitor_analysis" => Ok(Self::CompetitorAnalysis),
            other => Err(DomainError::UnknownDomain {
                domain: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for domain in SchemaDomain::ALL {
            assert_eq!(domain.key().parse::<SchemaDomain>().unwrap(), domain);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "press_release".parse::<SchemaDomain>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownDomain {
                domain: "press_release".into()
            }
        );
    }

    #[test]
    fn key_match_is_exact() {
        assert!("Cold_Email".parse::<SchemaDomain>().is_err());
        assert!(" cold_email".parse::<SchemaDomain>().is_err());
    }

    #[test]
    fn relative_path_is_versioned_under_schema_id() {
        let path = SchemaDomain::LandingPage.relative_path();
        assert_eq!(path, PathBuf::from("landing-page").join("1.0.0.json"));
    }

    #[test]
    fn schema_ids_are_unique() {
        let mut ids: Vec<_> = SchemaDomain::ALL.iter().map(|d| d.schema_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SchemaDomain::ALL.len());
    }
}
