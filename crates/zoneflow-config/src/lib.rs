//! Team definitions for zoneflow
//!
//! Loads the teams document that drives management zone reconciliation:
//!
//! ```yaml
//! teams:
//!   payments:
//!     entity: payments-team
//!     host-group-prefixes:
//!       - pay-
//!       - billing-
//!   search:
//!     entity: 4711
//! ```
//!
//! Each entry becomes a [`TeamRecord`]. Records keep document order.

pub mod error;

pub use error::*;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// A team and the host-group prefixes its management zone should match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    /// Key of the team in the `teams` mapping
    pub key: String,

    /// Entity identifier, also used as the management zone name
    pub entity: String,

    /// Host-group prefixes, in document order. Empty when absent.
    pub host_group_prefixes: Vec<String>,
}

impl TeamRecord {
    pub fn has_prefixes(&self) -> bool {
        !self.host_group_prefixes.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct TeamsDocument {
    #[serde(default)]
    teams: Option<Mapping>,
}

#[derive(Debug, Deserialize)]
struct RawTeam {
    #[serde(default)]
    entity: Option<Value>,

    #[serde(rename = "host-group-prefixes", default)]
    host_group_prefixes: Option<Vec<String>>,
}

/// Load team records from a YAML file
pub fn load_teams(path: impl AsRef<Path>) -> Result<Vec<TeamRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded teams file: {}", path.display());
    parse_teams(&content)
}

/// Parse team records from a YAML string
pub fn parse_teams(content: &str) -> Result<Vec<TeamRecord>> {
    let document: TeamsDocument = serde_yaml::from_str(content)?;

    let Some(teams) = document.teams else {
        tracing::warn!("Teams document has no entries");
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(teams.len());
    for (key, value) in teams {
        let key = scalar_to_string(&key).unwrap_or_else(|| format!("{:?}", key));
        if value.is_null() {
            return Err(ConfigError::MissingEntity(key));
        }
        let raw: RawTeam = serde_yaml::from_value(value)?;

        let entity = match raw.entity {
            Some(value) => entity_name(&key, value)?,
            None => return Err(ConfigError::MissingEntity(key)),
        };

        records.push(TeamRecord {
            key,
            entity,
            host_group_prefixes: raw.host_group_prefixes.unwrap_or_default(),
        });
    }

    Ok(records)
}

/// Entity identifiers may be written as strings or numbers
fn entity_name(team: &str, value: Value) -> Result<String> {
    let Some(name) = scalar_to_string(&value) else {
        return Err(ConfigError::InvalidEntity {
            team: team.to_string(),
            reason: "expected a string or a number".to_string(),
        });
    };

    if name.trim().is_empty() {
        return Err(ConfigError::InvalidEntity {
            team: team.to_string(),
            reason: "entity is empty".to_string(),
        });
    }

    Ok(name)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
