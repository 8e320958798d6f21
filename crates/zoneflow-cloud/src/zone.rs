//! Management zone and membership rule model
//!
//! Field names follow the Dynatrace configuration API (camelCase keys,
//! SCREAMING_SNAKE_CASE enum values).

use serde::{Deserialize, Serialize};

/// Request body for creating or replacing a management zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementZone {
    pub name: String,

    #[serde(default)]
    pub rules: Vec<MembershipRule>,
}

impl ManagementZone {
    pub fn new(name: impl Into<String>, rules: Vec<MembershipRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// A zone with no rules
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

/// Identifier and name of an existing zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub id: String,
    pub name: String,
}

/// A single membership condition attached to a management zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,

    pub enabled: bool,

    pub propagation_types: Vec<PropagationType>,

    pub conditions: Vec<RuleCondition>,
}

impl MembershipRule {
    /// Rule matching every process group whose host group name begins with `prefix`
    ///
    /// Matches are case-sensitive and propagate to both services and hosts.
    pub fn host_group_prefix(prefix: impl Into<String>) -> Self {
        Self {
            rule_type: RuleType::ProcessGroup,
            enabled: true,
            propagation_types: vec![
                PropagationType::ProcessGroupToService,
                PropagationType::ProcessGroupToHost,
            ],
            conditions: vec![RuleCondition {
                key: ConditionKey {
                    attribute: ConditionAttribute::HostGroupName,
                },
                comparison_info: ComparisonInfo {
                    comparison_type: ComparisonType::String,
                    operator: ComparisonOperator::BeginsWith,
                    value: prefix.into(),
                    negate: false,
                    case_sensitive: true,
                },
            }],
        }
    }

    /// Prefix this rule matches, if it was built by [`Self::host_group_prefix`]
    pub fn prefix(&self) -> Option<&str> {
        self.conditions
            .iter()
            .find(|c| {
                c.key.attribute == ConditionAttribute::HostGroupName
                    && c.comparison_info.operator == ComparisonOperator::BeginsWith
            })
            .map(|c| c.comparison_info.value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    ProcessGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropagationType {
    ProcessGroupToService,
    ProcessGroupToHost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    pub key: ConditionKey,
    pub comparison_info: ComparisonInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionKey {
    pub attribute: ConditionAttribute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionAttribute {
    HostGroupName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInfo {
    #[serde(rename = "type")]
    pub comparison_type: ComparisonType,
    pub operator: ComparisonOperator,
    pub value: String,
    pub negate: bool,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonType {
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonOperator {
    BeginsWith,
}
