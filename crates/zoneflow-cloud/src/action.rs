//! Action types for management zone reconciliation

use crate::zone::MembershipRule;
use serde::{Deserialize, Serialize};

/// Represents a planned API call for a management zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Unique identifier for the action
    pub id: String,

    /// Type of action to perform
    pub action_type: ActionType,

    /// Zone name
    pub zone: String,

    /// Zone identifier. `None` for a zone created earlier in the same plan.
    pub zone_id: Option<String>,

    /// Rule list sent with the call
    pub rules: Vec<MembershipRule>,

    /// Description of the action
    pub description: String,
}

impl Action {
    pub fn create(id: String, zone: &str, rules: Vec<MembershipRule>) -> Self {
        let description = format!("create zone {} with {}", zone, describe_rules(&rules));
        Self {
            id,
            action_type: ActionType::Create,
            zone: zone.to_string(),
            zone_id: None,
            rules,
            description,
        }
    }

    pub fn update(
        id: String,
        zone: &str,
        zone_id: Option<String>,
        rules: Vec<MembershipRule>,
    ) -> Self {
        let description = format!("set rules of zone {} to {}", zone, describe_rules(&rules));
        Self {
            id,
            action_type: ActionType::Update,
            zone: zone.to_string(),
            zone_id,
            rules,
            description,
        }
    }

    /// Host-group prefixes carried by this action's rules
    pub fn prefixes(&self) -> Vec<&str> {
        self.rules.iter().filter_map(|r| r.prefix()).collect()
    }
}

fn describe_rules(rules: &[MembershipRule]) -> String {
    if rules.is_empty() {
        return "no rules".to_string();
    }
    let prefixes: Vec<String> = rules
        .iter()
        .map(|r| format!("'{}'", r.prefix().unwrap_or("?")))
        .collect();
    format!("host-group prefix {}", prefixes.join(", "))
}

/// Type of action to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Create a new zone (POST)
    Create,
    /// Replace an existing zone (PUT)
    Update,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::Create => write!(f, "create"),
            ActionType::Update => write!(f, "update"),
        }
    }
}

/// Result of applying a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResult {
    /// Successfully applied actions, in execution order
    pub succeeded: Vec<ActionResult>,

    /// Total execution time in milliseconds
    pub duration_ms: u64,
}

impl ApplyResult {
    pub fn new() -> Self {
        Self {
            succeeded: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn add_success(&mut self, action_id: String, zone_id: String, message: String) {
        self.succeeded.push(ActionResult {
            action_id,
            zone_id,
            message,
        });
    }
}

impl Default for ApplyResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a single action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    /// ID of the action
    pub action_id: String,

    /// Identifier of the zone the call targeted
    pub zone_id: String,

    /// Success message
    pub message: String,
}

/// Plan containing all actions to be applied, in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// List of actions to perform
    pub actions: Vec<Action>,

    /// Whether the plan has any changes
    pub has_changes: bool,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        let has_changes = !actions.is_empty();
        Self {
            actions,
            has_changes,
        }
    }

    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            has_changes: false,
        }
    }

    /// Get actions by type
    pub fn actions_by_type(&self, action_type: ActionType) -> Vec<&Action> {
        self.actions
            .iter()
            .filter(|a| a.action_type == action_type)
            .collect()
    }

    /// Get the actions targeting a zone
    pub fn actions_for_zone(&self, zone: &str) -> Vec<&Action> {
        self.actions.iter().filter(|a| a.zone == zone).collect()
    }

    /// Summary of the plan
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            create: self.actions_by_type(ActionType::Create).len(),
            update: self.actions_by_type(ActionType::Update).len(),
        }
    }
}

/// Summary of planned actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub create: usize,
    pub update: usize,
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} zones to create, {} updates",
            self.create, self.update
        )
    }
}
