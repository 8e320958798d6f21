//! Team to management zone reconciliation
//!
//! One pass over the configured teams: each team is matched to a remote zone
//! by name and turned into an ordered list of create/update calls. Calls run
//! strictly one after another and the first failure aborts the run. Zones
//! already changed are left as they are.

use crate::action::{Action, ActionType, ApplyResult, Plan};
use crate::error::{CloudError, Result};
use crate::provider::ZoneApi;
use crate::state::RemoteZoneIndex;
use crate::zone::{ManagementZone, MembershipRule};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use zoneflow_config::TeamRecord;

/// How a team's prefixes are written to its zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMode {
    /// Clear the zone, then send one call per prefix whose rule list holds
    /// only that prefix. Each call replaces the previous one, so the zone
    /// ends up with the rule of the last prefix only.
    #[default]
    Overwrite,
    /// Send the complete rule list in a single call.
    Accumulate,
}

impl std::fmt::Display for RuleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleMode::Overwrite => write!(f, "overwrite"),
            RuleMode::Accumulate => write!(f, "accumulate"),
        }
    }
}

/// Compute the calls needed to bring every team's zone in line
///
/// Pure: nothing is sent. A zone created by an earlier team in the same plan
/// is treated as existing for later teams with the same entity.
pub fn plan(teams: &[TeamRecord], index: &RemoteZoneIndex, mode: RuleMode) -> Plan {
    let mut actions = Vec::new();
    let mut planned_creates: HashSet<&str> = HashSet::new();

    for team in teams {
        let name = team.entity.as_str();
        let rules: Vec<MembershipRule> = team
            .host_group_prefixes
            .iter()
            .map(MembershipRule::host_group_prefix)
            .collect();

        let existing = index.get(name).map(str::to_string);
        let exists = existing.is_some() || planned_creates.contains(name);
        let mut step = 0usize;
        let mut next_id = || {
            let id = format!("{}#{}", team.key, step);
            step += 1;
            id
        };

        match mode {
            RuleMode::Overwrite => {
                if exists {
                    actions.push(Action::update(next_id(), name, existing.clone(), Vec::new()));
                } else {
                    actions.push(Action::create(next_id(), name, Vec::new()));
                    planned_creates.insert(name);
                }
                for rule in rules {
                    actions.push(Action::update(next_id(), name, existing.clone(), vec![rule]));
                }
            }
            RuleMode::Accumulate => {
                if exists {
                    actions.push(Action::update(next_id(), name, existing, rules));
                } else {
                    actions.push(Action::create(next_id(), name, rules));
                    planned_creates.insert(name);
                }
            }
        }

        tracing::debug!(
            "Planned team {} (zone {}, {} prefixes, {})",
            team.key,
            name,
            team.host_group_prefixes.len(),
            if exists { "existing" } else { "new" }
        );
    }

    Plan::new(actions)
}

/// Execute a plan in order, stopping at the first failed call
pub async fn apply(api: &dyn ZoneApi, plan: &Plan) -> Result<ApplyResult> {
    let mut result = ApplyResult::new();
    let start = std::time::Instant::now();
    let mut created: HashMap<String, String> = HashMap::new();

    for action in &plan.actions {
        let body = ManagementZone::new(action.zone.clone(), action.rules.clone());

        match action.action_type {
            ActionType::Create => {
                tracing::info!("Creating management zone: {}", action.zone);
                let zone = api.create_zone(&body).await?;
                result.add_success(
                    action.id.clone(),
                    zone.id.clone(),
                    format!("created zone {} ({})", action.zone, zone.id),
                );
                created.insert(action.zone.clone(), zone.id);
            }
            ActionType::Update => {
                let zone_id = match &action.zone_id {
                    Some(id) => id.clone(),
                    None => created.get(&action.zone).cloned().ok_or_else(|| {
                        CloudError::InvalidPlan(format!(
                            "zone {} has no identifier and was not created by this plan",
                            action.zone
                        ))
                    })?,
                };

                tracing::info!(
                    "Updating management zone: {} ({}) with {} rules",
                    action.zone,
                    zone_id,
                    body.rules.len()
                );
                api.update_zone(&zone_id, &body).await?;
                result.add_success(action.id.clone(), zone_id, action.description.clone());
            }
        }
    }

    result.duration_ms = start.elapsed().as_millis() as u64;
    Ok(result)
}

/// Reconciler bound to one API and rule mode
pub struct Reconciler<'a> {
    api: &'a dyn ZoneApi,
    mode: RuleMode,
}

impl<'a> Reconciler<'a> {
    pub fn new(api: &'a dyn ZoneApi) -> Self {
        Self {
            api,
            mode: RuleMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: RuleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    pub async fn fetch_index(&self) -> Result<RemoteZoneIndex> {
        RemoteZoneIndex::fetch(self.api).await
    }

    pub fn plan(&self, teams: &[TeamRecord], index: &RemoteZoneIndex) -> Plan {
        plan(teams, index, self.mode)
    }

    pub async fn apply(&self, plan: &Plan) -> Result<ApplyResult> {
        apply(self.api, plan).await
    }

    /// Fetch remote zones, plan, and apply
    pub async fn run(&self, teams: &[TeamRecord]) -> Result<ApplyResult> {
        let index = self.fetch_index().await?;
        let plan = self.plan(teams, &index);
        tracing::info!("Plan: {}", plan.summary());
        self.apply(&plan).await
    }
}
