//! Snapshot of the management zones that already exist remotely

use crate::error::Result;
use crate::provider::ZoneApi;
use crate::zone::ZoneSummary;
use std::collections::HashMap;

/// Zone name to zone identifier, fetched once per run
///
/// The index is never refreshed; zones created during a run are tracked
/// by the plan, not by the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteZoneIndex {
    zones: HashMap<String, String>,
}

impl RemoteZoneIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a zone listing
    ///
    /// When several zones share a name, the last one listed wins.
    pub fn from_zones(zones: impl IntoIterator<Item = ZoneSummary>) -> Self {
        let zones = zones.into_iter().map(|z| (z.name, z.id)).collect();
        Self { zones }
    }

    /// Fetch all zones through the API and index them by name
    pub async fn fetch(api: &dyn ZoneApi) -> Result<Self> {
        let zones = api.list_zones().await?;
        tracing::debug!("{} management zones found on {}", zones.len(), api.name());
        Ok(Self::from_zones(zones))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.zones.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.zones.iter()
    }
}
