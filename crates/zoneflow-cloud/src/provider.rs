//! Management zone API trait definition

use crate::error::Result;
use crate::zone::{ManagementZone, ZoneSummary};
use async_trait::async_trait;

/// Access to a monitoring environment's management zones
///
/// The Dynatrace client implements this trait; tests use an in-memory
/// implementation. Every call is a single request with no retries.
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// Returns the API name for log output (e.g., "dynatrace")
    fn name(&self) -> &str;

    /// List every management zone in the environment
    async fn list_zones(&self) -> Result<Vec<ZoneSummary>>;

    /// Create a zone and return its identifier
    async fn create_zone(&self, zone: &ManagementZone) -> Result<ZoneSummary>;

    /// Replace the name and rules of the zone with the given identifier
    async fn update_zone(&self, id: &str, zone: &ManagementZone) -> Result<()>;
}
