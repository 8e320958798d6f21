//! Dynatrace client for zoneflow
//!
//! Implements the `ZoneApi` trait against the Dynatrace configuration API,
//! enabling zoneflow to list, create and replace management zones.
//!
//! # Requirements
//!
//! - `DT_ENV_URL`: environment URL, e.g. `https://abc12345.live.dynatrace.com`
//! - `DT_API_TOKEN`: API token with the `ReadConfig` and `WriteConfig` scopes
//!
//! # Example
//!
//! ```ignore
//! use zoneflow_cloud::Reconciler;
//! use zoneflow_dynatrace::{DynatraceClient, DynatraceConfig};
//!
//! let client = DynatraceClient::new(DynatraceConfig::from_env()?);
//! let teams = zoneflow_config::load_teams("teams.yml")?;
//!
//! let result = Reconciler::new(&client).run(&teams).await?;
//! ```

pub mod client;
pub mod error;
pub mod provider;

pub use client::{DynatraceClient, DynatraceConfig};
pub use error::{DynatraceError, Result};
