//! zoneflow management zones
//!
//! This crate holds the management zone model and the reconciliation logic
//! that turns team definitions into zone create/update calls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  zoneflow CLI                   │
//! │              (zoneflow -f teams.yml)            │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               zoneflow-cloud                    │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │            API Abstraction               │   │
//! │  │  trait ZoneApi { ... }                   │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐             │
//! │  │ Rule Builder │  │  Reconciler  │             │
//! │  └──────────────┘  └──────────────┘             │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//!           ┌───────▼───────┐
//!           │   dynatrace   │
//!           │    client     │
//!           └───────────────┘
//! ```

pub mod action;
pub mod error;
pub mod provider;
pub mod reconcile;
pub mod state;
pub mod zone;

// Re-exports
pub use action::{Action, ActionResult, ActionType, ApplyResult, Plan, PlanSummary};
pub use error::{CloudError, Result};
pub use provider::ZoneApi;
pub use reconcile::{Reconciler, RuleMode};
pub use state::RemoteZoneIndex;
pub use zone::{ManagementZone, MembershipRule, ZoneSummary};
