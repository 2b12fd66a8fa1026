//! Incubator Runtime
//!
//! Behaviour over the records in `incubator-types`.
//!
//! # Components
//!
//! - [`AllocationLedger`]: line-item accounting for funding rounds and
//!   resources. Replaces a pool's lines wholesale and re-derives its
//!   allocated figure; over-allocation is reported, never rejected.
//! - [`CatalogManager`]: record lifecycle with required-field validation.
//! - [`metrics`], [`Dashboard`], [`report`]: read-only projections.
//! - [`Incubator`]: the state container composing all of the above.
//!
//! Everything is synchronous and single-owner. Callers hold an
//! [`Incubator`] by value or `&mut`.

#![deny(unsafe_code)]

pub mod catalog_manager;
pub mod config;
pub mod dashboard;
pub mod incubator;
pub mod ledger;
pub mod metrics;
pub mod report;
pub mod seed;

pub use catalog_manager::{CatalogManager, ResourceDraft, StartupRemoval};
pub use config::LedgerConfig;
pub use dashboard::{AdminDashboard, Dashboard, FounderDashboard, MentorDashboard, PoolShare};
pub use incubator::Incubator;
pub use ledger::{normalize_lines, AllocationLedger, AllocationOutcome};
pub use metrics::{calendar, progress_ranking, OverviewMetrics, StageBreakdown, StageCount};
pub use report::{generate_report, render_text, to_csv, ReportData, ReportKind};
pub use seed::sample_catalog;

pub use incubator_types as types;
