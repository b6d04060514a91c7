//! Core library for the Phoenix MEP fire-protection (PCCC) project tracker.
//!
//! The crate is split along the same lines as the application it backs:
//!
//! - [`store`] - in-memory entity collections (projects, materials, milestones,
//!   transactions, documents, daily logs, checklists)
//! - [`domain::stats`] - pure derived-state computations over store snapshots
//! - [`domain::report`] - AI progress-report synthesis against Gemini, with
//!   graceful textual degradation on every failure path
//! - [`config`] - generation parameters for the report pipeline
//!
//! The presentation layer (routing, forms, file export) lives outside this
//! crate and only consumes what is re-exported here.

pub mod config;
pub mod domain;
pub mod store;

pub use config::ReportConfig;
pub use domain::models;
pub use domain::report::{ReportService, SettingsStore};
pub use store::{EntityStore, StoreError};
