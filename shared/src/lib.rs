//! Shared types for the StoreWatch dashboard
//!
//! This crate contains everything the dashboard renders that does not need a
//! browser:
//! - Aggregate counters and the page-level view model
//! - Sensor, store and help-desk records with their compiled-in mock data
//! - Pagination, bar-chart geometry and selection rules
//! - Dashboard configuration

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod help;
pub mod loader;
pub mod sensors;
pub mod stores;

pub use chart::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use help::*;
pub use loader::*;
pub use sensors::*;
pub use stores::*;
