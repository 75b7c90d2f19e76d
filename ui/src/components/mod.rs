//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `dashboard`: The page, metric cards and profile selector
//! - `plant_map`: Single-store floor plan with sensor markers
//! - `store_chart`: Multi-store comparison chart and status grid
//! - `help_desk`: Floating help button and support modal
//! - `common`: Shared/reusable components

pub mod common;
pub mod dashboard;
pub mod help_desk;
pub mod plant_map;
pub mod store_chart;
