//! StoreWatch UI Library
//!
//! This crate provides the StoreWatch monitoring dashboard: metric cards,
//! the store plant map and the multi-store comparison chart, rendered over
//! compiled-in mock data.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`components`]: UI components (cards, plant map, chart, help desk)
//! - [`config`]: Bundled configuration loading
//! - [`state`]: Page-level state and the deferred mock load

pub mod app;
pub mod components;
pub mod config;
pub mod state;

pub use app::App;
