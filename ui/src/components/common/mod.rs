//! Common/Shared UI Components
//!
//! Reusable components used throughout the application.

mod icons;
mod spinner;

pub use icons::*;
pub use spinner::Spinner;
