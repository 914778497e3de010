//! BagKit Settings Crate
//!
//! Handles application configuration: pricing rates, bag size limits and
//! editor preferences, parsed from and rendered to TOML or JSON.

pub mod config;

pub use config::{BagLimits, Config, EditorSettings, PricingRates, ZoomSettings};
