//! # BagKit Core
//!
//! Core types and catalogs for BagKit.
//! Provides the error taxonomy shared by every crate, the bag archetype and
//! color catalogs, the pricing-rate and size-limit records, and the
//! reference-item library.

pub mod data;
pub mod error;

pub use data::items::{init_standard_library, ItemCategory, ItemLibrary, LibraryItem};
pub use data::{bag_color, BagColor, BagLimits, BagType, PricingRates, BAG_COLORS};
pub use error::{ConfigError, DesignError, Error, Result, ShareCodeError};
