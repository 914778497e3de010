//! # BagKit
//!
//! A parametric bag designer engine. Users place clear windows, pockets, badge
//! panels, hardware and reference items on a millimeter-accurate canvas; the
//! engine keeps a live price estimate, flags seam problems, packs badge grids
//! and supports bounded undo/redo.
//!
//! ## Architecture
//!
//! BagKit is organized as a workspace with multiple crates:
//!
//! 1. **bagkit-core** - Error taxonomy, bag archetypes, colors, rates, item library
//! 2. **bagkit-settings** - Configuration parsing and validation
//! 3. **bagkit-designer** - Document model, store, checks, pricing, share codes
//! 4. **bagkit** - Headless driver binary that integrates all crates
//!
//! ## Features
//!
//! - **Typed Elements**: Explicit rectangle/circle geometry and per-kind properties
//! - **Live Pricing**: Price and bill of materials recomputed after every edit
//! - **Manufacturability**: Seam-margin intrusion and seam-allowance overlap checks
//! - **Badge Panels**: Regular grid packing of round badges
//! - **History**: Bounded snapshot undo/redo
//! - **Sharing**: Compact URL-safe share codes and JSON export

pub use bagkit_core::data;
pub use bagkit_designer as designer;

pub use bagkit_core::{
    init_standard_library, BagColor, BagLimits, BagType, ConfigError, DesignError, Error,
    ItemCategory, ItemLibrary, LibraryItem, PricingRates, Result, ShareCodeError, BAG_COLORS,
};

pub use bagkit_designer::{
    calc_price, decode_share_code, encode_share_code, export_json, find_issues, generate_bom,
    import_json, pack_badges, BomGroup, BomItem, Design, DesignElement, DesignIssue, DesignPatch,
    DesignSnapshot, DesignerState, ElementFactory, ElementKind, ElementPatch, ElementProps,
    ElementTemplate, Gallery, Geometry, HardwareType, Highlight, Point,
};

pub use bagkit_settings::{Config, EditorSettings, ZoomSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build an editing session from a validated configuration.
pub fn session_from_config(config: &Config) -> Result<DesignerState> {
    config.validate()?;
    tracing::debug!(
        "Starting session: undo limit {}, seam {}mm",
        config.editor.undo_limit,
        config.editor.default_seam_mm
    );
    Ok(DesignerState::with_config(config.clone()))
}
