//! # BagKit Designer
//!
//! The design document engine behind the bag editor: a typed document model,
//! the store that applies edits, and the pure functions that validate, pack and
//! price a design.
//!
//! ## Core Components
//!
//! ### Document
//! - **Model**: Designs, elements with explicit geometry and typed properties
//! - **Factory**: Kind-specific defaults, unique ids, stacking order
//! - **Store**: One commit path for every edit, live pricing, selection
//! - **History**: Bounded snapshot undo/redo
//!
//! ### Checks
//! - **Geometry**: Seam-expanded overlap, seam-margin intrusion, fit checks
//! - **Badge packing**: Regular grid of round badges inside a panel
//! - **Pricing**: Total price and bill of materials
//!
//! ### Transfer
//! - **Share codes**: Compact, URL-safe, reversible encoding of a design
//! - **Serialization**: Versioned JSON export/import
//! - **Gallery**: In-memory collection of saved designs with social data
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (single session owner)
//!   ├── Design (current document)
//!   ├── UndoRedoManager<Design> (past / future snapshots)
//!   └── commit() ── validate ── record ── stamp ── calc_price
//!
//! geometry / badge_pack / pricing (pure, read-side)
//! share_code / serialization / gallery (collaborators)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bagkit_designer::{DesignerState, ElementTemplate};
//! use bagkit_core::BagType;
//!
//! let mut state = DesignerState::new();
//! state.new_design(BagType::Tote)?;
//! let id = state.create_element(ElementTemplate::badge_panel())?;
//! let guides = state.badge_guides(&id);
//! println!("{} JPY", state.price_jpy().unwrap_or_default());
//! ```

pub mod badge_pack;
pub mod designer_state;
pub mod factory;
pub mod gallery;
pub mod geometry;
pub mod history;
pub mod model;
pub mod pricing;
pub mod serialization;
pub mod share_code;

pub use badge_pack::{badge_guides, pack_badges, MAX_BADGES};
pub use designer_state::{DesignSnapshot, DesignerState, Highlight};
pub use factory::{ElementFactory, ElementTemplate, DEFAULT_PLACEMENT};
pub use gallery::Gallery;
pub use geometry::{
    element_bounds, find_issues, fit_check, in_seam_area, overlap, snap_to_grid, DesignIssue, Rect,
};
pub use history::{UndoRedoManager, DEFAULT_HISTORY_DEPTH};
pub use model::*;
pub use pricing::{calc_price, element_area, generate_bom, BomGroup, BomItem};
pub use serialization::{export_json, import_json, DesignFile};
pub use share_code::{decode_share_code, encode_share_code, try_decode_share_code};
