//! Design document store for the interactive session.
//! Owns the document being edited and funnels every structural change through
//! one commit path, so the derived price and the undo history stay consistent.
//!
//! This module is split into submodules for better organization:
//! - `document`: Load, create and patch the document; the commit path
//! - `elements`: Add, update, remove, duplicate and select elements
//! - `history`: Undo/redo
//! - `viewport`: Zoom, grid and snapping
//! - `inspect`: Read-side queries for renderers and exporters

mod document;
mod elements;
mod history;
mod inspect;
mod viewport;

pub use elements::DUPLICATE_OFFSET_MM;
pub use inspect::{DesignSnapshot, Highlight};
pub use viewport::ZOOM_STEP;

use bagkit_core::{BagLimits, PricingRates};
use bagkit_settings::{Config, EditorSettings};

use crate::history::UndoRedoManager;
use crate::model::Design;

/// Designer state for one editing session
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) document: Option<Design>,
    pub(crate) history: UndoRedoManager<Design>,
    pub(crate) selected_id: Option<String>,
    pub(crate) config: Config,
    pub(crate) zoom: f64,
    pub show_grid: bool,
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a designer state using `config` for rates, limits and editor
    /// preferences.
    pub fn with_config(config: Config) -> Self {
        Self {
            document: None,
            history: UndoRedoManager::with_depth(config.editor.undo_limit),
            selected_id: None,
            zoom: config.editor.zoom.default,
            show_grid: true,
            config,
        }
    }

    /// The document being edited, if any.
    pub fn document(&self) -> Option<&Design> {
        self.document.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// Current price, or `None` when nothing is loaded.
    pub fn price_jpy(&self) -> Option<i64> {
        self.document.as_ref().map(Design::price_jpy)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rates(&self) -> &PricingRates {
        &self.config.pricing
    }

    pub fn limits(&self) -> &BagLimits {
        &self.config.bag
    }

    pub fn editor_settings(&self) -> &EditorSettings {
        &self.config.editor
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
