//! Configuration and settings management for BagKit
//!
//! Provides configuration parsing, rendering, and validation.
//! Supports JSON and TOML text; reading and writing the text is left to the
//! host application.
//!
//! Configuration is organized into logical sections:
//! - Pricing rates (price engine inputs)
//! - Bag limits (allowed outer size range)
//! - Editor preferences (seam default, snapping, zoom, history depth)

pub use bagkit_core::{BagLimits, PricingRates};
use bagkit_core::ConfigError;
use serde::{Deserialize, Serialize};

/// Canvas zoom range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSettings {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: 0.25,
            max: 3.0,
            default: 1.0,
        }
    }
}

impl ZoomSettings {
    /// Clamp a requested zoom level into range
    pub fn clamp(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return self.default;
        }
        zoom.clamp(self.min, self.max)
    }
}

/// Editor preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Seam allowance for new designs (mm)
    pub default_seam_mm: f64,
    /// Snap grid pitch used by drag gestures (mm)
    pub snap_grid_mm: f64,
    /// Undo/redo depth
    pub undo_limit: usize,
    /// Auto-persist cadence for the host scheduler (ms)
    #[serde(default = "default_autosave_interval_ms")]
    pub autosave_interval_ms: u64,
    /// Canvas zoom range
    #[serde(default)]
    pub zoom: ZoomSettings,
}

fn default_autosave_interval_ms() -> u64 {
    3000
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_seam_mm: 10.0,
            snap_grid_mm: 5.0,
            undo_limit: 10,
            autosave_interval_ms: default_autosave_interval_ms(),
            zoom: ZoomSettings::default(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Price engine rates
    #[serde(default)]
    pub pricing: PricingRates,
    /// Allowed bag size range
    #[serde(default)]
    pub bag: BagLimits,
    /// Editor preferences
    #[serde(default)]
    pub editor: EditorSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            format: "toml".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            format: "json".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Render as pretty JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        self.validate()?;
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_pricing(&self.pricing)?;
        validate_bag(&self.bag)?;
        validate_editor(&self.editor, &self.bag)?;
        Ok(())
    }

    /// Merge another config into this one, taking every section that is valid on its own.
    /// Editor settings are checked against the bag limits in force after the merge.
    pub fn merge(&mut self, other: &Config) {
        if validate_pricing(&other.pricing).is_ok() {
            self.pricing = other.pricing;
        }
        if validate_bag(&other.bag).is_ok() && validate_editor(&self.editor, &other.bag).is_ok() {
            self.bag = other.bag;
        }
        if validate_editor(&other.editor, &self.bag).is_ok() {
            self.editor = other.editor.clone();
        }
        tracing::debug!("Merged configuration: {:?}", self);
    }
}

fn validate_pricing(pricing: &PricingRates) -> Result<(), ConfigError> {
    for (name, value) in pricing.entries() {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!("{name} must be a finite value >= 0")));
        }
    }
    Ok(())
}

fn validate_bag(bag: &BagLimits) -> Result<(), ConfigError> {
    if !(bag.min_width_mm > 0.0 && bag.min_width_mm <= bag.max_width_mm) {
        return Err(invalid("Bag width range must be positive and ordered"));
    }
    if !(bag.min_height_mm > 0.0 && bag.min_height_mm <= bag.max_height_mm) {
        return Err(invalid("Bag height range must be positive and ordered"));
    }
    Ok(())
}

fn validate_editor(editor: &EditorSettings, bag: &BagLimits) -> Result<(), ConfigError> {
    let min_side = bag.min_width_mm.min(bag.min_height_mm);
    if !(editor.default_seam_mm > 0.0 && editor.default_seam_mm * 2.0 < min_side) {
        return Err(invalid(
            "Default seam must be > 0 and below half the smallest bag side",
        ));
    }
    if !(editor.snap_grid_mm > 0.0) {
        return Err(invalid("Snap grid must be > 0"));
    }
    let zoom = &editor.zoom;
    if !(zoom.min > 0.0 && zoom.min <= zoom.default && zoom.default <= zoom.max) {
        return Err(invalid("Zoom range must satisfy 0 < min <= default <= max"));
    }
    Ok(())
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.into(),
    }
}
