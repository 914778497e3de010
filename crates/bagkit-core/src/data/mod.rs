//! Catalog data and rate records shared by every BagKit crate
//!
//! This module provides:
//! - Bag archetypes with their default outer dimensions
//! - The bag fabric color palette
//! - Pricing rates used by the price engine
//! - Allowed bag size range
//! - Reference-item library for fit checks

pub mod items;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bag archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BagType {
    /// Portrait tote, large capacity
    Tote,
    /// Landscape shoulder bag, compact
    Shoulder,
}

impl BagType {
    /// All archetypes in catalog order.
    pub const ALL: [BagType; 2] = [BagType::Tote, BagType::Shoulder];

    /// Default outer size `(width, height)` in millimeters.
    pub fn default_size_mm(&self) -> (f64, f64) {
        match self {
            Self::Tote => (350.0, 400.0),
            Self::Shoulder => (300.0, 250.0),
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tote => "Tote bag",
            Self::Shoulder => "Shoulder bag",
        }
    }

    /// Short catalog description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Tote => "Portrait layout with plenty of room",
            Self::Shoulder => "Landscape layout, compact",
        }
    }

    /// Wire identifier (`tote`, `shoulder`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tote => "tote",
            Self::Shoulder => "shoulder",
        }
    }
}

impl fmt::Display for BagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fabric color offered for the bag body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagColor {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

/// Fabric palette, first entry is the default.
pub const BAG_COLORS: [BagColor; 6] = [
    BagColor {
        id: "white",
        name: "White",
        hex: "#FFFFFF",
    },
    BagColor {
        id: "black",
        name: "Black",
        hex: "#000000",
    },
    BagColor {
        id: "beige",
        name: "Beige",
        hex: "#F5F5DC",
    },
    BagColor {
        id: "navy",
        name: "Navy",
        hex: "#000080",
    },
    BagColor {
        id: "pink",
        name: "Pink",
        hex: "#FFB6C1",
    },
    BagColor {
        id: "gray",
        name: "Gray",
        hex: "#808080",
    },
];

/// Look up a palette color by id.
pub fn bag_color(id: &str) -> Option<&'static BagColor> {
    BAG_COLORS.iter().find(|c| c.id == id)
}

/// Rates for the price engine, in minor currency units (yen)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRates {
    /// Flat cost of the bag body
    pub base_bag_cost: f64,
    /// Fabric cost per square millimeter of bag body
    pub material_rate_per_mm2: f64,
    /// Cost per hardware element
    pub hardware_rate_per_point: f64,
    /// Surcharge per window, pocket or badge panel
    pub complexity_factor_per_element: f64,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            base_bag_cost: 3500.0,
            material_rate_per_mm2: 0.08,
            hardware_rate_per_point: 120.0,
            complexity_factor_per_element: 20.0,
        }
    }
}

impl PricingRates {
    /// Iterate `(name, value)` pairs, used by validation.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("base_bag_cost", self.base_bag_cost),
            ("material_rate_per_mm2", self.material_rate_per_mm2),
            ("hardware_rate_per_point", self.hardware_rate_per_point),
            (
                "complexity_factor_per_element",
                self.complexity_factor_per_element,
            ),
        ]
    }
}

/// Allowed outer size range of a bag, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BagLimits {
    pub min_width_mm: f64,
    pub max_width_mm: f64,
    pub min_height_mm: f64,
    pub max_height_mm: f64,
}

impl Default for BagLimits {
    fn default() -> Self {
        Self {
            min_width_mm: 200.0,
            max_width_mm: 500.0,
            min_height_mm: 200.0,
            max_height_mm: 600.0,
        }
    }
}

impl BagLimits {
    /// Check a width against the range.
    pub fn width_ok(&self, width: f64) -> bool {
        width >= self.min_width_mm && width <= self.max_width_mm
    }

    /// Check a height against the range.
    pub fn height_ok(&self, height: f64) -> bool {
        height >= self.min_height_mm && height <= self.max_height_mm
    }
}
