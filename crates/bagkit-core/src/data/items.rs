//! Reference-item library
//!
//! Real-world objects a user may want to carry in the bag. They are placed on
//! the canvas as non-priced shadow items to check that the object fits.

use serde::{Deserialize, Serialize};

/// Item grouping in the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Fan merchandise (badges, cards, stands)
    Goods,
    /// Everyday accessories
    Accessories,
}

/// A catalog entry with its real-world footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub width_mm: Option<f64>,
    #[serde(default)]
    pub height_mm: Option<f64>,
    /// Set for round items; takes precedence over width/height
    #[serde(default)]
    pub diameter_mm: Option<f64>,
    /// Extra handle length below a round item (hand fans)
    #[serde(default)]
    pub handle_length_mm: Option<f64>,
}

impl LibraryItem {
    /// A rectangular item.
    pub fn rect(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ItemCategory,
        width_mm: f64,
        height_mm: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            width_mm: Some(width_mm),
            height_mm: Some(height_mm),
            diameter_mm: None,
            handle_length_mm: None,
        }
    }

    /// A round item.
    pub fn round(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ItemCategory,
        diameter_mm: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            width_mm: None,
            height_mm: None,
            diameter_mm: Some(diameter_mm),
            handle_length_mm: None,
        }
    }

    pub fn is_circle(&self) -> bool {
        self.diameter_mm.is_some()
    }

    /// Axis-aligned footprint `(width, height)`, including any handle.
    pub fn footprint_mm(&self) -> Option<(f64, f64)> {
        match (self.diameter_mm, self.width_mm, self.height_mm) {
            (Some(d), _, _) => Some((d, d + self.handle_length_mm.unwrap_or(0.0))),
            (None, Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

/// Item library with lookup helpers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemLibrary {
    items: Vec<LibraryItem>,
}

impl ItemLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, replacing any entry with the same id
    pub fn add_item(&mut self, item: LibraryItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Get an item by id
    pub fn get_item(&self, id: &str) -> Option<&LibraryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All items in insertion order
    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    /// Items of one category
    pub fn get_items_by_category(&self, category: ItemCategory) -> Vec<&LibraryItem> {
        self.items
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    /// Case-insensitive substring search on the display name
    pub fn search_by_name(&self, query: &str) -> Vec<&LibraryItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build the stock library of commonly carried items
pub fn init_standard_library() -> ItemLibrary {
    let mut library = ItemLibrary::new();

    let mut fan = LibraryItem::round("uchiwa_jumbo", "Hand fan (jumbo)", ItemCategory::Goods, 295.0);
    fan.handle_length_mm = Some(120.0);
    library.add_item(fan);

    library.add_item(LibraryItem::round(
        "badge_57",
        "Button badge (57mm)",
        ItemCategory::Goods,
        57.0,
    ));
    library.add_item(LibraryItem::round(
        "badge_75",
        "Button badge (75mm)",
        ItemCategory::Goods,
        75.0,
    ));
    library.add_item(LibraryItem::rect(
        "trading_card",
        "Trading card",
        ItemCategory::Goods,
        63.0,
        88.0,
    ));
    library.add_item(LibraryItem::rect(
        "acrylic_stand_m",
        "Acrylic stand (medium)",
        ItemCategory::Goods,
        50.0,
        100.0,
    ));
    library.add_item(LibraryItem::rect(
        "penlight",
        "Penlight",
        ItemCategory::Goods,
        40.0,
        250.0,
    ));
    library.add_item(LibraryItem::rect(
        "mobile_battery_s",
        "Mobile battery (small)",
        ItemCategory::Goods,
        70.0,
        140.0,
    ));
    library.add_item(LibraryItem::rect(
        "muffler_towel",
        "Muffler towel (folded)",
        ItemCategory::Goods,
        120.0,
        200.0,
    ));

    library
}
