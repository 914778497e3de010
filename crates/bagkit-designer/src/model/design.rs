use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bagkit_core::{BagLimits, BagType, DesignError, BAG_COLORS};

use super::DesignElement;

/// Comment left on a published design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

impl Comment {
    pub fn new(author_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: format!("comment-{}", Uuid::new_v4().simple()),
            author_name: author_name.into(),
            text: text.into(),
            created_at: Utc::now(),
            likes: 0,
        }
    }
}

/// Social metadata. Carried through untouched by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMeta {
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub views: u32,
}

/// The bag document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: String,
    pub title: String,
    pub bag_type: BagType,
    /// Fabric color as `#RRGGBB`
    pub color: String,
    pub width_mm: f64,
    pub height_mm: f64,
    /// Seam allowance inset from the outer edge
    pub seam_mm: f64,
    pub elements: Vec<DesignElement>,
    /// Derived by the price engine; only the document store writes it.
    price_jpy: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub social: SocialMeta,
}

impl Design {
    /// Creates an empty design. The price stays 0 until a store loads it.
    pub fn new(
        title: impl Into<String>,
        bag_type: BagType,
        width_mm: f64,
        height_mm: f64,
        seam_mm: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: format!("design-{}", Uuid::new_v4().simple()),
            title: title.into(),
            bag_type,
            color: BAG_COLORS[0].hex.to_string(),
            width_mm,
            height_mm,
            seam_mm,
            elements: Vec::new(),
            price_jpy: 0,
            created_at: now,
            updated_at: now,
            social: SocialMeta::default(),
        }
    }

    /// Creates an empty design sized from the archetype defaults.
    pub fn for_bag_type(bag_type: BagType, seam_mm: f64) -> Self {
        let (width, height) = bag_type.default_size_mm();
        Self::new("New design", bag_type, width, height, seam_mm)
    }

    /// Price in minor currency units as last computed by the store.
    pub fn price_jpy(&self) -> i64 {
        self.price_jpy
    }

    pub(crate) fn set_price_jpy(&mut self, price: i64) {
        self.price_jpy = price;
    }

    pub fn element(&self, id: &str) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub(crate) fn element_mut(&mut self, id: &str) -> Option<&mut DesignElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn contains_element(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    pub fn max_z_index(&self) -> Option<i32> {
        self.elements.iter().map(|e| e.z_index).max()
    }

    /// Stacking index for a newly created element.
    pub fn next_z_index(&self) -> i32 {
        self.max_z_index().map_or(0, |z| z.saturating_add(1))
    }

    /// Elements sorted bottom to top for drawing.
    pub fn elements_by_z(&self) -> Vec<&DesignElement> {
        let mut sorted: Vec<&DesignElement> = self.elements.iter().collect();
        sorted.sort_by_key(|e| e.z_index);
        sorted
    }

    /// Invariants that hold for any document regardless of configuration.
    pub fn validate_structure(&self) -> Result<(), DesignError> {
        if self.id.is_empty() {
            return Err(DesignError::invalid_design("id must not be empty"));
        }
        let dims_ok = self.width_mm.is_finite()
            && self.height_mm.is_finite()
            && self.width_mm > 0.0
            && self.height_mm > 0.0;
        if !dims_ok {
            return Err(DesignError::invalid_design(
                "width and height must be finite and positive",
            ));
        }
        if !(self.seam_mm.is_finite() && self.seam_mm > 0.0) {
            return Err(DesignError::invalid_design("seam allowance must be positive"));
        }
        if self.seam_mm * 2.0 >= self.width_mm || self.seam_mm * 2.0 >= self.height_mm {
            return Err(DesignError::invalid_design(format!(
                "seam allowance {}mm must be less than half of {}x{}mm",
                self.seam_mm, self.width_mm, self.height_mm
            )));
        }

        let mut seen = std::collections::HashSet::with_capacity(self.elements.len());
        for element in &self.elements {
            if !seen.insert(element.id.as_str()) {
                return Err(DesignError::DuplicateElementId {
                    id: element.id.clone(),
                });
            }
            element.validate()?;
        }
        Ok(())
    }

    /// Structural invariants plus the configured size range.
    pub fn validate(&self, limits: &BagLimits) -> Result<(), DesignError> {
        self.validate_structure()?;
        if !limits.width_ok(self.width_mm) {
            return Err(DesignError::invalid_design(format!(
                "width {}mm outside {}..={}mm",
                self.width_mm, limits.min_width_mm, limits.max_width_mm
            )));
        }
        if !limits.height_ok(self.height_mm) {
            return Err(DesignError::invalid_design(format!(
                "height {}mm outside {}..={}mm",
                self.height_mm, limits.min_height_mm, limits.max_height_mm
            )));
        }
        Ok(())
    }
}

/// Partial update of the document-level fields.
///
/// Elements, identity, timestamps and price are managed by the store and
/// cannot be patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignPatch {
    pub title: Option<String>,
    pub bag_type: Option<BagType>,
    pub color: Option<String>,
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub seam_mm: Option<f64>,
    pub social: Option<SocialMeta>,
}

impl DesignPatch {
    pub fn resize(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm: Some(width_mm),
            height_mm: Some(height_mm),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn apply(&self, design: &mut Design) {
        if let Some(title) = &self.title {
            design.title = title.clone();
        }
        if let Some(bag_type) = self.bag_type {
            design.bag_type = bag_type;
        }
        if let Some(color) = &self.color {
            design.color = color.clone();
        }
        if let Some(width) = self.width_mm {
            design.width_mm = width;
        }
        if let Some(height) = self.height_mm {
            design.height_mm = height;
        }
        if let Some(seam) = self.seam_mm {
            design.seam_mm = seam;
        }
        if let Some(social) = &self.social {
            design.social = social.clone();
        }
    }
}

/// Partial update of the social metadata, used by the gallery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialPatch {
    pub is_public: Option<bool>,
    pub author_name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl SocialPatch {
    pub fn apply(&self, social: &mut SocialMeta) {
        if let Some(is_public) = self.is_public {
            social.is_public = is_public;
        }
        if let Some(author) = &self.author_name {
            social.author_name = Some(author.clone());
        }
        if let Some(description) = &self.description {
            social.description = Some(description.clone());
        }
        if let Some(tags) = &self.tags {
            social.tags = tags.clone();
        }
    }
}
