use serde::{Deserialize, Serialize};
use std::fmt;

use bagkit_core::DesignError;

use super::{Geometry, Point};

/// Closed set of element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Window,
    Pocket,
    BadgePanel,
    Hardware,
    /// Non-manufactured fit-check reference shape
    ShadowItem,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Window,
        ElementKind::Pocket,
        ElementKind::BadgePanel,
        ElementKind::Hardware,
        ElementKind::ShadowItem,
    ];

    /// Wire identifier, also used as the element id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Pocket => "pocket",
            Self::BadgePanel => "badge_panel",
            Self::Hardware => "hardware",
            Self::ShadowItem => "shadow_item",
        }
    }

    /// Display label for lists and the bill of materials
    pub fn label(&self) -> &'static str {
        match self {
            Self::Window => "Clear window",
            Self::Pocket => "Pocket",
            Self::BadgePanel => "Badge panel",
            Self::Hardware => "Hardware",
            Self::ShadowItem => "Reference item",
        }
    }

    /// Reference items are visual aids only and never priced.
    pub fn is_manufactured(&self) -> bool {
        !matches!(self, Self::ShadowItem)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowShape {
    Rectangle,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PocketStyle {
    Zipper,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HardwareType {
    DRing,
    SnapHook,
    Button,
}

/// Clear vinyl window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowProps {
    pub shape: WindowShape,
    /// 0 (opaque) to 1 (fully clear)
    pub transparency: f64,
    /// Rectangular windows only
    #[serde(default)]
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PocketProps {
    pub style: PocketStyle,
    /// Gusset depth, when the pocket has one
    #[serde(default)]
    pub depth: Option<f64>,
}

/// Area holding a regular grid of round badges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgePanelProps {
    /// Badge diameter (mm)
    pub badge_size: f64,
    /// Edge-to-edge spacing between badges (mm)
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProps {
    pub hardware_type: HardwareType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowItemProps {
    pub item_name: String,
    #[serde(default)]
    pub is_circle: bool,
    #[serde(default)]
    pub diameter: Option<f64>,
}

/// Kind-specific properties. The variant determines the element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementProps {
    Window(WindowProps),
    Pocket(PocketProps),
    BadgePanel(BadgePanelProps),
    Hardware(HardwareProps),
    ShadowItem(ShadowItemProps),
}

impl ElementProps {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Window(_) => ElementKind::Window,
            Self::Pocket(_) => ElementKind::Pocket,
            Self::BadgePanel(_) => ElementKind::BadgePanel,
            Self::Hardware(_) => ElementKind::Hardware,
            Self::ShadowItem(_) => ElementKind::ShadowItem,
        }
    }
}

/// One placed feature of a design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    pub id: String,
    pub position: Point,
    pub geometry: Geometry,
    pub props: ElementProps,
    /// Stacking order, higher draws on top
    pub z_index: i32,
}

impl DesignElement {
    pub fn new(
        id: impl Into<String>,
        position: Point,
        geometry: Geometry,
        props: ElementProps,
        z_index: i32,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            geometry,
            props,
            z_index,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }

    /// Badge panel properties, if this is a badge panel.
    pub fn badge_panel(&self) -> Option<&BadgePanelProps> {
        match &self.props {
            ElementProps::BadgePanel(props) => Some(props),
            _ => None,
        }
    }

    /// Check the per-element invariants.
    pub fn validate(&self) -> Result<(), DesignError> {
        let fail = |reason: &str| Err(DesignError::invalid_element(&self.id, reason));

        if self.id.is_empty() {
            return fail("id must not be empty");
        }
        if !self.position.is_finite() {
            return fail("position must be finite");
        }
        if !self.geometry.is_proper() {
            return fail("dimensions must be finite and positive");
        }

        match (&self.props, &self.geometry) {
            (ElementProps::Window(w), geometry) => {
                if (w.shape == WindowShape::Circle) != geometry.is_circle() {
                    return fail("window shape does not match its geometry");
                }
                if !(0.0..=1.0).contains(&w.transparency) {
                    return fail("window transparency must be within 0..=1");
                }
                if w.corner_radius.is_some_and(|r| !(r.is_finite() && r >= 0.0)) {
                    return fail("corner radius must be >= 0");
                }
            }
            (ElementProps::Pocket(p), _) => {
                if p.depth.is_some_and(|d| !(d.is_finite() && d >= 0.0)) {
                    return fail("pocket depth must be >= 0");
                }
            }
            (ElementProps::BadgePanel(_), Geometry::Circle { .. }) => {
                return fail("badge panels are rectangular");
            }
            (ElementProps::BadgePanel(b), Geometry::Rect { .. }) => {
                if !(b.badge_size.is_finite() && b.badge_size > 0.0) {
                    return fail("badge size must be positive");
                }
                if !(b.gap.is_finite() && b.gap >= 0.0) {
                    return fail("badge gap must be >= 0");
                }
            }
            (ElementProps::Hardware(_), Geometry::Circle { .. }) => {
                return fail("hardware is rectangular");
            }
            (ElementProps::Hardware(_), Geometry::Rect { .. }) => {}
            (ElementProps::ShadowItem(s), geometry) => {
                if s.is_circle != geometry.is_circle() {
                    return fail("reference item shape does not match its geometry");
                }
            }
        }

        Ok(())
    }
}

/// Partial update of an element. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub position: Option<Point>,
    pub geometry: Option<Geometry>,
    pub props: Option<ElementProps>,
    pub z_index: Option<i32>,
}

impl ElementPatch {
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            position: Some(Point::new(x, y)),
            ..Self::default()
        }
    }

    pub fn resize(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            ..Self::default()
        }
    }

    pub fn with_props(props: ElementProps) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.geometry.is_none()
            && self.props.is_none()
            && self.z_index.is_none()
    }

    /// Apply onto `element`. The element kind cannot change.
    pub fn apply(&self, element: &mut DesignElement) -> Result<(), DesignError> {
        if let Some(props) = &self.props {
            if props.kind() != element.kind() {
                return Err(DesignError::invalid_element(
                    &element.id,
                    format!("cannot change kind from {} to {}", element.kind(), props.kind()),
                ));
            }
        }

        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(geometry) = self.geometry {
            element.geometry = geometry;
        }
        if let Some(props) = &self.props {
            element.props = props.clone();
        }
        if let Some(z_index) = self.z_index {
            element.z_index = z_index;
        }
        Ok(())
    }
}
