//! Element factory.
//!
//! Builds new elements with kind-appropriate defaults, a time-derived id that
//! is unique within the target design, and the next stacking index.

use chrono::Utc;

use bagkit_core::LibraryItem;

use crate::model::{
    BadgePanelProps, Design, DesignElement, ElementKind, ElementProps, Geometry, HardwareProps,
    HardwareType, PocketProps, PocketStyle, Point, ShadowItemProps, WindowProps, WindowShape,
};

/// Where new elements land before the user moves them
pub const DEFAULT_PLACEMENT: Point = Point { x: 50.0, y: 50.0 };

const WINDOW_SIZE_MM: f64 = 150.0;
const WINDOW_CORNER_RADIUS_MM: f64 = 10.0;
const WINDOW_RADIUS_MM: f64 = 75.0;
const WINDOW_TRANSPARENCY: f64 = 0.8;
const POCKET_SIZE_MM: (f64, f64) = (120.0, 150.0);
const BADGE_PANEL_SIZE_MM: f64 = 200.0;
const BADGE_SIZE_MM: f64 = 57.0;
const BADGE_GAP_MM: f64 = 10.0;
const HARDWARE_SIZE_MM: f64 = 20.0;

/// Template for a new element, before id and stacking index are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTemplate {
    pub geometry: Geometry,
    pub props: ElementProps,
}

impl ElementTemplate {
    pub fn rect_window() -> Self {
        Self {
            geometry: Geometry::rect(WINDOW_SIZE_MM, WINDOW_SIZE_MM),
            props: ElementProps::Window(WindowProps {
                shape: WindowShape::Rectangle,
                transparency: WINDOW_TRANSPARENCY,
                corner_radius: Some(WINDOW_CORNER_RADIUS_MM),
            }),
        }
    }

    pub fn circle_window() -> Self {
        Self {
            geometry: Geometry::circle(WINDOW_RADIUS_MM),
            props: ElementProps::Window(WindowProps {
                shape: WindowShape::Circle,
                transparency: WINDOW_TRANSPARENCY,
                corner_radius: None,
            }),
        }
    }

    pub fn pocket() -> Self {
        Self {
            geometry: Geometry::rect(POCKET_SIZE_MM.0, POCKET_SIZE_MM.1),
            props: ElementProps::Pocket(PocketProps {
                style: PocketStyle::Zipper,
                depth: None,
            }),
        }
    }

    pub fn badge_panel() -> Self {
        Self {
            geometry: Geometry::rect(BADGE_PANEL_SIZE_MM, BADGE_PANEL_SIZE_MM),
            props: ElementProps::BadgePanel(BadgePanelProps {
                badge_size: BADGE_SIZE_MM,
                gap: BADGE_GAP_MM,
            }),
        }
    }

    pub fn hardware(hardware_type: HardwareType) -> Self {
        Self {
            geometry: Geometry::rect(HARDWARE_SIZE_MM, HARDWARE_SIZE_MM),
            props: ElementProps::Hardware(HardwareProps { hardware_type }),
        }
    }

    /// Reference shape for a library item, or `None` if the item has no
    /// usable footprint.
    pub fn shadow_item(item: &LibraryItem) -> Option<Self> {
        let (geometry, diameter) = match (item.diameter_mm, item.width_mm, item.height_mm) {
            (Some(d), _, _) => (Geometry::circle(d / 2.0), Some(d)),
            (None, Some(w), Some(h)) => (Geometry::rect(w, h), None),
            _ => return None,
        };
        if !geometry.is_proper() {
            return None;
        }
        Some(Self {
            geometry,
            props: ElementProps::ShadowItem(ShadowItemProps {
                item_name: item.name.clone(),
                is_circle: geometry.is_circle(),
                diameter,
            }),
        })
    }

    /// Default template for a kind. Reference items need a library item and
    /// have no default.
    pub fn for_kind(kind: ElementKind) -> Option<Self> {
        match kind {
            ElementKind::Window => Some(Self::rect_window()),
            ElementKind::Pocket => Some(Self::pocket()),
            ElementKind::BadgePanel => Some(Self::badge_panel()),
            ElementKind::Hardware => Some(Self::hardware(HardwareType::DRing)),
            ElementKind::ShadowItem => None,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }
}

/// Creates elements for a specific design
pub struct ElementFactory;

impl ElementFactory {
    /// Instantiate `template` for `design` at the default placement.
    pub fn create(design: &Design, template: ElementTemplate) -> DesignElement {
        Self::create_at(design, template, DEFAULT_PLACEMENT)
    }

    /// Instantiate `template` for `design` at `position`.
    pub fn create_at(design: &Design, template: ElementTemplate, position: Point) -> DesignElement {
        let id = Self::generate_id(design, template.kind());
        DesignElement::new(
            id,
            position,
            template.geometry,
            template.props,
            design.next_z_index(),
        )
    }

    /// `<kind>-<unix millis>`, suffixed `-2`, `-3`, … on collision.
    pub fn generate_id(design: &Design, kind: ElementKind) -> String {
        let base = format!("{}-{}", kind.as_str(), Utc::now().timestamp_millis());
        Self::unique_id(design, base)
    }

    pub(crate) fn unique_id(design: &Design, base: String) -> String {
        if !design.contains_element(&base) {
            return base;
        }
        let mut n = 2u32;
        loop {
            let candidate = format!("{base}-{n}");
            if !design.contains_element(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
