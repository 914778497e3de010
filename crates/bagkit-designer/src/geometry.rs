//! Geometry validation for manufacturability checks.
//!
//! Pure functions answering whether two elements' seam allowances collide,
//! whether an element intrudes into the bag's own seam margin, and whether a
//! reference item fits inside a container. Elements with degenerate geometry
//! have no bounds and are excluded from every check.

use serde::{Deserialize, Serialize};

use crate::model::{Design, DesignElement, Geometry};

/// Axis-aligned rectangle in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Grow outward by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }

    /// Shrink inward by `margin` on every side.
    pub fn inset(&self, margin: f64) -> Self {
        self.expand(-margin)
    }

    /// Rectangles intersect unless one lies entirely to one side of the other.
    /// Touching edges count as an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || other.right() < self.x
            || self.bottom() < other.y
            || other.bottom() < self.y)
    }

    /// True when `other` lies fully inside `self` (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Bounding rectangle of an element, or `None` when its geometry is degenerate.
pub fn element_bounds(element: &DesignElement) -> Option<Rect> {
    if !element.geometry.is_proper() {
        return None;
    }
    let p = element.position;
    match element.geometry {
        Geometry::Circle { radius } => Some(Rect::new(
            p.x - radius,
            p.y - radius,
            radius * 2.0,
            radius * 2.0,
        )),
        Geometry::Rect { width, height } => Some(Rect::new(p.x, p.y, width, height)),
    }
}

/// Whether the seam allowances of `a` and `b` would collide.
pub fn overlap(a: &DesignElement, b: &DesignElement, seam_mm: f64) -> bool {
    match (element_bounds(a), element_bounds(b)) {
        (Some(ra), Some(rb)) => ra.expand(seam_mm).intersects(&rb.expand(seam_mm)),
        _ => false,
    }
}

/// Whether `element` reaches into the seam margin or past the bag edge.
pub fn in_seam_area(element: &DesignElement, bag_width: f64, bag_height: f64, seam_mm: f64) -> bool {
    let Some(bounds) = element_bounds(element) else {
        return false;
    };
    let safe = Rect::new(0.0, 0.0, bag_width, bag_height).inset(seam_mm);
    !safe.contains_rect(&bounds)
}

/// Whether an item fits in the container without rotation.
pub fn fit_check(container: &Rect, item_width: f64, item_height: f64) -> bool {
    item_width <= container.width && item_height <= container.height
}

/// Round `value` to the nearest multiple of `grid`. Non-positive grids disable snapping.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    if !(grid.is_finite() && grid > 0.0) {
        return value;
    }
    (value / grid).round() * grid
}

/// A manufacturability warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum DesignIssue {
    /// Element reaches into the seam margin or past the bag edge
    SeamIntrusion { element_id: String },
    /// Two elements' seam allowances collide
    Overlap { first_id: String, second_id: String },
}

/// Collect manufacturability warnings for every manufactured element.
///
/// Reference items are skipped; they are not sewn into the bag.
pub fn find_issues(design: &Design) -> Vec<DesignIssue> {
    let parts: Vec<&DesignElement> = design
        .elements
        .iter()
        .filter(|e| e.kind().is_manufactured())
        .collect();

    let mut issues = Vec::new();
    for element in &parts {
        if in_seam_area(element, design.width_mm, design.height_mm, design.seam_mm) {
            issues.push(DesignIssue::SeamIntrusion {
                element_id: element.id.clone(),
            });
        }
    }
    for (i, a) in parts.iter().enumerate() {
        for b in &parts[i + 1..] {
            if overlap(a, b, design.seam_mm) {
                issues.push(DesignIssue::Overlap {
                    first_id: a.id.clone(),
                    second_id: b.id.clone(),
                });
            }
        }
    }
    issues
}
