//! Badge grid packing.
//!
//! Places identical round badges on a regular grid inside a rectangular
//! panel. Centers are panel-relative and returned in row-major order.

use crate::model::{DesignElement, Geometry, Point};

/// Largest grid the packer will lay out. Panels whose grid would exceed it
/// get no positions.
pub const MAX_BADGES: usize = 10_000;

/// Centers of every badge of diameter `diameter_mm` that fits a
/// `width_mm` x `height_mm` panel with `gap_mm` spacing.
///
/// The pitch (center-to-center) is `diameter + gap`; the first center sits
/// `radius + gap / 2` from the top-left corner. Returns an empty vector when
/// not even one badge fits, when the inputs are not usable, or when the grid
/// would hold more than [`MAX_BADGES`].
pub fn pack_badges(width_mm: f64, height_mm: f64, diameter_mm: f64, gap_mm: f64) -> Vec<Point> {
    let inputs_ok = [width_mm, height_mm, diameter_mm, gap_mm]
        .iter()
        .all(|v| v.is_finite());
    let radius = diameter_mm / 2.0;
    let pitch = diameter_mm + gap_mm;
    if !inputs_ok || radius <= 0.0 || pitch <= 0.0 {
        return Vec::new();
    }

    let start = radius + gap_mm / 2.0;
    let cols = grid_count(width_mm, gap_mm, pitch);
    let rows = grid_count(height_mm, gap_mm, pitch);

    let total = match rows.checked_mul(cols) {
        Some(total) if total <= MAX_BADGES => total,
        _ => {
            tracing::warn!(
                "Badge grid of {}x{} exceeds {} positions",
                cols,
                rows,
                MAX_BADGES
            );
            return Vec::new();
        }
    };

    let mut positions = Vec::with_capacity(total);
    for row in 0..rows {
        for col in 0..cols {
            let x = start + col as f64 * pitch;
            let y = start + row as f64 * pitch;
            let inside = x - radius >= 0.0
                && x + radius <= width_mm
                && y - radius >= 0.0
                && y + radius <= height_mm;
            if inside {
                positions.push(Point::new(x, y));
            }
        }
    }
    positions
}

fn grid_count(extent: f64, gap: f64, pitch: f64) -> usize {
    let count = ((extent - gap) / pitch).floor();
    if count >= 1.0 {
        count as usize
    } else {
        0
    }
}

/// Absolute badge centers for a badge-panel element, for drawing guides.
///
/// Returns an empty vector for any other element kind.
pub fn badge_guides(element: &DesignElement) -> Vec<Point> {
    let (Some(panel), Geometry::Rect { width, height }) = (element.badge_panel(), element.geometry)
    else {
        return Vec::new();
    };
    let origin = element.position;
    pack_badges(width, height, panel.badge_size, panel.gap)
        .into_iter()
        .map(|p| origin.offset(p.x, p.y))
        .collect()
}
