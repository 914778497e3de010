//! Design document data model.
//!
//! A [`Design`] owns an ordered list of [`DesignElement`]s. Every element has
//! an explicit [`Geometry`] tag and a kind-specific [`ElementProps`] record;
//! the props variant is the element's kind.

use serde::{Deserialize, Serialize};

mod design;
mod element;

pub use design::{Comment, Design, DesignPatch, SocialMeta, SocialPatch};
pub use element::{
    BadgePanelProps, DesignElement, ElementKind, ElementPatch, ElementProps, HardwareProps,
    HardwareType, PocketProps, PocketStyle, ShadowItemProps, WindowProps, WindowShape,
};

/// A position on the canvas, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Geometric representation of an element.
///
/// For [`Geometry::Rect`] the element position is the top-left corner; for
/// [`Geometry::Circle`] it is the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Geometry {
    Rect { width: f64, height: f64 },
    Circle { radius: f64 },
}

impl Geometry {
    pub fn rect(width: f64, height: f64) -> Self {
        Self::Rect { width, height }
    }

    pub fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Self::Circle { .. })
    }

    /// True when every dimension is finite and strictly positive.
    pub fn is_proper(&self) -> bool {
        match *self {
            Self::Rect { width, height } => {
                width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
            }
            Self::Circle { radius } => radius.is_finite() && radius > 0.0,
        }
    }
}
