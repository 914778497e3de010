//! Read-side queries used by renderers and exporters.

use serde::{Deserialize, Serialize};

use super::DesignerState;
use crate::badge_pack;
use crate::geometry::{self, DesignIssue};
use crate::model::{Design, Point};
use crate::pricing::{generate_bom, BomItem};

/// How the renderer should draw an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Selected,
    SeamViolation,
    Normal,
}

/// Read-only document copy plus its bill of materials, for exporters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSnapshot {
    pub design: Design,
    pub bom: Vec<BomItem>,
}

impl DesignerState {
    /// Highlight for the element with `id`. Selection wins over a seam
    /// violation.
    pub fn element_highlight(&self, id: &str) -> Option<Highlight> {
        let design = self.document.as_ref()?;
        let element = design.element(id)?;
        if self.selected_id.as_deref() == Some(id) {
            return Some(Highlight::Selected);
        }
        let violates = element.kind().is_manufactured()
            && geometry::in_seam_area(element, design.width_mm, design.height_mm, design.seam_mm);
        Some(if violates {
            Highlight::SeamViolation
        } else {
            Highlight::Normal
        })
    }

    /// Absolute badge centers for the badge panel with `id`.
    pub fn badge_guides(&self, id: &str) -> Vec<Point> {
        self.document
            .as_ref()
            .and_then(|d| d.element(id))
            .map(badge_pack::badge_guides)
            .unwrap_or_default()
    }

    /// Manufacturability warnings for the current document.
    pub fn issues(&self) -> Vec<DesignIssue> {
        self.document
            .as_ref()
            .map(geometry::find_issues)
            .unwrap_or_default()
    }

    /// Bill of materials for the current document.
    pub fn bom(&self) -> Vec<BomItem> {
        self.document
            .as_ref()
            .map(|d| generate_bom(d, self.rates()))
            .unwrap_or_default()
    }

    pub fn export_snapshot(&self) -> Option<DesignSnapshot> {
        let design = self.document.clone()?;
        let bom = generate_bom(&design, self.rates());
        Some(DesignSnapshot { design, bom })
    }
}
