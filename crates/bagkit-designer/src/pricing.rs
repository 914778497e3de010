//! Price engine and bill of materials.
//!
//! Deterministic pricing from a design and a [`PricingRates`] table. The bag
//! body costs a base fee plus fabric by area; hardware is charged per unit and
//! every other manufactured element carries a flat complexity surcharge.
//! Reference items are never priced.

use serde::{Deserialize, Serialize};

use bagkit_core::PricingRates;

use crate::model::{Design, DesignElement, ElementKind, Geometry};

/// Total price in minor currency units, rounded half away from zero.
pub fn calc_price(design: &Design, rates: &PricingRates) -> i64 {
    let mut total = body_cost(design, rates);
    for element in &design.elements {
        total += element_cost(element.kind(), rates);
    }
    total.round() as i64
}

fn body_cost(design: &Design, rates: &PricingRates) -> f64 {
    rates.base_bag_cost + design.width_mm * design.height_mm * rates.material_rate_per_mm2
}

fn element_cost(kind: ElementKind, rates: &PricingRates) -> f64 {
    match kind {
        ElementKind::ShadowItem => 0.0,
        ElementKind::Hardware => rates.hardware_rate_per_point,
        ElementKind::Window | ElementKind::Pocket | ElementKind::BadgePanel => {
            rates.complexity_factor_per_element
        }
    }
}

/// Surface area in mm²; 0 for degenerate geometry.
pub fn element_area(element: &DesignElement) -> f64 {
    if !element.geometry.is_proper() {
        return 0.0;
    }
    match element.geometry {
        Geometry::Circle { radius } => std::f64::consts::PI * radius * radius,
        Geometry::Rect { width, height } => width * height,
    }
}

/// What a bill-of-materials line refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group", content = "kind", rename_all = "snake_case")]
pub enum BomGroup {
    /// The bag body itself
    Body,
    /// All elements of one kind
    Element(ElementKind),
}

impl BomGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Body => "Bag body",
            Self::Element(kind) => kind.label(),
        }
    }
}

/// One line of the bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    pub group: BomGroup,
    pub count: u32,
    /// Fabric area, bag body only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_area_mm2: Option<f64>,
    /// Per-unit cost, reported for the body and hardware
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    pub total_cost: f64,
}

impl BomItem {
    pub fn label(&self) -> &'static str {
        self.group.label()
    }
}

/// Itemized cost breakdown.
///
/// The body line comes first, then one line per flat-rate kind in order of
/// first appearance, then hardware. Reference items are left out.
pub fn generate_bom(design: &Design, rates: &PricingRates) -> Vec<BomItem> {
    let area = design.width_mm * design.height_mm;
    let body = body_cost(design, rates);
    let mut bom = vec![BomItem {
        group: BomGroup::Body,
        count: 1,
        total_area_mm2: Some(area),
        unit_cost: Some(body),
        total_cost: body,
    }];

    let mut flat: Vec<(ElementKind, u32)> = Vec::new();
    let mut hardware = 0u32;
    for element in &design.elements {
        match element.kind() {
            ElementKind::ShadowItem => {}
            ElementKind::Hardware => hardware += 1,
            kind => match flat.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, count)) => *count += 1,
                None => flat.push((kind, 1)),
            },
        }
    }

    for (kind, count) in flat {
        bom.push(BomItem {
            group: BomGroup::Element(kind),
            count,
            total_area_mm2: None,
            unit_cost: None,
            total_cost: f64::from(count) * rates.complexity_factor_per_element,
        });
    }

    if hardware > 0 {
        bom.push(BomItem {
            group: BomGroup::Element(ElementKind::Hardware),
            count: hardware,
            total_area_mm2: None,
            unit_cost: Some(rates.hardware_rate_per_point),
            total_cost: f64::from(hardware) * rates.hardware_rate_per_point,
        });
    }

    bom
}
