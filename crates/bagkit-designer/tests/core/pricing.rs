use bagkit_core::{init_standard_library, BagType, PricingRates};
use bagkit_designer::factory::{ElementFactory, ElementTemplate};
use bagkit_designer::model::{Design, ElementKind, HardwareType};
use bagkit_designer::pricing::{calc_price, element_area, generate_bom, BomGroup};

fn add(design: &mut Design, template: ElementTemplate) {
    let element = ElementFactory::create(design, template);
    design.elements.push(element);
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_empty_tote_price() {
    let design = Design::for_bag_type(BagType::Tote, 10.0);
    assert_eq!(calc_price(&design, &PricingRates::default()), 14700);
}

#[test]
fn test_empty_shoulder_price() {
    // 3500 + 300 * 250 * 0.08
    let design = Design::for_bag_type(BagType::Shoulder, 10.0);
    assert_eq!(calc_price(&design, &PricingRates::default()), 9500);
}

#[test]
fn test_element_surcharges() {
    let rates = PricingRates::default();
    let mut design = Design::for_bag_type(BagType::Tote, 10.0);

    add(&mut design, ElementTemplate::rect_window());
    assert_eq!(calc_price(&design, &rates), 14720);

    add(&mut design, ElementTemplate::hardware(HardwareType::SnapHook));
    assert_eq!(calc_price(&design, &rates), 14840);

    let library = init_standard_library();
    let card = library.get_item("trading_card").unwrap();
    add(&mut design, ElementTemplate::shadow_item(card).unwrap());
    assert_eq!(calc_price(&design, &rates), 14840);
}

#[test]
fn test_price_rounds_to_nearest() {
    let rates = PricingRates {
        base_bag_cost: 0.0,
        material_rate_per_mm2: 0.0,
        hardware_rate_per_point: 10.5,
        complexity_factor_per_element: 0.25,
    };
    let mut design = Design::for_bag_type(BagType::Tote, 10.0);
    add(&mut design, ElementTemplate::hardware(HardwareType::DRing));
    assert_eq!(calc_price(&design, &rates), 11);

    add(&mut design, ElementTemplate::pocket());
    // 10.75
    assert_eq!(calc_price(&design, &rates), 11);
}

#[test]
fn test_element_area() {
    let mut design = Design::for_bag_type(BagType::Tote, 10.0);
    add(&mut design, ElementTemplate::pocket());
    add(&mut design, ElementTemplate::circle_window());
    assert!(approx(element_area(&design.elements[0]), 120.0 * 150.0));
    assert!(approx(
        element_area(&design.elements[1]),
        std::f64::consts::PI * 75.0 * 75.0
    ));

    design.elements[0].geometry = bagkit_designer::model::Geometry::rect(-1.0, 10.0);
    assert_eq!(element_area(&design.elements[0]), 0.0);
}

#[test]
fn test_bom_groups_and_order() {
    let rates = PricingRates::default();
    let mut design = Design::for_bag_type(BagType::Tote, 10.0);
    add(&mut design, ElementTemplate::hardware(HardwareType::DRing));
    add(&mut design, ElementTemplate::pocket());
    add(&mut design, ElementTemplate::rect_window());
    add(&mut design, ElementTemplate::pocket());
    add(&mut design, ElementTemplate::hardware(HardwareType::Button));
    let fan = init_standard_library();
    add(
        &mut design,
        ElementTemplate::shadow_item(fan.get_item("uchiwa_jumbo").unwrap()).unwrap(),
    );

    let bom = generate_bom(&design, &rates);
    let groups: Vec<BomGroup> = bom.iter().map(|line| line.group).collect();
    assert_eq!(
        groups,
        vec![
            BomGroup::Body,
            BomGroup::Element(ElementKind::Pocket),
            BomGroup::Element(ElementKind::Window),
            BomGroup::Element(ElementKind::Hardware),
        ]
    );

    let body = &bom[0];
    assert_eq!(body.count, 1);
    assert_eq!(body.total_area_mm2, Some(140000.0));
    assert!(approx(body.total_cost, 14700.0));
    assert_eq!(body.label(), "Bag body");

    let pockets = &bom[1];
    assert_eq!(pockets.count, 2);
    assert_eq!(pockets.unit_cost, None);
    assert!(approx(pockets.total_cost, 40.0));

    let hardware = &bom[3];
    assert_eq!(hardware.count, 2);
    assert_eq!(hardware.unit_cost, Some(120.0));
    assert!(approx(hardware.total_cost, 240.0));

    let total: f64 = bom.iter().map(|line| line.total_cost).sum();
    assert_eq!(total.round() as i64, calc_price(&design, &rates));
}

#[test]
fn test_bom_without_hardware_has_no_hardware_line() {
    let design = Design::for_bag_type(BagType::Shoulder, 10.0);
    let bom = generate_bom(&design, &PricingRates::default());
    assert_eq!(bom.len(), 1);
}
