use tracing::{info, warn};

use bagkit::{
    decode_share_code, encode_share_code, init_logging, init_standard_library,
    session_from_config, BagType, Config, DesignerState, ElementPatch, ElementTemplate,
    HardwareType, BUILD_DATE, VERSION,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!("BagKit {} (built {})", VERSION, BUILD_DATE);

    let mut state = session_from_config(&Config::default())?;

    // A share code on the command line is loaded instead of the sample
    match std::env::args().nth(1) {
        Some(code) => match decode_share_code(&code) {
            Some(design) => state.set_document(design)?,
            None => {
                warn!("Could not read share code, nothing to show");
                return Ok(());
            }
        },
        None => build_sample(&mut state)?,
    }

    report(&state)?;
    Ok(())
}

fn build_sample(state: &mut DesignerState) -> anyhow::Result<()> {
    state.new_design(BagType::Tote)?;

    let panel = state.create_element(ElementTemplate::badge_panel())?;
    state.update_element(&panel, &ElementPatch::move_to(75.0, 12.0))?;

    let window = state.create_element(ElementTemplate::rect_window())?;
    state.update_element(&window, &ElementPatch::move_to(100.0, 235.0))?;

    let ring = state.create_element(ElementTemplate::hardware(HardwareType::DRing))?;
    state.update_element(&ring, &ElementPatch::move_to(310.0, 20.0))?;

    let library = init_standard_library();
    if let Some(card) = library.get_item("trading_card") {
        let id = state.add_library_item(card)?;
        state.update_element(&id, &ElementPatch::move_to(130.0, 260.0))?;
    }

    state.select_element(None)?;
    Ok(())
}

fn report(state: &DesignerState) -> anyhow::Result<()> {
    let Some(snapshot) = state.export_snapshot() else {
        return Ok(());
    };
    let design = &snapshot.design;

    info!(
        "{} ({}, {}x{}mm, seam {}mm): {} JPY",
        design.title,
        design.bag_type,
        design.width_mm,
        design.height_mm,
        design.seam_mm,
        design.price_jpy()
    );
    for line in &snapshot.bom {
        info!(
            "  {:<14} x{:<3} {:>8.0} JPY",
            line.label(),
            line.count,
            line.total_cost
        );
    }

    for element in design.elements_by_z() {
        let guides = state.badge_guides(&element.id);
        if !guides.is_empty() {
            info!("{} holds {} badges", element.id, guides.len());
        }
    }

    let issues = state.issues();
    if issues.is_empty() {
        info!("No manufacturability issues");
    }
    for issue in issues {
        warn!("{:?}", issue);
    }

    info!("Share code: {}", encode_share_code(design)?);
    Ok(())
}
