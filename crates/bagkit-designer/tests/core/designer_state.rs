use bagkit_core::{init_standard_library, BagType, DesignError};
use bagkit_designer::designer_state::{DesignerState, Highlight};
use bagkit_designer::factory::{ElementFactory, ElementTemplate};
use bagkit_designer::geometry::DesignIssue;
use bagkit_designer::model::{
    Design, DesignPatch, ElementPatch, Geometry, HardwareType, Point,
};
use bagkit_settings::Config;

fn tote_state() -> DesignerState {
    let mut state = DesignerState::new();
    state.new_design(BagType::Tote).unwrap();
    state
}

fn document(state: &DesignerState) -> &Design {
    state.document().unwrap()
}

#[test]
fn test_designer_state_new() {
    let state = DesignerState::new();
    assert!(!state.is_loaded());
    assert_eq!(state.price_jpy(), None);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.zoom(), 1.0);
}

#[test]
fn test_edits_without_document_are_refused() {
    let mut state = DesignerState::new();
    assert_eq!(
        state.create_element(ElementTemplate::pocket()),
        Err(DesignError::NoDocument)
    );
    assert_eq!(
        state.update_document(&DesignPatch::title("x")),
        Err(DesignError::NoDocument)
    );
    assert_eq!(state.remove_element("a"), Err(DesignError::NoDocument));
    assert_eq!(state.duplicate_element("a"), Err(DesignError::NoDocument));
    assert!(!state.undo());
    assert!(!state.redo());
    assert!(!state.is_loaded());
}

#[test]
fn test_new_design_is_priced_and_clean() {
    let state = tote_state();
    let design = document(&state);
    assert_eq!((design.width_mm, design.height_mm), (350.0, 400.0));
    assert_eq!(design.seam_mm, 10.0);
    assert_eq!(design.price_jpy(), 14700);
    assert!(!state.can_undo());
    assert!(state.issues().is_empty());
}

#[test]
fn test_set_document_reprices_and_clears_history() {
    let mut state = tote_state();
    state.create_element(ElementTemplate::pocket()).unwrap();
    assert!(state.can_undo());

    let mut loaded = Design::for_bag_type(BagType::Shoulder, 10.0);
    let window = ElementFactory::create(&loaded, ElementTemplate::rect_window());
    loaded.elements.push(window);
    assert_eq!(loaded.price_jpy(), 0);

    state.set_document(loaded).unwrap();
    assert_eq!(state.price_jpy(), Some(9520));
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.selected_id(), None);
}

#[test]
fn test_set_document_rejects_out_of_range_size() {
    let mut state = tote_state();
    let before = document(&state).clone();
    let mut huge = Design::for_bag_type(BagType::Tote, 10.0);
    huge.width_mm = 900.0;
    assert!(matches!(
        state.set_document(huge),
        Err(DesignError::InvalidDesign { .. })
    ));
    assert_eq!(document(&state), &before);
}

#[test]
fn test_add_element_records_history_and_reprices() {
    let mut state = tote_state();
    let created_at = document(&state).created_at;

    let id = state.create_element(ElementTemplate::rect_window()).unwrap();
    assert_eq!(state.price_jpy(), Some(14720));
    assert_eq!(state.selected_id(), Some(id.as_str()));
    assert_eq!(state.undo_count(), 1);
    assert!(!state.can_redo());

    let design = document(&state);
    assert_eq!(design.created_at, created_at);
    assert!(design.updated_at >= created_at);
}

#[test]
fn test_add_duplicate_id_is_refused() {
    let mut state = tote_state();
    let id = state.create_element(ElementTemplate::pocket()).unwrap();
    let copy = document(&state).element(&id).unwrap().clone();
    assert_eq!(
        state.add_element(copy),
        Err(DesignError::DuplicateElementId { id })
    );
    assert_eq!(state.undo_count(), 1);
}

#[test]
fn test_invalid_element_is_refused() {
    let mut state = tote_state();
    let id = state
        .create_element(ElementTemplate::hardware(HardwareType::DRing))
        .unwrap();
    let before = document(&state).clone();

    let result = state.update_element(&id, &ElementPatch::resize(Geometry::circle(5.0)));
    assert!(matches!(result, Err(DesignError::InvalidElement { .. })));
    assert_eq!(document(&state), &before);
    assert_eq!(state.undo_count(), 1);
}

#[test]
fn test_update_unknown_element_is_noop() {
    let mut state = tote_state();
    state.create_element(ElementTemplate::pocket()).unwrap();
    let before = document(&state).clone();

    let result = state.update_element("missing", &ElementPatch::move_to(1.0, 1.0));
    assert!(result.as_ref().is_err_and(DesignError::is_referential));
    assert_eq!(document(&state), &before);
    assert_eq!(state.undo_count(), 1);
    assert_eq!(state.remove_element("missing"), Err(DesignError::ElementNotFound {
        id: "missing".to_string()
    }));
}

#[test]
fn test_update_element_moves_it() {
    let mut state = tote_state();
    let id = state.create_element(ElementTemplate::pocket()).unwrap();
    state
        .update_element(&id, &ElementPatch::move_to(100.0, 120.0))
        .unwrap();
    let element = document(&state).element(&id).unwrap();
    assert_eq!(element.position, Point::new(100.0, 120.0));
    assert_eq!(state.undo_count(), 2);
    assert_eq!(state.price_jpy(), Some(14720));
}

#[test]
fn test_remove_clears_selection_and_reprices() {
    let mut state = tote_state();
    let id = state
        .create_element(ElementTemplate::hardware(HardwareType::Button))
        .unwrap();
    assert_eq!(state.price_jpy(), Some(14820));

    state.remove_element(&id).unwrap();
    assert_eq!(state.selected_id(), None);
    assert_eq!(state.price_jpy(), Some(14700));
    assert!(document(&state).elements.is_empty());
}

#[test]
fn test_duplicate_element() {
    let mut state = tote_state();
    let id = state.create_element(ElementTemplate::pocket()).unwrap();
    let copy_id = state.duplicate_element(&id).unwrap();

    assert_ne!(copy_id, id);
    let design = document(&state);
    let original = design.element(&id).unwrap();
    let copy = design.element(&copy_id).unwrap();
    assert_eq!(copy.position, original.position.offset(20.0, 20.0));
    assert_eq!(copy.geometry, original.geometry);
    assert_eq!(copy.props, original.props);
    assert_eq!(copy.z_index, 1);
    assert_eq!(state.selected_id(), Some(copy_id.as_str()));
    assert_eq!(state.price_jpy(), Some(14740));
    assert_eq!(state.undo_count(), 2);

    assert!(state.duplicate_element("missing").is_err());
    assert_eq!(state.undo_count(), 2);
}

#[test]
fn test_update_document_patch() {
    let mut state = tote_state();
    state.update_document(&DesignPatch::resize(400.0, 500.0)).unwrap();
    // 3500 + 400 * 500 * 0.08
    assert_eq!(state.price_jpy(), Some(19500));

    let mut patch = DesignPatch::title("Live bag");
    patch.color = Some("#000080".to_string());
    state.update_document(&patch).unwrap();
    assert_eq!(document(&state).title, "Live bag");
    assert_eq!(state.undo_count(), 2);
}

#[test]
fn test_update_document_rejects_bad_values() {
    let mut state = tote_state();
    let before = document(&state).clone();

    assert!(state.update_document(&DesignPatch::resize(100.0, 400.0)).is_err());
    let seam = DesignPatch {
        seam_mm: Some(0.0),
        ..DesignPatch::default()
    };
    assert!(state.update_document(&seam).is_err());

    assert_eq!(document(&state), &before);
    assert!(!state.can_undo());
}

#[test]
fn test_undo_redo_restore_snapshots_with_their_price() {
    let mut state = tote_state();
    state.create_element(ElementTemplate::rect_window()).unwrap();
    state
        .create_element(ElementTemplate::hardware(HardwareType::DRing))
        .unwrap();
    let full = document(&state).clone();
    assert_eq!(full.price_jpy(), 14840);

    assert!(state.undo());
    assert_eq!(state.price_jpy(), Some(14720));
    assert!(state.undo());
    assert_eq!(state.price_jpy(), Some(14700));
    assert!(!state.undo());

    assert!(state.redo());
    assert!(state.redo());
    assert!(!state.redo());
    assert_eq!(document(&state), &full);
}

#[test]
fn test_new_edit_after_undo_clears_redo() {
    let mut state = tote_state();
    state.create_element(ElementTemplate::pocket()).unwrap();
    state.create_element(ElementTemplate::pocket()).unwrap();
    state.undo();
    assert!(state.can_redo());

    state.create_element(ElementTemplate::badge_panel()).unwrap();
    assert!(!state.can_redo());
    let before = document(&state).clone();
    assert!(!state.redo());
    assert_eq!(document(&state), &before);
}

#[test]
fn test_undo_drops_stale_selection() {
    let mut state = tote_state();
    let id = state.create_element(ElementTemplate::pocket()).unwrap();
    assert_eq!(state.selected_id(), Some(id.as_str()));
    state.undo();
    assert_eq!(state.selected_id(), None);
}

#[test]
fn test_history_eviction() {
    let mut state = tote_state();
    for _ in 0..12 {
        state
            .create_element(ElementTemplate::hardware(HardwareType::DRing))
            .unwrap();
    }
    assert_eq!(state.undo_count(), 10);

    while state.undo() {}
    assert_eq!(document(&state).elements.len(), 2);
    assert_eq!(state.redo_count(), 10);
}

#[test]
fn test_configured_undo_limit() {
    let mut config = Config::default();
    config.editor.undo_limit = 2;
    let mut state = DesignerState::with_config(config);
    state.new_design(BagType::Shoulder).unwrap();
    for _ in 0..4 {
        state.create_element(ElementTemplate::pocket()).unwrap();
    }
    assert_eq!(state.undo_count(), 2);
}

#[test]
fn test_select_element() {
    let mut state = tote_state();
    let id = state.create_element(ElementTemplate::pocket()).unwrap();
    state.select_element(None).unwrap();
    assert_eq!(state.selected_element(), None);

    state.select_element(Some(&id)).unwrap();
    assert_eq!(state.selected_element().map(|e| e.id.as_str()), Some(id.as_str()));
    assert!(state.select_element(Some("missing")).is_err());
    assert_eq!(state.selected_id(), Some(id.as_str()));
    // selection is not an edit
    assert_eq!(state.undo_count(), 1);
}

#[test]
fn test_element_highlight() {
    let mut state = tote_state();
    let id = state.create_element(ElementTemplate::pocket()).unwrap();
    assert_eq!(state.element_highlight(&id), Some(Highlight::Selected));

    state.select_element(None).unwrap();
    assert_eq!(state.element_highlight(&id), Some(Highlight::Normal));

    state
        .update_element(&id, &ElementPatch::move_to(0.0, 0.0))
        .unwrap();
    assert_eq!(state.element_highlight(&id), Some(Highlight::SeamViolation));
    assert_eq!(state.element_highlight("missing"), None);
}

#[test]
fn test_badge_guides_and_issues() {
    let mut state = tote_state();
    let panel = state.create_element(ElementTemplate::badge_panel()).unwrap();
    let guides = state.badge_guides(&panel);
    assert_eq!(guides.len(), 4);
    assert_eq!(guides[0], Point::new(83.5, 83.5));

    let pocket = state.create_element(ElementTemplate::pocket()).unwrap();
    assert_eq!(state.badge_guides(&pocket), Vec::new());
    assert_eq!(
        state.issues(),
        vec![DesignIssue::Overlap {
            first_id: panel,
            second_id: pocket,
        }]
    );
}

#[test]
fn test_reference_items_are_free_and_unchecked() {
    let mut state = tote_state();
    let library = init_standard_library();
    let fan = library.get_item("uchiwa_jumbo").unwrap();
    let id = state.add_library_item(fan).unwrap();
    assert_eq!(state.price_jpy(), Some(14700));

    state
        .update_element(&id, &ElementPatch::move_to(0.0, 0.0))
        .unwrap();
    assert_eq!(state.element_highlight(&id), Some(Highlight::Selected));
    state.select_element(None).unwrap();
    assert_eq!(state.element_highlight(&id), Some(Highlight::Normal));
    assert!(state.issues().is_empty());
}

#[test]
fn test_export_snapshot() {
    let mut state = DesignerState::new();
    assert!(state.export_snapshot().is_none());

    state.new_design(BagType::Tote).unwrap();
    state
        .create_element(ElementTemplate::hardware(HardwareType::SnapHook))
        .unwrap();
    let snapshot = state.export_snapshot().unwrap();
    assert_eq!(&snapshot.design, document(&state));
    assert_eq!(snapshot.bom.len(), 2);
    assert_eq!(snapshot.bom, state.bom());
}

#[test]
fn test_zoom_is_clamped() {
    let mut state = DesignerState::new();
    assert_eq!(state.set_zoom(10.0), 3.0);
    assert_eq!(state.set_zoom(0.01), 0.25);
    assert_eq!(state.reset_zoom(), 1.0);
    assert!(state.zoom_in() > 1.0);
    state.reset_zoom();
    assert!(state.zoom_out() < 1.0);
}

#[test]
fn test_grid_and_snap() {
    let mut state = DesignerState::new();
    assert!(state.show_grid);
    state.toggle_grid();
    assert!(!state.show_grid);
    assert_eq!(state.snap(52.4), 50.0);
    assert_eq!(state.snap(57.6), 60.0);
}

#[test]
fn test_close_document() {
    let mut state = tote_state();
    state.create_element(ElementTemplate::pocket()).unwrap();
    let closed = state.close_document().unwrap();
    assert_eq!(closed.elements.len(), 1);
    assert!(!state.is_loaded());
    assert!(!state.can_undo());
}
