use std::io::{Cursor, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use bagkit_core::{init_standard_library, BagType, ShareCodeError};
use bagkit_designer::designer_state::DesignerState;
use bagkit_designer::factory::ElementTemplate;
use bagkit_designer::model::{Design, ElementPatch, HardwareType, SocialPatch};
use bagkit_designer::share_code::{
    decode_share_code, encode_share_code, try_decode_share_code, DESIGN_ENTRY,
};
use bagkit_designer::Gallery;

fn busy_design() -> Design {
    let mut state = DesignerState::new();
    state.new_design(BagType::Tote).unwrap();
    state.create_element(ElementTemplate::rect_window()).unwrap();
    let circle = state.create_element(ElementTemplate::circle_window()).unwrap();
    state
        .update_element(&circle, &ElementPatch::move_to(175.3, 240.0 / 7.0))
        .unwrap();
    state.create_element(ElementTemplate::pocket()).unwrap();
    state.create_element(ElementTemplate::badge_panel()).unwrap();
    state
        .create_element(ElementTemplate::hardware(HardwareType::SnapHook))
        .unwrap();
    let library = init_standard_library();
    state
        .add_library_item(library.get_item("uchiwa_jumbo").unwrap())
        .unwrap();

    // social metadata rides along
    let mut gallery = Gallery::new();
    let design = state.document().unwrap().clone();
    let id = design.id.clone();
    gallery.save_design(design);
    gallery.update_social(
        &id,
        &SocialPatch {
            is_public: Some(true),
            author_name: Some("Mika".to_string()),
            description: None,
            tags: Some(vec!["tote".to_string(), "badges".to_string()]),
        },
    );
    gallery.add_comment(&id, "Ren", "Love the window");
    gallery.like(&id);
    gallery.find(&id).unwrap().clone()
}

fn zip_with(entry: &str, contents: &[u8]) -> String {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(entry, SimpleFileOptions::default())
        .unwrap();
    writer.write_all(contents).unwrap();
    URL_SAFE_NO_PAD.encode(writer.finish().unwrap().into_inner())
}

#[test]
fn test_round_trip_is_exact() {
    let design = busy_design();
    let code = encode_share_code(&design).unwrap();
    let decoded = decode_share_code(&code).unwrap();
    assert_eq!(decoded, design);
    assert_eq!(decoded.price_jpy(), design.price_jpy());
    assert_eq!(decoded.social.comments.len(), 1);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let design = Design::for_bag_type(BagType::Shoulder, 10.0);
    let code = format!("  {}\n", encode_share_code(&design).unwrap());
    assert_eq!(decode_share_code(&code), Some(design));
}

#[test]
fn test_garbage_yields_none() {
    assert_eq!(decode_share_code("not a valid code"), None);
    assert_eq!(decode_share_code(""), None);
    assert!(matches!(
        try_decode_share_code("not a valid code"),
        Err(ShareCodeError::Base64 { .. })
    ));
}

#[test]
fn test_truncated_code_yields_none() {
    let code = encode_share_code(&busy_design()).unwrap();
    let truncated = &code[..code.len() / 2];
    assert_eq!(decode_share_code(truncated), None);
}

#[test]
fn test_missing_entry() {
    let code = zip_with("other.json", b"{}");
    assert_eq!(
        try_decode_share_code(&code),
        Err(ShareCodeError::MissingEntry {
            entry: DESIGN_ENTRY.to_string()
        })
    );
}

#[test]
fn test_entry_that_is_not_a_design() {
    let code = zip_with(DESIGN_ENTRY, b"{\"title\": \"nope\"}");
    assert!(matches!(
        try_decode_share_code(&code),
        Err(ShareCodeError::Json { .. })
    ));
}

#[test]
fn test_structurally_invalid_design_is_rejected() {
    let mut design = Design::for_bag_type(BagType::Tote, 10.0);
    design.seam_mm = 0.0;
    let code = encode_share_code(&design).unwrap();
    assert!(matches!(
        try_decode_share_code(&code),
        Err(ShareCodeError::Invalid(_))
    ));
    assert_eq!(decode_share_code(&code), None);
}
