//! Smoke checks for the responses.json shipped at the repository root.
//!
//! The catalog is data, not code, and gets edited by hand between
//! exhibitions. These tests catch a broken edit before deploy.
//!
//! Run with: cargo test --test responses_smoke_test

use std::path::PathBuf;

use vitrina::catalog::{ResponseCatalog, CURATOR_TEXT_LABEL, VIDEO_MENU_LABEL};

fn shipped_catalog() -> ResponseCatalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("responses.json");
    ResponseCatalog::load(&path).expect("responses.json at the repo root should parse")
}

#[test]
fn test_shipped_catalog_parses() {
    let catalog = shipped_catalog();

    assert!(!catalog.videos.is_empty(), "Catalog should ship at least one video card");
}

#[test]
fn test_shipped_main_menu_has_both_sections() {
    let catalog = shipped_catalog();

    let labels: Vec<&str> = catalog.main_menu_labels().collect();
    assert!(
        labels.contains(&CURATOR_TEXT_LABEL),
        "Main menu must carry the curator text label verbatim, got: {:?}",
        labels
    );
    assert!(
        labels.contains(&VIDEO_MENU_LABEL),
        "Main menu must carry the video menu label verbatim, got: {:?}",
        labels
    );
}

#[test]
fn test_shipped_video_buttons_all_resolve() {
    let catalog = shipped_catalog();

    for button in catalog.video_menu_buttons() {
        assert!(
            catalog.video(&button.callback_data).is_some(),
            "Button {:?} points at a missing video card {:?}",
            button.text,
            button.callback_data
        );
    }
}

#[test]
fn test_shipped_video_cards_are_complete() {
    let catalog = shipped_catalog();

    for (key, video) in &catalog.videos {
        assert!(!video.file_id.is_empty(), "Video {} has an empty file_id", key);
        assert!(!video.title.is_empty(), "Video {} has an empty title", key);
        assert!(!video.description.is_empty(), "Video {} has an empty description", key);
        assert!(!video.specs.is_empty(), "Video {} has empty specs", key);
    }
}
