mod common;

use crate::common::test_utils::registry_with;
use pc_diorama::{
    data_structures::texture::TextureError,
    resources::texture::{MAX_TEXTURE_SLOTS, TextureRegistry},
};

#[test]
fn slots_follow_registration_order() {
    let registry = registry_with(&["stand", "wall", "chip"]);

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.slot_of("stand"), Some(0));
    assert_eq!(registry.slot_of("wall"), Some(1));
    assert_eq!(registry.slot_of("chip"), Some(2));
    assert_eq!(registry.get(1).map(|entry| entry.tag.as_str()), Some("wall"));
}

#[test]
fn unknown_tags_are_not_found() {
    let registry = registry_with(&["stand"]);

    assert_eq!(registry.slot_of("Stand"), None);
    assert_eq!(registry.slot_of(""), None);
    assert!(registry.handle_of("wood").is_none());
}

#[test]
fn handle_of_returns_the_registered_texture() {
    let registry = registry_with(&["stand", "wall"]);

    assert_eq!(registry.handle_of("stand"), Some(&100));
    assert_eq!(registry.handle_of("wall"), Some(&101));
}

#[test]
fn duplicate_tags_are_rejected() {
    let mut registry = registry_with(&["stand"]);

    let result = registry.insert("stand", 7);

    assert!(matches!(result, Err(TextureError::DuplicateTag(tag)) if tag == "stand"));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.handle_of("stand"), Some(&100));
}

#[test]
fn seventeenth_texture_does_not_fit() {
    let mut registry = TextureRegistry::new();
    for slot in 0..MAX_TEXTURE_SLOTS {
        let tag = format!("texture{}", slot);
        assert_eq!(registry.insert(&tag, slot).ok(), Some(slot));
    }

    let result = registry.insert("one too many", 99);

    assert!(matches!(
        result,
        Err(TextureError::SlotsExhausted { limit: MAX_TEXTURE_SLOTS, .. })
    ));
    assert_eq!(registry.len(), MAX_TEXTURE_SLOTS);
    assert_eq!(registry.slot_of("one too many"), None);
}

#[test]
fn release_all_empties_the_registry() {
    let mut registry = registry_with(&["stand", "wall", "chip"]);

    assert_eq!(registry.release_all(), 3);
    assert!(registry.is_empty());
    assert_eq!(registry.slot_of("stand"), None);
    // nothing left to release
    assert_eq!(registry.release_all(), 0);
}

#[test]
fn slots_are_reused_after_release() {
    let mut registry = registry_with(&["stand", "wall"]);
    registry.release_all();

    assert_eq!(registry.insert("wall", 1).ok(), Some(0));
}

#[test]
fn iteration_yields_slot_order() {
    let registry = registry_with(&["b", "a", "c"]);

    let tags: Vec<&str> = registry.iter().map(|entry| entry.tag.as_str()).collect();

    assert_eq!(tags, vec!["b", "a", "c"]);
}
