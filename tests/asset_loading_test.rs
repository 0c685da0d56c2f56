mod common;

use crate::common::test_utils::{fixture_dir, png_bytes, quad_image};
use pc_diorama::resources::load_binary;

#[tokio::test]
async fn missing_file_is_an_error_naming_the_path() {
    let root = fixture_dir("missing");

    let result = load_binary(&root, "textures/wood.jpg").await;

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("wood.jpg"), "{}", message);
    assert!(message.contains(&root.display().to_string()), "{}", message);
}

#[tokio::test]
async fn files_are_read_relative_to_the_root() {
    let root = fixture_dir("relative");
    let bytes = png_bytes(&quad_image());
    std::fs::write(root.join("textures/quad.png"), &bytes).unwrap();

    let loaded = load_binary(&root, "textures/quad.png").await.unwrap();

    assert_eq!(loaded, bytes);
}
