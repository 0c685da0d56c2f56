use cgmath::Vector3;
use pc_diorama::data_structures::material::{Material, MaterialRegistry};

#[test]
fn defined_materials_are_found_by_tag() {
    let mut registry = MaterialRegistry::new();
    registry.define("wood", [0.2, 0.2, 0.3], [0.0, 0.0, 0.0], 0.1);
    registry.define("glass", [0.2, 0.2, 0.2], [1.0, 1.0, 1.0], 95.0);

    let glass = registry.find("glass").unwrap();

    assert_eq!(glass.diffuse, Vector3::new(0.2, 0.2, 0.2));
    assert_eq!(glass.specular, Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(glass.shininess, 95.0);
    assert_eq!(registry.len(), 2);
}

#[test]
fn unknown_material_is_none() {
    let registry: MaterialRegistry = vec![Material::new("wood", [0.2; 3], [0.0; 3], 0.1)]
        .into_iter()
        .collect();

    assert!(registry.find("metal").is_none());
    assert!(registry.find("Wood").is_none());
}

#[test]
fn first_definition_of_a_tag_wins() {
    let mut registry = MaterialRegistry::new();
    registry.define("plastic", [5.0; 3], [5.0; 3], 30.0);
    registry.define("plastic", [1.0; 3], [1.0; 3], 1.0);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find("plastic").unwrap().shininess, 30.0);
}

#[test]
fn empty_registry() {
    let registry = MaterialRegistry::new();

    assert!(registry.is_empty());
    assert_eq!(registry.iter().count(), 0);
}
