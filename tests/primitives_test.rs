use cgmath::{InnerSpace, Vector3};
use pc_diorama::{
    data_structures::mesh::{Geometry, Primitive},
    resources::primitives::{
        generate, generate_box, generate_cylinder, generate_plane, generate_sphere, generate_torus,
    },
};

fn positions(geometry: &Geometry) -> Vec<Vector3<f32>> {
    geometry
        .vertices
        .iter()
        .map(|vertex| Vector3::from(vertex.position))
        .collect()
}

/// Cross product of every triangle's edges, in index order.
fn face_normals(geometry: &Geometry) -> Vec<(Vector3<f32>, Vector3<f32>)> {
    let positions = positions(geometry);
    geometry
        .indices
        .chunks(3)
        .map(|triangle| {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| positions[i as usize]);
            let vertex_normal = Vector3::from(geometry.vertices[triangle[0] as usize].normal);
            ((b - a).cross(c - a), vertex_normal)
        })
        .collect()
}

#[test]
fn every_primitive_is_a_valid_triangle_list() {
    for primitive in Primitive::ALL {
        let geometry = generate(primitive);

        assert!(!geometry.indices.is_empty(), "{} has no triangles", primitive.name());
        assert_eq!(geometry.indices.len() % 3, 0, "{}", primitive.name());
        let count = geometry.vertices.len() as u32;
        assert!(
            geometry.indices.iter().all(|index| *index < count),
            "{} indexes past its vertices",
            primitive.name()
        );
    }
}

#[test]
fn normals_are_unit_length() {
    for primitive in Primitive::ALL {
        for vertex in generate(primitive).vertices {
            let length = Vector3::from(vertex.normal).magnitude();
            assert!((length - 1.0).abs() < 1e-4, "{}: {:?}", primitive.name(), vertex);
        }
    }
}

#[test]
fn texture_coordinates_stay_in_unit_range() {
    for primitive in Primitive::ALL {
        for vertex in generate(primitive).vertices {
            let [u, v] = vertex.tex_coords;
            assert!(
                (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v),
                "{}: {:?}",
                primitive.name(),
                vertex
            );
        }
    }
}

#[test]
fn box_is_a_unit_cube() {
    let geometry = generate_box();

    assert_eq!(geometry.vertices.len(), 24);
    assert_eq!(geometry.indices.len(), 36);
    for position in positions(&geometry) {
        for coordinate in [position.x, position.y, position.z] {
            assert!((coordinate.abs() - 0.5).abs() < 1e-6);
        }
    }
}

#[test]
fn box_and_plane_faces_wind_outwards() {
    for geometry in [generate_box(), generate_plane()] {
        for (face, vertex_normal) in face_normals(&geometry) {
            assert!(face.dot(vertex_normal) > 0.0);
        }
    }
}

#[test]
fn plane_lies_flat_facing_up() {
    let geometry = generate_plane();

    assert_eq!(geometry.indices.len(), 6);
    for vertex in geometry.vertices {
        assert_eq!(vertex.position[1], 0.0);
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertex.position[0].abs(), 1.0);
        assert_eq!(vertex.position[2].abs(), 1.0);
    }
}

#[test]
fn cylinder_stands_on_the_origin() {
    let geometry = generate_cylinder(12);

    for position in positions(&geometry) {
        assert!((0.0..=1.0).contains(&position.y));
        assert!(position.x.hypot(position.z) <= 1.0 + 1e-5);
    }
    // side plus two caps
    assert_eq!(geometry.indices.len(), 12 * 6 + 2 * 12 * 3);
}

#[test]
fn cylinder_caps_wind_outwards() {
    let geometry = generate_cylinder(8);

    for (face, vertex_normal) in face_normals(&geometry) {
        if vertex_normal.y != 0.0 {
            assert!(face.dot(vertex_normal) > 0.0);
        }
    }
}

#[test]
fn sphere_vertices_lie_on_the_unit_sphere() {
    let geometry = generate_sphere(16, 8);

    assert_eq!(geometry.vertices.len(), 17 * 9);
    for position in positions(&geometry) {
        assert!((position.magnitude() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn torus_wraps_around_the_z_axis() {
    let tube_radius = 0.25;
    let geometry = generate_torus(24, 12, tube_radius);

    for position in positions(&geometry) {
        let ring_distance = position.x.hypot(position.y);
        assert!(ring_distance >= 1.0 - tube_radius - 1e-5);
        assert!(ring_distance <= 1.0 + tube_radius + 1e-5);
        assert!(position.z.abs() <= tube_radius + 1e-5);
    }
    assert_eq!(geometry.indices.len(), 24 * 12 * 6);
}
