mod common;

use crate::common::test_utils::{assert_mat4_near, assert_vec3_near};
use cgmath::{Matrix4, SquareMatrix, Vector3, Vector4};
use pc_diorama::data_structures::transform::{Transform, compose};

fn apply(matrix: Matrix4<f32>, point: [f32; 3]) -> Vector3<f32> {
    let p = matrix * Vector4::new(point[0], point[1], point[2], 1.0);
    p.truncate()
}

#[test]
fn default_transform_is_identity() {
    assert_mat4_near(Transform::default().to_matrix(), Matrix4::identity());
}

#[test]
fn rotation_around_z_turns_x_into_y() {
    let transform = Transform::from_arrays([1.0; 3], [0.0, 0.0, 90.0], [0.0; 3]);

    assert_vec3_near(apply(transform.to_matrix(), [1.0, 0.0, 0.0]), Vector3::new(0.0, 1.0, 0.0));
}

#[test]
fn x_rotation_is_applied_before_y() {
    // Rx(90) takes +Y to +Z, Ry(90) then takes +Z to +X
    let transform = Transform::from_arrays([1.0; 3], [90.0, 90.0, 0.0], [0.0; 3]);

    assert_vec3_near(apply(transform.to_matrix(), [0.0, 1.0, 0.0]), Vector3::new(1.0, 0.0, 0.0));
}

#[test]
fn scale_is_applied_before_rotation() {
    let transform = Transform::from_arrays([2.0, 1.0, 1.0], [0.0, 0.0, 90.0], [0.0; 3]);

    assert_vec3_near(apply(transform.to_matrix(), [1.0, 0.0, 0.0]), Vector3::new(0.0, 2.0, 0.0));
}

#[test]
fn translation_is_applied_last() {
    let transform = Transform::from_arrays([2.0, 3.0, 4.0], [0.0, 0.0, 90.0], [1.0, 2.0, 3.0]);

    assert_vec3_near(apply(transform.to_matrix(), [0.0, 0.0, 0.0]), Vector3::new(1.0, 2.0, 3.0));
    assert_vec3_near(apply(transform.to_matrix(), [0.0, 0.0, 1.0]), Vector3::new(1.0, 2.0, 7.0));
}

#[test]
fn compose_matches_to_matrix() {
    let transform = Transform::from_arrays([0.5, 1.5, 2.0], [10.0, 20.0, 30.0], [-1.0, 0.0, 4.0]);

    assert_mat4_near(
        compose(transform.scale, transform.rotation, transform.translation),
        transform.to_matrix(),
    );
}

#[test]
fn translation_only_from_vector() {
    let transform = Transform::from(Vector3::new(0.0, 7.5, -3.0));

    assert_mat4_near(
        transform.to_matrix(),
        Matrix4::from_translation(Vector3::new(0.0, 7.5, -3.0)),
    );
}
