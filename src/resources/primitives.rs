//! # Primitive shape generation
//!
//! Generators for the shapes scenes are built from. Every shape comes with outward
//! normals and texture coordinates in 0..1, and is sized so that scene transforms
//! read naturally:
//!
//! - box: unit cube centred at the origin (-0.5..0.5)
//! - plane: XZ plane at y = 0 spanning -1..1
//! - cylinder: radius 1, from y = 0 to y = 1, with caps
//! - sphere: radius 1 centred at the origin
//! - torus: ring of radius 1 around the Z axis with a tube radius of 0.1

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use crate::data_structures::mesh::{Geometry, Mesh, ModelVertex, Primitive};

const RADIAL_SEGMENTS: u32 = 36;
const SPHERE_STACKS: u32 = 18;
const TORUS_TUBE_SEGMENTS: u32 = 18;
const TORUS_TUBE_RADIUS: f32 = 0.1;

pub fn generate(primitive: Primitive) -> Geometry {
    match primitive {
        Primitive::Box => generate_box(),
        Primitive::Plane => generate_plane(),
        Primitive::Cylinder => generate_cylinder(RADIAL_SEGMENTS),
        Primitive::Sphere => generate_sphere(RADIAL_SEGMENTS, SPHERE_STACKS),
        Primitive::Torus => generate_torus(RADIAL_SEGMENTS, TORUS_TUBE_SEGMENTS, TORUS_TUBE_RADIUS),
    }
}

fn vertex(position: [f32; 3], tex_coords: [f32; 2], normal: [f32; 3]) -> ModelVertex {
    ModelVertex {
        position,
        tex_coords,
        normal,
    }
}

/// Push a quad given counter-clockwise corners (as seen from the front).
fn push_quad(geometry: &mut Geometry, corners: [ModelVertex; 4]) {
    let base = geometry.vertices.len() as u32;
    geometry.vertices.extend_from_slice(&corners);
    geometry
        .indices
        .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
}

pub fn generate_box() -> Geometry {
    let mut geometry = Geometry::default();
    // normal, right (u axis), up (v axis) of every face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    for (normal, right, up) in faces {
        let corner = |u: f32, v: f32| {
            let position = [
                0.5 * normal[0] + (u - 0.5) * right[0] + (v - 0.5) * up[0],
                0.5 * normal[1] + (u - 0.5) * right[1] + (v - 0.5) * up[1],
                0.5 * normal[2] + (u - 0.5) * right[2] + (v - 0.5) * up[2],
            ];
            vertex(position, [u, v], normal)
        };
        push_quad(
            &mut geometry,
            [corner(0.0, 0.0), corner(1.0, 0.0), corner(1.0, 1.0), corner(0.0, 1.0)],
        );
    }
    geometry
}

pub fn generate_plane() -> Geometry {
    let mut geometry = Geometry::default();
    let up = [0.0, 1.0, 0.0];
    push_quad(
        &mut geometry,
        [
            vertex([-1.0, 0.0, 1.0], [0.0, 0.0], up),
            vertex([1.0, 0.0, 1.0], [1.0, 0.0], up),
            vertex([1.0, 0.0, -1.0], [1.0, 1.0], up),
            vertex([-1.0, 0.0, -1.0], [0.0, 1.0], up),
        ],
    );
    geometry
}

pub fn generate_cylinder(segments: u32) -> Geometry {
    let mut geometry = Geometry::default();

    // Side: two rings with a duplicated seam so the texture wraps once.
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        let normal = [cos, 0.0, sin];
        geometry.vertices.push(vertex([cos, 0.0, sin], [u, 0.0], normal));
        geometry.vertices.push(vertex([cos, 1.0, sin], [u, 1.0], normal));
    }
    for i in 0..segments {
        let bottom = i * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        geometry
            .indices
            .extend_from_slice(&[bottom, top, next_bottom, next_bottom, top, next_top]);
    }

    // Caps: a centre vertex fanned out to its own ring.
    for (y, normal_y) in [(1.0_f32, 1.0_f32), (0.0, -1.0)] {
        let normal = [0.0, normal_y, 0.0];
        let centre = geometry.vertices.len() as u32;
        geometry.vertices.push(vertex([0.0, y, 0.0], [0.5, 0.5], normal));
        for i in 0..=segments {
            let (sin, cos) = (i as f32 / segments as f32 * TAU).sin_cos();
            geometry.vertices.push(vertex(
                [cos, y, sin],
                [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
                normal,
            ));
        }
        for i in 0..segments {
            let current = centre + 1 + i;
            let next = current + 1;
            if normal_y > 0.0 {
                geometry.indices.extend_from_slice(&[centre, next, current]);
            } else {
                geometry.indices.extend_from_slice(&[centre, current, next]);
            }
        }
    }
    geometry
}

pub fn generate_sphere(slices: u32, stacks: u32) -> Geometry {
    let mut geometry = Geometry::default();
    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let (ring_radius, y) = (v * PI).sin_cos();
        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let position = [ring_radius * cos, y, ring_radius * sin];
            geometry.vertices.push(vertex(position, [u, 1.0 - v], position));
        }
    }
    let ring = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * ring + slice;
            let b = a + ring;
            geometry
                .indices
                .extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
        }
    }
    geometry
}

pub fn generate_torus(segments: u32, tube_segments: u32, tube_radius: f32) -> Geometry {
    let mut geometry = Geometry::default();
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (ring_sin, ring_cos) = (u * TAU).sin_cos();
        for j in 0..=tube_segments {
            let v = j as f32 / tube_segments as f32;
            let (tube_sin, tube_cos) = (v * TAU).sin_cos();
            let normal = [tube_cos * ring_cos, tube_cos * ring_sin, tube_sin];
            let distance = 1.0 + tube_radius * tube_cos;
            let position = [distance * ring_cos, distance * ring_sin, tube_radius * tube_sin];
            geometry.vertices.push(vertex(position, [u, v], normal));
        }
    }
    let ring = tube_segments + 1;
    for i in 0..segments {
        for j in 0..tube_segments {
            let a = i * ring + j;
            let b = a + ring;
            geometry
                .indices
                .extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    geometry
}

/// Every primitive uploaded once, drawn any number of times.
#[derive(Debug)]
pub struct MeshLibrary {
    meshes: HashMap<Primitive, Mesh>,
}

impl MeshLibrary {
    pub fn new(device: &wgpu::Device) -> Self {
        let meshes = Primitive::ALL
            .into_iter()
            .map(|primitive| {
                let mesh = Mesh::new(device, primitive.name(), &generate(primitive));
                (primitive, mesh)
            })
            .collect();
        Self { meshes }
    }

    pub fn get(&self, primitive: Primitive) -> Option<&Mesh> {
        self.meshes.get(&primitive)
    }
}
