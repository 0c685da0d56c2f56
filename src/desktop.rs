//! The desktop computer diorama: a case with five fans, motherboard, GPU, RAM and a
//! CPU cooler, standing on a wooden desk in front of a wall.
//!
//! Units are arbitrary; the desk top is the XZ plane around the origin and the case
//! spans roughly x -7..7, y 1..14, z -3..3. Draw order matters for the glass panels,
//! which are translucent and therefore come last.

use crate::data_structures::{
    light::PointLight,
    material::Material,
    mesh::Primitive::{self, Box, Cylinder, Plane, Sphere, Torus},
    scene::{DrawCommand, SceneDescription, TextureSource},
};

const BLACK_PLASTIC: &str = "blackPlastic";
const BLADE: &str = "blade";
const TUBE: [f32; 4] = [0.01, 0.01, 0.01, 1.0];
const GLASS: [f32; 4] = [0.1, 0.1, 0.1, 0.2];

/// Fan grill bars: length and rotation of each bar.
const GRILL: [(f32, f32); 5] = [(4.0, 0.0), (5.0, 36.0), (4.0, 72.0), (4.0, 108.0), (5.0, 144.0)];

pub fn textures() -> Vec<TextureSource> {
    vec![
        TextureSource::new("textures/black plastic.jpg", BLACK_PLASTIC),
        TextureSource::new("textures/wood.jpg", "stand"),
        TextureSource::new("textures/fanblade.jpg", BLADE),
        TextureSource::new("textures/wall.jpg", "wall"),
        TextureSource::new("textures/microchip.jpg", "chip"),
        TextureSource::new("textures/gpu.jpg", "gpu"),
    ]
}

pub fn materials() -> Vec<Material> {
    vec![
        Material::new("plastic", [5.0, 5.0, 5.0], [5.0, 5.0, 5.0], 30.0),
        Material::new("wood", [0.2, 0.2, 0.3], [0.0, 0.0, 0.0], 0.1),
        Material::new("middle", [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 5.0),
        Material::new("mother", [0.2, 0.2, 0.3], [0.0, 0.0, 0.0], 20.03),
        Material::new("glass", [0.2, 0.2, 0.2], [1.0, 1.0, 1.0], 95.0),
    ]
}

/// A soft key light in front of the case and one dim light per fan.
pub fn lights() -> Vec<PointLight> {
    let fan_light = |position: [f32; 3]| {
        PointLight::new(position, [0.01; 3], [0.4; 3], [0.0; 3])
    };
    vec![
        PointLight::new([-4.0, 8.0, 5.0], [0.5; 3], [0.3; 3], [0.1; 3]),
        fan_light([4.0, 11.5, -3.0]),
        fan_light([4.0, 7.25, -3.0]),
        fan_light([4.0, 3.0, -3.0]),
        fan_light([-7.0, 11.5, 0.5]),
        fan_light([-3.5, 13.0, 0.5]),
        fan_light([1.0, 13.0, 0.5]),
    ]
}

fn plastic(mesh: Primitive, scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> DrawCommand {
    DrawCommand::new(mesh, scale, rotation, position)
        .textured(BLACK_PLASTIC)
        .with_material("plastic")
}

fn blade(scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> DrawCommand {
    DrawCommand::new(Sphere, scale, rotation, position)
        .textured(BLADE)
        .with_material("plastic")
}

fn tube(mesh: Primitive, scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> DrawCommand {
    DrawCommand::new(mesh, scale, rotation, position).coloured(TUBE)
}

/// Fan in the back panel (XY plane) centred at `(x, y)`.
fn rear_fan(commands: &mut Vec<DrawCommand>, x: f32, y: f32, hub_material: &'static str) {
    let frame = [0.25, 4.0, 1.0];
    commands.extend([
        plastic(Box, frame, [0.0, 0.0, 0.0], [x + 2.0, y, -2.5]),
        plastic(Box, frame, [0.0, 0.0, 0.0], [x - 2.0, y, -2.5]),
        plastic(Box, frame, [0.0, 0.0, 90.0], [x, y - 2.0, -2.5]),
        plastic(Box, frame, [0.0, 0.0, 90.0], [x, y + 2.0, -2.5]),
        plastic(Cylinder, [0.65, 1.0, 0.65], [90.0, 0.0, 0.0], [x, y, -3.0]).with_material(hub_material),
    ]);
    for (dx, dy) in [(-2.0, 2.0), (-2.0, -2.0), (2.0, 2.0), (2.0, -2.0)] {
        commands.push(plastic(Cylinder, [0.13, 1.0, 0.13], [90.0, 0.0, 0.0], [x + dx, y + dy, -3.0]));
    }
    for (length, angle) in GRILL {
        commands.push(plastic(Box, [length, 0.1, 0.25], [0.0, 0.0, angle], [x, y, -2.15]));
    }
    let wing = [0.45, 0.75, 0.1];
    commands.extend([
        blade(wing, [0.0, 0.0, 0.0], [x, y - 1.0, -2.5]),
        blade(wing, [0.0, 0.0, -45.0], [x + 0.75, y + 0.75, -2.5]),
        blade(wing, [0.0, 0.0, 45.0], [x - 0.75, y + 0.75, -2.5]),
    ]);
}

/// Fan in the left panel (YZ plane).
fn side_fan(commands: &mut Vec<DrawCommand>) {
    let frame = [0.25, 4.0, 1.0];
    commands.extend([
        plastic(Box, frame, [0.0, 90.0, 0.0], [-6.5, 11.5, -1.5]),
        plastic(Box, frame, [0.0, 90.0, 0.0], [-6.5, 11.5, 2.5]),
        plastic(Box, frame, [90.0, 0.0, 90.0], [-6.5, 9.5, 0.5]),
        plastic(Box, frame, [90.0, 0.0, 90.0], [-6.5, 13.5, 0.5]),
        plastic(Cylinder, [0.65, 1.0, 0.65], [90.0, 90.0, 0.0], [-7.0, 11.5, 0.5]),
    ]);
    for (y, z) in [(13.5, 2.5), (9.5, 2.5), (13.5, -1.5), (9.5, -1.5)] {
        commands.push(plastic(Cylinder, [0.13, 1.0, 0.13], [90.0, 90.0, 0.0], [-7.0, y, z]));
    }
    for (length, angle) in GRILL {
        commands.push(plastic(Box, [0.25, 0.1, length], [angle, 0.0, 0.0], [-6.15, 11.5, 0.5]));
    }
    let wing = [0.1, 0.75, 0.45];
    commands.extend([
        blade(wing, [0.0, 0.0, 0.0], [-6.5, 10.5, 0.5]),
        blade(wing, [-45.0, 0.0, 0.0], [-6.5, 12.25, -0.25]),
        blade(wing, [45.0, 0.0, 0.0], [-6.5, 12.25, 1.25]),
    ]);
}

/// Fan in the top panel (XZ plane) centred at `x`. `frame_z` is the draw order of
/// the two frame bars running along X.
fn top_fan(commands: &mut Vec<DrawCommand>, x: f32, frame_z: [f32; 2]) {
    let frame = [0.25, 4.0, 1.0];
    commands.extend([
        plastic(Box, frame, [90.0, 90.0, 0.0], [x, 13.5, frame_z[0]]),
        plastic(Box, frame, [90.0, 90.0, 0.0], [x, 13.5, frame_z[1]]),
        plastic(Box, frame, [90.0, 0.0, 0.0], [x + 2.0, 13.5, 0.5]),
        plastic(Box, frame, [90.0, 0.0, 0.0], [x - 2.0, 13.5, 0.5]),
        plastic(Cylinder, [0.65, 1.0, 0.65], [0.0, 0.0, 0.0], [x, 13.0, 0.5]),
    ]);
    for (dx, z) in [(-2.0, 2.5), (2.0, 2.5), (-2.0, -1.5), (2.0, -1.5)] {
        commands.push(plastic(Cylinder, [0.13, 1.0, 0.13], [0.0, 0.0, 0.0], [x + dx, 13.0, z]));
    }
    for (length, angle) in GRILL {
        commands.push(plastic(Box, [0.1, 0.25, length], [0.0, angle, 0.0], [x, 13.15, 0.5]));
    }
    let wing = [0.75, 0.1, 0.45];
    commands.extend([
        blade(wing, [0.0, 0.0, 0.0], [x - 1.0, 13.5, 0.5]),
        blade(wing, [0.0, -45.0, 0.0], [x + 0.5, 13.5, 1.25]),
        blade(wing, [0.0, 45.0, 0.0], [x + 0.5, 13.5, -0.25]),
    ]);
}

fn case_shell(commands: &mut Vec<DrawCommand>) {
    let none = [0.0, 0.0, 0.0];
    commands.extend([
        // back, top, left side and floor
        plastic(Box, [14.0, 13.0, 0.1], none, [0.0, 7.5, -3.0]),
        plastic(Box, [14.0, 0.1, 6.0], none, [0.0, 14.0, 0.0]),
        plastic(Box, [0.1, 13.0, 6.0], none, [-7.0, 7.5, 0.0]),
        plastic(Box, [14.0, 0.1, 6.0], none, [0.0, 1.0, 0.0]),
        // feet
        plastic(Box, [1.5, 0.5, 0.1], none, [-6.0, 0.75, 2.9]),
        plastic(Box, [1.5, 0.5, 0.1], none, [6.0, 0.75, 2.9]),
        plastic(Box, [1.5, 0.5, 0.1], none, [6.0, 0.75, -2.9]),
        plastic(Box, [1.5, 0.5, 0.1], none, [-6.0, 0.75, -2.9]),
        // power supply shroud
        plastic(Box, [8.5, 3.0, 5.0], none, [-2.7, 2.5, -0.5]),
    ]);
}

fn components(commands: &mut Vec<DrawCommand>) {
    let none = [0.0, 0.0, 0.0];
    commands.extend([
        DrawCommand::new(Box, [8.0, 9.0, 0.1], none, [-2.5, 9.0, -2.8])
            .textured("chip")
            .with_material("mother"),
        DrawCommand::new(Box, [8.5, 1.5, 3.0], none, [-2.75, 6.0, -1.0])
            .textured("gpu")
            .with_material("plastic"),
        // RAM sticks and their light bars
        plastic(Box, [0.3, 4.0, 1.5], none, [-0.5, 9.0, -2.0]),
        plastic(Box, [0.3, 4.0, 1.5], none, [0.5, 9.0, -2.0]),
        DrawCommand::new(Box, [0.3, 4.0, 0.3], none, [-0.5, 9.0, -1.1]).coloured([1.0, 1.0, 1.0, 1.0]),
        DrawCommand::new(Box, [0.3, 4.0, 0.3], none, [0.5, 9.0, -1.1]).coloured([1.1, 1.1, 1.1, 1.0]),
    ]);
}

fn cpu_cooler(commands: &mut Vec<DrawCommand>) {
    let centre = [-3.0, 9.5];
    commands.extend([
        tube(Cylinder, [0.85, 2.0, 0.85], [90.0, 0.0, 0.0], [centre[0], centre[1], -2.75]),
        plastic(Cylinder, [0.4, 2.0, 0.4], [90.0, 0.0, 0.0], [centre[0], centre[1], -2.55]),
        plastic(Torus, [1.0, 1.0, 4.0], [0.0, 0.0, 0.0], [centre[0], centre[1], -1.75]),
    ]);
    for step in 0..18 {
        commands.push(
            DrawCommand::new(
                Box,
                [1.75, 0.02, 0.2],
                [0.0, 0.0, step as f32 * 10.0],
                [centre[0], centre[1], -0.75],
            )
            .textured(BLADE)
            .with_material("plastic"),
        );
    }
}

fn cooling_tubes(commands: &mut Vec<DrawCommand>) {
    let joint = [0.5, 0.5, 0.5];
    commands.extend([
        // pump to radiator
        tube(Cylinder, [0.5, 1.0, 0.5], [0.0, 0.0, 0.0], [-3.0, 7.5, -2.0]),
        tube(Cylinder, [0.5, 1.0, 0.5], [90.0, 40.0, 0.0], [-3.0, 7.5, -2.0]),
        tube(Sphere, joint, [90.0, 40.0, 0.0], [-3.0, 7.5, -2.0]),
        tube(Cylinder, [0.5, 1.75, 0.5], [90.0, 40.0, 0.0], [-2.4, 7.5, -1.3]),
        tube(Cylinder, [0.5, 2.9, 0.5], [90.0, 90.0, 0.0], [-1.4, 7.5, 0.0]),
        tube(Sphere, joint, [0.0, 0.0, 0.0], [-1.33, 7.5, 0.0]),
        // radiator back to the pump
        tube(Cylinder, [0.5, 1.0, 0.5], [0.0, 0.0, 0.0], [4.0, 13.0, 0.0]),
        tube(Cylinder, [0.5, 3.0, 0.5], [0.0, 0.0, 0.0], [4.0, 10.0, 0.0]),
        tube(Cylinder, [0.5, 1.0, 0.5], [45.0, 90.0, 0.0], [3.2, 9.25, 0.0]),
        tube(Sphere, joint, [0.0, 0.0, 0.0], [4.0, 10.0, 0.0]),
        tube(Cylinder, [0.5, 2.75, 0.5], [45.0, 90.0, 0.0], [1.45, 7.5, 0.0]),
        tube(Sphere, joint, [0.0, 0.0, 0.0], [1.45, 7.5, 0.0]),
    ]);
}

fn glass_panels(commands: &mut Vec<DrawCommand>) {
    let none = [0.0, 0.0, 0.0];
    commands.extend([
        DrawCommand::new(Box, [14.0, 13.0, 0.1], none, [0.0, 7.5, 3.0])
            .coloured(GLASS)
            .with_material("glass"),
        DrawCommand::new(Box, [0.1, 13.0, 6.0], none, [7.0, 7.5, 0.0])
            .coloured(GLASS)
            .with_material("glass"),
    ]);
}

pub fn commands() -> Vec<DrawCommand> {
    let none = [0.0, 0.0, 0.0];
    let mut commands = vec![
        DrawCommand::new(Box, [20.0, 1.0, 15.0], none, none)
            .textured("stand")
            .with_material("wood"),
        // keeps the desk material
        DrawCommand::new(Plane, [20.0, 1.0, 25.0], [90.0, 0.0, 0.0], [0.0, 0.0, -10.0]).textured("wall"),
    ];

    rear_fan(&mut commands, 4.0, 11.5, "middle");
    rear_fan(&mut commands, 4.0, 7.25, "plastic");
    rear_fan(&mut commands, 4.0, 3.0, "plastic");
    side_fan(&mut commands);
    top_fan(&mut commands, -3.5, [-1.5, 2.5]);
    top_fan(&mut commands, 1.0, [2.5, -1.5]);
    case_shell(&mut commands);
    components(&mut commands);
    cpu_cooler(&mut commands);
    cooling_tubes(&mut commands);
    glass_panels(&mut commands);
    commands
}

pub fn scene() -> SceneDescription {
    SceneDescription {
        textures: textures(),
        materials: materials(),
        lights: lights(),
        commands: commands(),
    }
}
