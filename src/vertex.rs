use bytemuck::{Pod, Zeroable};
use glam::{vec3, Vec3};

/// Position and color interleaved in one buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct ColoredVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl ColoredVertex {
    pub const STRIDE: usize = std::mem::size_of::<ColoredVertex>();
    pub const POSITION_OFFSET: usize = 0;
    pub const COLOR_OFFSET: usize = std::mem::size_of::<Vec3>();
}

pub const RED: Vec3 = vec3(1.0, 0.0, 0.0);
pub const GREEN: Vec3 = vec3(0.0, 1.0, 0.0);
pub const BLUE: Vec3 = vec3(0.0, 0.0, 1.0);

#[rustfmt::skip]
pub const TRIANGLE: [Vec3; 3] = [
    vec3( 0.0,  0.5, 0.0), // top
    vec3( 0.5, -0.5, 0.0), // right
    vec3(-0.5, -0.5, 0.0), // left
];

pub const TRIANGLE_COLORS: [Vec3; 3] = [RED, GREEN, BLUE];

pub const COLORED_TRIANGLE: [ColoredVertex; 3] = [
    ColoredVertex {
        position: TRIANGLE[0],
        color: RED,
    },
    ColoredVertex {
        position: TRIANGLE[1],
        color: GREEN,
    },
    ColoredVertex {
        position: TRIANGLE[2],
        color: BLUE,
    },
];

#[rustfmt::skip]
pub const QUAD: [Vec3; 4] = [
    vec3(-0.5,  0.5, 0.0), // top left
    vec3( 0.5,  0.5, 0.0), // top right
    vec3( 0.5, -0.5, 0.0), // bottom right
    vec3(-0.5, -0.5, 0.0), // bottom left
];

#[rustfmt::skip]
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 2,
    0, 2, 3,
];
