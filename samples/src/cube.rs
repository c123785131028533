//! The static cube drawn by the pipeline sample, with its transform and shaders.

mod shader;

pub use self::shader::{VERT_SPV, FRAG_SPV};

use ash::vk;
use nalgebra::{Matrix4, Point3, Vector3};

use vkbase::vkuint;

use std::mem;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// homogeneous position, w is always 1.
    pub pos: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex {

    pub fn binding_descriptions() -> [vk::VertexInputBindingDescription; 1] {

        [vk::VertexInputBindingDescription {
            binding: 0,
            stride: mem::size_of::<Vertex>() as _,
            input_rate: vk::VertexInputRate::VERTEX,
        }]
    }

    pub fn attribute_descriptions() -> [vk::VertexInputAttributeDescription; 2] {

        [
            vk::VertexInputAttributeDescription {
                location: 0,
                binding: 0,
                format: vk::Format::R32G32B32A32_SFLOAT,
                offset: memoffset::offset_of!(Vertex, pos) as _,
            },
            vk::VertexInputAttributeDescription {
                location: 1,
                binding: 0,
                format: vk::Format::R32G32B32A32_SFLOAT,
                offset: memoffset::offset_of!(Vertex, color) as _,
            },
        ]
    }
}

const fn vertex(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32) -> Vertex {
    Vertex { pos: [x, y, z, 1.0], color: [r, g, b, 1.0] }
}

pub const VERTEX_COUNT: vkuint = 36;

/// Six faces of two triangles each: red, green, blue, yellow, magenta, cyan.
pub const VERTICES: [Vertex; VERTEX_COUNT as usize] = [
    // red
    vertex(-1.0, -1.0,  1.0, 1.0, 0.0, 0.0),
    vertex(-1.0,  1.0,  1.0, 1.0, 0.0, 0.0),
    vertex( 1.0, -1.0,  1.0, 1.0, 0.0, 0.0),
    vertex( 1.0, -1.0,  1.0, 1.0, 0.0, 0.0),
    vertex(-1.0,  1.0,  1.0, 1.0, 0.0, 0.0),
    vertex( 1.0,  1.0,  1.0, 1.0, 0.0, 0.0),
    // green
    vertex(-1.0, -1.0, -1.0, 0.0, 1.0, 0.0),
    vertex( 1.0, -1.0, -1.0, 0.0, 1.0, 0.0),
    vertex(-1.0,  1.0, -1.0, 0.0, 1.0, 0.0),
    vertex(-1.0,  1.0, -1.0, 0.0, 1.0, 0.0),
    vertex( 1.0, -1.0, -1.0, 0.0, 1.0, 0.0),
    vertex( 1.0,  1.0, -1.0, 0.0, 1.0, 0.0),
    // blue
    vertex(-1.0,  1.0,  1.0, 0.0, 0.0, 1.0),
    vertex(-1.0, -1.0,  1.0, 0.0, 0.0, 1.0),
    vertex(-1.0,  1.0, -1.0, 0.0, 0.0, 1.0),
    vertex(-1.0,  1.0, -1.0, 0.0, 0.0, 1.0),
    vertex(-1.0, -1.0,  1.0, 0.0, 0.0, 1.0),
    vertex(-1.0, -1.0, -1.0, 0.0, 0.0, 1.0),
    // yellow
    vertex( 1.0,  1.0,  1.0, 1.0, 1.0, 0.0),
    vertex( 1.0,  1.0, -1.0, 1.0, 1.0, 0.0),
    vertex( 1.0, -1.0,  1.0, 1.0, 1.0, 0.0),
    vertex( 1.0, -1.0,  1.0, 1.0, 1.0, 0.0),
    vertex( 1.0,  1.0, -1.0, 1.0, 1.0, 0.0),
    vertex( 1.0, -1.0, -1.0, 1.0, 1.0, 0.0),
    // magenta
    vertex( 1.0,  1.0,  1.0, 1.0, 0.0, 1.0),
    vertex(-1.0,  1.0,  1.0, 1.0, 0.0, 1.0),
    vertex( 1.0,  1.0, -1.0, 1.0, 0.0, 1.0),
    vertex( 1.0,  1.0, -1.0, 1.0, 0.0, 1.0),
    vertex(-1.0,  1.0,  1.0, 1.0, 0.0, 1.0),
    vertex(-1.0,  1.0, -1.0, 1.0, 0.0, 1.0),
    // cyan
    vertex( 1.0, -1.0,  1.0, 0.0, 1.0, 1.0),
    vertex( 1.0, -1.0, -1.0, 0.0, 1.0, 1.0),
    vertex(-1.0, -1.0,  1.0, 0.0, 1.0, 1.0),
    vertex(-1.0, -1.0,  1.0, 0.0, 1.0, 1.0),
    vertex( 1.0, -1.0, -1.0, 0.0, 1.0, 1.0),
    vertex(-1.0, -1.0, -1.0, 0.0, 1.0, 1.0),
];

/// Flip Y and remap depth from [-1, 1] to [0, 1].
pub fn clip() -> Matrix4<f32> {

    Matrix4::new(
        1.0,  0.0, 0.0, 0.0,
        0.0, -1.0, 0.0, 0.0,
        0.0,  0.0, 0.5, 0.5,
        0.0,  0.0, 0.0, 1.0,
    )
}

/// The camera sits at (-5, 3, -10) looking at the origin, with a 45 degree field of view.
pub fn mvp() -> Matrix4<f32> {

    let projection = Matrix4::new_perspective(1.0, 45.0_f32.to_radians(), 0.1, 100.0);
    let view = Matrix4::look_at_rh(
        &Point3::new(-5.0, 3.0, -10.0),
        &Point3::origin(),
        &Vector3::new(0.0, -1.0, 0.0),
    );
    let model = Matrix4::identity();

    clip() * projection * view * model
}

/// The uniform buffer content: one column-major mat4.
pub fn mvp_uniform() -> [f32; 16] {

    let mut data = [0.0; 16];
    data.copy_from_slice(mvp().as_slice());
    data
}

#[cfg(test)]
mod test {
    use super::*;

    use nalgebra::Vector4;
    use vkbase::ci::shader::SPIRV_MAGIC_NUMBER;

    #[test]
    fn vertex_layout() {

        assert_eq!(VERTICES.len(), 36);
        assert_eq!(mem::size_of::<Vertex>(), 32);

        let binding = Vertex::binding_descriptions()[0];
        assert_eq!(binding.stride, 32);

        let attributes = Vertex::attribute_descriptions();
        assert_eq!(attributes[0].offset, 0);
        assert_eq!(attributes[1].offset, 16);
        assert_eq!(attributes[1].location, 1);
    }

    #[test]
    fn every_vertex_is_homogeneous() {

        assert!(VERTICES.iter().all(|v| v.pos[3] == 1.0 && v.color[3] == 1.0));
        assert!(VERTICES.iter().flat_map(|v| v.pos[..3].iter()).all(|c| c.abs() == 1.0));

        // each face keeps one colour for its six vertices.
        for face in VERTICES.chunks(6) {
            assert!(face.iter().all(|v| v.color == face[0].color));
        }
        assert_eq!(VERTICES[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(VERTICES[35].color, [0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn clip_flips_y_and_halves_depth() {

        let point = clip() * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(point, Vector4::new(0.0, -1.0, 0.5, 1.0));
    }

    #[test]
    fn origin_projects_to_screen_center() {

        let origin = mvp() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let distance = 134.0_f32.sqrt();

        assert!((origin.w - distance).abs() < 1e-4);
        assert!(origin.x.abs() < 1e-4);
        assert!(origin.y.abs() < 1e-4);

        let depth = origin.z / origin.w;
        assert!(depth > 0.0 && depth < 1.0);
    }

    #[test]
    fn uniform_is_column_major() {

        let data = mvp_uniform();
        let matrix = mvp();
        assert_eq!(data[1], matrix[(1, 0)]);
        assert_eq!(data[4], matrix[(0, 1)]);
    }

    #[test]
    fn shaders_are_spirv() {

        assert_eq!(VERT_SPV[0], SPIRV_MAGIC_NUMBER);
        assert_eq!(FRAG_SPV[0], SPIRV_MAGIC_NUMBER);
        // the id bound of both modules.
        assert_eq!(VERT_SPV[3], 0x20);
        assert_eq!(FRAG_SPV[3], 0x0D);
    }
}
