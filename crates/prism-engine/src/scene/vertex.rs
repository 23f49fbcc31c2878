use bytemuck::{Pod, Zeroable};

/// Vertex with a model-space position and an RGB color.
///
/// Layout must match the vertex shader inputs:
/// `@location(0) position: vec3<f32>`, `@location(1) color: vec3<f32>`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x3  // color
    ];

    #[inline]
    pub const fn new(pos: [f32; 3], color: [f32; 3]) -> Self {
        Self { pos, color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Front face at z = 0.5, back face at z = 0; two triangles each.
pub const PRISM_VERTICES: [Vertex; 12] = [
    Vertex::new([0.5, 0.5, 0.5], RED),
    Vertex::new([-0.5, 0.5, 0.5], GREEN),
    Vertex::new([0.5, -0.5, 0.5], BLUE),
    Vertex::new([0.5, -0.5, 0.5], BLUE),
    Vertex::new([-0.5, 0.5, 0.5], GREEN),
    Vertex::new([-0.5, -0.5, 0.5], WHITE),
    Vertex::new([0.5, 0.5, 0.0], RED),
    Vertex::new([-0.5, 0.5, 0.0], GREEN),
    Vertex::new([0.5, -0.5, 0.0], BLUE),
    Vertex::new([0.5, -0.5, 0.0], BLUE),
    Vertex::new([-0.5, 0.5, 0.0], GREEN),
    Vertex::new([-0.5, -0.5, 0.0], WHITE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);

        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);

        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn prism_is_whole_triangles() {
        assert_eq!(PRISM_VERTICES.len() % 3, 0);
        let bytes: &[u8] = bytemuck::cast_slice(&PRISM_VERTICES);
        assert_eq!(bytes.len(), 12 * 24);
    }

    #[test]
    fn faces_differ_only_in_depth() {
        let (front, back) = PRISM_VERTICES.split_at(6);
        for (f, b) in front.iter().zip(back) {
            assert_eq!(f.pos[0], b.pos[0]);
            assert_eq!(f.pos[1], b.pos[1]);
            assert_eq!(f.pos[2], 0.5);
            assert_eq!(b.pos[2], 0.0);
            assert_eq!(f.color, b.color);
        }
    }
}
