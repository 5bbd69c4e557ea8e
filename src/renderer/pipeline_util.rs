use crate::gpu::texture::DEPTH_FORMAT;
use crate::scene::mesh_gen::MeshVertex;

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

const PARTICLE_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];

/// Depth state for scene pipelines. Opaque meshes write depth; particles
/// only test against it.
#[must_use]
pub fn depth_stencil_state(depth_write_enabled: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Per-vertex position + normal from [`MeshVertex`].
#[must_use]
pub fn mesh_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &MESH_ATTRIBUTES,
    }
}

/// Per-instance particle center (`vec3<f32>`).
#[must_use]
pub fn particle_instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &PARTICLE_ATTRIBUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_layout_matches_vertex_size() {
        let layout = mesh_vertex_layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    #[test]
    fn particles_only_test_depth() {
        assert!(!depth_stencil_state(false).depth_write_enabled);
        assert_eq!(
            depth_stencil_state(true).depth_compare,
            wgpu::CompareFunction::Less
        );
    }
}
