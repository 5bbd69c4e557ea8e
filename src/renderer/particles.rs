use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::pipeline_util::{depth_stencil_state, particle_instance_layout};
use crate::gpu::pipeline_helpers::{create_scene_pipeline, uniform_buffer, PipelineDesc};
use crate::gpu::render_context::RenderContext;
use crate::scene::ParticleMaterial;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct ParticleUniform {
    color: [f32; 4],
    params: [f32; 4],
}

impl ParticleUniform {
    fn from_material(material: &ParticleMaterial) -> Self {
        Self {
            color: [material.color[0], material.color[1], material.color[2], 1.0],
            params: [material.size, 0.0, 0.0, 0.0],
        }
    }
}

/// Camera-facing particle quads, one instance per point. Positions are
/// uploaded once; only the color and size change.
pub struct ParticlePass {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: Option<wgpu::Buffer>,
    instance_count: u32,
    material_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ParticlePass {
    /// Upload the particle positions and build the pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        positions: &[glam::Vec3],
        material: &ParticleMaterial,
    ) -> Self {
        let device = &context.device;
        let centers: Vec<[f32; 3]> = positions.iter().map(|p| p.to_array()).collect();
        // Zero-sized vertex buffers are invalid.
        let instance_buffer = (!centers.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Particle Instances"),
                contents: bytemuck::cast_slice(&centers),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let material_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Particle Material"),
                contents: bytemuck::bytes_of(&ParticleUniform::from_material(material)),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Particle Material Layout"),
                entries: &[uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                    false,
                )],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Particle Material Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: material_buffer.as_entire_binding(),
            }],
        });

        let shader = device
            .create_shader_module(wgpu::include_wgsl!("../shaders/particles.wgsl"));
        let pipeline = create_scene_pipeline(
            device,
            PipelineDesc {
                label: "Particles",
                shader: &shader,
                format: context.format(),
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                bind_group_layouts: &[camera_layout, &layout],
                buffers: &[particle_instance_layout()],
                depth_stencil: depth_stencil_state(false),
            },
        );

        Self {
            pipeline,
            instance_buffer,
            instance_count: centers.len() as u32,
            material_buffer,
            bind_group,
        }
    }

    /// Upload the current color and size.
    pub fn update(&self, queue: &wgpu::Queue, material: &ParticleMaterial) {
        queue.write_buffer(
            &self.material_buffer,
            0,
            bytemuck::bytes_of(&ParticleUniform::from_material(material)),
        );
    }

    /// Record the instanced draw.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        let Some(instances) = &self.instance_buffer else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, instances.slice(..));
        pass.draw(0..6, 0..self.instance_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_carries_size_and_opaque_color() {
        let uniform = ParticleUniform::from_material(&ParticleMaterial {
            color: [1.0, 0.5, 0.25],
            size: 0.03,
        });
        assert_eq!(uniform.color, [1.0, 0.5, 0.25, 1.0]);
        assert_eq!(uniform.params[0], 0.03);
        assert_eq!(size_of::<ParticleUniform>(), 32);
    }
}
