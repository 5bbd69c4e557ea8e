//! Toon-shaded section meshes.
//!
//! One vertex/index buffer pair per section shape, uploaded once. Model
//! matrices share a single uniform buffer, one aligned slot per mesh,
//! selected with a dynamic offset at draw time. The material uniform
//! carries the shared color and the light.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::pipeline_util::{depth_stencil_state, mesh_vertex_layout};
use crate::gpu::pipeline_helpers::{
    create_scene_pipeline, nearest_sampler, non_filtering_sampler,
    texture_2d, uniform_buffer, PipelineDesc,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::RenderTarget;
use crate::scene::{Scene, Transform};

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct MaterialUniform {
    color: [f32; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    params: [f32; 4],
}

impl MaterialUniform {
    fn from_scene(scene: &Scene) -> Self {
        let material = scene.material();
        let light = scene.light();
        let quantized = if material.gradient.is_quantized() { 1.0 } else { 0.0 };
        Self {
            color: [material.color[0], material.color[1], material.color[2], 1.0],
            light_dir: light.direction().extend(light.intensity).to_array(),
            light_color: [light.color[0], light.color[1], light.color[2], 1.0],
            params: [quantized, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
}

impl ModelUniform {
    fn from_transform(transform: &Transform) -> Self {
        let model = transform.matrix();
        let normal = model.inverse().transpose();
        Self {
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
        }
    }
}

/// Round `size` up to a multiple of `alignment`.
fn aligned_stride(size: u64, alignment: u64) -> u64 {
    size.div_ceil(alignment) * alignment
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

/// Draws every section mesh with the shared toon material.
pub struct ToonPass {
    pipeline: wgpu::RenderPipeline,
    material_buffer: wgpu::Buffer,
    material_bind_group: wgpu::BindGroup,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    model_stride: u64,
    meshes: Vec<MeshBuffers>,
    _gradient: RenderTarget,
}

impl ToonPass {
    /// Upload geometry for every mesh in `scene` and build the pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        scene: &Scene,
    ) -> Self {
        let device = &context.device;

        let meshes: Vec<MeshBuffers> = scene
            .meshes()
            .iter()
            .map(|mesh| {
                let data = mesh.shape.mesh();
                let label = format!("{:?}", mesh.shape);
                MeshBuffers {
                    vertex: device.create_buffer_init(
                        &wgpu::util::BufferInitDescriptor {
                            label: Some(&format!("{label} Vertices")),
                            contents: bytemuck::cast_slice(&data.vertices),
                            usage: wgpu::BufferUsages::VERTEX,
                        },
                    ),
                    index: device.create_buffer_init(
                        &wgpu::util::BufferInitDescriptor {
                            label: Some(&format!("{label} Indices")),
                            contents: bytemuck::cast_slice(&data.indices),
                            usage: wgpu::BufferUsages::INDEX,
                        },
                    ),
                    index_count: data.indices.len() as u32,
                }
            })
            .collect();

        let material_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Toon Material"),
                contents: bytemuck::bytes_of(&MaterialUniform::from_scene(scene)),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let gradient = RenderTarget::gradient(
            device,
            &context.queue,
            &scene.material().gradient,
        );
        let sampler = nearest_sampler(device, "Toon Gradient Sampler");

        let material_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Toon Material Layout"),
                entries: &[
                    uniform_buffer(0, wgpu::ShaderStages::FRAGMENT, false),
                    texture_2d(1),
                    non_filtering_sampler(2),
                ],
            });
        let material_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Toon Material Bind Group"),
                layout: &material_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: material_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(&gradient.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });

        let model_size = size_of::<ModelUniform>() as u64;
        let model_stride = aligned_stride(
            model_size,
            u64::from(device.limits().min_uniform_buffer_offset_alignment),
        );
        let slots = meshes.len().max(1) as u64;
        let model_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Toon Model Slots"),
            size: model_stride * slots,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let model_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Toon Model Layout"),
                entries: &[uniform_buffer(0, wgpu::ShaderStages::VERTEX, true)],
            });
        let model_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Toon Model Bind Group"),
                layout: &model_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &model_buffer,
                        offset: 0,
                        size: wgpu::BufferSize::new(model_size),
                    }),
                }],
            });

        let shader =
            device.create_shader_module(wgpu::include_wgsl!("../shaders/toon.wgsl"));
        let pipeline = create_scene_pipeline(
            device,
            PipelineDesc {
                label: "Toon",
                shader: &shader,
                format: context.format(),
                blend: Some(wgpu::BlendState::REPLACE),
                bind_group_layouts: &[camera_layout, &material_layout, &model_layout],
                buffers: &[mesh_vertex_layout()],
                depth_stencil: depth_stencil_state(true),
            },
        );

        log::debug!(
            "toon pass: {} meshes, model stride {model_stride}",
            meshes.len()
        );

        Self {
            pipeline,
            material_buffer,
            material_bind_group,
            model_buffer,
            model_bind_group,
            model_stride,
            meshes,
            _gradient: gradient,
        }
    }

    /// Upload the current material and mesh transforms.
    pub fn update(&self, queue: &wgpu::Queue, scene: &Scene) {
        queue.write_buffer(
            &self.material_buffer,
            0,
            bytemuck::bytes_of(&MaterialUniform::from_scene(scene)),
        );
        for (slot, mesh) in scene.meshes().iter().take(self.meshes.len()).enumerate() {
            queue.write_buffer(
                &self.model_buffer,
                slot as u64 * self.model_stride,
                bytemuck::bytes_of(&ModelUniform::from_transform(&mesh.transform)),
            );
        }
    }

    /// Record draws for every mesh.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.set_bind_group(1, &self.material_bind_group, &[]);
        for (slot, mesh) in self.meshes.iter().enumerate() {
            let offset = (slot as u64 * self.model_stride) as u32;
            pass.set_bind_group(2, &self.model_bind_group, &[offset]);
            pass.set_vertex_buffer(0, mesh.vertex.slice(..));
            pass.set_index_buffer(mesh.index.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
