//! wgpu implementation of [`Renderer`].
//!
//! One render pass per frame into the swapchain: clear to transparent,
//! toon meshes with depth write, then particles depth-tested against them.

use wgpu::util::DeviceExt;

use super::particles::ParticlePass;
use super::toon::ToonPass;
use super::{Renderer, SurfaceSize};
use crate::camera::{CameraUniform, CameraView};
use crate::gpu::pipeline_helpers::uniform_buffer;
use crate::gpu::render_context::{RenderContext, RenderContextError};
use crate::gpu::texture::RenderTarget;
use crate::scene::Scene;

/// Draws a [`Scene`] into a window surface.
pub struct GpuRenderer {
    context: RenderContext,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    depth: RenderTarget,
    toon: ToonPass,
    particles: ParticlePass,
}

impl GpuRenderer {
    /// Create the device for `window`, upload the scene geometry, and
    /// build both pipelines.
    ///
    /// # Errors
    ///
    /// Returns [`RenderContextError`] if no adapter, device, or compatible
    /// surface configuration is available.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        scene: &Scene,
        size: SurfaceSize,
    ) -> Result<Self, RenderContextError> {
        let context = RenderContext::new(window, size.physical()).await?;
        let device = &context.device;

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::bytes_of(&camera_uniform),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Layout"),
                entries: &[uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                    false,
                )],
            });
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let (width, height) = context.size();
        let depth = RenderTarget::depth(device, width, height);
        let toon = ToonPass::new(&context, &camera_layout, scene);
        let particles = ParticlePass::new(
            &context,
            &camera_layout,
            &scene.particles().positions,
            &scene.particles().material,
        );

        Ok(Self {
            context,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            depth,
            toon,
            particles,
        })
    }

    /// Reapply the surface configuration after it went `Lost` or
    /// `Outdated`.
    pub fn reconfigure(&self) {
        log::debug!("reconfiguring surface");
        self.context.reconfigure();
    }

    /// The underlying GPU context.
    #[must_use]
    pub fn context(&self) -> &RenderContext {
        &self.context
    }
}

impl Renderer for GpuRenderer {
    type Error = wgpu::SurfaceError;

    fn resize(&mut self, size: SurfaceSize) {
        let (width, height) = size.physical();
        if self.context.resize(width, height) {
            self.depth = RenderTarget::depth(&self.context.device, width, height);
        }
    }

    fn render(
        &mut self,
        scene: &Scene,
        camera: &CameraView,
    ) -> Result<(), Self::Error> {
        self.camera_uniform.update(camera);
        self.context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&self.camera_uniform),
        );
        self.toon.update(&self.context.queue, scene);
        self.particles
            .update(&self.context.queue, &scene.particles().material);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(
                                    wgpu::Color::TRANSPARENT,
                                ),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });
            self.toon.draw(&mut pass, &self.camera_bind_group);
            self.particles.draw(&mut pass, &self.camera_bind_group);
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}
