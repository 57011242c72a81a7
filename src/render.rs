use crate::camera;
use crate::constants::{SPHERE_HEIGHT_SEGMENTS, SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS};
use crate::core::{surface_color, SphereVisuals};
use crate::mesh;
use web_sys as web;

pub mod canvas;
mod wireframe;

use wireframe::{create_wire_resources, WireResources, WireUniforms};

pub static WIREFRAME_WGSL: &str = include_str!("../shaders/wireframe.wgsl");

// ===================== WebGPU state for the sphere pipeline =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    wire: WireResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let vertices = mesh::wireframe_sphere(
            SPHERE_RADIUS,
            SPHERE_WIDTH_SEGMENTS,
            SPHERE_HEIGHT_SEGMENTS,
        );
        let wire = create_wire_resources(&device, format, &vertices);
        log::info!(
            "[sphere] WebGPU ready: {}x{} {:?}, {} line vertices",
            width,
            height,
            format,
            wire.vertex_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            wire,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Draw one frame of the sphere.
    pub fn render(&mut self, visuals: &SphereVisuals) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let mvp = camera::view_projection(visuals.fov_degrees, aspect)
            * camera::model(visuals.scale, visuals.rotation);
        let [r, g, b] = surface_color(visuals.color, self.config.format.is_srgb());
        let u = WireUniforms {
            mvp: mvp.to_cols_array_2d(),
            color: [r, g, b, 1.0],
        };
        self.queue
            .write_buffer(&self.wire.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sphere_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.wire.pipeline);
            rpass.set_bind_group(0, &self.wire.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.wire.vertex_buffer.slice(..));
            rpass.draw(0..self.wire.vertex_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
