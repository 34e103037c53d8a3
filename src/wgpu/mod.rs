use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use bytemuck::cast_slice;
use glam::Mat4;
use log::info;
use wgpu::util::DeviceExt;
use wgpu::{PipelineLayout, RenderPass, ShaderModule};
use winit::window::Window;

use crate::error::LabError;
use crate::wgpu::line_renderer::LineRenderer;
use crate::{LabEvent, Radio};

pub mod line_renderer;
pub mod line_vertex;

pub struct Wgpu {
    surface: wgpu::Surface<'static>,
    surface_configuration: wgpu::SurfaceConfiguration,
    uniform_buffer: wgpu::Buffer,
    pipeline_layout: PipelineLayout,
    shader: ShaderModule,
    pub queue: wgpu::Queue,
    pub device: wgpu::Device,
    pub uniform_bind_group: wgpu::BindGroup,
}

impl Debug for Wgpu {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "WgpuContext")
    }
}

impl Wgpu {
    pub async fn new_async(window: Arc<Window>) -> Result<Wgpu, LabError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .map_err(|error| LabError::SurfaceCreation(error.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                // Request an adapter which can render to our surface
                compatible_surface: Some(&surface),
            })
            .await
            .map_err(|error| LabError::NoAdapter(error.to_string()))?;
        info!("Using adapter {:?}", adapter.get_info().name);
        // Line lists need nothing beyond what WebGL2 offers
        let required_limits =
            wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits());
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Cuboid Lab Device"),
                required_features: wgpu::Features::empty(),
                required_limits,
                ..Default::default()
            })
            .await
            .map_err(|error| LabError::DeviceRequest(error.to_string()))?;
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_configuration = surface
            .get_default_config(&adapter, width, height)
            .ok_or(LabError::SurfaceUnsupported)?;
        surface.configure(&device, &surface_configuration);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("MVP"),
            contents: cast_slice(&[0.0f32; 16]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("Uniform Bind Group"),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            immediate_size: 0,
        });
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });
        Ok(Self {
            surface,
            surface_configuration,
            device,
            queue,
            uniform_buffer,
            uniform_bind_group,
            pipeline_layout,
            shader,
        })
    }

    pub fn create_and_send(window: Arc<Window>, radio: Radio) {
        #[cfg(target_arch = "wasm32")]
        {
            let future = Self::new_async(window);
            wasm_bindgen_futures::spawn_local(async move {
                match future.await {
                    Ok(wgpu) => LabEvent::ContextCreated(wgpu).send(&radio),
                    Err(error) => LabEvent::ContextFailed(error).send(&radio),
                }
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            match futures::executor::block_on(Self::new_async(window)) {
                Ok(wgpu) => LabEvent::ContextCreated(wgpu).send(&radio),
                Err(error) => LabEvent::ContextFailed(error).send(&radio),
            }
        }
    }

    pub fn resize(&mut self, new_size: (u32, u32)) {
        let (width, height) = new_size;
        self.surface_configuration.width = width.max(1);
        self.surface_configuration.height = height.max(1);
        self.reconfigure();
    }

    /// Reapply the current configuration, after the surface was lost or outdated.
    pub fn reconfigure(&self) {
        self.surface
            .configure(&self.device, &self.surface_configuration);
    }

    pub fn size(&self) -> (u32, u32) {
        (
            self.surface_configuration.width,
            self.surface_configuration.height,
        )
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_configuration.format
    }

    pub fn get_surface_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            })
    }

    pub fn update_mvp_matrix(&self, matrix: Mat4) {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, cast_slice(&matrix.to_cols_array()));
    }

    pub fn set_bind_group(&self, render_pass: &mut RenderPass) {
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
    }

    pub fn create_line_renderer(&self) -> LineRenderer {
        LineRenderer::new(self)
    }
}
