use bytemuck::cast_slice;
use log::warn;
use wgpu::util::DeviceExt;

use crate::wgpu::line_vertex::LineVertex;
use crate::wgpu::Wgpu;

/// Room, pucks and the animation together stay far below this.
pub const MAX_LINE_VERTICES: usize = 4096;

/// Line-list pipeline built once, fed fresh vertices every frame.
pub struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl LineRenderer {
    pub fn new(wgpu: &Wgpu) -> Self {
        let pipeline = wgpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Line Pipeline"),
                layout: Some(&wgpu.pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &wgpu.shader,
                    entry_point: Some("line_vertex"),
                    buffers: &[LineVertex::desc()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &wgpu.shader,
                    entry_point: Some("line_fragment"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: wgpu.surface_format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    strip_index_format: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });
        let vertices = vec![LineVertex::default(); MAX_LINE_VERTICES];
        let buffer = wgpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Line Vertex Buffer"),
                contents: cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });
        Self {
            pipeline,
            buffer,
            vertex_count: 0,
        }
    }

    pub fn update(&mut self, wgpu: &Wgpu, vertices: &[LineVertex]) {
        if vertices.len() > MAX_LINE_VERTICES {
            warn!(
                "Dropping {} line vertices over capacity",
                vertices.len() - MAX_LINE_VERTICES
            );
        }
        let count = vertices.len().min(MAX_LINE_VERTICES);
        if count > 0 {
            wgpu.queue
                .write_buffer(&self.buffer, 0, cast_slice(&vertices[..count]));
        }
        self.vertex_count = count as u32;
    }

    pub fn render(&self, render_pass: &mut wgpu::RenderPass) {
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
