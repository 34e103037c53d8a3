use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::cuboid::LineSegment;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable, Default, PartialEq)]
pub struct LineVertex {
    position: [f32; 4],
    color: [f32; 4],
}

impl LineVertex {
    pub fn position(&self) -> [f32; 4] {
        self.position
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn for_segment(segment: &LineSegment, transform: Mat4, color: [f32; 4]) -> [LineVertex; 2] {
        [segment.alpha, segment.omega].map(|point| LineVertex {
            position: transform.transform_point3(point).extend(1.0).to_array(),
            color,
        })
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0=>Float32x4, 1=>Float32x4];

    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Vertices for a line list, with every segment moved by `transform` and painted `color`.
pub fn line_vertices<'a>(
    segments: &'a [LineSegment],
    transform: Mat4,
    color: [f32; 4],
) -> impl Iterator<Item = LineVertex> + 'a {
    segments
        .iter()
        .flat_map(move |segment| LineVertex::for_segment(segment, transform, color))
}
