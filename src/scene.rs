use glam::{Mat4, Vec3};
use instant::Instant;
use log::{info, warn};

use crate::animator::EdgeGrowthAnimator;
use crate::camera::Camera;
use crate::config::Config;
use crate::cuboid::LineSegment;
use crate::pointer::RotationDelta;
use crate::shapes::{Puck, Room, ANIMATION_COLOR};
use crate::wgpu::line_renderer::LineRenderer;
use crate::wgpu::line_vertex::{line_vertices, LineVertex};
use crate::wgpu::Wgpu;

pub struct Scene {
    wgpu: Wgpu,
    camera: Camera,
    line_renderer: LineRenderer,
    room: Room,
    pucks: Vec<Puck>,
    animator: EdgeGrowthAnimator,
    epoch: Instant,
    finish_reported: bool,
}

impl Scene {
    pub fn new(wgpu: Wgpu, config: &Config) -> Self {
        let (width, height) = wgpu.size();
        let camera = Camera::new(width as f32, height as f32);
        let line_renderer = wgpu.create_line_renderer();
        let epoch = Instant::now();
        Self {
            wgpu,
            camera,
            line_renderer,
            room: Room::default(),
            pucks: config.pucks.iter().copied().map(Puck::new).collect(),
            animator: EdgeGrowthAnimator::with_speed(0.0, config.speed),
            epoch,
            finish_reported: false,
        }
    }

    /// Seconds since the scene was created.
    fn now(&self) -> f32 {
        self.epoch.elapsed().as_secs_f32()
    }

    pub fn restart_animation(&mut self) {
        let speed = self.animator.clock().speed();
        self.animator = EdgeGrowthAnimator::with_speed(self.now(), speed);
        self.finish_reported = false;
        info!("Animation restarted");
    }

    pub fn reset_view(&mut self) {
        self.camera.reset_view();
    }

    pub fn rotate(&mut self, RotationDelta { yaw, pitch }: RotationDelta) {
        self.camera.add_rotation(yaw, pitch);
    }

    pub fn nudge_puck(&mut self, index: usize, offset: Vec3) {
        if let Some(puck) = self.pucks.get_mut(index) {
            puck.nudge(offset);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.wgpu.resize((width, height));
        let (width, height) = self.wgpu.size();
        self.camera.set_size(width as f32, height as f32);
    }

    pub fn redraw(&mut self) {
        self.camera.apply_pending_rotation();
        let now = self.now();
        let segments = self.animator.tick(now);
        if self.animator.is_finished() && !self.finish_reported {
            info!("Cuboid complete after {:.2}s", now - self.animator.clock().start());
            self.finish_reported = true;
        }
        let vertices = frame_vertices(&self.room, &self.pucks, &segments);
        self.wgpu.update_mvp_matrix(self.camera.scene_matrix());
        self.line_renderer.update(&self.wgpu, &vertices);

        let surface_texture = match self.wgpu.get_surface_texture() {
            Ok(surface_texture) => surface_texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.wgpu.reconfigure();
                return;
            }
            Err(error) => {
                warn!("Skipping frame: {error}");
                return;
            }
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.wgpu.create_encoder();
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                ..Default::default()
            });
            self.wgpu.set_bind_group(&mut render_pass);
            self.line_renderer.render(&mut render_pass);
        }
        self.wgpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }
}

/// Everything drawn in one frame, in world space under the camera's scene matrix.
pub fn frame_vertices(room: &Room, pucks: &[Puck], animation: &[LineSegment]) -> Vec<LineVertex> {
    let mut vertices: Vec<LineVertex> =
        line_vertices(room.edges(), Mat4::IDENTITY, room.color()).collect();
    for puck in pucks {
        vertices.extend(line_vertices(puck.edges(), puck.model_matrix(), puck.color()));
    }
    vertices.extend(line_vertices(animation, Mat4::IDENTITY, ANIMATION_COLOR));
    vertices
}
