use glam::Vec3;
use log::warn;

use crate::error::LabError;
use crate::wgpu::Wgpu;

pub mod animator;
pub mod application;
pub mod camera;
pub mod config;
pub mod cuboid;
pub mod error;
pub mod keyboard;
pub mod pointer;
pub mod scene;
pub mod shapes;
pub mod trace;
pub mod wgpu;

#[derive(Debug)]
pub enum LabEvent {
    ContextCreated(Wgpu),
    ContextFailed(LabError),
    RestartAnimation,
    ResetView,
    NudgePuck { index: usize, offset: Vec3 },
    Exit,
}

pub type Radio = winit::event_loop::EventLoopProxy<LabEvent>;

impl LabEvent {
    pub fn send(self, radio: &Radio) {
        if radio.send_event(self).is_err() {
            warn!("Event loop closed, event dropped");
        }
    }
}
