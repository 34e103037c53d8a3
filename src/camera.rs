use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

const EYE: Vec3 = Vec3::new(0.0, 0.0, 3.0);
const LOOK_AT: Vec3 = Vec3::new(0.0, 0.0, -1.0);
const NEAR: f32 = 1.0;
const FAR: f32 = 1000.0;

/// Fixed viewpoint looking down -Z, with the scene spun by an accumulated drag rotation.
pub struct Camera {
    pub aspect: f32,
    accumulated_rotation: Mat4,
    pending_yaw: f32,
    pending_pitch: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            aspect: width / height.max(1.0),
            accumulated_rotation: Mat4::IDENTITY,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
        }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Queue a rotation in degrees: yaw about Y, pitch about X.
    pub fn add_rotation(&mut self, yaw: f32, pitch: f32) {
        self.pending_yaw += yaw;
        self.pending_pitch += pitch;
    }

    /// Fold the queued rotation into the accumulated one. Called once per frame.
    pub fn apply_pending_rotation(&mut self) {
        let current = Mat4::from_rotation_y(self.pending_yaw.to_radians())
            * Mat4::from_rotation_x(self.pending_pitch.to_radians());
        self.accumulated_rotation = current * self.accumulated_rotation;
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
    }

    pub fn reset_view(&mut self) {
        self.accumulated_rotation = Mat4::IDENTITY;
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
    }

    pub fn accumulated_rotation(&self) -> Mat4 {
        self.accumulated_rotation
    }

    pub fn mvp_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Projection and view with the accumulated rotation applied to the world.
    pub fn scene_matrix(&self) -> Mat4 {
        self.mvp_matrix() * self.accumulated_rotation
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(EYE, LOOK_AT, Vec3::Y)
    }

    // Same volume as a frustum of -aspect..aspect by -1..1 at the near plane.
    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FRAC_PI_2, self.aspect, NEAR, FAR)
    }
}
