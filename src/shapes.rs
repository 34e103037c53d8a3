use glam::{Mat4, Vec3};

use crate::cuboid::{Cuboid, LineSegment};

pub const ANIMATION_COLOR: [f32; 4] = [0.2, 0.709803922, 0.898039216, 0.5];
pub const ROOM_COLOR: [f32; 4] = ANIMATION_COLOR;
pub const PUCK_COLOR: [f32; 4] = [1.0, 0.509803922, 0.698039216, 0.5];

/// Half-extent of a puck relative to the room.
pub const PUCK_SCALE: f32 = 0.05;

/// Half-extent of the room cube centered on the origin.
pub const ROOM_HALF_EXTENT: f32 = 1.0;

/// The unit cube everything else lives in.
#[derive(Debug, Clone)]
pub struct Room {
    edges: [LineSegment; 12],
}

impl Default for Room {
    fn default() -> Self {
        Self {
            edges: Cuboid::cube(ROOM_HALF_EXTENT).wireframe(),
        }
    }
}

impl Room {
    pub fn contains(point: Vec3) -> bool {
        point.abs().cmple(Vec3::splat(ROOM_HALF_EXTENT)).all()
    }

    pub fn clamp(point: Vec3) -> Vec3 {
        point.clamp(Vec3::splat(-ROOM_HALF_EXTENT), Vec3::splat(ROOM_HALF_EXTENT))
    }

    pub fn edges(&self) -> &[LineSegment] {
        &self.edges
    }

    pub fn color(&self) -> [f32; 4] {
        ROOM_COLOR
    }
}

/// A small marker cube that can be moved around the room.
#[derive(Debug, Clone)]
pub struct Puck {
    position: Vec3,
    edges: [LineSegment; 12],
}

impl Default for Puck {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Puck {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            edges: Cuboid::cube(PUCK_SCALE).wireframe(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Shift the puck, stopping at the room walls.
    pub fn nudge(&mut self, offset: Vec3) {
        self.position = Room::clamp(self.position + offset);
    }

    /// Edges around the puck's own origin; see [`model_matrix`](Self::model_matrix).
    pub fn edges(&self) -> &[LineSegment] {
        &self.edges
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    pub fn color(&self) -> [f32; 4] {
        PUCK_COLOR
    }
}
