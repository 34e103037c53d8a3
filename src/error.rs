use std::fmt;

use glam::Vec3;

/// Things that can stop the lab from starting
#[derive(Debug, Clone, PartialEq)]
pub enum LabError {
    /// No graphics adapter can render to the window
    NoAdapter(String),
    /// The adapter refused to hand out a device
    DeviceRequest(String),
    /// The window could not be turned into a surface
    SurfaceCreation(String),
    /// The surface has no configuration this adapter supports
    SurfaceUnsupported,
    /// The window itself could not be created
    WindowCreation(String),
    /// The event loop could not be started
    EventLoop(String),
    /// A puck position was not three comma-separated numbers
    InvalidPuckPosition(String),
    /// Pucks have to start inside the room
    PuckOutsideRoom(Vec3),
    /// Speed must be positive and finite
    InvalidSpeed(f32),
    /// Trace frame step must be positive and finite
    InvalidFrameStep(f32),
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabError::NoAdapter(reason) => write!(f, "No suitable graphics adapter: {reason}"),
            LabError::DeviceRequest(reason) => write!(f, "Unable to create device: {reason}"),
            LabError::SurfaceCreation(reason) => write!(f, "Unable to create surface: {reason}"),
            LabError::SurfaceUnsupported => write!(f, "Surface not supported by adapter"),
            LabError::WindowCreation(reason) => write!(f, "Unable to create window: {reason}"),
            LabError::EventLoop(reason) => write!(f, "Event loop failed: {reason}"),
            LabError::InvalidPuckPosition(text) => {
                write!(f, "Invalid puck position {text:?}, expected x,y,z")
            }
            LabError::PuckOutsideRoom(position) => {
                write!(f, "Puck at {position} is outside the room")
            }
            LabError::InvalidSpeed(speed) => write!(f, "Invalid speed {speed}, must be positive"),
            LabError::InvalidFrameStep(step) => {
                write!(f, "Invalid frame step {step}, must be positive")
            }
        }
    }
}

impl std::error::Error for LabError {}
