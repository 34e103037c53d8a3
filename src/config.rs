use std::str::FromStr;

use clap::Parser;
use glam::Vec3;

use crate::animator::DEFAULT_SPEED;
use crate::error::LabError;
use crate::shapes::Room;

const DEFAULT_FRAME_STEP: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Growth speed of the cuboid edges in units per second
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f32,

    /// Puck position as x,y,z (repeat for more pucks)
    #[arg(long = "puck", value_name = "X,Y,Z")]
    pub pucks: Vec<PuckPosition>,

    /// Print the animation frame by frame instead of opening a window
    #[arg(long)]
    pub trace: bool,

    /// Seconds between frames when tracing
    #[arg(long, default_value_t = DEFAULT_FRAME_STEP)]
    pub frame_step: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuckPosition(pub Vec3);

impl FromStr for PuckPosition {
    type Err = LabError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || LabError::InvalidPuckPosition(text.to_string());
        let coordinates = text
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match coordinates[..] {
            [x, y, z] if x.is_finite() && y.is_finite() && z.is_finite() => {
                Ok(PuckPosition(Vec3::new(x, y, z)))
            }
            _ => Err(invalid()),
        }
    }
}

/// Validated settings for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub speed: f32,
    pub pucks: Vec<Vec3>,
    /// Frame step in seconds when running headless.
    pub trace: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            pucks: vec![Vec3::ZERO],
            trace: None,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = LabError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let Args {
            speed,
            pucks,
            trace,
            frame_step,
        } = args;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(LabError::InvalidSpeed(speed));
        }
        if trace && !(frame_step.is_finite() && frame_step > 0.0) {
            return Err(LabError::InvalidFrameStep(frame_step));
        }
        let pucks: Vec<Vec3> = if pucks.is_empty() {
            vec![Vec3::ZERO]
        } else {
            pucks.into_iter().map(|PuckPosition(position)| position).collect()
        };
        if let Some(&outside) = pucks.iter().find(|&&position| !Room::contains(position)) {
            return Err(LabError::PuckOutsideRoom(outside));
        }
        Ok(Self {
            speed,
            pucks,
            trace: trace.then_some(frame_step),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Result<Config, LabError> {
        let args = Args::try_parse_from(std::iter::once("cuboid-lab").chain(args.iter().copied()))
            .expect("arguments parse");
        Config::try_from(args)
    }

    #[test]
    fn parse_puck_position() {
        let position: PuckPosition = " 0.5, -1,2 ".parse().unwrap();
        assert_eq!(position, PuckPosition(Vec3::new(0.5, -1.0, 2.0)));
    }

    #[test]
    fn reject_malformed_puck_position() {
        for text in ["", "1,2", "1,2,3,4", "a,b,c", "1,,3", "inf,0,0"] {
            assert_eq!(
                text.parse::<PuckPosition>(),
                Err(LabError::InvalidPuckPosition(text.to_string())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(config(&[]).unwrap(), Config::default());
    }

    #[test]
    fn several_pucks_and_trace() {
        let config = config(&[
            "--puck", "0.5,0,0", "--puck", "0,0.5,0", "--speed", "1.5", "--trace",
        ])
        .unwrap();
        assert_eq!(config.speed, 1.5);
        assert_eq!(config.pucks, vec![Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.5, 0.0)]);
        assert_eq!(config.trace, Some(DEFAULT_FRAME_STEP));
    }

    #[test]
    fn reject_bad_speed() {
        assert_eq!(config(&["--speed", "0"]), Err(LabError::InvalidSpeed(0.0)));
        assert!(config(&["--speed=-2"]).is_err());
    }

    #[test]
    fn reject_bad_frame_step() {
        assert_eq!(
            config(&["--trace", "--frame-step", "0"]),
            Err(LabError::InvalidFrameStep(0.0))
        );
    }

    #[test]
    fn reject_puck_outside_the_room() {
        assert_eq!(
            config(&["--puck", "0,0,0", "--puck", "5,0,0"]),
            Err(LabError::PuckOutsideRoom(Vec3::new(5.0, 0.0, 0.0)))
        );
        assert!(config(&["--puck", "1,-1,1"]).is_ok());
    }
}
