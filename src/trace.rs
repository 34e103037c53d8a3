use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::animator::{EdgeGrowthAnimator, Phase};

/// Play the animation against a synthetic clock, printing every frame until it is finished.
/// Returns the number of frames printed.
pub fn run_trace(speed: f32, frame_step: f32, out: &mut impl Write) -> io::Result<usize> {
    let mut animator = EdgeGrowthAnimator::with_speed(0.0, speed);
    let mut frame = 0;
    loop {
        let now = frame as f32 * frame_step;
        let segments = animator.tick(now);
        frame += 1;
        write!(out, "{now:.3}s")?;
        for phase in Phase::iter() {
            let fraction = animator.phase_state(phase).fraction();
            write!(out, " {phase}={fraction:.3}")?;
        }
        writeln!(out, " segments={}", segments.len())?;
        for segment in &segments {
            writeln!(out, "  {segment}")?;
        }
        if animator.is_finished() {
            return Ok(frame);
        }
    }
}
