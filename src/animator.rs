use glam::Vec3;
use log::debug;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::cuboid::{Corner, Cuboid, LineSegment};

/// Distance units per second.
pub const DEFAULT_SPEED: f32 = 3.0;

const PHASE_COUNT: usize = 3;

/// The three stages of drawing the cuboid, each unlocked when the previous one finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Phase {
    /// Bottom and top rails of the left face.
    Rails,
    /// Vertical posts closing the left face.
    Posts,
    /// The left face sliding out to the right along the long axis.
    Extrusion,
}

impl Phase {
    fn index(self) -> usize {
        match self {
            Phase::Rails => 0,
            Phase::Posts => 1,
            Phase::Extrusion => 2,
        }
    }

    pub fn previous(self) -> Option<Phase> {
        match self {
            Phase::Rails => None,
            Phase::Posts => Some(Phase::Rails),
            Phase::Extrusion => Some(Phase::Posts),
        }
    }

    /// Edges grown during this phase. The first one sets the pace for all of them.
    pub fn edges(self) -> &'static [(Corner, Corner)] {
        use Corner::*;
        match self {
            Phase::Rails => &[(LeftBottomFar, LeftBottomNear), (LeftTopNear, LeftTopFar)],
            Phase::Posts => &[(LeftBottomNear, LeftTopNear), (LeftTopFar, LeftBottomFar)],
            Phase::Extrusion => &[
                (LeftBottomFar, RightBottomFar),
                (LeftBottomNear, RightBottomNear),
                (LeftTopNear, RightTopNear),
                (LeftTopFar, RightTopFar),
            ],
        }
    }
}

/// Latch for one phase. Once `finished_at` is set it never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseState {
    finished_at: Option<f32>,
    fraction: f32,
}

impl PhaseState {
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn finished_at(&self) -> Option<f32> {
        self.finished_at
    }

    /// Fraction reported by the most recent tick.
    pub fn fraction(&self) -> f32 {
        self.fraction
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    start: f32,
    speed: f32,
}

impl AnimationClock {
    pub fn new(start: f32, speed: f32) -> Self {
        Self { start, speed }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// How much of `length` has been covered between `since` and `now`, in [0, 1].
    /// A zero-length journey is complete immediately and time running backwards counts as no time.
    pub fn fraction(&self, since: f32, now: f32, length: f32) -> f32 {
        if length <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - since).max(0.0);
        (elapsed * self.speed / length).clamp(0.0, 1.0)
    }
}

/// Draws the twelve edges of a cuboid over three phases, driven by wall-clock seconds.
///
/// Each phase grows its edges linearly at the clock's speed. A phase starts at the moment
/// the previous one was seen to finish, so phases run strictly one after another like a
/// relay. Times passed to [`tick`](Self::tick) must not decrease between calls.
#[derive(Debug, Clone)]
pub struct EdgeGrowthAnimator {
    cuboid: Cuboid,
    clock: AnimationClock,
    phases: [PhaseState; PHASE_COUNT],
}

impl EdgeGrowthAnimator {
    pub fn new(clock_start: f32) -> Self {
        Self::with_speed(clock_start, DEFAULT_SPEED)
    }

    pub fn with_speed(clock_start: f32, speed: f32) -> Self {
        Self::for_cuboid(Cuboid::default(), clock_start, speed)
    }

    pub fn for_cuboid(cuboid: Cuboid, clock_start: f32, speed: f32) -> Self {
        Self {
            cuboid,
            clock: AnimationClock::new(clock_start, speed),
            phases: [PhaseState::default(); PHASE_COUNT],
        }
    }

    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn phase_state(&self, phase: Phase) -> &PhaseState {
        &self.phases[phase.index()]
    }

    pub fn is_finished(&self) -> bool {
        self.phase_state(Phase::Extrusion).is_finished()
    }

    /// The phase currently growing, or None once everything is drawn.
    pub fn current_phase(&self) -> Option<Phase> {
        Phase::iter().find(|phase| !self.phase_state(*phase).is_finished())
    }

    /// Moment from which a phase measures its elapsed time, if it has been unlocked.
    fn baseline(&self, phase: Phase) -> Option<f32> {
        match phase.previous() {
            None => Some(self.clock.start),
            Some(previous) => self.phase_state(previous).finished_at,
        }
    }

    /// Progress of a phase at `now` without touching any latch.
    /// Locked phases report 0 and finished phases report 1.
    pub fn fraction(&self, phase: Phase, now: f32) -> f32 {
        if self.phase_state(phase).is_finished() {
            return 1.0;
        }
        let Some(since) = self.baseline(phase) else {
            return 0.0;
        };
        let (alpha, omega) = phase.edges()[0];
        let length = self.cuboid.edge(alpha, omega).length();
        self.clock.fraction(since, now, length)
    }

    /// Segments to draw at `now`.
    ///
    /// This advances the animation: a phase whose fraction reaches 1 is latched as finished
    /// at `now`, and the next phase is evaluated in the same call starting from that moment.
    pub fn tick(&mut self, now: f32) -> Vec<LineSegment> {
        let mut segments = Vec::with_capacity(12);
        for phase in Phase::iter() {
            if self.baseline(phase).is_none() {
                break;
            }
            let fraction = self.fraction(phase, now);
            let state = &mut self.phases[phase.index()];
            state.fraction = fraction;
            if !state.is_finished() && fraction >= 1.0 {
                state.finished_at = Some(now);
                debug!("{phase} finished at {now:.3}s");
            }
            let finished = state.is_finished();
            self.emit(phase, fraction, finished, &mut segments);
        }
        segments
    }

    fn emit(&self, phase: Phase, fraction: f32, finished: bool, segments: &mut Vec<LineSegment>) {
        let tips: Vec<Vec3> = phase
            .edges()
            .iter()
            .map(|&(alpha, omega)| {
                let edge = self.cuboid.edge(alpha, omega);
                let tip = if finished { edge.omega } else { edge.at(fraction) };
                segments.push(LineSegment::new(edge.alpha, tip));
                tip
            })
            .collect();
        if phase == Phase::Extrusion {
            // the face being pushed along, closed as a loop
            for (index, &tip) in tips.iter().enumerate() {
                segments.push(LineSegment::new(tip, tips[(index + 1) % tips.len()]));
            }
        }
    }
}
