//! Fixed-tick pacing of a [`GameSession`] and the death → respawn cycle
use super::{Cell, Direction, GameSession, Grid, Snake};
use crate::config::Timing;
use log::{debug, info, trace};
use rand::Rng;
use std::time::Duration;

/// Everything a renderer needs to draw one frame
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Scene<'a> {
    pub(crate) snake: &'a Snake,
    pub(crate) apple: Cell,
    pub(crate) grid: Grid,
    pub(crate) score: u32,
}

/// Something that draws scenes
pub(crate) trait Renderer {
    type Error;

    fn render(&mut self, scene: &Scene<'_>) -> Result<(), Self::Error>;
}

/// The host's frame and timer services
pub(crate) trait Scheduler {
    /// Ask for [`LoopController::on_frame()`] to be called on the next frame
    fn request_frame(&mut self);

    /// Ask for [`LoopController::on_respawn()`] to be called once `delay` has
    /// passed
    fn schedule_respawn(&mut self, delay: Duration);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LoopState {
    Running,
    /// The snake is dead and a respawn has been scheduled
    AwaitingRespawn,
}

/// Drives a session from host frame timestamps: at most one tick per frame,
/// no more often than the tick interval, and a render on every frame
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LoopController<R = rand::rngs::ThreadRng> {
    session: GameSession<R>,
    state: LoopState,
    timing: Timing,
    /// Timestamp of the last tick, or of the first frame since (re)spawning
    last_tick: Option<Duration>,
}

impl<R: Rng> LoopController<R> {
    pub(crate) fn new(session: GameSession<R>, timing: Timing) -> LoopController<R> {
        LoopController {
            session,
            state: LoopState::Running,
            timing,
            last_tick: None,
        }
    }

    /// Request the first frame
    pub(crate) fn start<S: Scheduler + ?Sized>(&self, scheduler: &mut S) {
        scheduler.request_frame();
    }

    /// Handle a frame delivered at timestamp `now`.
    ///
    /// Ticks if at least one tick interval has passed since the last tick,
    /// then renders.  If the tick killed the snake, the rendered frame is the
    /// last one until the respawn fires; otherwise the next frame is
    /// requested.
    pub(crate) fn on_frame<S, V>(
        &mut self,
        now: Duration,
        scheduler: &mut S,
        renderer: &mut V,
    ) -> Result<(), V::Error>
    where
        S: Scheduler + ?Sized,
        V: Renderer + ?Sized,
    {
        if self.state != LoopState::Running {
            return Ok(());
        }
        let last = *self.last_tick.get_or_insert(now);
        let mut outcome = None;
        if now.saturating_sub(last) >= self.timing.tick_interval {
            self.last_tick = Some(now);
            outcome = self.session.tick();
            trace!("Tick at {now:?}: {outcome:?}");
        }
        renderer.render(&self.session.scene())?;
        match outcome {
            Some(oc) if oc.is_death() => {
                info!(
                    "Snake died ({oc:?}) at length {} with score {}",
                    self.session.snake().len(),
                    self.session.score()
                );
                self.state = LoopState::AwaitingRespawn;
                scheduler.schedule_respawn(self.timing.respawn_delay);
            }
            _ => scheduler.request_frame(),
        }
        Ok(())
    }

    /// Handle the scheduled respawn: put a fresh snake on the board and
    /// resume requesting frames
    pub(crate) fn on_respawn<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.state != LoopState::AwaitingRespawn {
            return;
        }
        self.session.respawn();
        self.state = LoopState::Running;
        self.last_tick = None;
        scheduler.request_frame();
    }

    /// Deliver whatever of the respawn and the next frame is due at `now`
    /// on `timeline`
    pub(crate) fn pump<V: Renderer + ?Sized>(
        &mut self,
        timeline: &mut Timeline,
        now: Duration,
        renderer: &mut V,
    ) -> Result<(), V::Error> {
        timeline.now = now;
        if timeline.take_due_respawn() {
            self.on_respawn(timeline);
        }
        if timeline.take_frame_request() {
            self.on_frame(now, timeline, renderer)?;
        }
        Ok(())
    }
}

impl<R> LoopController<R> {
    /// Pass a turn request on to the snake.  Requests made while awaiting a
    /// respawn are dropped so they cannot steer the next snake.
    pub(crate) fn request_turn(&mut self, direction: Direction) {
        if self.state == LoopState::Running {
            self.session.request_turn(direction);
        } else {
            debug!("Dropping turn {direction:?} while awaiting respawn");
        }
    }

    pub(crate) fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub(crate) fn state(&self) -> LoopState {
        self.state
    }
}

/// A [`Scheduler`] that records requests against timestamps supplied by its
/// owner, for hosts that poll rather than take callbacks
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Timeline {
    now: Duration,
    frame_requested: bool,
    respawn_at: Option<Duration>,
}

impl Timeline {
    pub(crate) fn new() -> Timeline {
        Timeline::default()
    }

    fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    fn take_due_respawn(&mut self) -> bool {
        if self.respawn_at.is_some_and(|at| at <= self.now) {
            self.respawn_at = None;
            true
        } else {
            false
        }
    }
}

impl Scheduler for Timeline {
    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn schedule_respawn(&mut self, delay: Duration) {
        self.respawn_at = Some(self.now.saturating_add(delay));
    }
}
