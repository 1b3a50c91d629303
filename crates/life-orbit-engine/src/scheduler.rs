//! Fixed-interval tick scheduling from wall-clock deltas.
//!
//! Hosts report how much time passed (a frame delta, a timer period) and
//! the schedule answers how many orbit ticks are due and which of them
//! also carry a collision pass. Correctness never depends on the host's
//! timing precision, only on the order of sub-steps inside a tick.

use std::time::Duration;

use crate::config::EngineTuning;

/// Accumulates elapsed time and releases it in whole intervals.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulated: Duration,
}

impl FixedStep {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
    }

    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulated = self.accumulated.saturating_add(elapsed);
    }

    /// Consume one interval if enough time has accumulated.
    pub fn take(&mut self) -> bool {
        if self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            true
        } else {
            false
        }
    }

    /// Keep only the partial interval.
    pub fn trim(&mut self) {
        let rem = self.accumulated.as_nanos() % self.interval.as_nanos();
        self.accumulated = Duration::from_nanos(rem as u64);
    }

    pub fn drop_backlog(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// One orbit tick planned by [`TickSchedule::due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    /// Whether the collision cadence falls on this tick.
    pub collide: bool,
}

/// Orbit cadence plus a (usually slower) collision cadence.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    orbit: FixedStep,
    collision: FixedStep,
    max_catch_up: u32,
}

impl TickSchedule {
    pub fn new(tuning: &EngineTuning) -> Self {
        Self {
            orbit: FixedStep::new(tuning.orbit_interval()),
            collision: FixedStep::new(tuning.collision_interval()),
            max_catch_up: tuning.max_catch_up.max(1),
        }
    }

    /// Apply new intervals, keeping accumulated time.
    pub fn retune(&mut self, tuning: &EngineTuning) {
        self.orbit.set_interval(tuning.orbit_interval());
        self.collision.set_interval(tuning.collision_interval());
        self.max_catch_up = tuning.max_catch_up.max(1);
    }

    pub fn orbit_interval(&self) -> Duration {
        self.orbit.interval()
    }

    /// Ticks due after `elapsed` more time.
    ///
    /// At most `max_catch_up` ticks are returned; any further backlog is
    /// dropped so a stalled host does not fast-forward the layout.
    pub fn due(&mut self, elapsed: Duration) -> Vec<ScheduledTick> {
        self.orbit.accumulate(elapsed);

        let mut ticks = Vec::new();
        while self.orbit.take() {
            if ticks.len() as u32 >= self.max_catch_up {
                tracing::debug!(
                    max_catch_up = self.max_catch_up,
                    "tick backlog dropped"
                );
                self.orbit.drop_backlog();
                break;
            }
            self.collision.accumulate(self.orbit.interval());
            let collide = self.collision.take();
            if collide {
                self.collision.trim();
            }
            ticks.push(ScheduledTick { collide });
        }
        ticks
    }
}
