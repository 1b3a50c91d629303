//! Real-time driver: a tokio task that owns the engine and streams frames.

use std::time::Duration;

use life_orbit_engine::{FrameSnapshot, OrbitEngine};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

/// Frames buffered between the engine task and the consumer.
const FRAME_BUFFER: usize = 64;

/// Aborts the ticker task when dropped, so no exit path leaves a timer
/// running.
pub struct TickerGuard {
    handle: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!("stopping ticker");
        }
        self.handle.abort();
    }
}

/// When the ticker emits frames and when it stops.
#[derive(Debug, Clone, Copy)]
pub struct TickerPlan {
    /// Emit a frame every `every` engine ticks.
    pub every: u64,
    /// Stop once the engine has run at least this many ticks.
    pub limit: Option<u64>,
}

/// Move `engine` into a task driven by a `tokio::time::interval` at the
/// engine's orbit cadence.
pub fn spawn(mut engine: OrbitEngine, plan: TickerPlan) -> (mpsc::Receiver<FrameSnapshot>, TickerGuard) {
    let (tx, rx) = mpsc::channel(FRAME_BUFFER);
    let every = plan.every.max(1);
    let period = engine.tick_interval().max(Duration::from_millis(1));

    let handle = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = Instant::now();
        let mut next_emit = every;

        loop {
            ticker.tick().await;
            let now = Instant::now();
            engine.advance(now - last);
            last = now;

            let tick = engine.state().tick;
            let done = plan.limit.is_some_and(|limit| tick >= limit);
            if tick >= next_emit || done {
                while next_emit <= tick {
                    next_emit += every;
                }
                if tx.send(engine.snapshot()).await.is_err() {
                    tracing::debug!("frame receiver dropped");
                    break;
                }
            }
            if done {
                tracing::info!(tick, "tick limit reached");
                break;
            }
        }
    });

    (rx, TickerGuard { handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_orbit_core::sample::sample_catalog;

    #[tokio::test]
    async fn test_ticker_stops_at_limit() {
        let engine = OrbitEngine::with_defaults(sample_catalog());
        let (mut frames, _guard) = spawn(
            engine,
            TickerPlan {
                every: 4,
                limit: Some(12),
            },
        );

        let mut ticks = Vec::new();
        while let Some(frame) = frames.recv().await {
            ticks.push(frame.tick);
        }
        assert!(!ticks.is_empty());
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        assert!(*ticks.last().unwrap() >= 12);
        assert!(frames.is_closed());
    }

    #[tokio::test]
    async fn test_dropping_guard_stops_task() {
        let engine = OrbitEngine::with_defaults(sample_catalog());
        let (mut frames, guard) = spawn(
            engine,
            TickerPlan {
                every: 1,
                limit: None,
            },
        );
        assert!(frames.recv().await.is_some());
        drop(guard);
        // Remaining buffered frames drain, then the channel closes.
        while frames.recv().await.is_some() {}
    }
}
