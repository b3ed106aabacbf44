use log::debug;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

pub type TimerTx = mpsc::UnboundedSender<TimerEvent>;
pub type TimerRx = mpsc::UnboundedReceiver<TimerEvent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEventKind {
    Tick { seconds_remaining: u32 },
    Expired,
}

/// A tick or expiry, stamped with the generation of the countdown that
/// produced it. Consumers drop events whose generation is no longer current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub generation: u64,
    pub kind: TimerEventKind,
}

/// Per-question countdown.
///
/// `start` fires one `Tick` per elapsed second (remaining counts down to 0
/// inclusive) followed by exactly one `Expired`. Starting again replaces any
/// running countdown. `cancel` is idempotent.
pub trait Countdown {
    fn start(&mut self, generation: u64, duration_secs: u32);
    fn cancel(&mut self);
}

pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock that follows tokio's time, including paused test time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Countdown backed by a spawned tokio task. Events are delivered through a
/// channel so they are handled by whichever task owns the receiver.
pub struct TokioCountdown {
    tx: TimerTx,
    abort_handle: Option<AbortHandle>,
}

impl TokioCountdown {
    pub fn new(tx: TimerTx) -> Self {
        Self {
            tx,
            abort_handle: None,
        }
    }

    /// Convenience for wiring a countdown to a fresh channel.
    pub fn channel() -> (Self, TimerRx) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Countdown for TokioCountdown {
    fn start(&mut self, generation: u64, duration_secs: u32) {
        self.cancel();
        debug!("Starting countdown {generation} for {duration_secs}s");

        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            for seconds_remaining in (0..duration_secs).rev() {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let tick = TimerEvent {
                    generation,
                    kind: TimerEventKind::Tick { seconds_remaining },
                };
                if tx.send(tick).is_err() {
                    // Receiver gone, nobody left to notify
                    return;
                }
            }
            let _ = tx.send(TimerEvent {
                generation,
                kind: TimerEventKind::Expired,
            });
        });

        self.abort_handle = Some(task.abort_handle());
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.abort_handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TokioCountdown {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use manual::{ManualClock, ManualCountdown};

#[cfg(any(test, feature = "test-support"))]
mod manual {
    use super::*;
    use log::info;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Simulated clock. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        origin: Instant,
        elapsed_ms: Arc<AtomicU64>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self {
                origin: Instant::now(),
                elapsed_ms: Arc::new(AtomicU64::new(0)),
            }
        }

        pub fn advance(&self, by: Duration) {
            self.elapsed_ms
                .fetch_add(by.as_millis() as u64, Ordering::SeqCst);
        }

        pub fn elapsed(&self) -> Duration {
            Duration::from_millis(self.elapsed_ms.load(Ordering::SeqCst))
        }
    }

    impl Default for ManualClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.origin + self.elapsed()
        }
    }

    /// Countdown driven by hand. Nothing fires until `advance` is called,
    /// which moves the shared clock and returns the events that came due.
    #[derive(Debug)]
    pub struct ManualCountdown {
        clock: ManualClock,
        active: Option<(u64, u32)>,
        starts: Vec<(u64, u32)>,
        cancels: usize,
    }

    impl ManualCountdown {
        pub fn new(clock: ManualClock) -> Self {
            Self {
                clock,
                active: None,
                starts: Vec::new(),
                cancels: 0,
            }
        }

        pub fn clock(&self) -> &ManualClock {
            &self.clock
        }

        /// Generation and remaining seconds of the running countdown.
        pub fn active(&self) -> Option<(u64, u32)> {
            self.active
        }

        /// Every `(generation, duration)` passed to `start`, oldest first.
        pub fn starts(&self) -> &[(u64, u32)] {
            &self.starts
        }

        pub fn cancels(&self) -> usize {
            self.cancels
        }

        /// Advance the clock by whole seconds, collecting ticks and expiry.
        /// Once a countdown expires, later seconds in the same call produce
        /// no events; callers restart timers between calls.
        pub fn advance(&mut self, secs: u32) -> Vec<TimerEvent> {
            let mut events = Vec::new();
            for _ in 0..secs {
                self.clock.advance(Duration::from_secs(1));
                let Some((generation, remaining)) = self.active else {
                    continue;
                };
                let seconds_remaining = remaining.saturating_sub(1);
                events.push(TimerEvent {
                    generation,
                    kind: TimerEventKind::Tick { seconds_remaining },
                });
                if seconds_remaining == 0 {
                    events.push(TimerEvent {
                        generation,
                        kind: TimerEventKind::Expired,
                    });
                    self.active = None;
                } else {
                    self.active = Some((generation, seconds_remaining));
                }
            }
            events
        }

        /// An expiry for an arbitrary generation, as a late-firing timer
        /// would deliver it.
        pub fn fire_expiry(generation: u64) -> TimerEvent {
            TimerEvent {
                generation,
                kind: TimerEventKind::Expired,
            }
        }
    }

    impl Countdown for ManualCountdown {
        fn start(&mut self, generation: u64, duration_secs: u32) {
            info!("Manual countdown {generation} started for {duration_secs}s");
            self.active = Some((generation, duration_secs));
            self.starts.push((generation, duration_secs));
        }

        fn cancel(&mut self) {
            self.cancels += 1;
            self.active = None;
        }
    }
}
