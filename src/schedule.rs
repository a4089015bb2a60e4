use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::config::ScheduleConfig;

pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Settle,
    Idle,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Settle => "settle",
            Self::Idle => "idle",
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Running {
    phase: Phase,
    settle_ticks: u32,
    next_due: Duration,
}

/// Timer state for one simulation: fast settle ticks, then slow idle ticks.
#[derive(Clone, Debug)]
pub struct Scheduler {
    config: ScheduleConfig,
    running: Option<Running>,
}

impl Scheduler {
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config,
            running: None,
        }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Starts from the settle phase, discarding any previous schedule.
    pub fn start(&mut self, now: Duration) {
        let phase = if self.config.settle_tick_count == 0 {
            Phase::Idle
        } else {
            Phase::Settle
        };
        self.running = Some(Running {
            phase,
            settle_ticks: 0,
            next_due: now.saturating_add(self.interval_for(phase)),
        });
        tracing::debug!(phase = phase.label(), "layout schedule started");
    }

    pub fn stop(&mut self) {
        if self.running.take().is_some() {
            tracing::debug!("layout schedule stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.running.map(|running| running.phase)
    }

    /// Spacing between the ticks currently being scheduled.
    pub fn interval(&self) -> Option<Duration> {
        self.phase().map(|phase| self.interval_for(phase))
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.running.map(|running| running.next_due)
    }

    fn interval_for(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Settle => self.config.settle_interval(),
            Phase::Idle => self.config.idle_interval(),
        }
    }

    /// Consumes one tick if it is due at `now`, advancing the schedule past it.
    pub fn take_due(&mut self, now: Duration) -> bool {
        let settle_tick_count = self.config.settle_tick_count;
        let settle_interval = self.config.settle_interval();
        let idle_interval = self.config.idle_interval();
        let Some(running) = self.running.as_mut() else {
            return false;
        };
        if running.next_due > now {
            return false;
        }

        let fired_at = running.next_due;
        match running.phase {
            Phase::Settle => {
                running.settle_ticks += 1;
                if running.settle_ticks >= settle_tick_count {
                    running.phase = Phase::Idle;
                    running.next_due = fired_at.saturating_add(idle_interval);
                    tracing::debug!(
                        settle_ticks = running.settle_ticks,
                        "layout settled, switching to idle cadence"
                    );
                } else {
                    running.next_due = fired_at.saturating_add(settle_interval);
                }
            }
            Phase::Idle => {
                running.next_due = fired_at.saturating_add(idle_interval);
            }
        }
        true
    }

    /// Moves the next due time to one interval after `now`, dropping any
    /// overdue ticks. Dropped settle ticks still count toward the settle
    /// budget, so a stall cannot stretch the settle phase. Returns how many
    /// ticks were dropped.
    pub fn resync(&mut self, now: Duration) -> u64 {
        let settle_tick_count = self.config.settle_tick_count;
        let idle_interval = self.config.idle_interval();
        let Some(interval) = self.interval() else {
            return 0;
        };
        let Some(running) = self.running.as_mut() else {
            return 0;
        };
        if running.next_due > now {
            return 0;
        }

        let behind = now - running.next_due;
        let dropped = (behind.as_nanos() / interval.as_nanos().max(1)) as u64 + 1;
        running.next_due = now.saturating_add(interval);

        if running.phase == Phase::Settle {
            let skipped = u32::try_from(dropped).unwrap_or(u32::MAX);
            running.settle_ticks = running
                .settle_ticks
                .saturating_add(skipped)
                .min(settle_tick_count);
            if running.settle_ticks >= settle_tick_count {
                running.phase = Phase::Idle;
                running.next_due = now.saturating_add(idle_interval);
                tracing::debug!(
                    settle_ticks = running.settle_ticks,
                    "settle budget spent while behind, switching to idle cadence"
                );
            }
        }
        dropped
    }
}
