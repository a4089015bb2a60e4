use std::time::Duration;

use crate::config::LayoutConfig;
use crate::graph::{WorldGraph, build_graph};
use crate::physics;
use crate::query::LayoutView;
use crate::record::TaggedRecord;
use crate::schedule::{Clock, Phase, Scheduler, SystemClock};

/// A live world map: the graph, its physics settings, and the timer that
/// drives it. Each instance owns its own clock and schedule.
pub struct Simulation<C: Clock = SystemClock> {
    graph: WorldGraph,
    config: LayoutConfig,
    scheduler: Scheduler,
    clock: C,
    tick_count: u64,
}

impl Simulation<SystemClock> {
    pub fn from_records(records: &[TaggedRecord], config: LayoutConfig) -> Self {
        Self::with_clock(build_graph(records, &config), config, SystemClock::new())
    }
}

impl<C: Clock> Simulation<C> {
    pub fn with_clock(graph: WorldGraph, config: LayoutConfig, clock: C) -> Self {
        Self {
            graph,
            scheduler: Scheduler::new(config.schedule),
            config,
            clock,
            tick_count: 0,
        }
    }

    pub fn from_records_with_clock(
        records: &[TaggedRecord],
        config: LayoutConfig,
        clock: C,
    ) -> Self {
        Self::with_clock(build_graph(records, &config), config, clock)
    }

    /// Replaces the graph with one built from `records`. A running schedule
    /// restarts from the settle phase.
    pub fn rebuild(&mut self, records: &[TaggedRecord]) {
        self.graph = build_graph(records, &self.config);
        self.tick_count = 0;
        if self.scheduler.is_running() {
            self.start();
        }
    }

    pub fn start(&mut self) {
        self.scheduler.start(self.clock.now());
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn step(&mut self) {
        physics::step(&mut self.graph, &self.config.physics, self.config.center());
        self.tick_count += 1;
    }

    /// Runs every tick that has come due since the last call. Returns the
    /// number of ticks run.
    pub fn update(&mut self) -> u32 {
        let now = self.clock.now();
        let budget = self.scheduler.config().max_catch_up_ticks();
        let mut ran = 0u32;

        while ran < budget && self.scheduler.take_due(now) {
            self.step();
            ran += 1;
        }

        if ran == budget {
            let dropped = self.scheduler.resync(now);
            if dropped > 0 {
                tracing::debug!(dropped, "layout fell behind, skipping overdue ticks");
            }
        }

        if ran > 0 {
            tracing::trace!(ran, tick_count = self.tick_count, "layout ticks");
        }
        ran
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.scheduler.phase()
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.scheduler.interval()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn graph(&self) -> &WorldGraph {
        &self.graph
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn layout(&self) -> LayoutView<'_> {
        self.graph.layout()
    }
}
