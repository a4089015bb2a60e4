use std::collections::BTreeSet;
use std::time::Duration;

use dream_world_graph::{
    Category, GraphNode, LayoutConfig, ManualClock, Phase, ScheduleConfig, Simulation,
    TaggedRecord, default_node_radius, vec2,
};

const FRAME: Duration = Duration::from_millis(16);

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn journal() -> Vec<TaggedRecord> {
    vec![
        TaggedRecord::new(Some("A"), Category::Hope, ["x", "y"]),
        TaggedRecord::new(Some("A"), Category::Serenity, ["y"]),
        TaggedRecord::new(Some("B"), Category::Anxiety, ["y", "z"]),
        TaggedRecord::new(Some("C"), Category::Whimsy, ["q"]),
    ]
}

fn simulation_with_clock(records: &[TaggedRecord]) -> (Simulation<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let simulation =
        Simulation::from_records_with_clock(records, LayoutConfig::default(), clock.clone());
    (simulation, clock)
}

fn run_frames(simulation: &mut Simulation<ManualClock>, clock: &ManualClock, frames: usize) {
    for _ in 0..frames {
        clock.advance(FRAME);
        simulation.update();
    }
}

#[test]
fn journal_builds_expected_world_map() {
    let (simulation, _clock) = simulation_with_clock(&journal());
    let layout = simulation.layout();

    assert_eq!(layout.current_nodes().len(), 3);
    let a = layout.node("A").unwrap();
    assert_eq!(a.record_count, 2);
    assert_eq!(a.tags, tags(&["x", "y"]));
    assert_eq!(layout.node("B").unwrap().tags, tags(&["y", "z"]));
    assert_eq!(layout.node("C").unwrap().tags, tags(&["q"]));

    let edges = layout.current_edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].from, "A");
    assert_eq!(edges[0].to, "B");
    assert_eq!(edges[0].shared_tags, tags(&["y"]));
    assert_eq!(edges[0].weight(), 1.0);
    assert!(layout.neighbors("C").is_empty());
}

#[test]
fn step_on_tiny_graphs_changes_nothing() {
    for records in [
        Vec::new(),
        vec![TaggedRecord::new(Some("alone"), Category::Hope, ["x"])],
    ] {
        let (mut simulation, clock) = simulation_with_clock(&records);
        let before = simulation.graph().nodes().to_vec();

        simulation.step();
        simulation.start();
        run_frames(&mut simulation, &clock, 30);

        assert_eq!(simulation.graph().nodes(), before.as_slice());
    }
}

#[test]
fn stop_without_start_is_harmless() {
    let (mut simulation, clock) = simulation_with_clock(&journal());
    let before = simulation.graph().nodes().to_vec();

    simulation.stop();
    simulation.stop();
    run_frames(&mut simulation, &clock, 10);

    assert!(!simulation.is_running());
    assert_eq!(simulation.tick_count(), 0);
    assert_eq!(simulation.graph().nodes(), before.as_slice());
}

#[test]
fn stop_freezes_positions() {
    let (mut simulation, clock) = simulation_with_clock(&journal());
    simulation.start();
    run_frames(&mut simulation, &clock, 20);
    assert!(simulation.tick_count() > 0);

    simulation.stop();
    let frozen = simulation.graph().nodes().to_vec();
    let ticks = simulation.tick_count();
    simulation.stop();
    run_frames(&mut simulation, &clock, 50);

    assert_eq!(simulation.tick_count(), ticks);
    assert_eq!(simulation.graph().nodes(), frozen.as_slice());
    assert_eq!(simulation.phase(), None);
}

#[test]
fn settle_phase_hands_over_to_idle_cadence() {
    let (mut simulation, clock) = simulation_with_clock(&journal());
    let schedule = ScheduleConfig::default();

    simulation.start();
    assert_eq!(simulation.phase(), Some(Phase::Settle));
    assert_eq!(simulation.tick_interval(), Some(schedule.settle_interval()));

    let mut frames = 0;
    while simulation.phase() == Some(Phase::Settle) && frames < 200 {
        run_frames(&mut simulation, &clock, 1);
        frames += 1;
    }

    // 120 ticks at 60 Hz is about two seconds of 16 ms frames.
    assert!((124..=127).contains(&frames), "{frames}");
    assert_eq!(simulation.phase(), Some(Phase::Idle));
    assert_eq!(simulation.tick_interval(), Some(schedule.idle_interval()));
    assert_eq!(simulation.tick_count(), u64::from(schedule.settle_tick_count));

    clock.advance(schedule.idle_interval());
    assert_eq!(simulation.update(), 1);
    assert_eq!(simulation.update(), 0);
    clock.advance(schedule.idle_interval() / 2);
    assert_eq!(simulation.update(), 0);
}

#[test]
fn restart_returns_to_settle_phase() {
    let (mut simulation, clock) = simulation_with_clock(&journal());
    simulation.start();
    run_frames(&mut simulation, &clock, 200);
    assert_eq!(simulation.phase(), Some(Phase::Idle));

    simulation.start();
    assert_eq!(simulation.phase(), Some(Phase::Settle));
    assert_eq!(
        simulation.tick_interval(),
        Some(ScheduleConfig::default().settle_interval())
    );
}

#[test]
fn settling_brings_linked_worlds_together() {
    let records = vec![
        TaggedRecord::new(Some("A"), Category::Hope, ["moon", "sea"]),
        TaggedRecord::new(Some("B"), Category::Hope, ["moon", "sea"]),
        TaggedRecord::new(Some("C"), Category::Hope, ["key"]),
    ];
    let (mut simulation, clock) = simulation_with_clock(&records);
    simulation.start();
    run_frames(&mut simulation, &clock, 400);

    let layout = simulation.layout();
    let a = layout.node("A").unwrap().position;
    let b = layout.node("B").unwrap().position;
    let linked = (a - b).length();
    assert!(linked > 20.0 && linked < 120.0, "{linked}");

    let center = simulation.config().center();
    for node in layout.current_nodes() {
        assert!((node.position - center).length() < 400.0);
    }
}

#[test]
fn taps_hit_the_first_covering_world() {
    let records = vec![
        TaggedRecord::new(Some("first"), Category::Hope, ["x"]),
        TaggedRecord::new(Some("second"), Category::Hope, ["y"]),
    ];
    let (simulation, _clock) = simulation_with_clock(&records);
    let layout = simulation.layout();
    let first = layout.node("first").unwrap().position;

    let hit = layout.hit_test(first, default_node_radius);
    assert_eq!(hit.map(|node| node.id.as_str()), Some("first"));

    let far_away = vec2(first.x + 10_000.0, first.y);
    let radius = |_: &GraphNode| 20.0;
    assert!(layout.hit_test(far_away, radius).is_none());
}
