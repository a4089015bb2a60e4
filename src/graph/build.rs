use std::collections::{BTreeSet, HashMap};
use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{LayoutConfig, SeedConfig};
use crate::record::{Category, TaggedRecord};

use super::{GraphEdge, GraphNode, WorldGraph, edge_id};

struct ThemeGroup<'a> {
    theme: &'a str,
    record_count: usize,
    category_counts: [usize; Category::ALL.len()],
    tags: BTreeSet<String>,
}

impl ThemeGroup<'_> {
    fn dominant_category(&self) -> Category {
        let mut best = Category::default();
        let mut best_count = 0usize;
        for category in Category::ALL {
            let count = self.category_counts[category.ordinal()];
            if count > best_count {
                best = category;
                best_count = count;
            }
        }
        best
    }
}

fn group_by_theme(records: &[TaggedRecord]) -> Vec<ThemeGroup<'_>> {
    let mut groups: Vec<ThemeGroup<'_>> = Vec::new();
    let mut index_by_theme: HashMap<&str, usize> = HashMap::new();
    let mut untitled = 0usize;

    for record in records {
        let Some(theme) = record.theme_label() else {
            untitled += 1;
            continue;
        };

        let index = *index_by_theme.entry(theme).or_insert_with(|| {
            groups.push(ThemeGroup {
                theme,
                record_count: 0,
                category_counts: [0; Category::ALL.len()],
                tags: BTreeSet::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[index];
        group.record_count += 1;
        group.category_counts[record.category.ordinal()] += 1;
        group.tags.extend(record.tags.iter().cloned());
    }

    if untitled > 0 {
        tracing::debug!(untitled, "skipped records without a theme");
    }

    groups
}

fn seed_position(rng: &mut SmallRng, center: Vec2, seed: &SeedConfig) -> Vec2 {
    let (min_radius, max_radius) = seed.radius_range();
    let angle = rng.random_range(0.0..TAU);
    let distance = if max_radius > min_radius {
        rng.random_range(min_radius..=max_radius)
    } else {
        min_radius
    };
    center + vec2(angle.cos(), angle.sin()) * distance
}

fn collect_edges(nodes: &[GraphNode]) -> Vec<GraphEdge> {
    let mut edges = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        for other in &nodes[index + 1..] {
            let shared_tags = node
                .tags
                .intersection(&other.tags)
                .cloned()
                .collect::<BTreeSet<_>>();
            if shared_tags.is_empty() {
                continue;
            }

            edges.push(GraphEdge {
                id: edge_id(&node.id, &other.id),
                from: node.id.clone(),
                to: other.id.clone(),
                shared_tags,
            });
        }
    }
    edges
}

/// Builds a fresh world graph: one node per distinct theme, one edge per pair
/// of themes sharing at least one tag.
pub fn build_graph(records: &[TaggedRecord], config: &LayoutConfig) -> WorldGraph {
    let groups = group_by_theme(records);
    let center = config.center();
    let mut rng = SmallRng::seed_from_u64(config.seed.rng_seed);

    let nodes = groups
        .into_iter()
        .map(|group| GraphNode {
            id: group.theme.to_owned(),
            position: seed_position(&mut rng, center, &config.seed),
            velocity: Vec2::ZERO,
            record_count: group.record_count,
            dominant_category: group.dominant_category(),
            tags: group.tags,
        })
        .collect::<Vec<_>>();

    let edges = collect_edges(&nodes);

    tracing::debug!(
        records = records.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "built world graph"
    );

    WorldGraph::from_parts(nodes, edges)
}
