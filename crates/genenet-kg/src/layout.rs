//! Force-directed (Fruchterman–Reingold) layout.
//!
//! Initial positions come from the RNG handed in by the caller, nodes are
//! visited in sorted order, and the arithmetic is sequential, so one graph
//! and one seed always give the same coordinates.

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::graph::GeneGraph;

pub const DEFAULT_LAYOUT_SEED: u64 = 42;

/// Distances below this are clamped to keep forces finite.
const MIN_DISTANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct SpringConfig {
    pub iterations: usize,
    /// Stop early once the mean node displacement falls below this.
    pub threshold: f64,
    /// Half-width of the output box; coordinates end up in `[-scale, scale]`.
    pub scale: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self { iterations: 50, threshold: 1e-4, scale: 1.0 }
    }
}

impl SpringConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Node positions keyed by gene symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    positions: BTreeMap<String, Point>,
}

impl Layout {
    /// An empty layout means there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn get(&self, node: &str) -> Option<Point> {
        self.positions.get(node).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions.iter().map(|(k, p)| (k.as_str(), *p))
    }
}

/// Convenience wrapper seeding a `ChaCha8Rng`.
pub fn spring_layout_seeded(graph: &GeneGraph, seed: u64, config: &SpringConfig) -> Layout {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    spring_layout(graph, &mut rng, config)
}

pub fn spring_layout<R: Rng + ?Sized>(graph: &GeneGraph, rng: &mut R, config: &SpringConfig) -> Layout {
    let names: Vec<&String> = graph.nodes().iter().collect();
    let n = names.len();

    match n {
        0 => return Layout::default(),
        1 => {
            let positions = BTreeMap::from([(names[0].clone(), Point { x: 0.0, y: 0.0 })]);
            return Layout { positions };
        }
        _ => {}
    }

    let index: BTreeMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut adjacent = vec![false; n * n];
    for edge in graph.edges() {
        let (a, b) = (index[edge.source.as_str()], index[edge.target.as_str()]);
        adjacent[a * n + b] = true;
        adjacent[b * n + a] = true;
    }

    let mut pos: Vec<[f64; 2]> = (0..n).map(|_| [rng.gen::<f64>(), rng.gen::<f64>()]).collect();

    // Optimal pairwise distance for a unit area.
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1 * extent(&pos);
    let cooling = temperature / (config.iterations as f64 + 1.0);

    let mut displacement = vec![[0.0f64; 2]; n];
    for iteration in 0..config.iterations {
        for (i, disp) in displacement.iter_mut().enumerate() {
            let mut dx = 0.0;
            let mut dy = 0.0;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = [pos[i][0] - pos[j][0], pos[i][1] - pos[j][1]];
                let distance = (delta[0] * delta[0] + delta[1] * delta[1]).sqrt().max(MIN_DISTANCE);
                let attraction = if adjacent[i * n + j] { distance / k } else { 0.0 };
                let force = k * k / (distance * distance) - attraction;
                dx += delta[0] * force;
                dy += delta[1] * force;
            }
            *disp = [dx, dy];
        }

        let mut moved = 0.0;
        for (p, disp) in pos.iter_mut().zip(&displacement) {
            let length = (disp[0] * disp[0] + disp[1] * disp[1]).sqrt().max(MIN_DISTANCE);
            let step = [disp[0] * temperature / length, disp[1] * temperature / length];
            p[0] += step[0];
            p[1] += step[1];
            moved += (step[0] * step[0] + step[1] * step[1]).sqrt();
        }
        temperature -= cooling;

        if moved / (n as f64) < config.threshold {
            debug!(iteration, "Spring layout converged early");
            break;
        }
    }

    rescale(&mut pos, config.scale);

    let positions = names
        .into_iter()
        .zip(pos)
        .map(|(name, [x, y])| (name.clone(), Point { x, y }))
        .collect();
    Layout { positions }
}

/// Larger of the x and y ranges.
fn extent(pos: &[[f64; 2]]) -> f64 {
    let mut lo = [f64::INFINITY; 2];
    let mut hi = [f64::NEG_INFINITY; 2];
    for p in pos {
        for axis in 0..2 {
            lo[axis] = lo[axis].min(p[axis]);
            hi[axis] = hi[axis].max(p[axis]);
        }
    }
    (hi[0] - lo[0]).max(hi[1] - lo[1])
}

/// Centre on the mean and scale so the largest |coordinate| equals `scale`.
fn rescale(pos: &mut [[f64; 2]], scale: f64) {
    let n = pos.len() as f64;
    let mean = pos.iter().fold([0.0, 0.0], |acc, p| [acc[0] + p[0], acc[1] + p[1]]);
    let mean = [mean[0] / n, mean[1] / n];

    let mut limit: f64 = 0.0;
    for p in pos.iter_mut() {
        p[0] -= mean[0];
        p[1] -= mean[1];
        limit = limit.max(p[0].abs()).max(p[1].abs());
    }

    if limit > 0.0 {
        for p in pos.iter_mut() {
            p[0] *= scale / limit;
            p[1] *= scale / limit;
        }
    }
}
