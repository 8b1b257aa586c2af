//! Reusable scene fixtures.
//!
//! - [`Scene`] — grid extent, gain, and an ordered source list.
//! - [`random_scene`] — seeded scene generator (ChaCha8, reproducible).
//! - [`reference_field`] — direct per-cell evaluation, written without
//!   sharing any code with the engine's sweep.

use potfield_core::{PointSource, SourceKind, Vector2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A complete engine input: dimensions, gain, and sources.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub rows: i64,
    pub cols: i64,
    pub gain: f64,
    pub sources: Vec<PointSource>,
}

impl Scene {
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows,
            cols,
            gain: 1.0,
            sources: Vec::new(),
        }
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    pub fn goal(mut self, x: i64, y: i64) -> Self {
        self.sources.push(PointSource::new(SourceKind::Goal, x, y));
        self
    }

    pub fn obstacle(mut self, x: i64, y: i64) -> Self {
        self.sources
            .push(PointSource::new(SourceKind::Obstacle, x, y));
        self
    }
}

/// Generate `count` in-bounds sources on a `rows x cols` grid with a
/// gain in `[0.1, 10)`.
///
/// The same `seed` always yields the same scene.
pub fn random_scene(seed: u64, rows: i64, cols: i64, count: usize) -> Scene {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let gain = rng.random_range(0.1..10.0);
    let sources = (0..count)
        .map(|_| {
            let kind = if rng.random_bool(0.5) {
                SourceKind::Goal
            } else {
                SourceKind::Obstacle
            };
            let x = rng.random_range(0..cols);
            let y = rng.random_range(0..rows);
            PointSource::new(kind, x, y)
        })
        .collect();
    Scene {
        rows,
        cols,
        gain,
        sources,
    }
}

/// Evaluate the potential of every cell of `scene` directly.
///
/// Returns a row-major buffer of `rows * cols` cells.
pub fn reference_field(scene: &Scene) -> Vec<Vector2> {
    let mut out = Vec::with_capacity((scene.rows * scene.cols) as usize);
    for row in 0..scene.rows {
        for col in 0..scene.cols {
            let mut px = 0.0;
            let mut py = 0.0;
            for s in &scene.sources {
                let d = ((col - s.x()) as f64).hypot((row - s.y()) as f64);
                if d == 0.0 {
                    continue;
                }
                let mag = scene.gain / d;
                match s.kind() {
                    SourceKind::Goal => {
                        px -= mag;
                        py -= mag;
                    }
                    SourceKind::Obstacle => {
                        px += mag;
                        py += mag;
                    }
                }
            }
            out.push(Vector2::new(px, py));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_scene_is_deterministic() {
        assert_eq!(random_scene(7, 8, 9, 12), random_scene(7, 8, 9, 12));
        assert_ne!(random_scene(7, 8, 9, 12), random_scene(8, 8, 9, 12));
    }

    #[test]
    fn random_scene_stays_in_bounds() {
        let scene = random_scene(42, 5, 11, 200);
        assert_eq!(scene.sources.len(), 200);
        for s in &scene.sources {
            assert!((0..11).contains(&s.x()));
            assert!((0..5).contains(&s.y()));
        }
        assert!(scene.gain >= 0.1 && scene.gain < 10.0);
    }

    #[test]
    fn reference_matches_hand_values() {
        let field = reference_field(&Scene::new(2, 2).goal(0, 0));
        assert_eq!(field[0], Vector2::ZERO);
        assert_eq!(field[1], Vector2::splat(-1.0));
        assert_eq!(field[2], Vector2::splat(-1.0));
        assert!((field[3].px + 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }
}
