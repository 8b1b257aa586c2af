//! Benchmark profiles for the Potfield engine.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) with 16 sources
//! - [`stress_profile`]: 316x316 grid (~100K cells) with 64 sources
//! - [`load_engine`]: replay a profile into a configured engine

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use potfield_core::FieldError;
use potfield_engine::FieldEngine;
use potfield_test_utils::{random_scene, Scene};

/// Reference profile: 100x100 grid, 16 mixed sources.
pub fn reference_profile(seed: u64) -> Scene {
    random_scene(seed, 100, 100, 16)
}

/// Stress profile: 316x316 grid, 64 mixed sources.
///
/// Each registration triggers a full sweep, so loading cost grows
/// quadratically with the source count.
pub fn stress_profile(seed: u64) -> Scene {
    random_scene(seed, 316, 316, 64)
}

/// Configure a fresh engine and register every source of `scene`.
pub fn load_engine(scene: &Scene) -> Result<FieldEngine, FieldError> {
    let mut engine = FieldEngine::new();
    engine.configure(scene.rows, scene.cols)?;
    engine.set_gain(scene.gain)?;
    for s in &scene.sources {
        engine.register_point(s.kind(), s.x(), s.y())?;
    }
    Ok(engine)
}

/// Render `scene` as driver input: `CREATE`, `UPDATE`, one `POINT` per
/// source, then a `MOVE` for every cell in row-major order.
pub fn scene_script(scene: &Scene) -> String {
    let mut out = format!("CREATE {} {}\nUPDATE {}\n", scene.rows, scene.cols, scene.gain);
    for s in &scene.sources {
        out.push_str(&format!("POINT {} {} {}\n", s.kind(), s.x(), s.y()));
    }
    for y in 0..scene.rows {
        for x in 0..scene.cols {
            out.push_str(&format!("MOVE {x} {y}\n"));
        }
    }
    out
}
