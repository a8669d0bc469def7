//! Raysweep entry point
//!
//! Headless demo: runs the sweep for a number of revolutions and dumps the
//! accumulated hits as an ASCII grid. Real hosts render the per-tick
//! geometry themselves; this binary is glue, not algorithm.

use raysweep::sim::{SceneState, tick};
use raysweep::{Hit, SceneConfig};

/// Terminal cells used for the hit dump
const GRID_COLS: usize = 100;
const GRID_ROWS: usize = 35;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let config = SceneConfig::default();
    let mut state = match SceneState::new(config, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    log::info!("sweeping with seed {seed}, {} shapes", state.shapes.len());

    // one full revolution plus the reset tick
    let ticks_per_revolution = (360.0 / state.config.angle_increment).ceil() as usize + 1;
    let mut last_hits = Vec::new();

    for _ in 0..ticks_per_revolution {
        let out = tick(&mut state);
        if out.did_reset {
            break;
        }
        last_hits = out.hits;
    }

    log::info!("revolution complete: {} hits", last_hits.len());
    print_hits(&state, &last_hits);

    if std::env::var_os("RAYSWEEP_DUMP_STATE").is_some() {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("state dump failed: {err}"),
        }
    }
}

/// Downsample the canvas onto a character grid: camera `@`, hits `*`
fn print_hits(state: &SceneState, hits: &[Hit]) {
    let mut grid = vec![vec![' '; GRID_COLS]; GRID_ROWS];

    let cell = |x: f32, y: f32| -> Option<(usize, usize)> {
        let col = (x / state.config.canvas_width * GRID_COLS as f32) as isize;
        let row = (y / state.config.canvas_height * GRID_ROWS as f32) as isize;
        if (0..GRID_COLS as isize).contains(&col) && (0..GRID_ROWS as isize).contains(&row) {
            Some((row as usize, col as usize))
        } else {
            None
        }
    };

    for hit in hits {
        if let Some((row, col)) = cell(hit.position.x, hit.position.y) {
            grid[row][col] = '*';
        }
    }
    if let Some((row, col)) = cell(state.camera.pos.x, state.camera.pos.y) {
        grid[row][col] = '@';
    }

    for row in grid {
        let line: String = row.into_iter().collect();
        println!("{line}");
    }
}
