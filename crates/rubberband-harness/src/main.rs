#![forbid(unsafe_code)]

//! Scripted drag-to-select demo.
//!
//! Builds a grid of items inside a scrollable container, sweeps a drag from
//! the top-left cell toward the bottom edge, holds the pointer in the
//! auto-scroll band for a number of frames, then releases. Prints one JSON
//! summary line to stdout.
//!
//! # Running
//!
//! ```sh
//! cargo run -p rubberband-harness
//! cargo run -p rubberband-harness -- select.toml
//! RUST_LOG=rubberband_runtime=trace cargo run -p rubberband-harness
//! ```
//!
//! A config path ending in `.json` is read as JSON, anything else as TOML.

use std::path::Path;

use rubberband_core::{Rect, SelectConfig};
use rubberband_harness::{Harness, SimulatedSurface};
use rubberband_runtime::FrameTick;

const HOLD_FRAMES: usize = 40;

fn load_config(path: Option<String>) -> Result<SelectConfig, rubberband_core::ConfigError> {
    match path {
        None => Ok(SelectConfig::default()),
        Some(path) => {
            let path = Path::new(&path);
            if path.extension().is_some_and(|ext| ext == "json") {
                SelectConfig::from_json_file(path)
            } else {
                SelectConfig::from_toml_file(path)
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(std::env::args().nth(1))?;
    tracing::info!(?config, "loaded selection config");

    // 5 columns x 6 rows of 60px cells in a 340x200 container.
    let surface = SimulatedSurface::grid(Rect::new(40.0, 30.0, 340.0, 200.0), 5, 6, 60.0, 8.0);
    let mut harness = Harness::new(surface, config);

    harness.press(12.0, 12.0);
    for step in 1..=10 {
        let t = f64::from(step) / 10.0;
        harness.move_to(12.0 + 300.0 * t, 12.0 + 183.0 * t);
    }
    tracing::info!(
        selected = harness.controller.selected().len(),
        "pointer parked in bottom band"
    );

    let ticks = harness.advance_frames(HOLD_FRAMES);
    let scrolled_frames = ticks
        .iter()
        .filter(|tick| matches!(tick, FrameTick::Scrolled(_)))
        .count();
    let selection_rect = harness.selection_rect();
    let end = harness.release();
    tracing::info!(?end, "released");

    let summary = serde_json::json!({
        "selected": harness
            .selected_ids()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "scroll_y": harness.host.surface.scroll().y,
        "scrolled_frames": scrolled_frames,
        "selection_rect": selection_rect.map(|r| [r.x, r.y, r.width, r.height]),
        "frames_pending": harness.host.clock.pending_count(),
    });
    println!("{summary}");
    Ok(())
}
