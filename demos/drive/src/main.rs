//! drive — minimal end-to-end demo of the vtrack playback engine.
//!
//! Generates a synthetic route between two named cities, then owns the
//! scheduler loop the engine deliberately lacks: an `Instant`-based tick
//! loop that runs until playback completes, printing a stats line whenever
//! a segment boundary is crossed.
//!
//! Usage: `cargo run -p drive [multiplier]` — optional playback-speed
//! multiplier in [0.5, 4.0], default 2.0.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;

use vtrack_core::{Axis, format_coordinate, format_elapsed};
use vtrack_playback::{PlaybackEngine, PlaybackSnapshot};
use vtrack_route::{generate_route, locations};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROUTE_POINTS: usize = 30;
const POINT_INTERVAL_SECS: i64 = 5;
const FRAME_INTERVAL: Duration = Duration::from_millis(10);
const DEFAULT_MULTIPLIER: f64 = 2.0;

fn main() -> Result<()> {
    let multiplier = match std::env::args().nth(1) {
        None => DEFAULT_MULTIPLIER,
        Some(arg) => arg
            .parse::<f64>()
            .with_context(|| format!("multiplier {arg:?} is not a number"))?,
    };

    let route = generate_route(
        locations::HYDERABAD,
        locations::BANGALORE,
        ROUTE_POINTS,
        Utc::now(),
        chrono::Duration::seconds(POINT_INTERVAL_SECS),
    );
    println!(
        "Replaying {} points, Hyderabad → Bangalore, at {multiplier}× speed",
        route.len()
    );

    let mut engine = PlaybackEngine::new(route);
    engine
        .set_multiplier(multiplier)
        .context("invalid playback multiplier")?;
    engine.play();

    // The scheduler loop.  The engine's internal throttle decides which of
    // these frames actually advance state, so the frame interval only needs
    // to be comfortably below base_interval / multiplier.
    let start = Instant::now();
    let mut last_index = engine.segment_index();
    while engine.is_playing() {
        engine.tick(start.elapsed());

        if engine.segment_index() != last_index {
            last_index = engine.segment_index();
            print_stats(&engine.snapshot());
        }

        std::thread::sleep(FRAME_INTERVAL);
    }

    let end = engine.snapshot();
    print_stats(&end);
    println!(
        "Arrived: {:.1}% of route in {} wall-clock seconds",
        end.progress_percent,
        start.elapsed().as_secs()
    );
    Ok(())
}

fn print_stats(snap: &PlaybackSnapshot) {
    let position = match snap.position {
        Some(p) => format!(
            "{}  {}",
            format_coordinate(p.lat, Axis::Lat),
            format_coordinate(p.lon, Axis::Lon)
        ),
        None => "—".to_string(),
    };
    println!(
        "[{}] segment {:>2}  {position}  {:>5.1} km/h  {:>5.1}%  trail {} pts",
        format_elapsed(snap.elapsed_ticks),
        snap.segment_index,
        snap.speed_kmh,
        snap.progress_percent,
        snap.traveled_path.len()
    );
}
