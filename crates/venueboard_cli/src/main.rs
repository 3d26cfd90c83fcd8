//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `venueboard_core` linkage and the configured board file.
//! - Print today's venue grid in a deterministic, line-oriented form.

use chrono::Local;
use std::error::Error;
use std::process::ExitCode;
use venueboard_core::db::open_db;
use venueboard_core::layout::current_time_indicator_offset;
use venueboard_core::{
    init_logging, BoardConfig, BoardService, ClockTime, GridMetrics, SqliteStore,
};

fn main() -> ExitCode {
    println!("venueboard_core ping={}", venueboard_core::ping());
    println!("venueboard_core version={}", venueboard_core::core_version());

    match run(&BoardConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("venueboard error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &BoardConfig) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let now = Local::now();
    let today = now.date_naive();
    let conn = open_db(&config.db_path)?;
    let service = BoardService::bootstrap(SqliteStore::new(&conn), today)?;
    let metrics = GridMetrics::default();
    let layout = service.day_layout(today, metrics);

    println!("board db={}", config.db_path.display());
    println!("date={} venues={}", layout.date, layout.columns.len());
    for (column, venue) in layout.columns.iter().enumerate() {
        println!("  column={column} venue_id={} name={}", venue.id, venue.name);
    }
    for placement in &layout.placements {
        let event = &placement.event;
        println!(
            "  event_id={} window={}-{} top_px={} height_px={} columns={}..={} name={}",
            event.id,
            event.start_time,
            event.end_time,
            placement.vertical.top,
            placement.vertical.height,
            placement.horizontal.first_column,
            placement.horizontal.last_column,
            event.name
        );
    }
    println!(
        "now_offset_px={}",
        current_time_indicator_offset(ClockTime::from_naive(now.time()), metrics)
    );
    Ok(())
}
