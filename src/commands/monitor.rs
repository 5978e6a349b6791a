//! Dashboard command handler.
//!
//! Loads the watch list, opens every file and runs the TUI dashboard.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::{load_config, FileRegistry, SkippedFile};
use crate::ui::monitor_tui::{run_dashboard, DashboardConfig, DEFAULT_INTERVAL_SECS};
use crate::ui::write_warning;

/// Execute the dashboard command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config_path = matches
        .get_one::<PathBuf>("config")
        .context("Please provide a configuration file")?;
    let interval_secs = matches
        .get_one::<u64>("delay")
        .copied()
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    log::info!("Using config:  {}", config_path.display());
    log::info!("Using timeout: {} seconds", interval_secs);

    // Fatal here, before the terminal is touched
    let paths = load_config(config_path)?;

    let config = DashboardConfig {
        interval: Duration::from_secs(interval_secs),
        ..Default::default()
    };

    let (registry, skipped) = FileRegistry::open_all(&paths, config.limits);
    report_skipped(&mut io::stderr().lock(), &skipped)?;

    run_dashboard(registry, config).context("Dashboard stopped")
}

/// Write one warning per watch list entry that could not be opened
pub fn report_skipped<W: Write>(out: &mut W, skipped: &[SkippedFile]) -> io::Result<()> {
    for file in skipped {
        write_warning(out, &file.to_string())?;
    }
    Ok(())
}
