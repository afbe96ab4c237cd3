use indicatif::{ProgressBar, ProgressStyle};
use sixdegrees_core::{ConnectionError, ConnectionReport, find_connection};
use std::time::Duration;

use crate::app::SixDegreesApp;
use crate::args::Args;

/// Runs the connection search, with a spinner on stderr unless the output
/// is quiet, verbose or JSON.
pub fn run_search(app: &SixDegreesApp, args: &Args) -> Result<ConnectionReport, ConnectionError> {
    let config = args.search_config();
    let spinner = (!args.quiet && !args.verbose && !args.json).then(searching_spinner);

    let report = find_connection(
        app.catalog.as_ref(),
        &app.album_cache,
        &args.start,
        &args.target,
        &config,
    );

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    report
}

fn searching_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message("🔍 Searching...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
