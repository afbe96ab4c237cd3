use clap::Parser;
use sixdegrees::colors::ColorScheme;
use sixdegrees::display::{display_report, display_search_info};
use sixdegrees::json_output::create_json_output;
use sixdegrees::search::run_search;
use sixdegrees::{Args, SixDegreesApp};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);

    let colors = ColorScheme::new(!args.no_color && !args.json);
    if let Err(error) = run(&args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = SixDegreesApp::new(args.catalog_file.as_deref())?;

    if args.verbose && !args.json {
        display_search_info(args, colors);
    }

    let report = run_search(&app, args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&create_json_output(&report, args))?);
    } else {
        display_report(&report, args, colors);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sixdegrees=debug,sixdegrees_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
