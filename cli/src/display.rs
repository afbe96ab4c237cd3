use sixdegrees_core::ConnectionReport;
use sixdegrees_core::pathfinding::{PathStep, WeightedPath};

use crate::args::Args;
use crate::colors::ColorScheme;

pub fn display_search_info(args: &Args, colors: &ColorScheme) {
    println!(
        "🎵 Finding path from {} to {}",
        colors.artist(&args.start),
        colors.artist(&args.target)
    );

    if args.max_depth >= 0 {
        println!(
            "🔝 Limiting the search to {} hops",
            colors.count(args.max_depth as usize)
        );
    }
    if let Some(strategy) = args.strategy() {
        println!("⚙️  Ranking collaborations by {}", strategy);
    }
    if args.catalog_file.is_some() {
        println!("📦 Using offline catalog");
    }

    println!("🔍 Searching...");
}

pub fn display_report(report: &ConnectionReport, args: &Args, colors: &ColorScheme) {
    if args.verbose {
        println!("\n---\n");
    }

    match &report.search.path {
        Some(path) => {
            if args.verbose {
                println!(
                    "{} Found path with {} steps:\n",
                    colors.success("✅"),
                    colors.count(path.len() - 1)
                );
            }
            println!("{}", format_path_flow(path, colors));

            if !args.quiet {
                println!();
                for (step_index, step) in report.steps.iter().enumerate() {
                    println!("{}", format_step(step_index, step, colors));
                }
            }
            if let Some(ranked) = &report.ranked {
                println!();
                display_ranked_path(ranked, args, colors);
            }
        }
        None => {
            println!(
                "{} {} and {} ({})",
                colors.error("❌ No path found between"),
                colors.artist(&report.start),
                colors.artist(&report.target),
                colors.outcome(&report.search.outcome)
            );
            if report.search.degraded {
                println!(
                    "{}",
                    colors.error("⚠️  Some catalog requests failed; a connection may have been missed")
                );
            }
        }
    }

    if args.verbose {
        display_search_statistics(report, colors);
    }
}

pub fn format_path_flow(path: &[String], colors: &ColorScheme) -> String {
    path.iter()
        .map(|name| colors.artist(name).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_step(step_index: usize, step: &PathStep, colors: &ColorScheme) -> String {
    format!(
        "{:3} {} → {} on {}",
        colors.step_number(step_index),
        colors.artist(&step.from),
        colors.artist(&step.to),
        colors.track(&step.track)
    )
}

fn display_ranked_path(ranked: &WeightedPath, args: &Args, colors: &ColorScheme) {
    println!(
        "⚖️  Cheapest path by {} (total weight {}):",
        ranked.strategy,
        colors.weight(ranked.total)
    );
    println!("{}", format_path_flow(&ranked.artists(), colors));

    if !args.quiet {
        for (step_index, edge) in ranked.steps.iter().enumerate() {
            println!(
                "{:3} {} → {} [{}]",
                colors.step_number(step_index),
                colors.artist(&edge.from),
                colors.artist(&edge.to),
                colors.weight(edge.weight)
            );
        }
    }
}

fn display_search_statistics(report: &ConnectionReport, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} artists ({} discovered) with {} catalog calls in {} sec",
        colors.stats("📊"),
        colors.count(report.search.artists_visited()),
        colors.count(report.artists_discovered),
        colors.count(report.search.catalog_calls),
        colors.seconds(report.search.elapsed)
    );
}
