use clap::Parser;
use sixdegrees_core::{SearchConfig, StrategyKind};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "sixdegrees")]
#[command(about = "Find the chain of collaborations linking two music artists")]
pub struct Args {
    /// Artist to start from
    pub start: String,

    /// Artist to reach
    pub target: String,

    /// Maximum number of hops (negative = unbounded)
    #[arg(short = 'd', long, value_name = "HOPS", default_value = "-1", allow_negative_numbers = true)]
    pub max_depth: i64,

    /// Re-rank the discovered collaborations by a weight strategy
    #[arg(short, long, value_name = "STRATEGY", value_parser = ["popularity", "collaboration", "genre"])]
    pub rank: Option<String>,

    /// Read the catalog from a JSON snapshot instead of Spotify
    #[arg(short = 'f', long, value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Albums fetched per discovered artist
    #[arg(short = 'a', long, value_name = "COUNT", default_value = "6")]
    pub album_limit: usize,

    /// Albums fetched for the start artist
    #[arg(long, value_name = "COUNT", default_value = "15")]
    pub source_album_limit: usize,

    /// Give up after this many catalog requests
    #[arg(short = 'c', long, value_name = "COUNT")]
    pub max_calls: Option<usize>,

    /// Delay after each artist's albums were fetched
    #[arg(long, value_name = "MS", default_value = "300")]
    pub pacing_ms: u64,

    /// Skip looking up featured artists (no popularity or genres for them)
    #[arg(long)]
    pub no_resolve_credits: bool,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - trace the search and show statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn strategy(&self) -> Option<StrategyKind> {
        self.rank.as_deref().map(StrategyKind::from)
    }

    pub fn search_config(&self) -> SearchConfig {
        let config = SearchConfig::new(SearchConfig::max_depth_from_hops(self.max_depth), self.verbose)
            .with_album_limits(self.source_album_limit, self.album_limit)
            .with_max_catalog_calls(self.max_calls)
            .with_rank(self.strategy())
            .with_resolve_credits(!self.no_resolve_credits)
            .with_pacing(Duration::from_millis(self.pacing_ms));

        if self.catalog_file.is_some() {
            config.offline()
        } else {
            config
        }
    }
}
