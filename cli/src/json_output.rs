use serde::{Deserialize, Serialize};
use sixdegrees_core::{ConnectionReport, SearchOutcome, StrategyKind};

use crate::args::Args;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub start: String,
    pub target: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub max_depth: Option<usize>,
    pub rank: Option<StrategyKind>,
    pub album_limit: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub outcome: SearchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked: Option<JsonRanked>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStep {
    pub from: String,
    pub to: String,
    pub track: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonRanked {
    pub strategy: StrategyKind,
    pub artists: Vec<String>,
    pub total_weight: f64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub artists_visited: usize,
    pub artists_discovered: usize,
    pub catalog_calls: usize,
}

pub fn create_json_output(report: &ConnectionReport, args: &Args) -> JsonOutput {
    let path = report.search.path.as_ref().map(|_| {
        report
            .steps
            .iter()
            .map(|step| JsonStep {
                from: step.from.clone(),
                to: step.to.clone(),
                track: step.track.clone(),
            })
            .collect()
    });

    let ranked = report.ranked.as_ref().map(|ranked| JsonRanked {
        strategy: ranked.strategy,
        artists: ranked.artists(),
        total_weight: ranked.total,
    });

    JsonOutput {
        query: JsonQuery {
            start: report.start.clone(),
            target: report.target.clone(),
            options: JsonOptions {
                max_depth: usize::try_from(args.max_depth).ok(),
                rank: args.strategy(),
                album_limit: args.album_limit,
            },
        },
        result: JsonResult {
            found: report.found(),
            outcome: report.search.outcome,
            path,
            ranked,
        },
        stats: JsonStats {
            search_time_ms: (report.search.elapsed * 1000.0) as u64,
            artists_visited: report.search.artists_visited(),
            artists_discovered: report.artists_discovered,
            catalog_calls: report.search.catalog_calls,
        },
    }
}
