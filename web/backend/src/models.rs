use serde::{Deserialize, Serialize};
use sixdegrees_core::{ConnectionReport, SearchOutcome, StrategyKind};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct PathQuery {
    pub start: String,
    pub target: String,
    /// Negative means unbounded; missing uses the server default.
    #[serde(default)]
    pub max_depth: Option<i64>,
    #[serde(default)]
    pub rank: Option<StrategyKind>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct PathStepResponse {
    pub from: String,
    pub to: String,
    pub track: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct WeightedStepResponse {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RankedResponse {
    pub strategy: StrategyKind,
    pub artists: Vec<String>,
    pub steps: Vec<WeightedStepResponse>,
    pub total_weight: f64,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SearchStats {
    pub artists_visited: usize,
    pub artists_discovered: usize,
    pub catalog_calls: usize,
    pub duration_ms: u64,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct PathResponse {
    pub start: String,
    pub target: String,
    pub found: bool,
    pub outcome: SearchOutcome,
    pub path: Option<Vec<String>>,
    pub steps: Vec<PathStepResponse>,
    pub step_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked: Option<RankedResponse>,
    pub search_stats: SearchStats,
    /// Catalog failures may have hidden collaborations; such answers are not memoised.
    pub degraded: bool,
}

impl From<&ConnectionReport> for PathResponse {
    fn from(report: &ConnectionReport) -> Self {
        let steps: Vec<PathStepResponse> = report
            .steps
            .iter()
            .map(|step| PathStepResponse {
                from: step.from.clone(),
                to: step.to.clone(),
                track: step.track.clone(),
            })
            .collect();

        let ranked = report.ranked.as_ref().map(|ranked| RankedResponse {
            strategy: ranked.strategy,
            artists: ranked.artists(),
            steps: ranked
                .steps
                .iter()
                .map(|edge| WeightedStepResponse {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight,
                })
                .collect(),
            total_weight: ranked.total,
        });

        Self {
            start: report.start.clone(),
            target: report.target.clone(),
            found: report.found(),
            outcome: report.search.outcome,
            path: report.search.path.clone(),
            step_count: steps.len(),
            steps,
            ranked,
            search_stats: SearchStats {
                artists_visited: report.search.artists_visited(),
                artists_discovered: report.artists_discovered,
                catalog_calls: report.search.catalog_calls,
                duration_ms: (report.search.elapsed * 1000.0) as u64,
            },
            degraded: report.search.degraded,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub cached_albums: usize,
    pub album_fetches: usize,
    pub cached_responses: u64,
    pub searches_run: usize,
}
