//! Benchmarking: contextualize a score against industry, code-type,
//! historical, and peer references.

use moka::sync::Cache;

use sector_core::models::{
    BenchmarkComparison, BenchmarkData, BenchmarkMetrics, BenchmarkTrend, ClassificationRequest,
    CodeType, IndustryCode, PerformanceBand,
};
use sector_core::stats;

/// Known per-category reference scores.
const INDUSTRY_BENCHMARKS: &[(&str, f64)] = &[
    ("technology", 0.82),
    ("food service", 0.75),
    ("retail", 0.72),
    ("healthcare", 0.78),
    ("finance", 0.77),
    ("construction", 0.70),
];

/// History entries considered by the historical benchmark.
const HISTORICAL_WINDOW: usize = 100;

/// History entries considered by the trend estimate.
const TREND_WINDOW: usize = 10;
const TREND_EPSILON: f64 = 0.02;

const PEER_BASE: f64 = 0.70;
/// Name length suggesting an established, well-described business.
const ESTABLISHED_NAME_LEN: usize = 20;

/// Relative nudge applied to scores that clearly beat or trail benchmark.
const NUDGE: f64 = 0.02;

fn code_type_default(code_type: CodeType) -> f64 {
    match code_type {
        CodeType::Naics => 0.80,
        CodeType::Sic => 0.68,
        CodeType::Mcc => 0.72,
    }
}

/// Benchmark computation with per-category and per-type caches.
pub struct BenchmarkEngine {
    category_cache: Cache<String, f64>,
    type_cache: Cache<CodeType, f64>,
}

impl BenchmarkEngine {
    pub fn new() -> Self {
        Self {
            category_cache: Cache::builder().max_capacity(1024).build(),
            type_cache: Cache::builder().max_capacity(8).build(),
        }
    }

    fn industry_benchmark(&self, category: &str, code_type: CodeType) -> f64 {
        let key = category.trim().to_lowercase();
        self.category_cache.get_with(key.clone(), || {
            INDUSTRY_BENCHMARKS
                .iter()
                .find(|(name, _)| key.contains(name))
                .map(|(_, value)| *value)
                .unwrap_or_else(|| code_type_default(code_type))
        })
    }

    fn code_type_benchmark(&self, code_type: CodeType) -> f64 {
        self.type_cache
            .get_with(code_type, || code_type_default(code_type))
    }

    /// Compute the full benchmark context for one score.
    pub fn compute(
        &self,
        score: f64,
        code: &IndustryCode,
        request: &ClassificationRequest,
        history: &[f64],
    ) -> BenchmarkData {
        let industry = self.industry_benchmark(&code.category, code.code_type);
        let code_type = self.code_type_benchmark(code.code_type);
        let historical = historical_benchmark(history);
        let peer = peer_benchmark(request, code.code_type);
        let overall = stats::mean(&[industry, code_type, historical, peer]);

        let metrics = BenchmarkMetrics {
            industry_benchmark: industry,
            code_type_benchmark: code_type,
            historical_benchmark: historical,
            peer_benchmark: peer,
            overall_benchmark: overall,
        };

        BenchmarkData {
            comparison: compare(score, overall),
            benchmark_percentile: percentile(score, history),
            benchmark_trend: trend(history),
            benchmark_quality: quality(history.len()),
            benchmark_metrics: metrics,
        }
    }
}

impl Default for BenchmarkEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn historical_benchmark(history: &[f64]) -> f64 {
    if history.is_empty() {
        return 0.5;
    }
    let start = history.len().saturating_sub(HISTORICAL_WINDOW);
    stats::mean(&history[start..])
}

fn peer_benchmark(request: &ClassificationRequest, code_type: CodeType) -> f64 {
    let mut benchmark = PEER_BASE;
    if request.business_name.len() > ESTABLISHED_NAME_LEN {
        benchmark += 0.05;
    }
    if code_type == CodeType::Naics {
        benchmark += 0.05;
    }
    benchmark.min(1.0)
}

/// Rank of the score among historical scores, 0–100. Median when there
/// is no history to rank against.
fn percentile(score: f64, history: &[f64]) -> f64 {
    if history.is_empty() {
        return 50.0;
    }
    let at_or_below = history.iter().filter(|h| **h <= score).count();
    100.0 * at_or_below as f64 / history.len() as f64
}

fn trend(history: &[f64]) -> BenchmarkTrend {
    let start = history.len().saturating_sub(TREND_WINDOW);
    let recent = &history[start..];
    if recent.len() < 4 {
        return BenchmarkTrend::Stable;
    }
    let mid = recent.len() / 2;
    let delta = stats::mean(&recent[mid..]) - stats::mean(&recent[..mid]);
    if delta > TREND_EPSILON {
        BenchmarkTrend::Improving
    } else if delta < -TREND_EPSILON {
        BenchmarkTrend::Declining
    } else {
        BenchmarkTrend::Stable
    }
}

/// Confidence in the benchmark itself, asymptotic in history size.
fn quality(sample_size: usize) -> f64 {
    let n = sample_size as f64;
    0.6 + 0.4 * n / (n + 100.0)
}

fn compare(score: f64, benchmark: f64) -> BenchmarkComparison {
    let gap = score - benchmark;
    let band = if gap >= 0.15 {
        PerformanceBand::Excellent
    } else if gap >= 0.05 {
        PerformanceBand::Good
    } else if gap >= -0.05 {
        PerformanceBand::Average
    } else if gap >= -0.15 {
        PerformanceBand::BelowAverage
    } else {
        PerformanceBand::Poor
    };

    BenchmarkComparison {
        overall_performance: band,
        performance_gap: gap,
        improvement_potential: (benchmark + 0.15 - score).clamp(0.0, 1.0),
    }
}

/// Nudge a score by ±2% when the benchmark is trustworthy enough and the
/// comparison is decisive; unchanged otherwise.
pub fn apply_nudge(score: f64, benchmark: &BenchmarkData, quality_threshold: f64) -> f64 {
    if benchmark.benchmark_quality <= quality_threshold {
        return score;
    }
    let nudged = match benchmark.comparison.overall_performance {
        PerformanceBand::Excellent => score * (1.0 + NUDGE),
        PerformanceBand::Poor => score * (1.0 - NUDGE),
        _ => score,
    };
    nudged.clamp(0.0, 1.0)
}
