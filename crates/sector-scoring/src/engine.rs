//! ConfidenceScorer — computes all 8 factors, aggregates them with the
//! configured weights, then layers validation, calibration, statistics,
//! uncertainty, cross-validation, and benchmarking on top.

use std::sync::Arc;

use chrono::Utc;

use sector_core::config::ScoringConfig;
use sector_core::constants::{
    LEVEL_HIGH, LEVEL_LOW, LEVEL_MEDIUM, LEVEL_VERY_HIGH, SCORE_VERSION,
};
use sector_core::errors::ScoringError;
use sector_core::models::{
    ClassificationRequest, ClassificationResult, ConfidenceFactors, ConfidenceLevel,
    ConfidenceScore, ValidationStatus,
};
use sector_core::stats;

use crate::benchmark::{self, BenchmarkEngine};
use crate::{calibration, cross_validation, factors, statistics, uncertainty};
use crate::history::ScoreHistory;

/// Both text signals below this together mean the match is unsupported.
const LOW_SIGNAL: f64 = 0.2;

/// Assign the qualitative level for a score (inclusive upper cutoffs).
pub fn confidence_level(score: f64) -> ConfidenceLevel {
    if score >= LEVEL_VERY_HIGH {
        ConfidenceLevel::VeryHigh
    } else if score >= LEVEL_HIGH {
        ConfidenceLevel::High
    } else if score >= LEVEL_MEDIUM {
        ConfidenceLevel::Medium
    } else if score >= LEVEL_LOW {
        ConfidenceLevel::Low
    } else {
        ConfidenceLevel::VeryLow
    }
}

/// Multi-factor confidence scorer.
///
/// Stateless per call except for the shared [`ScoreHistory`], which feeds
/// calibration, statistics, and benchmarking across calls.
pub struct ConfidenceScorer {
    config: ScoringConfig,
    history: Arc<ScoreHistory>,
    benchmarks: BenchmarkEngine,
}

impl ConfidenceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        let history = Arc::new(ScoreHistory::with_capacity(config.history_capacity));
        Self {
            config,
            history,
            benchmarks: BenchmarkEngine::new(),
        }
    }

    /// Use a caller-supplied history, e.g. shared between scorers or
    /// isolated per tenant.
    pub fn with_history(mut self, history: Arc<ScoreHistory>) -> Self {
        self.history = history;
        self
    }

    /// The shared score history.
    pub fn history(&self) -> Arc<ScoreHistory> {
        Arc::clone(&self.history)
    }

    /// The active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one classification result against the originating request.
    ///
    /// Fails when the result carries no industry code — a "no
    /// classification" result cannot be scored.
    pub fn score(
        &self,
        result: &ClassificationResult,
        request: &ClassificationRequest,
    ) -> Result<ConfidenceScore, ScoringError> {
        let code = result.code.as_ref().ok_or(ScoringError::MissingCode)?;

        let factors = factors::compute(code, result, request, &self.config.rules);
        let base = self.config.weights.weighted_sum(&factors);

        let (validation_status, mut validation_messages) =
            validate_result(result, request, &factors);
        validation_messages.extend(enhanced_validation(&factors));

        let history = self.history.snapshot();
        let calibration = calibration::calibrate(base, &history, self.config.calibration_blend);
        let statistics = statistics::compute(base, &history);
        let uncertainty = uncertainty::quantify(base, &factors);
        let cross_validation = cross_validation::run(&factors, &self.config.weights);

        let benchmark = self.benchmarks.compute(base, code, request, &history);
        let overall_score = benchmark::apply_nudge(
            base,
            &benchmark,
            self.config.benchmark_quality_threshold,
        );

        let recommendations = recommendations(&factors, history.len());

        self.history.record(overall_score);

        tracing::debug!(
            event = "confidence_scored",
            code = %code.code,
            code_type = %code.code_type,
            overall_score,
            status = ?validation_status,
            history_len = history.len() + 1,
            "classification scored"
        );

        Ok(ConfidenceScore {
            overall_score,
            confidence_level: confidence_level(overall_score),
            validation_status,
            factors,
            validation_messages,
            recommendations,
            calibration,
            statistics,
            uncertainty,
            cross_validation,
            benchmark,
            score_version: SCORE_VERSION.to_string(),
            last_updated: Utc::now(),
        })
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Status plus messages. Invalid wins over warning; warning conditions
/// each append their own message.
fn validate_result(
    result: &ClassificationResult,
    request: &ClassificationRequest,
    factors: &ConfidenceFactors,
) -> (ValidationStatus, Vec<String>) {
    let mut messages = Vec::new();

    if result.confidence < 0.3 {
        messages.push(format!(
            "result confidence {:.2} is below the 0.30 minimum",
            result.confidence
        ));
        return (ValidationStatus::Invalid, messages);
    }

    if result.confidence < 0.5 {
        messages.push(format!(
            "result confidence {:.2} is below the 0.50 warning threshold",
            result.confidence
        ));
    }
    if request.business_name.trim().is_empty() {
        messages.push("business name is missing".to_string());
    }
    if factors.text_match < LOW_SIGNAL && factors.keyword_match < LOW_SIGNAL {
        messages.push(
            "both text match and keyword match are weak; the classification is unsupported"
                .to_string(),
        );
    }

    if messages.is_empty() {
        (ValidationStatus::Valid, messages)
    } else {
        (ValidationStatus::Warning, messages)
    }
}

/// Pairwise and single-factor diagnostics. Advisory only — these never
/// change the validation status.
fn enhanced_validation(factors: &ConfidenceFactors) -> Vec<String> {
    let mut messages = Vec::new();

    if factors.text_match > 0.7 && factors.keyword_match < 0.3 {
        messages.push(
            "high text match but low keyword match; keyword set may be stale".to_string(),
        );
    }
    if factors.name_match > 0.7 && factors.category_match < 0.2 {
        messages.push("name matches but category alignment is weak".to_string());
    }
    if factors.code_quality < 0.4 {
        messages.push("stored code confidence is low".to_string());
    }
    if factors.usage_frequency < 0.4 {
        messages.push("code type is rarely used for classification".to_string());
    }
    if factors.contextual < 0.5 {
        messages.push("contextual signals do not support this code".to_string());
    }
    if factors.validation < 0.5 {
        messages.push("over half of the validation rules failed".to_string());
    }

    messages
}

/// Threshold-gated scoring advice, deduplicated.
fn recommendations(factors: &ConfidenceFactors, history_len: usize) -> Vec<String> {
    let mut recs = Vec::new();

    if factors.keyword_match < 0.4 {
        recs.push("expand the code keyword set or enrich the business description".to_string());
    }
    if factors.text_match < 0.4 {
        recs.push("provide a longer business description for text matching".to_string());
    }
    if factors.name_match < 0.4 {
        recs.push("business name carries little industry signal; rely on description".to_string());
    }
    if factors.category_match < 0.4 {
        recs.push("review category assignment or extend the synonym table".to_string());
    }
    if history_len < 10 {
        recs.push("accumulate more scoring history to improve calibration".to_string());
    }

    stats::dedup_preserving_order(recs)
}
