//! Fixed catalog of remediation strategies, each gated by a predicate on
//! the confidence snapshot.

use sector_core::models::{ConfidenceState, Priority};

/// A catalog entry: plan metadata plus its applicability predicate.
pub struct CatalogStrategy {
    pub name: &'static str,
    pub description: &'static str,
    pub impact: f64,
    pub effort: f64,
    pub priority: Priority,
    pub applies: fn(&ConfidenceState) -> bool,
}

/// The remediation catalog, in no particular order — selection sorts by
/// return on investment.
pub const CATALOG: &[CatalogStrategy] = &[
    CatalogStrategy {
        name: "expand_keyword_dictionaries",
        description: "expand per-code keyword sets from recent classification misses",
        impact: 0.30,
        effort: 0.30,
        priority: Priority::High,
        applies: |s| s.factor_averages.keyword_match < 0.6,
    },
    CatalogStrategy {
        name: "enrich_text_preprocessing",
        description: "add stemming and phrase normalization to the text matcher",
        impact: 0.25,
        effort: 0.40,
        priority: Priority::Medium,
        applies: |s| s.factor_averages.text_match < 0.6,
    },
    CatalogStrategy {
        name: "grow_synonym_table",
        description: "extend the category synonym table with observed business vocabulary",
        impact: 0.20,
        effort: 0.20,
        priority: Priority::Medium,
        applies: |s| s.factor_averages.category_match < 0.6,
    },
    CatalogStrategy {
        name: "tune_validation_rules",
        description: "recalibrate threshold rules against labeled outcomes",
        impact: 0.15,
        effort: 0.25,
        priority: Priority::Low,
        applies: |s| s.factor_averages.validation < 0.8,
    },
    CatalogStrategy {
        name: "grow_calibration_sample",
        description: "score more historical classifications to densify the calibration sample",
        impact: 0.20,
        effort: 0.15,
        priority: Priority::High,
        applies: |s| s.sample_size < 500,
    },
    CatalogStrategy {
        name: "add_classification_strategy",
        description: "add an independent classification strategy to the voting pool",
        impact: 0.35,
        effort: 0.70,
        priority: Priority::Low,
        applies: |s| s.overall_confidence < 0.7,
    },
];
