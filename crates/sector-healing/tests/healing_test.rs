//! Tests for sector-healing: plan selection, ROI ordering, budget cuts,
//! phase bucketing, and completeness reports.

use sector_core::config::{CompletenessConfig, ImprovementConfig};
use sector_core::models::{
    CompletenessLevel, CompletenessRule, ConfidenceState, Priority, RecordView,
};
use sector_healing::{CompletenessValidator, ImprovementEngine};
use test_fixtures::{programming_services_code, tech_solutions_request};

// ─── Improvement plans ───

#[test]
fn baseline_plan_selects_all_applicable_strategies_in_roi_order() {
    let engine = ImprovementEngine::default();
    let plan = engine.generate_plan();

    assert!(!plan.strategies.is_empty());
    for pair in plan.strategies.windows(2) {
        assert!(
            pair[0].roi >= pair[1].roi,
            "strategies must be sorted by ROI descending"
        );
    }
    // Highest ROI in the catalog for the baseline snapshot.
    assert_eq!(plan.strategies[0].name, "grow_calibration_sample");
}

#[test]
fn target_is_proportional_and_capped() {
    let engine = ImprovementEngine::default();

    let modest = engine.generate_plan_for(&ConfidenceState {
        overall_confidence: 0.60,
        ..ConfidenceState::baseline()
    });
    assert!((modest.target_confidence - 0.66).abs() < 1e-9);

    let near_ceiling = engine.generate_plan_for(&ConfidenceState {
        overall_confidence: 0.93,
        ..ConfidenceState::baseline()
    });
    assert!((near_ceiling.target_confidence - 0.95).abs() < 1e-9);
}

#[test]
fn expected_outcome_never_exceeds_the_target() {
    let engine = ImprovementEngine::default();
    let plan = engine.generate_plan();
    assert!(plan.expected_outcome <= plan.target_confidence + 1e-9);
    assert!(plan.expected_outcome >= plan.current.overall_confidence);
}

#[test]
fn budget_cut_keeps_the_best_roi_strategies_that_fit() {
    let engine = ImprovementEngine::new(ImprovementConfig {
        budget: Some(5_000.0),
        ..Default::default()
    });
    let plan = engine.generate_plan();

    let total: f64 = plan.strategies.iter().map(|s| s.cost).sum();
    assert!(total <= 5_000.0);
    assert!(!plan.strategies.is_empty());
    // The cheapest high-ROI entries fit; the expensive structural one never does.
    assert!(plan
        .strategies
        .iter()
        .all(|s| s.name != "add_classification_strategy"));
}

#[test]
fn phases_bucket_by_priority() {
    let engine = ImprovementEngine::default();
    let plan = engine.generate_plan();

    assert_eq!(plan.phases.len(), 3);
    let by_name = |name: &str| {
        plan.strategies
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.priority)
    };
    for phase in &plan.phases {
        let expected = match phase.name.as_str() {
            "quick wins" => Priority::High,
            "core improvements" => Priority::Medium,
            _ => Priority::Low,
        };
        for name in &phase.strategy_names {
            assert_eq!(by_name(name), Some(expected));
        }
    }
    assert!(plan.timeline_days > 0);
}

#[test]
fn healthy_state_produces_an_empty_plan() {
    let engine = ImprovementEngine::default();
    let healthy = ConfidenceState {
        overall_confidence: 0.9,
        factor_averages: sector_core::models::ConfidenceFactors {
            text_match: 0.9,
            keyword_match: 0.9,
            name_match: 0.9,
            category_match: 0.9,
            code_quality: 0.9,
            usage_frequency: 0.9,
            contextual: 0.9,
            validation: 0.9,
        },
        trend: 0.01,
        sample_size: 800,
    };

    let plan = engine.generate_plan_for(&healthy);
    assert!(plan.strategies.is_empty());
    assert_eq!(plan.timeline_days, 0);
    assert_eq!(plan.total_cost, 0.0);
}

#[test]
fn plan_recommendations_contain_no_duplicates() {
    let engine = ImprovementEngine::default();
    let plan = engine.generate_plan();

    let mut unique = plan.recommendations.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), plan.recommendations.len());
}

// ─── Completeness ───

#[test]
fn fully_populated_code_is_excellent() {
    let mut code = programming_services_code();
    code.subcategory = Some("Custom Development".to_string());
    let validator = CompletenessValidator::default();

    let report = validator.validate(&RecordView::industry_code(&code));

    assert_eq!(report.overall, 1.0);
    assert_eq!(report.level, CompletenessLevel::Excellent);
    assert!(report.missing_required.is_empty());
    assert!(report.passed);
}

#[test]
fn missing_required_field_fails_regardless_of_ratio() {
    let mut code = programming_services_code();
    code.description.clear();
    code.subcategory = Some("Custom Development".to_string());
    let validator = CompletenessValidator::default();

    let report = validator.validate(&RecordView::industry_code(&code));

    assert!(report.missing_required.contains(&"description".to_string()));
    assert!(!report.passed);
    assert!(report.overall < 1.0);
}

#[test]
fn sparse_request_lands_low_on_the_scale() {
    let request = sector_core::models::ClassificationRequest::default();
    let validator = CompletenessValidator::default();

    let report = validator.validate(&RecordView::classification_request(&request));

    assert_eq!(report.overall, 0.0);
    assert_eq!(report.level, CompletenessLevel::Critical);
    assert!(!report.passed);
}

#[test]
fn threshold_rules_gate_the_report() {
    let validator = CompletenessValidator::new(CompletenessConfig {
        rules: vec![CompletenessRule {
            name: "strict".to_string(),
            min_overall: 0.99,
        }],
        ..Default::default()
    });
    // Request without optional website/keywords/preferences... except the
    // fixture fills website and preferred types; drop the keywords only.
    let request = tech_solutions_request();

    let report = validator.validate(&RecordView::classification_request(&request));

    assert!(report.overall < 0.99);
    assert!(report.rule_outcomes.iter().any(|r| !r.passed));
    assert!(!report.passed);
}
