//! Property tests: factor and score clamping over arbitrary inputs.

use proptest::prelude::*;

use sector_core::models::CodeType;
use sector_scoring::ConfidenceScorer;
use test_fixtures::{make_code, make_result};

fn arb_code_type() -> impl Strategy<Value = CodeType> {
    prop_oneof![
        Just(CodeType::Naics),
        Just(CodeType::Sic),
        Just(CodeType::Mcc),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn factors_and_score_stay_in_unit_range(
        name in ".{0,40}",
        description in ".{0,120}",
        website in ".{0,40}",
        code_description in ".{0,80}",
        category in ".{0,30}",
        code_confidence in 0.0f64..=1.0,
        result_confidence in 0.0f64..=1.0,
        code_type in arb_code_type(),
    ) {
        let code = make_code(
            "541511",
            code_type,
            &code_description,
            &category,
            &["alpha", "beta"],
            code_confidence,
        );
        let result = make_result(Some(code), result_confidence);
        let request = sector_core::models::ClassificationRequest {
            business_name: name,
            business_description: description,
            website,
            ..Default::default()
        };

        let scorer = ConfidenceScorer::default();
        let score = scorer.score(&result, &request).expect("scoring succeeds");

        prop_assert!((0.0..=1.0).contains(&score.overall_score));
        for factor in score.factors.as_array() {
            prop_assert!((0.0..=1.0).contains(&factor));
        }
        prop_assert!((0.0..=1.0).contains(&score.calibration.calibrated_score));
        prop_assert!((0.0..=1.0).contains(&score.uncertainty.uncertainty_score));
        for fold in &score.cross_validation.fold_scores {
            prop_assert!((0.0..=1.0).contains(fold));
        }
    }
}
