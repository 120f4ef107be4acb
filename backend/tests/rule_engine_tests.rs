//! Tests for the fertilizer rule engine
//! Verifies fallback resolution, linear area scaling, and idempotence

use proptest::prelude::*;
use shared::{compute_base_advice, Confidence, Language, RuleTable, UserContext, SOURCES};

/// Helper to build a context for a crop/soil/area combination
fn context(crop: &str, soil: &str, area: f64) -> UserContext {
    UserContext {
        region: "Punjab".to_string(),
        crop: crop.to_string(),
        area,
        soil_type: soil.to_string(),
        season: "Rabi".to_string(),
        sowing_date: None,
        language: Language::English,
        images: vec![],
    }
}

// =============================================================================
// Fallback chain: exact crop+soil -> crop default -> global default
// =============================================================================

mod fallback_resolution {
    use super::*;

    #[test]
    fn exact_crop_and_soil_match() {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context("Wheat", "Alluvial", 1.0));
        assert_eq!((advice.urea, advice.dap, advice.mop), (120, 60, 40));
    }

    #[test]
    fn unknown_soil_falls_back_to_crop_default() {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context("Wheat", "Laterite", 1.0));
        assert_eq!((advice.urea, advice.dap, advice.mop), (110, 55, 35));
    }

    #[test]
    fn unknown_crop_falls_back_to_global_default() {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context("Quinoa", "Alluvial", 1.0));
        assert_eq!((advice.urea, advice.dap, advice.mop), (100, 50, 40));
    }

    #[test]
    fn never_fails_for_arbitrary_inputs() {
        let table = RuleTable::standard();
        for crop in ["", "Jute", "wheat", "🌾"] {
            for soil in ["", "Sandy", "black"] {
                let advice = compute_base_advice(&table, &context(crop, soil, 1.5));
                assert!(advice.urea > 0);
            }
        }
    }
}

// =============================================================================
// Area scaling and rounding
// =============================================================================

mod area_scaling {
    use super::*;

    #[test]
    fn quantities_scale_linearly_with_area() {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context("Wheat", "Alluvial", 2.0));
        assert_eq!((advice.urea, advice.dap, advice.mop), (240, 120, 80));
    }

    #[test]
    fn fractional_area_rounds_half_up() {
        let table = RuleTable::standard();
        // Wheat/Black at 1.25 acres: 125 / 62.5 / 37.5 -> 125 / 63 / 38
        let advice = compute_base_advice(&table, &context("Wheat", "Black", 1.25));
        assert_eq!((advice.urea, advice.dap, advice.mop), (125, 63, 38));
    }

    #[test]
    fn zero_area_behaves_as_one_acre() {
        let table = RuleTable::standard();
        let at_zero = compute_base_advice(&table, &context("Rice", "Alluvial", 0.0));
        let at_one = compute_base_advice(&table, &context("Rice", "Alluvial", 1.0));
        assert_eq!(at_zero, at_one);
    }

    #[test]
    fn negative_area_behaves_as_one_acre() {
        let table = RuleTable::standard();
        let negative = compute_base_advice(&table, &context("Wheat", "Black", -3.0));
        let one = compute_base_advice(&table, &context("Wheat", "Black", 1.0));
        assert_eq!(negative, one);
    }

    #[test]
    fn nan_area_behaves_as_one_acre() {
        let table = RuleTable::standard();
        let nan = compute_base_advice(&table, &context("Wheat", "Black", f64::NAN));
        let one = compute_base_advice(&table, &context("Wheat", "Black", 1.0));
        assert_eq!(nan, one);
    }
}

// =============================================================================
// Fixed fields and idempotence
// =============================================================================

mod advice_shape {
    use super::*;

    #[test]
    fn schedule_has_three_ordered_steps() {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context("Rice", "Alluvial", 1.0));
        assert_eq!(advice.schedule.len(), 3);
        assert!(advice.schedule[0].starts_with("Basal Dose"));
        assert!(advice.schedule[1].starts_with("First Top Dressing"));
        assert!(advice.schedule[2].starts_with("Second Top Dressing"));
    }

    #[test]
    fn confidence_is_high_and_source_is_first_citation() {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context("Wheat", "Alluvial", 1.0));
        assert_eq!(advice.confidence, Confidence::High);
        assert_eq!(advice.source, SOURCES[0]);
    }

    #[test]
    fn explanation_is_left_empty_for_enrichment() {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context("Wheat", "Alluvial", 1.0));
        assert!(advice.explanation.is_empty());
        assert!(advice.disease_findings.is_none());
    }

    #[test]
    fn identical_context_yields_identical_output() {
        let table = RuleTable::standard();
        let ctx = context("Rice", "Red", 3.7);
        let first = compute_base_advice(&table, &ctx);
        let second = compute_base_advice(&table, &ctx);
        assert_eq!(first, second);
    }
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The engine is total: any crop/soil/area input produces a
    /// recommendation with positive quantities
    #[test]
    fn prop_engine_is_total(
        crop in "\\PC{0,12}",
        soil in "\\PC{0,12}",
        area in -100.0f64..100.0f64,
    ) {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context(&crop, &soil, area));
        prop_assert!(advice.urea > 0);
        prop_assert!(advice.dap > 0);
        prop_assert!(advice.mop > 0);
    }

    /// For whole-acre areas the quantities are exact multiples of the
    /// resolved base rates
    #[test]
    fn prop_whole_acres_scale_exactly(acres in 1u32..50u32) {
        let table = RuleTable::standard();
        let advice = compute_base_advice(&table, &context("Wheat", "Alluvial", acres as f64));
        prop_assert_eq!(advice.urea, 120 * acres);
        prop_assert_eq!(advice.dap, 60 * acres);
        prop_assert_eq!(advice.mop, 40 * acres);
    }

    /// Non-positive areas are indistinguishable from one acre
    #[test]
    fn prop_non_positive_area_equals_one_acre(area in -50.0f64..=0.0f64) {
        let table = RuleTable::standard();
        let coerced = compute_base_advice(&table, &context("Rice", "Alluvial", area));
        let one = compute_base_advice(&table, &context("Rice", "Alluvial", 1.0));
        prop_assert_eq!(coerced, one);
    }
}
