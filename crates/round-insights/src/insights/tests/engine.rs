use super::common::*;
use crate::insights::policy::{format_average, format_magnitude, format_to_par};
use crate::insights::variants::{fill, PoolKey};
use crate::insights::{
    HolesPlayed, InsightLevel, InsightPath, MissingStats, OutcomeCode, PerformanceBand,
    RoundContext, RoundEvidence, StrokesGainedBreakdown, VariantSelection,
};

#[test]
fn near_even_standout_with_putting_leak() {
    let outcome = engine().generate(&request(
        facts(75, 3, Some(74.0), PerformanceBand::Expected),
        breakdown(0.2, -0.7, -2.1, -0.3),
    ));

    assert_eq!(
        outcome.outcomes,
        [OutcomeCode::M1D, OutcomeCode::M2D, OutcomeCode::M3C]
    );
    assert!(outcome.messages[0].contains("Off The Tee"), "{}", outcome.messages[0]);
    assert!(outcome.messages[0].contains("+0.2 strokes"), "{}", outcome.messages[0]);
    assert!(outcome.messages[1].contains("Putting"), "{}", outcome.messages[1]);
    assert!(outcome.messages[1].contains("2.1 strokes"), "{}", outcome.messages[1]);
    assert!(outcome.messages[2].starts_with("Next round:"));
    assert!(outcome.messages[2].contains("lag-putting drill"), "{}", outcome.messages[2]);
    assert!(!outcome.messages[2].to_lowercase().contains("track"));
    assert_eq!(sentence_count(&outcome.messages[2]), 1);
    assert_eq!(
        outcome.levels,
        [InsightLevel::Success, InsightLevel::Warning, InsightLevel::Info]
    );
    assert_clean(&outcome);
}

#[test]
fn score_only_round_without_baseline_asks_for_every_stat() {
    let mut round = facts(90, 18, None, PerformanceBand::Below);
    round.evidence = RoundEvidence::default();

    let outcome = engine().generate(&request(round, StrokesGainedBreakdown::default()));

    assert_eq!(
        outcome.outcomes,
        [OutcomeCode::M1A, OutcomeCode::M2A, OutcomeCode::M3A]
    );
    assert!(outcome.messages[0].contains("90"));
    assert!(
        outcome.messages[2].contains("FIR, GIR, putts, and penalties"),
        "{}",
        outcome.messages[2]
    );
    assert_eq!(sentence_count(&outcome.messages[2]), 2);
    assert_eq!(outcome.levels[1], InsightLevel::Info);
    assert_eq!(outcome.trace.missing_count, 4);
    assert!(outcome.trace.selection.is_empty());
    assert_clean(&outcome);
}

#[test]
fn identical_requests_render_identical_bytes() {
    let request = request(
        facts(81, 9, Some(83.5), PerformanceBand::Above),
        breakdown(1.1, -0.4, -1.3, 0.0),
    );
    let engine = engine();

    let first = engine.generate(&request);
    let second = engine.generate(&request);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn defining_message_level_follows_band() {
    for band in PerformanceBand::ordered() {
        let outcome = engine().generate(&request(
            facts(80, 8, Some(82.0), band),
            breakdown(0.9, -0.8, -0.1, 0.0),
        ));
        let expected = match band {
            PerformanceBand::Above | PerformanceBand::Great => InsightLevel::Great,
            _ => InsightLevel::Success,
        };
        assert_eq!(outcome.levels[0], expected, "band {band:?}");
    }
}

#[test]
fn great_round_still_warns_about_its_leak() {
    let outcome = engine().generate(&request(
        facts(70, -2, Some(78.0), PerformanceBand::Great),
        breakdown(2.4, 1.9, -1.2, 0.1),
    ));
    assert_eq!(outcome.outcomes[0], OutcomeCode::M1C);
    assert_eq!(outcome.levels[0], InsightLevel::Great);
    assert_eq!(outcome.outcomes[1], OutcomeCode::M2D);
    assert_eq!(outcome.levels[1], InsightLevel::Warning);
}

#[test]
fn opportunity_boundary_is_inclusive_at_neutral_band() {
    let neutral = engine().generate(&request(
        facts(78, 6, Some(79.0), PerformanceBand::Expected),
        breakdown(0.9, -0.30, 0.4, 0.1),
    ));
    assert_eq!(neutral.outcomes[1], OutcomeCode::M2C);
    assert_eq!(neutral.levels[1], InsightLevel::Success);

    let leak = engine().generate(&request(
        facts(78, 6, Some(79.0), PerformanceBand::Expected),
        breakdown(0.9, -0.31, 0.4, 0.1),
    ));
    assert_eq!(leak.outcomes[1], OutcomeCode::M2D);
    assert_eq!(leak.levels[1], InsightLevel::Warning);
}

fn score_only(score: u16, avg: f64, holes: HolesPlayed) -> crate::insights::InsightOutcome {
    let mut round = facts(score, 0, Some(avg), PerformanceBand::Expected);
    round.holes_played = holes;
    round.evidence = RoundEvidence::default();
    engine().generate(&request(round, StrokesGainedBreakdown::default()))
}

#[test]
fn nine_hole_near_band_is_three_quarters_of_a_stroke() {
    let inside = score_only(45, 44.25, HolesPlayed::Nine);
    assert_eq!(inside.outcomes[1], OutcomeCode::M2A);
    assert_eq!(inside.levels[1], InsightLevel::Success);
    assert!(inside.messages[1].contains("close to"), "{}", inside.messages[1]);

    let outside = score_only(45, 44.24, HolesPlayed::Nine);
    assert_eq!(outside.levels[1], InsightLevel::Warning);
    assert!(outside.messages[1].contains("higher than"), "{}", outside.messages[1]);
}

#[test]
fn eighteen_hole_near_band_is_a_stroke_and_a_half() {
    let inside = score_only(90, 88.5, HolesPlayed::Eighteen);
    assert_eq!(inside.levels[1], InsightLevel::Success);
    assert!(inside.messages[1].contains("close to"), "{}", inside.messages[1]);

    let outside = score_only(90, 88.49, HolesPlayed::Eighteen);
    assert_eq!(outside.levels[1], InsightLevel::Warning);

    let strong = score_only(85, 88.0, HolesPlayed::Eighteen);
    assert_eq!(strong.levels[1], InsightLevel::Success);
    assert!(strong.messages[1].contains("strong score"), "{}", strong.messages[1]);
}

/// Message 1 for a score-only round must come from `expected` at every phrasing index.
fn assert_average_framing(score: u16, avg: f64, holes: HolesPlayed, expected: PoolKey) {
    let values = vec![
        ("score", score.to_string()),
        ("to_par", format_to_par(0)),
        ("avg", format_average(avg)),
        ("diff", format_magnitude(f64::from(score) - avg)),
    ];
    for index in 0..expected.len() {
        let mut round = facts(score, 0, Some(avg), PerformanceBand::Expected);
        round.holes_played = holes;
        round.evidence = RoundEvidence::default();
        let mut request = request(round, StrokesGainedBreakdown::default());
        request.selection = VariantSelection::Fixed { index };

        let outcome = engine().generate(&request);
        assert_eq!(outcome.outcomes[0], OutcomeCode::M1A);
        assert_eq!(
            outcome.messages[0],
            fill(expected.pool()[index], &values),
            "score {score} vs avg {avg} over {holes:?} should use {expected:?}"
        );
    }
}

#[test]
fn eighteen_hole_average_match_tolerance_is_a_tenth_of_a_stroke() {
    assert_average_framing(80, 79.9, HolesPlayed::Eighteen, PoolKey::ScoreOnlyMatched);
    assert_average_framing(80, 80.1, HolesPlayed::Eighteen, PoolKey::ScoreOnlyMatched);
    assert_average_framing(80, 79.89, HolesPlayed::Eighteen, PoolKey::ScoreOnlyWorse);
    assert_average_framing(80, 80.11, HolesPlayed::Eighteen, PoolKey::ScoreOnlyBetter);
}

#[test]
fn nine_hole_average_match_tolerance_is_halved() {
    assert_average_framing(40, 39.95, HolesPlayed::Nine, PoolKey::ScoreOnlyMatched);
    assert_average_framing(40, 39.9, HolesPlayed::Nine, PoolKey::ScoreOnlyWorse);
    assert_average_framing(40, 40.1, HolesPlayed::Nine, PoolKey::ScoreOnlyBetter);
}

#[test]
fn sole_tracked_area_that_lost_strokes_is_named_as_only_area() {
    let mut round = facts(96, 24, Some(92.0), PerformanceBand::Tough);
    round.evidence = evidence_missing(MissingStats {
        fir: true,
        gir: true,
        putts: false,
        penalties: true,
    });
    let outcome = engine().generate(&request(round, breakdown(0.5, 0.5, -1.2, 0.5)));

    assert_eq!(
        outcome.outcomes,
        [OutcomeCode::M1B, OutcomeCode::M2A, OutcomeCode::M3A]
    );
    assert!(
        outcome.messages[0].contains("Only Putting was tracked"),
        "{}",
        outcome.messages[0]
    );
    assert_eq!(outcome.trace.selection.components.len(), 1);
    assert!(outcome.trace.selection.opportunity.is_none());
    assert_clean(&outcome);
}

#[test]
fn untracked_components_are_never_measured() {
    let mut round = facts(84, 12, Some(85.0), PerformanceBand::Expected);
    round.evidence = evidence_missing(MissingStats {
        fir: true,
        gir: false,
        putts: false,
        penalties: false,
    });
    let outcome = engine().generate(&request(round, breakdown(3.0, -0.2, -0.9, 0.1)));

    assert!(outcome
        .trace
        .selection
        .components
        .iter()
        .all(|component| component.label != "Off The Tee"));
    assert!(!outcome.messages[0].contains("Off The Tee"));
    assert_eq!(outcome.outcomes[2], OutcomeCode::M3B);
    assert!(outcome.messages[2].contains("FIR"));
    assert!(outcome.messages[2].contains("lag-putting drill"), "{}", outcome.messages[2]);
    assert_eq!(sentence_count(&outcome.messages[2]), 2);
}

#[test]
fn all_positive_areas_read_as_net_positive() {
    let outcome = engine().generate(&request(
        facts(72, 0, Some(80.0), PerformanceBand::Great),
        breakdown(1.2, 0.6, 0.9, 0.5),
    ));
    assert_eq!(
        outcome.outcomes,
        [OutcomeCode::M1C, OutcomeCode::M2E, OutcomeCode::M3E]
    );
    assert!(outcome.messages[0].contains("gaining 1.2 strokes"), "{}", outcome.messages[0]);
    assert!(outcome.messages[1].contains("net positive"), "{}", outcome.messages[1]);
    assert_eq!(outcome.trace.selection.opportunity.map(|c| c.label), Some("Penalties"));
}

#[test]
fn dominant_untracked_swing_falls_back_to_near_even_and_is_quantified() {
    let mut strokes_gained = breakdown(1.1, -0.6, 0.4, 0.0);
    strokes_gained.residual = Some(-3.2);
    strokes_gained.total = Some(-2.3);

    let outcome = engine().generate(&request(
        facts(88, 16, Some(85.0), PerformanceBand::Below),
        strokes_gained,
    ));

    assert!(outcome.trace.selection.residual_dominant);
    assert_eq!(outcome.outcomes[0], OutcomeCode::M1D);
    assert_eq!(outcome.trace.untracked_callout, Some(-3.2));
    assert!(outcome.messages[1].contains("3.2"), "{}", outcome.messages[1]);
    assert!(outcome.messages[1].contains("lost"), "{}", outcome.messages[1]);
    assert_clean(&outcome);
}

#[test]
fn large_residual_earns_a_sentence_without_dominating() {
    let mut strokes_gained = breakdown(2.6, -0.4, 0.3, 0.0);
    strokes_gained.residual = Some(1.6);
    strokes_gained.total = Some(4.1);

    let outcome = engine().generate(&request(
        facts(76, 4, Some(82.0), PerformanceBand::Above),
        strokes_gained,
    ));

    assert!(!outcome.trace.selection.residual_dominant);
    assert_eq!(outcome.outcomes[0], OutcomeCode::M1C);
    assert_eq!(outcome.trace.untracked_callout, Some(1.6));
    assert!(outcome.messages[1].contains("gained"), "{}", outcome.messages[1]);
}

#[test]
fn small_residual_stays_silent() {
    let mut strokes_gained = breakdown(0.6, -0.9, 0.3, 0.0);
    strokes_gained.residual = Some(0.4);

    let outcome = engine().generate(&request(
        facts(82, 10, Some(83.0), PerformanceBand::Expected),
        strokes_gained,
    ));
    assert_eq!(outcome.trace.untracked_callout, None);
}

#[test]
fn clustered_weak_areas_without_strong_leak_get_generic_action() {
    let outcome = engine().generate(&request(
        facts(84, 12, Some(83.0), PerformanceBand::Expected),
        breakdown(0.4, -0.8, -0.7, 0.1),
    ));
    assert!(outcome.trace.selection.weak_separation);
    assert_eq!(outcome.outcomes[2], OutcomeCode::M3E);
}

#[test]
fn clustered_weak_areas_with_strong_leak_still_name_the_area() {
    let outcome = engine().generate(&request(
        facts(91, 19, Some(86.0), PerformanceBand::Tough),
        breakdown(0.4, -1.7, -1.6, 0.1),
    ));
    assert!(outcome.trace.selection.weak_separation);
    assert_eq!(outcome.outcomes[2], OutcomeCode::M3C);
    assert_eq!(outcome.trace.selection.opportunity.map(|c| c.label), Some("Approach"));
}

#[test]
fn nine_hole_rounds_halve_the_weakness_threshold() {
    let mut round = facts(44, 8, Some(45.0), PerformanceBand::Expected);
    round.holes_played = HolesPlayed::Nine;

    let weak = engine().generate(&request(round.clone(), breakdown(0.5, -0.3, 0.2, 0.0)));
    assert!(weak.trace.selection.opportunity_is_weak);
    assert_eq!(weak.outcomes[2], OutcomeCode::M3C);

    let mild = engine().generate(&request(round, breakdown(0.5, -0.2, 0.2, 0.0)));
    assert!(!mild.trace.selection.opportunity_is_weak);
    assert_eq!(mild.outcomes[2], OutcomeCode::M3E);
}

#[test]
fn round_number_zero_uses_standard_path() {
    let mut request = request(
        facts(80, 8, Some(81.0), PerformanceBand::Expected),
        breakdown(0.5, -0.9, 0.1, 0.0),
    );
    request.context = RoundContext {
        round_number: 0,
        previous_score: None,
        total_rounds: 0,
    };
    let outcome = engine().generate(&request);
    assert_eq!(outcome.trace.path, InsightPath::Standard);
    assert!(!outcome.is_onboarding());
}

#[test]
fn fixed_selection_pins_every_slot() {
    let mut request = request(
        facts(75, 3, Some(74.0), PerformanceBand::Expected),
        breakdown(0.2, -0.7, -2.1, -0.3),
    );
    request.selection = VariantSelection::Fixed { index: 2 };
    let pinned = engine().generate(&request);

    request.seed.variant_offset = 7;
    let shifted_offset = engine().generate(&request);
    assert_eq!(pinned.messages, shifted_offset.messages);
}

#[test]
fn insight_messages_zip_text_level_and_code() {
    let outcome = engine().generate(&request(
        facts(75, 3, Some(74.0), PerformanceBand::Expected),
        breakdown(0.2, -0.7, -2.1, -0.3),
    ));
    let messages = outcome.insight_messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].outcome, OutcomeCode::M2D);
    assert_eq!(messages[1].level, InsightLevel::Warning);
    assert_eq!(messages[1].text, outcome.messages[1]);
}
