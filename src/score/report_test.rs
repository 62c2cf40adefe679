use super::*;
use crate::facts::Facts;
use crate::score::score_all;
use crate::score::summary::summarize;

fn sample_result() -> ScoringResult {
    let facts = Facts::from_json(
        r#"{
            "deal": {"iso": "ERCOT", "technology": "solar", "assetType": "new_build"},
            "strike": {"strikePrice": 48},
            "negprice": {"negPriceMechanism": "zero_floor"},
            "fm": {"fmDefinitionScope": "broad_subjective"},
            "delay": {"guaranteedCOD": "no"}
        }"#,
    )
    .unwrap();
    score_all(&facts)
}

#[test]
fn print_report_does_not_panic() {
    let r = sample_result();
    print_report(&r, &summarize(&r, 10), true);
}

#[test]
fn print_report_empty_facts() {
    let r = score_all(&Facts::default());
    print_report(&r, &summarize(&r, 0), false);
}

#[test]
fn print_json_does_not_panic() {
    let r = sample_result();
    print_json(&r, &summarize(&r, 5)).unwrap();
}

#[test]
fn catalog_prints() {
    print_catalog();
    print_catalog_json().unwrap();
}

#[test]
fn scorecard_json_shape() {
    let r = sample_result();
    let json = serde_json::to_value(scorecard(&r, &summarize(&r, 3))).unwrap();
    assert_eq!(json["terms"].as_array().unwrap().len(), 35);
    assert_eq!(json["groups"].as_array().unwrap().len(), 7);
    assert_eq!(json["needs_attention"].as_array().unwrap().len(), 3);
    assert_eq!(json["terms"][3]["id"], "negprice");
    assert_eq!(json["terms"][3]["zone"], "BUYER-FAVORABLE");
    assert_eq!(json["context"]["market"], r.context.market.as_str());
    assert!(json["terms"][3].get("flags").is_none());
}

#[test]
fn status_markers() {
    assert_eq!(status_marker(TermStatus::Scored), "");
    assert_eq!(status_marker(TermStatus::Missing), "missing");
    assert_eq!(status_marker(TermStatus::Unsupported), "not scored");
}

#[test]
fn flags_below_attention_are_listed() {
    let facts = Facts::from_json(
        r#"{"permit": {"permitStatus": "in_progress", "permitAsCP": "not_specified"}}"#,
    )
    .unwrap();
    let r = score_all(&facts);
    let summary = summarize(&r, 10);
    assert!((r.scores[&TermId::Permit] - 43.0).abs() < 0.01);
    assert!(summary.needs_attention.iter().all(|t| t.id != TermId::Permit));

    let others = other_flagged(&r, &summary);
    let (_, flags) = others
        .iter()
        .find(|(id, _)| *id == TermId::Permit)
        .unwrap();
    assert!(flags[0].starts_with("Early-stage permitting"));
    print_report(&r, &summary, true);
}

#[test]
fn other_flags_skip_attention_terms() {
    let r = sample_result();
    let summary = summarize(&r, 35);
    let others = other_flagged(&r, &summary);
    assert!(
        others
            .iter()
            .all(|(id, _)| summary.needs_attention.iter().all(|t| t.id != *id))
    );
    assert!(others.iter().all(|(_, flags)| !flags.is_empty()));
}
