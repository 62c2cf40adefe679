use std::collections::HashSet;

use super::*;

#[test]
fn catalog_has_35_unique_ids() {
    let ids: HashSet<&str> = TermId::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(ids.len(), 35);
}

#[test]
fn parse_round_trips_every_id() {
    for id in TermId::ALL {
        assert_eq!(TermId::parse(id.as_str()), Some(id));
    }
    assert_eq!(TermId::parse("nope"), None);
    assert_eq!(TermId::parse("Strike"), None);
}

#[test]
fn all_is_in_declaration_order() {
    assert!(TermId::ALL.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn groups_partition_the_catalog() {
    let total: usize = TermGroup::ALL.iter().map(|g| g.terms().count()).sum();
    assert_eq!(total, TermId::ALL.len());
    assert_eq!(TermGroup::Pricing.terms().count(), 8);
    assert_eq!(TermGroup::Shape.terms().count(), 3);
    assert_eq!(TermGroup::Dev.terms().count(), 7);
    assert_eq!(TermGroup::Credit.terms().count(), 2);
    assert_eq!(TermGroup::Contract.terms().count(), 6);
    assert_eq!(TermGroup::Recs.terms().count(), 3);
    assert_eq!(TermGroup::Legal.terms().count(), 6);
}

#[test]
fn inflexible_terms() {
    let inflexible = TermId::ALL
        .iter()
        .filter(|t| t.flexibility() == Flexibility::Inflexible)
        .count();
    assert_eq!(inflexible, 13);
    assert_eq!(TermId::Strike.flexibility(), Flexibility::Flexible);
    assert_eq!(TermId::Eod.flexibility(), Flexibility::Inflexible);
}

#[test]
fn ids_serialize_lowercase() {
    let json = serde_json::to_string(&TermId::NonEcoCurtail).unwrap();
    assert_eq!(json, "\"nonecocurtail\"");
    assert_eq!(TermId::AvailGuaranteed.to_string(), "availguaranteed");
}

#[test]
fn scored_clamps_once() {
    assert_eq!(TermResult::scored(130.0).score, 100.0);
    assert_eq!(TermResult::scored(-12.0).score, 0.0);
    assert_eq!(TermResult::scored(42.5).score, 42.5);
}

#[test]
fn neutral_result() {
    let r = TermResult::neutral(TermStatus::Unsupported);
    assert_eq!(r.score, NEUTRAL_SCORE);
    assert_eq!(r.status, TermStatus::Unsupported);
    assert!(r.flags.is_empty());
}

#[test]
fn flag_builders() {
    let r = TermResult::scored(10.0)
        .flag_if(false, "hidden")
        .flag_if(true, "shown")
        .missing_if(false, "not missing");
    assert_eq!(r.flags, vec!["shown".to_string()]);
    assert_eq!(r.status, TermStatus::Scored);

    let r = r.missing_if(true, "gone");
    assert_eq!(r.status, TermStatus::Missing);
    assert_eq!(r.flags, vec!["shown".to_string(), "gone".to_string()]);
}

#[test]
fn yes_no_deltas() {
    assert_eq!(yes_no(Some(YesNo::Yes), -5.0, 8.0, 3.0), -5.0);
    assert_eq!(yes_no(Some(YesNo::No), -5.0, 8.0, 3.0), 8.0);
    assert_eq!(yes_no(Some(YesNo::NotSpecified), -5.0, 8.0, 3.0), 3.0);
    assert_eq!(yes_no(None, -5.0, 8.0, 3.0), 3.0);
}

#[test]
fn every_term_scores_empty_facts_within_bounds() {
    let facts = Facts::default();
    let ctx = DealContext::default();
    for id in TermId::ALL {
        let r = score_term(id, &facts, &ctx);
        assert!((0.0..=100.0).contains(&r.score), "{id}: {}", r.score);
    }
}
