use super::*;

fn scores(pairs: &[(TermId, f64)]) -> Scores {
    let mut map: Scores = TermId::ALL.into_iter().map(|id| (id, 40.0)).collect();
    for &(id, score) in pairs {
        map.insert(id, score);
    }
    map
}

fn messages(flags: &[InteractionFlag]) -> Vec<&str> {
    flags.iter().map(|f| f.message.as_str()).collect()
}

#[test]
fn quiet_map_fires_nothing() {
    let flags = check_interactions(&scores(&[]), &Facts::default());
    assert!(flags.is_empty(), "{:?}", messages(&flags));
}

#[test]
fn credit_asymmetry_is_order_independent() {
    let a = check_interactions(
        &scores(&[(TermId::BuyerPa, 10.0), (TermId::SellerPa, 45.0)]),
        &Facts::default(),
    );
    let b = check_interactions(
        &scores(&[(TermId::BuyerPa, 45.0), (TermId::SellerPa, 10.0)]),
        &Facts::default(),
    );
    assert_eq!(a.len(), 1);
    assert_eq!(a, b);
    assert_eq!(a[0].terms, vec![TermId::BuyerPa, TermId::SellerPa]);
}

#[test]
fn credit_gap_of_exactly_thirty_does_not_fire() {
    let flags = check_interactions(
        &scores(&[(TermId::BuyerPa, 10.0), (TermId::SellerPa, 40.0)]),
        &Facts::default(),
    );
    assert!(flags.is_empty());
}

#[test]
fn default_and_termination_checked_both_ways() {
    let weak_payment = check_interactions(
        &scores(&[(TermId::Eod, 10.0), (TermId::ETerm, 70.0)]),
        &Facts::default(),
    );
    assert_eq!(
        messages(&weak_payment),
        vec!["Strong default triggers but weak termination payment mechanics."]
    );

    let weak_triggers = check_interactions(
        &scores(&[(TermId::Eod, 70.0), (TermId::ETerm, 10.0)]),
        &Facts::default(),
    );
    assert_eq!(
        messages(&weak_triggers),
        vec!["Strong termination mechanics but weak default triggers."]
    );
    assert_eq!(weak_payment[0].terms, weak_triggers[0].terms);
}

#[test]
fn cumulative_curtailment_needs_all_three() {
    let two = check_interactions(
        &scores(&[(TermId::Curtailment, 65.0), (TermId::NonEcoCurtail, 60.0)]),
        &Facts::default(),
    );
    assert!(two.is_empty());

    let three = check_interactions(
        &scores(&[
            (TermId::Curtailment, 65.0),
            (TermId::NonEcoCurtail, 60.0),
            (TermId::BasisCurtail, 70.0),
        ]),
        &Facts::default(),
    );
    assert_eq!(three.len(), 1);
    assert_eq!(three[0].terms.len(), 3);
}

#[test]
fn availability_pairing_is_exclusive_or() {
    let both_strong = check_interactions(
        &scores(&[(TermId::AvailMech, 20.0), (TermId::AvailGuaranteed, 20.0)]),
        &Facts::default(),
    );
    assert!(both_strong.is_empty());

    let both_weak = check_interactions(
        &scores(&[(TermId::AvailMech, 80.0), (TermId::AvailGuaranteed, 80.0)]),
        &Facts::default(),
    );
    assert!(both_weak.is_empty());

    let one = check_interactions(
        &scores(&[(TermId::AvailMech, 20.0), (TermId::AvailGuaranteed, 80.0)]),
        &Facts::default(),
    );
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].terms, vec![TermId::AvailMech, TermId::AvailGuaranteed]);
}

#[test]
fn nodal_double_exposure_needs_nodal_fact() {
    let high = scores(&[(TermId::Floating, 60.0), (TermId::Basis, 70.0)]);
    assert!(check_interactions(&high, &Facts::default()).is_empty());

    let mut facts = Facts::default();
    facts.floating.settlement_type = Some(SettlementType::Nodal);
    let flags = check_interactions(&high, &facts);
    assert_eq!(
        messages(&flags),
        vec!["Nodal settlement with buyer bearing basis risk; double exposure."]
    );
}

#[test]
fn repricing_clause_fires_on_fact_alone() {
    let mut facts = Facts::default();
    facts.changeinlaw.strike_fixed = Some(StrikeFixed::StrikeAdjusts);
    let flags = check_interactions(&scores(&[]), &facts);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].terms, vec![TermId::ChangeInLaw, TermId::Strike]);
}

#[test]
fn credit_failure_trigger_needs_weak_seller_support() {
    let mut facts = Facts::default();
    facts.eod.credit_failure_as_eod = Some(YesNo::Yes);
    assert!(check_interactions(&scores(&[(TermId::SellerPa, 55.0)]), &facts).is_empty());
    let flags = check_interactions(&scores(&[(TermId::SellerPa, 80.0)]), &facts);
    // 80 vs buyer 40 also trips the asymmetry rule
    assert_eq!(flags.len(), 2);
    assert_eq!(flags[1].terms, vec![TermId::SellerPa, TermId::Eod]);
}

#[test]
fn rules_are_not_exclusive() {
    let flags = check_interactions(
        &scores(&[
            (TermId::Fm, 80.0),
            (TermId::Delay, 80.0),
            (TermId::NegPrice, 90.0),
            (TermId::MarketDisrupt, 90.0),
        ]),
        &Facts::default(),
    );
    assert_eq!(flags.len(), 2);
    assert_eq!(flags[0].terms, vec![TermId::Fm, TermId::Delay]);
    assert_eq!(flags[1].terms, vec![TermId::NegPrice, TermId::MarketDisrupt]);
}
