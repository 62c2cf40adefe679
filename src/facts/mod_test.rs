use super::*;

#[test]
fn empty_object_is_all_absent() {
    let f = Facts::from_json("{}").unwrap();
    assert_eq!(f, Facts::default());
    assert!(f.negprice.neg_price_mechanism.is_none());
    assert!(f.deal.iso.is_none());
}

#[test]
fn null_sub_record_is_empty_record() {
    let f = Facts::from_json(r#"{"negprice": null, "fm": null, "deal": null}"#).unwrap();
    assert_eq!(f.negprice, NegPriceFacts::default());
    assert_eq!(f.fm, ForceMajeureFacts::default());
    assert_eq!(f.deal, DealFacts::default());
}

#[test]
fn null_field_is_absent() {
    let f = Facts::from_json(r#"{"negprice": {"negPriceMechanism": null}}"#).unwrap();
    assert!(f.negprice.neg_price_mechanism.is_none());
}

#[test]
fn not_specified_is_distinct_from_absent() {
    let f = Facts::from_json(r#"{"negprice": {"negPriceMechanism": "not_specified"}}"#).unwrap();
    assert_eq!(
        f.negprice.neg_price_mechanism,
        Some(NegPriceMechanism::NotSpecified)
    );
}

#[test]
fn enum_default_is_not_specified() {
    assert_eq!(YesNo::default(), YesNo::NotSpecified);
    assert_eq!(FmScope::default(), FmScope::NotSpecified);
    assert_eq!(FmScope::default().as_str(), "not_specified");
}

#[test]
fn unknown_enum_value_is_rejected() {
    let err = Facts::from_json(r#"{"negprice": {"negPriceMechanism": "sometimes"}}"#);
    assert!(err.is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let f = Facts::from_json(r#"{"mystery": 1, "strike": {"strikePrice": 42, "note": "x"}}"#)
        .unwrap();
    assert_eq!(f.strike.strike_price, Some(42.0));
}

#[test]
fn acronym_field_names_match_extractor() {
    let json = r#"{
        "ia": {"iaStatus": "fully_executed", "iaAsCP": "yes"},
        "cp": {"buyerCPs": ["financing", "permits"], "sellerCPCount": 4},
        "delay": {"guaranteedCOD": "yes"},
        "sellerpa": {"preCODCreditType": "lc", "postCODSizingPerMW": 50000},
        "buyerpa": {"fixedAmountPerMW": 40000},
        "eod": {"creditFailureAsEOD": "yes", "downgradeAsEOD": "yes_eod"},
        "eterm": {"preCODPostCODConsistency": "same_structure"},
        "fm": {"codExtensionForFM": "automatic"},
        "cod": {"partialCOD": "not_allowed"}
    }"#;
    let f = Facts::from_json(json).unwrap();
    assert_eq!(f.ia.ia_as_cp, Some(YesNo::Yes));
    assert_eq!(f.cp.buyer_count(), 2);
    assert_eq!(f.cp.seller_count(), 4);
    assert_eq!(f.delay.guaranteed_cod, Some(YesNo::Yes));
    assert_eq!(f.sellerpa.pre_cod_credit_type, Some(SellerCreditType::Lc));
    assert_eq!(f.sellerpa.post_cod_sizing_per_mw, Some(50_000.0));
    assert_eq!(f.buyerpa.fixed_amount_per_mw, Some(40_000.0));
    assert_eq!(f.eod.credit_failure_as_eod, Some(YesNo::Yes));
    assert_eq!(f.eod.downgrade_as_eod, Some(DowngradeAsEod::YesEod));
    assert_eq!(f.eterm.pre_post_cod_consistency, Some(Consistency::SameStructure));
    assert_eq!(f.fm.cod_extension_for_fm, Some(CodExtension::Automatic));
    assert_eq!(f.cod.partial_cod, Some(PartialCod::NotAllowed));
}

#[test]
fn cp_list_wins_over_count() {
    let cp = ConditionsPrecedentFacts {
        buyer_cps: Some(vec!["a".into()]),
        buyer_cp_count: Some(5),
        ..Default::default()
    };
    assert_eq!(cp.buyer_count(), 1);
    assert_eq!(ConditionsPrecedentFacts::default().buyer_count(), 0);
}

#[test]
fn aliases_accepted() {
    let f = Facts::from_json(
        r#"{"availguaranteed": {"pValue": "p90"}, "govlaw": {"expertDetermination": "yes"}}"#,
    )
    .unwrap();
    assert_eq!(f.availguaranteed.p_value, Some(PValue::P90));
    assert_eq!(
        f.govlaw.expert_determination,
        Some(ExpertDetermination::YesForTechnical)
    );
}

#[test]
fn numeric_enum_strings() {
    let f = Facts::from_json(r#"{"buyerpa": {"coverageBasis": "6_months"}}"#).unwrap();
    assert_eq!(f.buyerpa.coverage_basis, Some(CoverageBasis::SixMonths));
}

#[test]
fn deal_descriptors_accept_text_or_number() {
    let f = Facts::from_json(
        r#"{"deal": {"capacity": 150, "buyerShare": "60%", "tech": "Wind", "iso": "ERCOT"}}"#,
    )
    .unwrap();
    assert_eq!(f.deal.capacity, Some(Descriptor::Number(150.0)));
    assert_eq!(f.deal.buyer_share, Some(Descriptor::Text("60%".into())));
    assert_eq!(f.deal.tech.as_deref(), Some("Wind"));
    assert_eq!(f.deal.capacity.unwrap().to_string(), "150");
}

#[test]
fn serialized_enums_use_wire_strings() {
    let json = serde_json::to_string(&CurtailmentAllocation::SellerBearsDeemed).unwrap();
    assert_eq!(json, r#""seller_bears_deemed""#);
    let json = serde_json::to_string(&YesNo::NotSpecified).unwrap();
    assert_eq!(json, r#""not_specified""#);
}

#[test]
fn curtailment_flavors_share_terms_view() {
    let f = Facts::from_json(
        r#"{
            "curtailment": {"econCurtailmentAllocation": "buyer_bears", "curtailmentCap": 4},
            "nonecocurtail": {"nonEconCurtailAllocation": "shared"},
            "basiscurtail": {"basisDeemedGenMethod": "weather_adjusted"}
        }"#,
    )
    .unwrap();
    let c = f.curtailment.terms();
    assert_eq!(c.allocation, Some(CurtailmentAllocation::BuyerBears));
    assert_eq!(c.cap, Some(4.0));
    assert_eq!(
        f.nonecocurtail.terms().allocation,
        Some(CurtailmentAllocation::Shared)
    );
    assert_eq!(
        f.basiscurtail.terms().deemed_gen_method,
        Some(DeemedGenMethod::WeatherAdjusted)
    );
}

#[test]
fn counts_accept_float_numbers() {
    let f = Facts::from_json(
        r#"{"cp": {"buyerCPCount": 3.0, "sellerCPCount": 2}, "marketdisrupt": {"disruptionEventCount": 4.0}}"#,
    )
    .unwrap();
    assert_eq!(f.cp.buyer_cp_count, Some(3));
    assert_eq!(f.cp.seller_cp_count, Some(2));
    assert_eq!(f.marketdisrupt.disruption_event_count, Some(4));
}

#[test]
fn counts_truncate_and_floor_at_zero() {
    let f = Facts::from_json(r#"{"cp": {"buyerCPCount": 2.7, "sellerCPCount": -1}}"#).unwrap();
    assert_eq!(f.cp.buyer_cp_count, Some(2));
    assert_eq!(f.cp.seller_cp_count, Some(0));
}

#[test]
fn null_count_is_absent() {
    let f = Facts::from_json(r#"{"cp": {"buyerCPCount": null}}"#).unwrap();
    assert!(f.cp.buyer_cp_count.is_none());
}
