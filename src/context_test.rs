use super::*;

fn deal(iso: Option<&str>, tech: Option<&str>, asset: Option<&str>) -> DealFacts {
    DealFacts {
        iso: iso.map(String::from),
        technology: tech.map(String::from),
        asset_type: asset.map(String::from),
        ..Default::default()
    }
}

#[test]
fn recognized_values_leave_no_notes() {
    let ctx = DealContext::resolve(&deal(Some("PJM"), Some("Wind"), Some("existing")));
    assert_eq!(ctx.market, Market::Pjm);
    assert_eq!(ctx.technology, Technology::Wind);
    assert_eq!(ctx.asset_type, AssetType::Existing);
    assert!(ctx.notes.is_empty());
    assert!(ctx.is_wind());
}

#[test]
fn empty_deal_falls_back_with_three_notes() {
    let ctx = DealContext::resolve(&DealFacts::default());
    assert_eq!(ctx.market, Market::Ercot);
    assert_eq!(ctx.technology, Technology::Solar);
    assert_eq!(ctx.asset_type, AssetType::NewBuild);
    assert_eq!(ctx.notes.len(), 3);
    let m = ctx.note_for(FallbackField::Market).unwrap();
    assert!(m.raw.is_none());
    assert!(m.message.contains("not specified"), "{}", m.message);
}

#[test]
fn unrecognized_market_keeps_raw_value() {
    let ctx = DealContext::resolve(&deal(Some("AESO"), Some("solar"), Some("new_build")));
    assert_eq!(ctx.market, Market::Ercot);
    let note = ctx.note_for(FallbackField::Market).unwrap();
    assert_eq!(note.raw.as_deref(), Some("AESO"));
    assert!(note.message.contains("'AESO'"), "{}", note.message);
    assert!(ctx.note_for(FallbackField::Technology).is_none());
}

#[test]
fn blank_string_counts_as_absent() {
    let ctx = DealContext::resolve(&deal(Some("   "), Some("solar"), Some("new_build")));
    assert!(ctx.note_for(FallbackField::Market).unwrap().raw.is_none());
}

#[test]
fn tech_alias_used_when_technology_absent() {
    let d = DealFacts {
        tech: Some("wind".into()),
        ..deal(Some("SPP"), None, Some("new_build"))
    };
    let ctx = DealContext::resolve(&d);
    assert_eq!(ctx.technology, Technology::Wind);
    assert!(ctx.note_for(FallbackField::Technology).is_none());
}

#[test]
fn ladder_scaled_for_existing_assets() {
    let new = DealContext::resolve(&deal(Some("ERCOT"), Some("solar"), Some("new_build")));
    let old = DealContext::resolve(&deal(Some("ERCOT"), Some("solar"), Some("existing")));
    let (n, o) = (new.ladder().unwrap(), old.ladder().unwrap());
    assert!((o.bf_low - n.bf_low * 0.75).abs() < 1e-9);
}

#[test]
fn northeast_wind_has_no_ladder() {
    let ctx = DealContext::resolve(&deal(Some("NYISO"), Some("wind"), Some("new_build")));
    assert!(ctx.ladder().is_none());
}
