use super::*;

#[test]
fn market_parse_ignores_case_and_punctuation() {
    assert_eq!(Market::parse("ercot"), Some(Market::Ercot));
    assert_eq!(Market::parse("ISO-NE"), Some(Market::IsoNe));
    assert_eq!(Market::parse("iso ne"), Some(Market::IsoNe));
    assert_eq!(Market::parse(" NYISO "), Some(Market::Nyiso));
    assert_eq!(Market::parse("AESO"), None);
    assert_eq!(Market::parse(""), None);
}

#[test]
fn market_as_str_round_trips_through_parse() {
    for m in Market::ALL {
        assert_eq!(Market::parse(m.as_str()), Some(m), "{m}");
    }
}

#[test]
fn technology_parse() {
    assert_eq!(Technology::parse("Wind"), Some(Technology::Wind));
    assert_eq!(Technology::parse("onshore wind"), Some(Technology::Wind));
    assert_eq!(Technology::parse("Solar PV"), Some(Technology::Solar));
    assert_eq!(Technology::parse("pv"), Some(Technology::Solar));
    assert_eq!(Technology::parse("geothermal"), None);
}

#[test]
fn asset_type_parse() {
    assert_eq!(AssetType::parse("existing"), Some(AssetType::Existing));
    assert_eq!(AssetType::parse("Operating asset"), Some(AssetType::Existing));
    assert_eq!(AssetType::parse("new_build"), Some(AssetType::NewBuild));
    assert_eq!(AssetType::parse("greenfield"), None);
}

#[test]
fn every_ladder_is_ascending() {
    for m in Market::ALL {
        for t in [Technology::Solar, Technology::Wind] {
            let Some(l) = strike_ladder(m, t) else {
                continue;
            };
            let v = [
                l.bf_low, l.bf_high, l.mkt_low, l.mkt_high, l.sf_low, l.sf_high, l.rf_high,
            ];
            assert!(
                v.windows(2).all(|w| w[0] <= w[1]),
                "{m}/{t} thresholds not ascending: {v:?}"
            );
        }
    }
}

#[test]
fn northeast_wind_has_no_ladder() {
    assert!(strike_ladder(Market::IsoNe, Technology::Wind).is_none());
    assert!(strike_ladder(Market::Nyiso, Technology::Wind).is_none());
    assert!(strike_ladder(Market::IsoNe, Technology::Solar).is_some());
}

#[test]
fn ercot_solar_values() {
    let l = strike_ladder(Market::Ercot, Technology::Solar).unwrap();
    assert!((l.bf_low - 40.0).abs() < 1e-9);
    assert!((l.mkt_high - 52.0).abs() < 1e-9);
    assert!((l.rf_high - 72.0).abs() < 1e-9);
}

#[test]
fn existing_assets_scale_every_threshold() {
    let base = strike_ladder(Market::Pjm, Technology::Solar).unwrap();
    let l = effective_ladder(Market::Pjm, Technology::Solar, AssetType::Existing).unwrap();
    assert!((l.bf_low - base.bf_low * 0.75).abs() < 1e-9);
    assert!((l.sf_high - base.sf_high * 0.75).abs() < 1e-9);
    assert!((l.rf_high - 99.0).abs() < 1e-9);
}

#[test]
fn new_build_ladder_unchanged() {
    let base = strike_ladder(Market::Spp, Technology::Wind).unwrap();
    let l = effective_ladder(Market::Spp, Technology::Wind, AssetType::NewBuild).unwrap();
    assert_eq!(base, l);
}

#[test]
fn bands_cover_ladder_in_order() {
    let l = strike_ladder(Market::Caiso, Technology::Solar).unwrap();
    let b = l.bands();
    assert!((b[0].from - l.bf_low).abs() < 1e-9);
    assert!((b[5].to - l.rf_high).abs() < 1e-9);
    assert!((b[5].score_from - 76.0).abs() < 1e-9);
    assert!(b.windows(2).all(|w| (w[0].to - w[1].from).abs() < 1e-9));
}

#[test]
fn availability_tiers_differ_by_technology() {
    let wind = availability_tiers(Technology::Wind);
    let solar = availability_tiers(Technology::Solar);
    assert!((wind.steps[0].limit - 97.0).abs() < 1e-9);
    assert!((solar.steps[0].limit - 99.0).abs() < 1e-9);
    assert!((wind.below - 82.0).abs() < 1e-9);
    assert!((solar.below - 80.0).abs() < 1e-9);
}

#[test]
fn tier_tables_are_descending() {
    for t in [Technology::Solar, Technology::Wind] {
        for tiers in [
            availability_tiers(t),
            delay_rate_tiers(t),
            seller_pre_cod_tiers(t),
            seller_post_cod_tiers(t),
        ] {
            assert!(
                tiers.steps.windows(2).all(|w| w[0].limit >= w[1].limit),
                "{t} tiers not descending"
            );
        }
    }
}

#[test]
fn twelve_month_collateral_bounds_double_six_month() {
    for t in [Technology::Solar, Technology::Wind] {
        let six = buyer_collateral_bounds(t, true);
        let twelve = buyer_collateral_bounds(t, false);
        for (a, b) in six.iter().zip(twelve.iter()) {
            assert!((a * 2.0 - b).abs() < 1e-9, "{t}: {a} vs {b}");
        }
    }
}
