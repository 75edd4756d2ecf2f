use super::common::*;
use crate::workflows::intake::domain::{
    DigitalizationLevel, FiscalParticularity, PollutionLevel, RetirementHorizon, Sector,
    WealthTier,
};
use crate::workflows::intake::{
    compute_offers, CatalogEntry, CatalogError, ClientProfile, OfferCode, PricingCatalog,
};

#[test]
fn quiet_profile_only_receives_unconditional_offers() {
    let result = compute_offers(&quiet_profile(), &catalog());

    assert_eq!(
        codes(&result),
        vec![OfferCode::GestionBudget, OfferCode::RevueQualite]
    );
    assert_eq!(result.total_ht, 280 + 240);
}

#[test]
fn scenario_a_solo_with_rudimentary_tools() {
    let profile = ClientProfile {
        digitalization: DigitalizationLevel::Rudimentary,
        ..quiet_profile()
    };

    let result = compute_offers(&profile, &catalog());

    assert_eq!(
        codes(&result),
        vec![
            OfferCode::GestionBudget,
            OfferCode::RevueQualite,
            OfferCode::DigitalFull
        ]
    );
    assert_eq!(result.total_ht, 940);
}

#[test]
fn scenario_b_construction_sme() {
    let profile = ClientProfile {
        sector: Sector::Btp,
        has_managers: true,
        csr_sensitive: true,
        pollution_level: PollutionLevel::Significant,
        ..with_employees(15)
    };

    let result = compute_offers(&profile, &catalog());

    assert_eq!(
        codes(&result),
        vec![
            OfferCode::SocialPlus,
            OfferCode::RseDiag,
            OfferCode::RseReporting,
            OfferCode::Tresorerie,
            OfferCode::GestionBudget,
            OfferCode::RevueQualite,
            OfferCode::BtpPack,
        ]
    );
    assert_eq!(result.total_ht, 350 + 1200 + 450 + 320 + 280 + 240 + 350);
    assert_eq!(
        result.rationales_for(OfferCode::Tresorerie),
        ["Volatilité de trésorerie / besoin de pilotage"]
    );
}

#[test]
fn scenario_c_international_holding_with_wealth_needs() {
    let profile = ClientProfile {
        fiscal_particularities: particularities(&[
            FiscalParticularity::International,
            FiscalParticularity::Holding,
        ]),
        needs_wealth_planning: true,
        ..quiet_profile()
    };

    let result = compute_offers(&profile, &catalog());

    assert_eq!(
        codes(&result),
        vec![
            OfferCode::PatrimoineBase,
            OfferCode::PatrimoineAvance,
            OfferCode::FiscalPart,
            OfferCode::International,
            OfferCode::GestionBudget,
            OfferCode::RevueQualite,
        ]
    );
}

#[test]
fn payroll_tier_depends_on_headcount_and_managers() {
    let small = compute_offers(&with_employees(5), &catalog());
    assert!(small.contains(OfferCode::SocialBasique));
    assert!(!small.contains(OfferCode::SocialPlus));

    let managed = ClientProfile {
        has_managers: true,
        ..with_employees(2)
    };
    let managed = compute_offers(&managed, &catalog());
    assert!(managed.contains(OfferCode::SocialPlus));
    assert!(!managed.contains(OfferCode::SocialBasique));

    let large = compute_offers(&with_employees(25), &catalog());
    assert_eq!(
        &codes(&large)[..2],
        &[OfferCode::SocialPlus, OfferCode::SocialPremium]
    );

    let solo_with_managers = ClientProfile {
        has_managers: true,
        ..quiet_profile()
    };
    let solo = compute_offers(&solo_with_managers, &catalog());
    assert!(!solo.contains(OfferCode::SocialPlus));
    assert!(!solo.contains(OfferCode::SocialBasique));
}

#[test]
fn coaching_pack_follows_wealth_tier() {
    let modest = ClientProfile {
        wants_coaching: true,
        ..quiet_profile()
    };
    let modest = compute_offers(&modest, &catalog());
    assert!(modest.contains(OfferCode::CoachingLight));
    assert!(!modest.contains(OfferCode::CoachingPro));

    let wealthy = ClientProfile {
        wants_coaching: true,
        principal_wealth: WealthTier::Substantial,
        ..quiet_profile()
    };
    let wealthy = compute_offers(&wealthy, &catalog());
    assert!(wealthy.contains(OfferCode::CoachingPro));
    assert!(!wealthy.contains(OfferCode::CoachingLight));
    // a substantial estate alone triggers the wealth review
    assert!(wealthy.contains(OfferCode::PatrimoineBase));
}

#[test]
fn group_structure_without_wealth_stakes_skips_advanced_engineering() {
    let profile = ClientProfile {
        fiscal_particularities: particularities(&[FiscalParticularity::Sci]),
        ..quiet_profile()
    };

    let result = compute_offers(&profile, &catalog());

    assert!(result.contains(OfferCode::FiscalPart));
    assert!(!result.contains(OfferCode::PatrimoineBase));
    assert!(!result.contains(OfferCode::PatrimoineAvance));
    assert!(!result.contains(OfferCode::International));
}

#[test]
fn moderate_pollution_adds_reporting_only_for_sensitive_clients() {
    let sensitive = ClientProfile {
        csr_sensitive: true,
        pollution_level: PollutionLevel::Moderate,
        ..quiet_profile()
    };
    let sensitive = compute_offers(&sensitive, &catalog());
    assert!(sensitive.contains(OfferCode::RseDiag));
    assert!(sensitive.contains(OfferCode::RseReporting));

    let low = ClientProfile {
        csr_sensitive: true,
        ..quiet_profile()
    };
    let low = compute_offers(&low, &catalog());
    assert!(low.contains(OfferCode::RseDiag));
    assert!(!low.contains(OfferCode::RseReporting));
}

#[test]
fn treasury_offer_from_toggle_or_sector() {
    for sector in [Sector::ECommerce, Sector::Industrie, Sector::Btp] {
        let profile = ClientProfile {
            sector,
            ..quiet_profile()
        };
        assert!(compute_offers(&profile, &catalog()).contains(OfferCode::Tresorerie));
    }

    let toggled = ClientProfile {
        needs_cash_tracking: true,
        ..quiet_profile()
    };
    assert!(compute_offers(&toggled, &catalog()).contains(OfferCode::Tresorerie));
    assert!(!compute_offers(&quiet_profile(), &catalog()).contains(OfferCode::Tresorerie));
}

#[test]
fn transmission_offers_close_the_list() {
    let profile = ClientProfile {
        digitalization: DigitalizationLevel::NotComputerized,
        retirement_horizon: RetirementHorizon::WithinFiveYears,
        succession_planned: true,
        ..quiet_profile()
    };

    let result = compute_offers(&profile, &catalog());

    assert_eq!(
        codes(&result),
        vec![
            OfferCode::GestionBudget,
            OfferCode::RevueQualite,
            OfferCode::DigitalStart,
            OfferCode::Retraite,
            OfferCode::Succession,
        ]
    );
    assert_eq!(result.total_ht, 280 + 240 + 150 + 750 + 1200);
}

#[test]
fn every_listed_offer_has_a_rationale() {
    let profile = ClientProfile {
        sector: Sector::Btp,
        wants_coaching: true,
        needs_wealth_planning: true,
        fiscal_particularities: particularities(&[FiscalParticularity::Holding]),
        retirement_horizon: RetirementHorizon::WithinTwoYears,
        ..with_employees(30)
    };

    let result = compute_offers(&profile, &catalog());

    for offer in &result.offers {
        assert!(
            !result.rationales_for(offer.code).is_empty(),
            "{} has no rationale",
            offer.code.as_str()
        );
    }
}

#[test]
fn substitute_catalog_prices_flow_through() {
    let standard_catalog = catalog();
    let entries = standard_catalog.entries().iter().map(|entry| CatalogEntry {
        price: entry.price * 2,
        ..entry.clone()
    });
    let doubled = PricingCatalog::new(entries).expect("complete catalog");

    let standard = compute_offers(&quiet_profile(), &catalog());
    let result = compute_offers(&quiet_profile(), &doubled);

    assert_eq!(result.total_ht, standard.total_ht * 2);
    assert_eq!(codes(&result), codes(&standard));
}

#[test]
fn oversized_substitute_catalog_is_refused_before_totalling() {
    let standard_catalog = catalog();
    let inflated = standard_catalog.entries().iter().map(|entry| CatalogEntry {
        price: u32::MAX / 2,
        ..entry.clone()
    });
    assert_eq!(
        PricingCatalog::new(inflated),
        Err(CatalogError::PriceTotalOverflow)
    );

    let share = u32::MAX / OfferCode::ALL.len() as u32;
    let largest = standard_catalog.entries().iter().map(|entry| CatalogEntry {
        price: share,
        ..entry.clone()
    });
    let largest = PricingCatalog::new(largest).expect("total fits in u32");
    let result = compute_offers(&with_employees(30), &largest);

    assert_eq!(result.total_ht, share * result.offers.len() as u32);
}

#[test]
fn offers_share_labels_with_catalog() {
    let result = compute_offers(&with_employees(3), &catalog());
    let basic = &result.offers[0];

    assert_eq!(basic.code, OfferCode::SocialBasique);
    assert_eq!(basic.label, "Paie & obligations sociales - Pack Essentiel");
    assert_eq!(basic.price, 180);
}
