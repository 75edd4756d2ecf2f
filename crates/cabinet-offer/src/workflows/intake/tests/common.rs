use std::collections::BTreeSet;

use crate::workflows::intake::domain::{
    ClientProfile, ContractType, DigitalizationLevel, FiscalParticularity, PollutionLevel,
    RetirementHorizon, Sector, WealthTier,
};
use crate::workflows::intake::{OfferCode, OfferResult, PricingCatalog};

/// Solo services company with every toggle off and no digitalization gap.
pub(super) fn quiet_profile() -> ClientProfile {
    ClientProfile {
        client_name: "Cabinet Test".to_string(),
        sector: Sector::Services,
        employee_count: 0,
        has_managers: false,
        contract_type: ContractType::NoEmployees,
        csr_sensitive: false,
        pollution_level: PollutionLevel::LowOrNone,
        wants_coaching: false,
        principal_wealth: WealthTier::Modest,
        fiscal_particularities: BTreeSet::new(),
        needs_cash_tracking: false,
        needs_wealth_planning: false,
        digitalization: DigitalizationLevel::Advanced,
        retirement_horizon: RetirementHorizon::Distant,
        succession_planned: false,
        consumer_vat_clients: false,
    }
}

pub(super) fn with_employees(count: u32) -> ClientProfile {
    ClientProfile {
        employee_count: count,
        contract_type: ContractType::Permanent,
        ..quiet_profile()
    }
}

pub(super) fn particularities(values: &[FiscalParticularity]) -> BTreeSet<FiscalParticularity> {
    values.iter().copied().collect()
}

pub(super) fn catalog() -> PricingCatalog {
    PricingCatalog::standard()
}

pub(super) fn codes(result: &OfferResult) -> Vec<OfferCode> {
    result.offers.iter().map(|offer| offer.code).collect()
}
