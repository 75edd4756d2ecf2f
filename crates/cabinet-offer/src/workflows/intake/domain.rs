use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Closed answer vocabulary backing a questionnaire field.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Field name reported when an answer falls outside the vocabulary.
    const FIELD: &'static str;

    fn variants() -> &'static [Self];

    fn display(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.display() == raw)
    }
}

/// Business sector of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "BTP")]
    Btp,
    #[serde(rename = "Commerce")]
    Commerce,
    #[serde(rename = "Services")]
    Services,
    #[serde(rename = "Industrie")]
    Industrie,
    #[serde(rename = "Agricole")]
    Agricole,
    #[serde(rename = "Professions libérales")]
    ProfessionsLiberales,
    #[serde(rename = "E-commerce")]
    ECommerce,
    #[serde(rename = "Autre")]
    Autre,
}

impl Sector {
    pub const fn label(self) -> &'static str {
        match self {
            Sector::Btp => "BTP",
            Sector::Commerce => "Commerce",
            Sector::Services => "Services",
            Sector::Industrie => "Industrie",
            Sector::Agricole => "Agricole",
            Sector::ProfessionsLiberales => "Professions libérales",
            Sector::ECommerce => "E-commerce",
            Sector::Autre => "Autre",
        }
    }

    /// Sectors whose cash position is volatile enough to warrant treasury follow-up.
    pub const fn has_volatile_cash(self) -> bool {
        matches!(self, Sector::ECommerce | Sector::Industrie | Sector::Btp)
    }
}

impl Vocabulary for Sector {
    const FIELD: &'static str = "sector";

    fn variants() -> &'static [Self] {
        &[
            Sector::Btp,
            Sector::Commerce,
            Sector::Services,
            Sector::Industrie,
            Sector::Agricole,
            Sector::ProfessionsLiberales,
            Sector::ECommerce,
            Sector::Autre,
        ]
    }

    fn display(self) -> &'static str {
        self.label()
    }
}

/// Dominant employment contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Aucun salarié")]
    NoEmployees,
    #[serde(rename = "CDD")]
    FixedTerm,
    #[serde(rename = "CDI")]
    Permanent,
    #[serde(rename = "Mixte")]
    Mixed,
}

impl ContractType {
    pub const fn label(self) -> &'static str {
        match self {
            ContractType::NoEmployees => "Aucun salarié",
            ContractType::FixedTerm => "CDD",
            ContractType::Permanent => "CDI",
            ContractType::Mixed => "Mixte",
        }
    }
}

impl Vocabulary for ContractType {
    const FIELD: &'static str = "contract_type";

    fn variants() -> &'static [Self] {
        &[
            ContractType::NoEmployees,
            ContractType::FixedTerm,
            ContractType::Permanent,
            ContractType::Mixed,
        ]
    }

    fn display(self) -> &'static str {
        self.label()
    }
}

/// Environmental impact of the client's activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollutionLevel {
    #[serde(rename = "Faible/Non")]
    LowOrNone,
    #[serde(rename = "Moyenne")]
    Moderate,
    #[serde(rename = "Importante")]
    Significant,
}

impl PollutionLevel {
    pub const fn label(self) -> &'static str {
        match self {
            PollutionLevel::LowOrNone => "Faible/Non",
            PollutionLevel::Moderate => "Moyenne",
            PollutionLevel::Significant => "Importante",
        }
    }
}

impl Vocabulary for PollutionLevel {
    const FIELD: &'static str = "pollution_level";

    fn variants() -> &'static [Self] {
        &[
            PollutionLevel::LowOrNone,
            PollutionLevel::Moderate,
            PollutionLevel::Significant,
        ]
    }

    fn display(self) -> &'static str {
        self.label()
    }
}

/// Personal wealth tier of the business principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WealthTier {
    #[serde(rename = "Modeste")]
    Modest,
    #[serde(rename = "Important")]
    Substantial,
}

impl WealthTier {
    pub const fn label(self) -> &'static str {
        match self {
            WealthTier::Modest => "Modeste",
            WealthTier::Substantial => "Important",
        }
    }
}

impl Vocabulary for WealthTier {
    const FIELD: &'static str = "principal_wealth";

    fn variants() -> &'static [Self] {
        &[WealthTier::Modest, WealthTier::Substantial]
    }

    fn display(self) -> &'static str {
        self.label()
    }
}

/// How far the client's bookkeeping and banking flows are computerized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitalizationLevel {
    #[serde(rename = "Pas informatique")]
    NotComputerized,
    #[serde(rename = "Informatique rudimentaire")]
    Rudimentary,
    #[serde(rename = "Informatique avancée")]
    Advanced,
}

impl DigitalizationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            DigitalizationLevel::NotComputerized => "Pas informatique",
            DigitalizationLevel::Rudimentary => "Informatique rudimentaire",
            DigitalizationLevel::Advanced => "Informatique avancée",
        }
    }
}

impl Vocabulary for DigitalizationLevel {
    const FIELD: &'static str = "digitalization";

    fn variants() -> &'static [Self] {
        &[
            DigitalizationLevel::NotComputerized,
            DigitalizationLevel::Rudimentary,
            DigitalizationLevel::Advanced,
        ]
    }

    fn display(self) -> &'static str {
        self.label()
    }
}

/// Time remaining before the principal expects to retire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RetirementHorizon {
    #[serde(rename = "Loin")]
    Distant,
    #[serde(rename = "À 5 ans")]
    WithinFiveYears,
    #[serde(rename = "< 2 ans")]
    WithinTwoYears,
}

impl RetirementHorizon {
    pub const fn label(self) -> &'static str {
        match self {
            RetirementHorizon::Distant => "Loin",
            RetirementHorizon::WithinFiveYears => "À 5 ans",
            RetirementHorizon::WithinTwoYears => "< 2 ans",
        }
    }

    pub const fn is_near(self) -> bool {
        matches!(
            self,
            RetirementHorizon::WithinFiveYears | RetirementHorizon::WithinTwoYears
        )
    }
}

impl Vocabulary for RetirementHorizon {
    const FIELD: &'static str = "retirement_horizon";

    fn variants() -> &'static [Self] {
        &[
            RetirementHorizon::Distant,
            RetirementHorizon::WithinFiveYears,
            RetirementHorizon::WithinTwoYears,
        ]
    }

    fn display(self) -> &'static str {
        self.label()
    }
}

/// Tax situations that need dedicated documentation.
///
/// Declaration order is the order used when the set is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FiscalParticularity {
    #[serde(rename = "Crédit d'impôt")]
    TaxCredit,
    #[serde(rename = "JEI")]
    Jei,
    #[serde(rename = "ZFU/ZRR")]
    ZfuZrr,
    #[serde(rename = "LMNP")]
    Lmnp,
    #[serde(rename = "International")]
    International,
    #[serde(rename = "BIC/BNC mixte")]
    MixedBicBnc,
    #[serde(rename = "Holding")]
    Holding,
    #[serde(rename = "SCI")]
    Sci,
}

impl FiscalParticularity {
    pub const fn label(self) -> &'static str {
        match self {
            FiscalParticularity::TaxCredit => "Crédit d'impôt",
            FiscalParticularity::Jei => "JEI",
            FiscalParticularity::ZfuZrr => "ZFU/ZRR",
            FiscalParticularity::Lmnp => "LMNP",
            FiscalParticularity::International => "International",
            FiscalParticularity::MixedBicBnc => "BIC/BNC mixte",
            FiscalParticularity::Holding => "Holding",
            FiscalParticularity::Sci => "SCI",
        }
    }
}

impl Vocabulary for FiscalParticularity {
    const FIELD: &'static str = "fiscal_particularities";

    fn variants() -> &'static [Self] {
        &[
            FiscalParticularity::TaxCredit,
            FiscalParticularity::Jei,
            FiscalParticularity::ZfuZrr,
            FiscalParticularity::Lmnp,
            FiscalParticularity::International,
            FiscalParticularity::MixedBicBnc,
            FiscalParticularity::Holding,
            FiscalParticularity::Sci,
        ]
    }

    fn display(self) -> &'static str {
        self.label()
    }
}

/// Validated questionnaire answers for a single client.
///
/// Built by [`IntakeGuard`](super::IntakeGuard); the engines assume every field is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_name: String,
    pub sector: Sector,
    pub employee_count: u32,
    pub has_managers: bool,
    pub contract_type: ContractType,
    pub csr_sensitive: bool,
    pub pollution_level: PollutionLevel,
    pub wants_coaching: bool,
    pub principal_wealth: WealthTier,
    pub fiscal_particularities: BTreeSet<FiscalParticularity>,
    pub needs_cash_tracking: bool,
    pub needs_wealth_planning: bool,
    pub digitalization: DigitalizationLevel,
    pub retirement_horizon: RetirementHorizon,
    pub succession_planned: bool,
    pub consumer_vat_clients: bool,
}

impl ClientProfile {
    pub fn has_employees(&self) -> bool {
        self.employee_count > 0
    }

    pub fn has_particularity(&self, particularity: FiscalParticularity) -> bool {
        self.fiscal_particularities.contains(&particularity)
    }

    /// Holding or SCI structures around the operating company.
    pub fn has_group_structure(&self) -> bool {
        self.has_particularity(FiscalParticularity::Holding)
            || self.has_particularity(FiscalParticularity::Sci)
    }

    /// Explicit wealth-engineering request or a substantial personal estate.
    pub fn has_wealth_stakes(&self) -> bool {
        self.needs_wealth_planning || self.principal_wealth == WealthTier::Substantial
    }
}
