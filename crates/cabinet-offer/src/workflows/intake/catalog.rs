use serde::{Deserialize, Serialize};

/// Stable identifiers for every service package the firm can propose.
///
/// Declaration order doubles as the catalog storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferCode {
    SocialBasique,
    SocialPlus,
    SocialPremium,
    RseDiag,
    RseReporting,
    CoachingLight,
    CoachingPro,
    PatrimoineBase,
    PatrimoineAvance,
    FiscalPart,
    Tresorerie,
    DigitalStart,
    DigitalFull,
    BtpPack,
    GestionBudget,
    RevueQualite,
    Succession,
    Retraite,
    International,
}

impl OfferCode {
    pub const ALL: [OfferCode; 19] = [
        OfferCode::SocialBasique,
        OfferCode::SocialPlus,
        OfferCode::SocialPremium,
        OfferCode::RseDiag,
        OfferCode::RseReporting,
        OfferCode::CoachingLight,
        OfferCode::CoachingPro,
        OfferCode::PatrimoineBase,
        OfferCode::PatrimoineAvance,
        OfferCode::FiscalPart,
        OfferCode::Tresorerie,
        OfferCode::DigitalStart,
        OfferCode::DigitalFull,
        OfferCode::BtpPack,
        OfferCode::GestionBudget,
        OfferCode::RevueQualite,
        OfferCode::Succession,
        OfferCode::Retraite,
        OfferCode::International,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            OfferCode::SocialBasique => "social_basique",
            OfferCode::SocialPlus => "social_plus",
            OfferCode::SocialPremium => "social_premium",
            OfferCode::RseDiag => "rse_diag",
            OfferCode::RseReporting => "rse_reporting",
            OfferCode::CoachingLight => "coaching_light",
            OfferCode::CoachingPro => "coaching_pro",
            OfferCode::PatrimoineBase => "patrimoine_base",
            OfferCode::PatrimoineAvance => "patrimoine_avance",
            OfferCode::FiscalPart => "fiscal_part",
            OfferCode::Tresorerie => "tresorerie",
            OfferCode::DigitalStart => "digital_start",
            OfferCode::DigitalFull => "digital_full",
            OfferCode::BtpPack => "btp_pack",
            OfferCode::GestionBudget => "gestion_budget",
            OfferCode::RevueQualite => "revue_qualite",
            OfferCode::Succession => "succession",
            OfferCode::Retraite => "retraite",
            OfferCode::International => "international",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Label and monthly (or flat) price, excluding VAT, of one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: OfferCode,
    pub label: String,
    pub price: u32,
}

/// Raised when a price table does not cover every offer code exactly once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("pricing catalog has no entry for offer code '{}'", .0.as_str())]
    MissingOffer(OfferCode),
    #[error("pricing catalog lists offer code '{}' more than once", .0.as_str())]
    DuplicateOffer(OfferCode),
    #[error("pricing catalog prices sum past {} and cannot be totalled", u32::MAX)]
    PriceTotalOverflow,
}

const STANDARD_PRICES: [(OfferCode, &str, u32); 19] = [
    (
        OfferCode::SocialBasique,
        "Paie & obligations sociales - Pack Essentiel",
        180,
    ),
    (
        OfferCode::SocialPlus,
        "Paie & RH - Pack Plus (audit + procédures)",
        350,
    ),
    (
        OfferCode::SocialPremium,
        "Paie & RH - Pack Premium (SIRH + KPI sociaux)",
        550,
    ),
    (OfferCode::RseDiag, "Diagnostic RSE & plan d'actions", 1200),
    (
        OfferCode::RseReporting,
        "Reporting RSE/CSRD adapté TPE/PME",
        450,
    ),
    (
        OfferCode::CoachingLight,
        "Coaching dirigeant - Pack Starter (1h/mois)",
        190,
    ),
    (
        OfferCode::CoachingPro,
        "Coaching dirigeant - Pack Pro (2h/mois + ateliers)",
        390,
    ),
    (OfferCode::PatrimoineBase, "Bilan patrimonial dirigeant", 900),
    (
        OfferCode::PatrimoineAvance,
        "Ingénierie patrimoniale avancée (holdings/SCI/IF)",
        1800,
    ),
    (
        OfferCode::FiscalPart,
        "Traitements fiscaux particuliers (notes spécifiques)",
        380,
    ),
    (
        OfferCode::Tresorerie,
        "Cash management & prévisionnels de trésorerie",
        320,
    ),
    (
        OfferCode::DigitalStart,
        "Digitalisation - Starter (outils facturation, banque)",
        150,
    ),
    (
        OfferCode::DigitalFull,
        "Digitalisation - Full (OCR, Hub, flux API)",
        420,
    ),
    (
        OfferCode::BtpPack,
        "Pack BTP (suivi chantiers, retenues, DGD)",
        350,
    ),
    (
        OfferCode::GestionBudget,
        "Tableaux de bord & budget (mensuel)",
        280,
    ),
    (
        OfferCode::RevueQualite,
        "Revue Qualité comptable & fiscale (trimestrielle)",
        240,
    ),
    (
        OfferCode::Succession,
        "Anticipation transmission / pacte Dutreil (pré-étude)",
        1200,
    ),
    (
        OfferCode::Retraite,
        "Bilan retraite & optimisation (étude complète)",
        750,
    ),
    (
        OfferCode::International,
        "International (TVA/DEB/DES/EMEA sanity check)",
        650,
    ),
];

/// Immutable price table consulted by the offer engine.
///
/// Every [`OfferCode`] has exactly one entry, so lookups never fail once a catalog exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PricingCatalog {
    entries: Vec<CatalogEntry>,
}

impl PricingCatalog {
    /// Build a catalog, rejecting tables that miss or repeat a code.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<CatalogEntry>> = vec![None; OfferCode::ALL.len()];
        for entry in entries {
            let slot = &mut slots[entry.code.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateOffer(entry.code));
            }
            *slot = Some(entry);
        }

        let mut ordered = Vec::with_capacity(slots.len());
        for (code, slot) in OfferCode::ALL.into_iter().zip(slots) {
            ordered.push(slot.ok_or(CatalogError::MissingOffer(code))?);
        }

        // any offer selection is a subset, so a bounded grand total bounds every proposal total
        ordered
            .iter()
            .try_fold(0u32, |total, entry| total.checked_add(entry.price))
            .ok_or(CatalogError::PriceTotalOverflow)?;

        Ok(Self { entries: ordered })
    }

    /// The firm's published price table.
    pub fn standard() -> Self {
        let entries = STANDARD_PRICES
            .iter()
            .map(|(code, label, price)| CatalogEntry {
                code: *code,
                label: (*label).to_string(),
                price: *price,
            })
            .collect();
        Self { entries }
    }

    pub fn entry(&self, code: OfferCode) -> &CatalogEntry {
        &self.entries[code.index()]
    }

    pub fn label(&self, code: OfferCode) -> &str {
        &self.entry(code).label
    }

    pub fn price(&self, code: OfferCode) -> u32 {
        self.entry(code).price
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
