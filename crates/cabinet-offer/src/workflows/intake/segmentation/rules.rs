use super::super::domain::{
    ClientProfile, ContractType, DigitalizationLevel, FiscalParticularity, PollutionLevel, Sector,
};
use super::ComplianceIntensity;

/// One step of the segmentation pass: a guard and the effects it contributes.
pub(crate) struct SegmentRule {
    pub applies: fn(&ClientProfile) -> bool,
    pub tag: Option<&'static str>,
    pub risk_flag: Option<&'static str>,
    pub intensity: Option<ComplianceIntensity>,
}

pub(crate) const SOLO_TAG: &str = "Solo/Très petite structure";
pub(crate) const SMALL_BUSINESS_TAG: &str = "TPE < 11";
pub(crate) const SME_TAG: &str = "PME ≥ 11";

/// Headcount from which works-council obligations apply.
pub(crate) const WORKS_COUNCIL_THRESHOLD: u32 = 11;

fn is_solo(profile: &ClientProfile) -> bool {
    profile.employee_count == 0 || profile.contract_type == ContractType::NoEmployees
}

/// Evaluation order matters: tags join in this order and flags are listed in this order.
pub(crate) const SEGMENT_RULES: &[SegmentRule] = &[
    // size, exactly one of the next three fires
    SegmentRule {
        applies: is_solo,
        tag: Some(SOLO_TAG),
        risk_flag: None,
        intensity: None,
    },
    SegmentRule {
        applies: |p| !is_solo(p) && p.employee_count < WORKS_COUNCIL_THRESHOLD,
        tag: Some(SMALL_BUSINESS_TAG),
        risk_flag: None,
        intensity: None,
    },
    SegmentRule {
        applies: |p| !is_solo(p) && p.employee_count >= WORKS_COUNCIL_THRESHOLD,
        tag: Some(SME_TAG),
        risk_flag: None,
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.sector == Sector::Btp,
        tag: Some("BTP"),
        risk_flag: Some("Gestion des chantiers et retenues de garantie"),
        intensity: Some(ComplianceIntensity::Enhanced),
    },
    SegmentRule {
        applies: |p| p.sector == Sector::ECommerce,
        tag: None,
        risk_flag: Some("TVA OSS/IOSS et plateformes"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.sector == Sector::Industrie,
        tag: None,
        risk_flag: Some("Stocks et immo complexes"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.has_employees() && p.has_managers,
        tag: None,
        risk_flag: Some("Cadres & forfait jours"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.has_employees() && p.employee_count >= WORKS_COUNCIL_THRESHOLD,
        tag: None,
        risk_flag: Some("CSE / obligations sociales renforcées"),
        intensity: Some(ComplianceIntensity::Enhanced),
    },
    SegmentRule {
        applies: |p| p.csr_sensitive && p.pollution_level == PollutionLevel::Significant,
        tag: None,
        risk_flag: Some("Enjeux environnementaux critiques"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.csr_sensitive && p.pollution_level == PollutionLevel::Moderate,
        tag: None,
        risk_flag: Some("Suivi empreinte & conformité environnementale"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.digitalization == DigitalizationLevel::NotComputerized,
        tag: None,
        risk_flag: Some("Faible digitalisation (risque d'erreurs et coûts)"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.digitalization == DigitalizationLevel::Rudimentary,
        tag: None,
        risk_flag: Some("Digitalisation partielle à structurer"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.retirement_horizon.is_near(),
        tag: None,
        risk_flag: Some("Horizon retraite à anticiper"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.succession_planned,
        tag: None,
        risk_flag: Some("Projet de succession / transmission"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.has_particularity(FiscalParticularity::International),
        tag: None,
        risk_flag: Some("Flux internationaux (prix de transfert/TVA)"),
        intensity: Some(ComplianceIntensity::Enhanced),
    },
    SegmentRule {
        applies: ClientProfile::has_group_structure,
        tag: None,
        risk_flag: Some("Groupe / structuration patrimoniale"),
        intensity: None,
    },
    SegmentRule {
        applies: |p| p.consumer_vat_clients,
        tag: None,
        risk_flag: Some("Risque TVA B2C (règles spécifiques)"),
        intensity: None,
    },
];
