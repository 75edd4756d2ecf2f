use super::super::catalog::OfferCode;
use super::super::domain::{
    ClientProfile, DigitalizationLevel, FiscalParticularity, PollutionLevel, Sector, WealthTier,
};

/// Guarded recommendation: when `applies` holds, `code` is proposed with `rationale`.
pub(crate) struct OfferRule {
    pub code: OfferCode,
    pub rationale: &'static str,
    pub applies: fn(&ClientProfile) -> bool,
}

const ENHANCED_PAYROLL_HEADCOUNT: u32 = 11;
const PREMIUM_PAYROLL_HEADCOUNT: u32 = 25;

fn needs_enhanced_payroll(profile: &ClientProfile) -> bool {
    profile.employee_count >= ENHANCED_PAYROLL_HEADCOUNT || profile.has_managers
}

/// Evaluation order is significant: it fixes offer order, which duplicate wins, and the
/// order justifications accumulate in.
pub(crate) const OFFER_RULES: &[OfferRule] = &[
    OfferRule {
        code: OfferCode::SocialPlus,
        rationale: "≥ 11 salariés et/ou présence de cadres",
        applies: |p| p.has_employees() && needs_enhanced_payroll(p),
    },
    OfferRule {
        code: OfferCode::SocialBasique,
        rationale: "Paie et obligations sociales standard",
        applies: |p| p.has_employees() && !needs_enhanced_payroll(p),
    },
    OfferRule {
        code: OfferCode::SocialPremium,
        rationale: "Effectif significatif → SIRH & KPI sociaux",
        applies: |p| p.employee_count >= PREMIUM_PAYROLL_HEADCOUNT,
    },
    OfferRule {
        code: OfferCode::RseDiag,
        rationale: "Client sensible RSE → diagnostic & plan d'actions",
        applies: |p| p.csr_sensitive,
    },
    OfferRule {
        code: OfferCode::RseReporting,
        rationale: "Suivi des indicateurs RSE (empreinte, énergie, déchets)",
        applies: |p| p.csr_sensitive && p.pollution_level != PollutionLevel::LowOrNone,
    },
    OfferRule {
        code: OfferCode::CoachingLight,
        rationale: "Accompagnement dirigeant régulier (starter)",
        applies: |p| p.wants_coaching && p.principal_wealth == WealthTier::Modest,
    },
    OfferRule {
        code: OfferCode::CoachingPro,
        rationale: "Accompagnement renforcé pour enjeux stratégiques",
        applies: |p| p.wants_coaching && p.principal_wealth == WealthTier::Substantial,
    },
    OfferRule {
        code: OfferCode::PatrimoineBase,
        rationale: "Besoin patrimonial identifié",
        applies: ClientProfile::has_wealth_stakes,
    },
    OfferRule {
        code: OfferCode::PatrimoineAvance,
        rationale: "Structuration groupe / immo patrimonial",
        applies: |p| p.has_group_structure() && p.has_wealth_stakes(),
    },
    OfferRule {
        code: OfferCode::FiscalPart,
        rationale: "Cas fiscaux spécifiques à documenter",
        applies: |p| !p.fiscal_particularities.is_empty(),
    },
    OfferRule {
        code: OfferCode::International,
        rationale: "Flux intracommunautaires / export → contrôles dédiés",
        applies: |p| p.has_particularity(FiscalParticularity::International),
    },
    OfferRule {
        code: OfferCode::Tresorerie,
        rationale: "Volatilité de trésorerie / besoin de pilotage",
        applies: |p| p.needs_cash_tracking || p.sector.has_volatile_cash(),
    },
    OfferRule {
        code: OfferCode::GestionBudget,
        rationale: "Tableaux de bord et budget mensuel utiles à tout profil PME/TPE",
        applies: |_| true,
    },
    OfferRule {
        code: OfferCode::RevueQualite,
        rationale: "Sécuriser la qualité comptable et fiscale",
        applies: |_| true,
    },
    OfferRule {
        code: OfferCode::DigitalStart,
        rationale: "Mettre en place la base des outils digitaux",
        applies: |p| p.digitalization == DigitalizationLevel::NotComputerized,
    },
    OfferRule {
        code: OfferCode::DigitalFull,
        rationale: "Structurer et automatiser les flux (OCR/API/Banque)",
        applies: |p| p.digitalization == DigitalizationLevel::Rudimentary,
    },
    OfferRule {
        code: OfferCode::BtpPack,
        rationale: "Spécificités chantiers (retenues, situations, DGD)",
        applies: |p| p.sector == Sector::Btp,
    },
    OfferRule {
        code: OfferCode::Retraite,
        rationale: "Horizon de départ → bilan retraite & options",
        applies: |p| p.retirement_horizon.is_near(),
    },
    OfferRule {
        code: OfferCode::Succession,
        rationale: "Projet de transmission → pré-étude Dutreil/holding",
        applies: |p| p.succession_planned,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconditional_rules_follow_treasury_rule() {
        let position = |code| {
            OFFER_RULES
                .iter()
                .position(|rule| rule.code == code)
                .expect("rule present")
        };
        assert_eq!(position(OfferCode::GestionBudget), position(OfferCode::Tresorerie) + 1);
        assert_eq!(position(OfferCode::RevueQualite), position(OfferCode::GestionBudget) + 1);
    }

    #[test]
    fn every_rule_has_a_rationale() {
        assert!(OFFER_RULES.iter().all(|rule| !rule.rationale.trim().is_empty()));
    }
}
