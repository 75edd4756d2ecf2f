use serde::Serialize;

/// One explainable rule family shown to advisers alongside the recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleExplanation {
    pub topic: &'static str,
    pub explanation: &'static str,
}

static RULE_GUIDE: [RuleExplanation; 6] = [
    RuleExplanation {
        topic: "Taille & RH",
        explanation: "≥ 11 salariés implique CSE et obligations renforcées ; présence de cadres ⇒ complexité paie/RH.",
    },
    RuleExplanation {
        topic: "RSE",
        explanation: "Client sensible RSE ⇒ diagnostic + reporting si impact environnemental non négligeable.",
    },
    RuleExplanation {
        topic: "Digitalisation",
        explanation: "Faible maturité ⇒ mise en place d'outils ; maturité moyenne ⇒ automatisations avancées.",
    },
    RuleExplanation {
        topic: "Secteur BTP",
        explanation: "Suivi chantiers, retenues de garantie, situations de travaux ⇒ pack dédié.",
    },
    RuleExplanation {
        topic: "Transmission",
        explanation: "Horizon retraite ≤ 5 ans ou succession envisagée ⇒ études retraite et Dutreil.",
    },
    RuleExplanation {
        topic: "Fiscalité",
        explanation: "Cas spécifiques (international, holdings, SCI, etc.) ⇒ notes et contrôles dédiés.",
    },
];

/// Key rules in display order.
pub fn rule_guide() -> &'static [RuleExplanation] {
    &RULE_GUIDE
}
