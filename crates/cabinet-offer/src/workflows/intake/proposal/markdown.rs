use std::fmt::Write;

use chrono::NaiveDate;

use super::super::domain::ClientProfile;
use super::super::offers::OfferResult;
use super::super::segmentation::SegmentResult;
use super::format::format_euros;

/// Checklist closing every proposal.
pub const NEXT_STEPS: [&str; 4] = [
    "Atelier de cadrage (1h) pour valider les priorités et le périmètre",
    "Plan d'onboarding (accès bancaires, facturation, paie, outils)",
    "Mise en place des rituels (comité de pilotage mensuel / trimestriel)",
    "Premiers livrables : budget, prévisionnel de trésorerie, diagnostic RSE",
];

fn yes_no(value: bool) -> String {
    let label = if value { "Oui" } else { "Non" };
    label.to_string()
}

/// Human-readable (label, value) pairs for every answer except the client name.
pub fn profile_fields(profile: &ClientProfile) -> Vec<(&'static str, String)> {
    let particularities = profile
        .fiscal_particularities
        .iter()
        .map(|particularity| particularity.label())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        ("Secteur", profile.sector.label().to_string()),
        ("Nombre de salariés", profile.employee_count.to_string()),
        ("Présence de cadres", yes_no(profile.has_managers)),
        ("Type de contrats", profile.contract_type.label().to_string()),
        ("Sensibilité RSE", yes_no(profile.csr_sensitive)),
        (
            "Niveau d'impact environnemental",
            profile.pollution_level.label().to_string(),
        ),
        ("Souhaite coaching dirigeant", yes_no(profile.wants_coaching)),
        (
            "Patrimoine du dirigeant",
            profile.principal_wealth.label().to_string(),
        ),
        ("Particularités fiscales", particularities),
        ("Suivi de trésorerie", yes_no(profile.needs_cash_tracking)),
        ("Besoin patrimonial", yes_no(profile.needs_wealth_planning)),
        (
            "Niveau de digitalisation",
            profile.digitalization.label().to_string(),
        ),
        (
            "Horizon retraite",
            profile.retirement_horizon.label().to_string(),
        ),
        ("Projet de succession", yes_no(profile.succession_planned)),
        (
            "Clients particuliers avec TVA",
            yes_no(profile.consumer_vat_clients),
        ),
    ]
}

/// Render the four-section commercial proposal as Markdown.
pub fn render_proposal(
    profile: &ClientProfile,
    segment: &SegmentResult,
    offers: &OfferResult,
    date: NaiveDate,
) -> String {
    let mut doc = String::new();

    writeln!(
        &mut doc,
        "# Proposition d'accompagnement — {}",
        profile.client_name
    )
    .expect("write title");
    doc.push('\n');
    writeln!(&mut doc, "_Date : {}_", date.format("%Y-%m-%d")).expect("write date");
    doc.push('\n');

    writeln!(&mut doc, "## 1) Profil synthétique").expect("write profile heading");
    doc.push('\n');
    for (label, value) in profile_fields(profile) {
        writeln!(&mut doc, "- **{label}** : {value}").expect("write profile field");
    }
    doc.push('\n');

    writeln!(&mut doc, "## 2) Segmentation & risques").expect("write segment heading");
    doc.push('\n');
    writeln!(&mut doc, "- **Segment** : {}", segment.segment).expect("write segment");
    writeln!(
        &mut doc,
        "- **Intensité conformité** : {}",
        segment.compliance_intensity.label()
    )
    .expect("write compliance intensity");
    for flag in &segment.risk_flags {
        writeln!(&mut doc, "  - ⚠️ {flag}").expect("write risk flag");
    }
    doc.push('\n');

    writeln!(&mut doc, "## 3) Offre recommandée").expect("write offer heading");
    doc.push('\n');
    for offer in &offers.offers {
        writeln!(
            &mut doc,
            "- **{}** — {} / mois ou forfait",
            offer.label,
            format_euros(offer.price)
        )
        .expect("write offer");
        for reason in offers.rationales_for(offer.code) {
            writeln!(&mut doc, "  - Justification : {reason}").expect("write justification");
        }
    }
    doc.push('\n');
    writeln!(
        &mut doc,
        "**Total indicatif** (HT) : {}",
        format_euros(offers.total_ht)
    )
    .expect("write total");
    doc.push('\n');

    writeln!(&mut doc, "## 4) Prochaines étapes").expect("write next steps heading");
    for step in NEXT_STEPS {
        writeln!(&mut doc, "- {step}").expect("write next step");
    }

    doc
}
