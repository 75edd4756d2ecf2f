use crate::infra::parse_date;
use cabinet_offer::config::AppConfig;
use cabinet_offer::error::AppError;
use cabinet_offer::telemetry;
use cabinet_offer::workflows::intake::proposal::profile_fields;
use cabinet_offer::workflows::intake::{
    format_euros, rule_guide, IntakeEvaluation, IntakeGuard, PricingCatalog, ProfileSubmission,
    ProposalExporter,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// JSON questionnaire answers; omitted answers use the questionnaire defaults
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Write the Markdown proposal after printing the evaluation
    #[arg(long)]
    pub(crate) export: bool,
    /// Override the configured export directory
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
    /// Proposal date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

fn load_submission(path: Option<PathBuf>) -> Result<ProfileSubmission, AppError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(ProfileSubmission::default()),
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        profile,
        export,
        export_dir,
        date,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let submission = load_submission(profile)?;
    let profile = IntakeGuard::default().profile_from_submission(submission)?;
    let catalog = PricingCatalog::standard();
    let evaluation = IntakeEvaluation::evaluate(profile, &catalog);

    render_evaluation(&evaluation);

    if export {
        let directory = export_dir.unwrap_or(config.export.directory);
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let path = ProposalExporter::new(directory).export(
            &evaluation.profile,
            &evaluation.segment,
            &evaluation.offers,
            date,
        )?;
        println!("\nProposition générée : {}", path.display());
    }

    Ok(())
}

fn render_evaluation(evaluation: &IntakeEvaluation) {
    let IntakeEvaluation {
        profile,
        segment,
        offers,
    } = evaluation;

    println!("Dossier client : {}", profile.client_name);
    for (label, value) in profile_fields(profile) {
        println!("- {label} : {value}");
    }

    println!("\nSegmentation & risques");
    println!("Segment : {}", segment.segment);
    println!(
        "Intensité conformité : {}",
        segment.compliance_intensity.label()
    );
    if segment.risk_flags.is_empty() {
        println!("Aucun signal de risque particulier identifié.");
    } else {
        for flag in &segment.risk_flags {
            println!("- {flag}");
        }
    }

    println!("\nOffre recommandée");
    println!(
        "Total indicatif (HT / mois ou forfait) : {}",
        format_euros(offers.total_ht)
    );
    for offer in &offers.offers {
        println!("- {} — {}", offer.label, format_euros(offer.price));
        let reasons = offers.rationales_for(offer.code);
        if reasons.is_empty() {
            println!("    Recommandé selon le profil.");
        }
        for reason in reasons {
            println!("    {reason}");
        }
    }
}

pub(crate) fn run_catalog() {
    let catalog = PricingCatalog::standard();
    println!("Grille tarifaire");
    for entry in catalog.entries() {
        println!(
            "- {} | {} | {}",
            entry.code.as_str(),
            entry.label,
            format_euros(entry.price)
        );
    }
}

pub(crate) fn run_rules() {
    println!("Règles clés");
    for rule in rule_guide() {
        println!("- {} : {}", rule.topic, rule.explanation);
    }
}
