//! Client intake questionnaire: profile validation, segmentation, offer selection,
//! and the commercial proposal built from them.
//!
//! The two engines ([`infer_segment`] and [`compute_offers`]) are pure functions over a
//! validated [`ClientProfile`]. Input validation happens once in [`IntakeGuard`]; file
//! output happens only in [`ProposalExporter`].

pub mod catalog;
pub mod domain;
mod guard;
mod guide;
pub mod offers;
pub mod proposal;
pub mod segmentation;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogEntry, CatalogError, OfferCode, PricingCatalog};
pub use domain::{
    ClientProfile, ContractType, DigitalizationLevel, FiscalParticularity, PollutionLevel,
    RetirementHorizon, Sector, Vocabulary, WealthTier,
};
pub use guard::{IntakeGuard, IntakeViolation, ProfileSubmission, CONSUMER_VAT_PARTICULARITY};
pub use guide::{rule_guide, RuleExplanation};
pub use offers::{compute_offers, OfferResult, RecommendedOffer};
pub use proposal::{format_euros, render_proposal, ExportError, ProposalExporter};
pub use segmentation::{infer_segment, ComplianceIntensity, SegmentResult};

use serde::Serialize;

/// Both engine outputs for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeEvaluation {
    pub profile: ClientProfile,
    pub segment: SegmentResult,
    pub offers: OfferResult,
}

impl IntakeEvaluation {
    /// Run both engines independently against the same profile.
    pub fn evaluate(profile: ClientProfile, catalog: &PricingCatalog) -> Self {
        let segment = infer_segment(&profile);
        let offers = compute_offers(&profile, catalog);
        Self {
            profile,
            segment,
            offers,
        }
    }
}
