mod rules;

use std::collections::{BTreeMap, HashSet};

use super::catalog::{OfferCode, PricingCatalog};
use super::domain::ClientProfile;
use rules::OFFER_RULES;
use serde::{Deserialize, Serialize};

/// A priced package retained for the proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedOffer {
    pub code: OfferCode,
    pub label: String,
    pub price: u32,
}

/// Deduplicated offers, their justifications, and the indicative total excluding VAT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferResult {
    pub offers: Vec<RecommendedOffer>,
    /// Justifications keyed by offer code, in rule order. Repeated recommendations
    /// of a code keep their justification even though the offer is listed once.
    pub rationales: BTreeMap<OfferCode, Vec<String>>,
    pub total_ht: u32,
}

impl OfferResult {
    pub fn contains(&self, code: OfferCode) -> bool {
        self.offers.iter().any(|offer| offer.code == code)
    }

    pub fn rationales_for(&self, code: OfferCode) -> &[String] {
        self.rationales
            .get(&code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Append-only accumulator behind the "add offer" step.
#[derive(Default)]
struct OfferAccumulator {
    recommended: Vec<RecommendedOffer>,
    rationales: BTreeMap<OfferCode, Vec<String>>,
}

impl OfferAccumulator {
    fn add(&mut self, catalog: &PricingCatalog, code: OfferCode, rationale: &str) {
        let entry = catalog.entry(code);
        self.recommended.push(RecommendedOffer {
            code,
            label: entry.label.clone(),
            price: entry.price,
        });
        self.rationales
            .entry(code)
            .or_default()
            .push(rationale.to_string());
    }

    fn finish(self) -> OfferResult {
        let mut seen = HashSet::new();
        let offers: Vec<RecommendedOffer> = self
            .recommended
            .into_iter()
            .filter(|offer| seen.insert(offer.code))
            .collect();
        let total_ht = offers.iter().map(|offer| offer.price).sum();

        OfferResult {
            offers,
            rationales: self.rationales,
            total_ht,
        }
    }
}

/// Evaluate the offer rules in order against `profile`, pricing from `catalog`.
///
/// The first recommendation of a code fixes its position in the list; later ones only
/// add justifications. The total covers the deduplicated list.
pub fn compute_offers(profile: &ClientProfile, catalog: &PricingCatalog) -> OfferResult {
    let mut accumulator = OfferAccumulator::default();
    for rule in OFFER_RULES.iter().filter(|rule| (rule.applies)(profile)) {
        accumulator.add(catalog, rule.code, rule.rationale);
    }
    accumulator.finish()
}
