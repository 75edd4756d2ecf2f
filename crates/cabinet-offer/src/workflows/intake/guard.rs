use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{
    ClientProfile, ContractType, DigitalizationLevel, FiscalParticularity, PollutionLevel,
    RetirementHorizon, Sector, Vocabulary, WealthTier,
};

/// Selectable in the particularities list but recorded as the consumer-VAT toggle.
pub const CONSUMER_VAT_PARTICULARITY: &str = "TVA particuliers";

const DEFAULT_CLIENT_NAME: &str = "Client DEMO";
const DEFAULT_MAX_EMPLOYEES: u32 = 1000;

/// Raw questionnaire answers as posted by a form or read from a JSON file.
///
/// Omitted answers fall back to the questionnaire's initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSubmission {
    pub client_name: Option<String>,
    pub sector: Option<String>,
    pub employee_count: Option<u32>,
    pub has_managers: Option<bool>,
    pub contract_type: Option<String>,
    pub csr_sensitive: Option<bool>,
    pub pollution_level: Option<String>,
    pub wants_coaching: Option<bool>,
    pub principal_wealth: Option<String>,
    pub fiscal_particularities: Vec<String>,
    pub needs_cash_tracking: Option<bool>,
    pub needs_wealth_planning: Option<bool>,
    pub digitalization: Option<String>,
    pub retirement_horizon: Option<String>,
    pub succession_planned: Option<bool>,
    pub consumer_vat_clients: Option<bool>,
}

/// Reasons a submission cannot become a [`ClientProfile`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("value '{value}' is not an accepted answer for {field}")]
    UnknownValue { field: &'static str, value: String },
    #[error("employee count {found} exceeds the questionnaire maximum of {max}")]
    EmployeeCountOutOfRange { max: u32, found: u32 },
    #[error("client name must not be blank")]
    BlankClientName,
}

/// Boundary that turns submissions into validated, immutable profiles.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    max_employees: u32,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EMPLOYEES)
    }
}

impl IntakeGuard {
    pub fn new(max_employees: u32) -> Self {
        Self { max_employees }
    }

    pub fn max_employees(&self) -> u32 {
        self.max_employees
    }

    /// Validate every answer against its vocabulary and apply the questionnaire defaults.
    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<ClientProfile, IntakeViolation> {
        let client_name = match submission.client_name {
            Some(name) if name.trim().is_empty() => return Err(IntakeViolation::BlankClientName),
            Some(name) => name.trim().to_string(),
            None => DEFAULT_CLIENT_NAME.to_string(),
        };

        let employee_count = submission.employee_count.unwrap_or(0);
        if employee_count > self.max_employees {
            return Err(IntakeViolation::EmployeeCountOutOfRange {
                max: self.max_employees,
                found: employee_count,
            });
        }

        let sector = parse_answer(submission.sector, Sector::Services)?;
        let default_contract = if employee_count == 0 {
            ContractType::NoEmployees
        } else {
            ContractType::Mixed
        };
        let contract_type = parse_answer(submission.contract_type, default_contract)?;
        let pollution_level = parse_answer(submission.pollution_level, PollutionLevel::LowOrNone)?;
        let principal_wealth = parse_answer(submission.principal_wealth, WealthTier::Modest)?;
        let digitalization =
            parse_answer(submission.digitalization, DigitalizationLevel::Rudimentary)?;
        let retirement_horizon =
            parse_answer(submission.retirement_horizon, RetirementHorizon::Distant)?;

        let mut consumer_vat_clients = submission.consumer_vat_clients.unwrap_or(false);
        let mut fiscal_particularities = BTreeSet::new();
        for raw in submission.fiscal_particularities {
            if raw.trim() == CONSUMER_VAT_PARTICULARITY {
                consumer_vat_clients = true;
                continue;
            }
            let particularity = FiscalParticularity::parse(&raw).ok_or_else(|| {
                IntakeViolation::UnknownValue {
                    field: FiscalParticularity::FIELD,
                    value: raw.clone(),
                }
            })?;
            fiscal_particularities.insert(particularity);
        }

        Ok(ClientProfile {
            client_name,
            sector,
            employee_count,
            has_managers: submission.has_managers.unwrap_or(false),
            contract_type,
            csr_sensitive: submission.csr_sensitive.unwrap_or(false),
            pollution_level,
            wants_coaching: submission.wants_coaching.unwrap_or(false),
            principal_wealth,
            fiscal_particularities,
            needs_cash_tracking: submission
                .needs_cash_tracking
                .unwrap_or_else(|| sector.has_volatile_cash()),
            needs_wealth_planning: submission
                .needs_wealth_planning
                .unwrap_or(principal_wealth == WealthTier::Substantial),
            digitalization,
            retirement_horizon,
            succession_planned: submission.succession_planned.unwrap_or(false),
            consumer_vat_clients,
        })
    }
}

fn parse_answer<V: Vocabulary>(raw: Option<String>, default: V) -> Result<V, IntakeViolation> {
    match raw {
        None => Ok(default),
        Some(value) => V::parse(&value).ok_or(IntakeViolation::UnknownValue {
            field: V::FIELD,
            value,
        }),
    }
}
