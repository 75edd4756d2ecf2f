use cabinet_offer::workflows::intake::{IntakeGuard, PricingCatalog, ProposalExporter};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Operational state behind the health, readiness, and metrics endpoints.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared, read-only collaborators for the intake endpoints.
#[derive(Clone)]
pub(crate) struct IntakeState {
    pub(crate) guard: Arc<IntakeGuard>,
    pub(crate) catalog: Arc<PricingCatalog>,
    pub(crate) exporter: Arc<ProposalExporter>,
}

impl IntakeState {
    pub(crate) fn new(catalog: PricingCatalog, exporter: ProposalExporter) -> Self {
        Self {
            guard: Arc::new(IntakeGuard::default()),
            catalog: Arc::new(catalog),
            exporter: Arc::new(exporter),
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_date(" 2026-10-15 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date"))
        );
        assert!(parse_date("15/10/2026")
            .expect_err("french format rejected")
            .contains("YYYY-MM-DD"));
    }
}
