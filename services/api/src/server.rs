use crate::cli::ServeArgs;
use crate::infra::{AppState, IntakeState};
use crate::routes::with_intake_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cabinet_offer::config::AppConfig;
use cabinet_offer::error::AppError;
use cabinet_offer::telemetry;
use cabinet_offer::workflows::intake::{PricingCatalog, ProposalExporter};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = PricingCatalog::standard();
    let exporter = ProposalExporter::new(config.export.directory.clone());
    let intake_state = IntakeState::new(catalog, exporter);

    let app = with_intake_routes(intake_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        export_dir = %config.export.directory.display(),
        "client intake service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
