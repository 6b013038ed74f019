use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicantRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use impact_os::assessment::AssessmentService;
use impact_os::config::AppConfig;
use impact_os::currency::{CurrencyLedger, InMemoryLedger};
use impact_os::error::AppError;
use impact_os::telemetry;
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

    let assessment_service = Arc::new(AssessmentService::new(Arc::new(
        InMemoryApplicantRepository::default(),
    )));
    let ledger = Arc::new(CurrencyLedger::new(
        Arc::new(InMemoryLedger::new()),
        config.currency.clone(),
    ));

    let app = with_service_routes(assessment_service, ledger)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        decay_rate = config.currency.decay_rate,
        "impact os service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
