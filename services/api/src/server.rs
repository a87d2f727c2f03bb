use crate::cli::ServeArgs;
use crate::infra::{explainer_from_config, AppState};
use crate::routes::with_fraud_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use claimwatch::config::AppConfig;
use claimwatch::error::AppError;
use claimwatch::fraud::FraudAnalysisService;
use claimwatch::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let explainer = Arc::new(explainer_from_config(&config.explanation)?);
    let analysis_service = Arc::new(
        FraudAnalysisService::new(explainer)
            .with_processing_delay(config.analysis.processing_delay),
    );

    let app = with_fraud_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        processing_delay_ms = config.analysis.processing_delay.as_millis() as u64,
        "claimwatch fraud analysis service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
