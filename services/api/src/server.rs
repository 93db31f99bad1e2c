use crate::cli::ServeArgs;
use crate::infra::{demo_rounds, AppState, InMemoryInsightRepository, InMemoryRoundSource};
use crate::routes::with_insight_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use round_insights::config::AppConfig;
use round_insights::error::AppError;
use round_insights::insights::RoundInsightService;
use round_insights::telemetry;
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

    let rounds = demo_rounds();
    info!(seeded_rounds = rounds.len(), "loaded in-memory round source");
    let insight_service = Arc::new(RoundInsightService::new(
        Arc::new(InMemoryInsightRepository::default()),
        Arc::new(InMemoryRoundSource::with_rounds(rounds)),
        config.insights.clone(),
    ));

    let app = with_insight_routes(insight_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "round insight service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
