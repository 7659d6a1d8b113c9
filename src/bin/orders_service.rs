use library::server::{
    config::{Config, ServiceKind, UpstreamConfig},
    error::AppError,
    router::orders_router,
    service::upstream::UpstreamClient,
    startup,
    state::OrderState,
};
use migration::OrderMigrator;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env(ServiceKind::Orders)?;
    let upstream_config = UpstreamConfig::from_env()?;

    let db = startup::connect_to_database::<OrderMigrator>(&config).await?;
    let http = startup::setup_reqwest_client(&upstream_config)?;

    tracing::info!(
        "Resolving members at {} and books at {} (timeout {:?})",
        upstream_config.member_service_url,
        upstream_config.book_service_url,
        upstream_config.timeout
    );

    let upstream = UpstreamClient::new(http, &upstream_config);
    let router = orders_router().with_state(OrderState::new(db, upstream));

    startup::serve(&config, router).await
}
