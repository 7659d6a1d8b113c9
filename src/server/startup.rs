use axum::{
    http::{header, Method},
    Router,
};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::{Config, UpstreamConfig},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to info for this crate and for request tracing.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the database and runs the service's pending migrations.
///
/// The connection pool is created once here and handed to the application state; handlers
/// never connect on their own. `M` selects the migrator of the calling service, so each
/// service only creates its own table.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database<M: MigratorTrait>(
    config: &Config,
) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    M::up(&db, None).await?;

    tracing::info!("Connected to database for {}", config.service.name());

    Ok(db)
}

/// Builds the HTTP client used for calls to the member and book services.
///
/// Redirects are disabled so a lookup can only ever reach the configured service. The connect
/// timeout matches the per-call bound enforced by `UpstreamClient`.
pub fn setup_reqwest_client(config: &UpstreamConfig) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(config.timeout)
        .build()?;

    Ok(client)
}

/// CORS policy for the dashboard origins.
pub fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Binds the configured address and serves `router` until a shutdown signal arrives.
pub async fn serve(config: &Config, router: Router) -> Result<(), AppError> {
    let app = router
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!(
        "Starting {} on {}",
        config.service.name(),
        config.bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} stopped", config.service.name());

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
