use library::server::{
    config::{Config, ServiceKind},
    error::AppError,
    router::books_router,
    startup,
    state::AppState,
};
use migration::BookMigrator;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env(ServiceKind::Books)?;
    let db = startup::connect_to_database::<BookMigrator>(&config).await?;

    let router = books_router().with_state(AppState::new(db));

    startup::serve(&config, router).await
}
