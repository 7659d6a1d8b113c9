use library::server::{
    config::{Config, ServiceKind},
    error::AppError,
    router::members_router,
    startup,
    state::AppState,
};
use migration::MemberMigrator;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env(ServiceKind::Members)?;
    let db = startup::connect_to_database::<MemberMigrator>(&config).await?;

    let router = members_router().with_state(AppState::new(db));

    startup::serve(&config, router).await
}
