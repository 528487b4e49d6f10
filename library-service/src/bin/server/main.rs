use std::sync::Arc;

use auth::TokenService;
use library_service::account::ports::AccountRepository;
use library_service::config::Config;
use library_service::domain::account::service::AuthenticationService;
use library_service::inbound::http::router::create_router;
use library_service::outbound::repositories::InMemoryAccountRepository;
use library_service::outbound::repositories::PostgresAccountRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_service=debug,auth=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "library-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // Secret and lifetime are validated here so a bad value stops startup
    let token_config = config.jwt.token_config()?;
    let token_service = Arc::new(TokenService::new(token_config));

    let storage = match config.database {
        Some(_) => "postgresql",
        None => "memory",
    };
    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_ms = token_service.lifetime().num_milliseconds(),
        storage,
        "Configuration loaded"
    );

    match &config.database {
        Some(database) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database.url)
                .await?;
            tracing::info!(
                max_connections = 5,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let repository = Arc::new(PostgresAccountRepository::new(pg_pool));
            serve(&config, repository, token_service).await
        }
        None => {
            tracing::warn!("No database configured, accounts are kept in memory");
            let repository = Arc::new(InMemoryAccountRepository::new());
            serve(&config, repository, token_service).await
        }
    }
}

async fn serve<AR: AccountRepository>(
    config: &Config,
    repository: Arc<AR>,
    token_service: Arc<TokenService>,
) -> Result<(), anyhow::Error> {
    let auth_service = Arc::new(AuthenticationService::new(
        repository,
        Arc::clone(&token_service),
    )?);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, token_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
