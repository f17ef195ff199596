use anyhow::Result;
use blog_admin::application::{
    ports::{
        security::TokenManager, syndication::SyndicationImporter, themes::ThemeStorage,
        time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use blog_admin::config::AppConfig;
use blog_admin::domain::unit_of_work::UnitOfWorkFactory;
use blog_admin::infrastructure::{
    database, repositories::PostgresUnitOfWorkFactory, security::BiscuitTokenManager,
    syndication::PostgresImportQueue, themes::FsThemeStorage, time::SystemClock,
    util::DefaultSlugGenerator,
};
use blog_admin::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let uow: Arc<dyn UnitOfWorkFactory> = Arc::new(PostgresUnitOfWorkFactory::new(pool.clone()));
    let importer: Arc<dyn SyndicationImporter> = Arc::new(PostgresImportQueue::new(pool));
    let themes: Arc<dyn ThemeStorage> = Arc::new(FsThemeStorage::new(config.themes_dir()));
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        uow,
        themes,
        importer,
        token_manager,
        clock,
        slugger,
    ));

    let state = HttpState {
        services,
        public_base_url: config.public_base_url().to_string(),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        %address,
        themes_dir = %config.themes_dir().display(),
        "blog admin listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
