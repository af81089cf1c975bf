use axum::{ServiceExt, extract::Request};
use catalog::build_router;
use catalog::config::{App, Cli, Config, LogFormat};
use catalog::handler::AppState;
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

fn init_tracing(app: &App) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&app.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match app.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // A missing .env is fine; variables may come from the real environment.
    let dotenv = dotenvy::dotenv();

    let cfg = match Config::from_cli(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing(&App::default());
            tracing::error!(error = ?e, path = ?args.config_path, "failed to load config file");
            std::process::exit(1);
        }
    };

    init_tracing(&cfg.app);
    tracing::info!("catalog.svc starting");
    if let Ok(path) = dotenv {
        tracing::info!(path = ?path, "loaded environment file");
    }

    let state = AppState::from_config(&cfg.app);
    let app = build_router(state);

    let address = cfg.app.address();
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, address = %address, "failed to setup tcp listener");
        std::process::exit(1);
    });

    let cancellation_token = CancellationToken::new();
    let shutdown_token = cancellation_token.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            return;
        }
        tracing::info!("ctrl+c signal received, preparing to shutdown");
        shutdown_token.cancel();
    });

    tracing::info!(
        id_strategy = ?cfg.app.id_strategy,
        seed = cfg.app.seed,
        "catalog.svc running on {}",
        &address
    );
    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move { cancellation_token.cancelled().await });

    if let Err(err) = server.await {
        tracing::error!(error = %err, "server terminated unexpectedly");
        std::process::exit(1);
    }

    tracing::info!("catalog.svc going off, graceful shutdown complete");
}
