use anyhow::{bail, Context, Result};
use axum::{serve, Router};
use complaint_desk::core::config::Config;
use complaint_desk::core::routes::build_router;
use complaint_desk::core::state::AppState;
use complaint_desk::core::tracing_init::init_tracing;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::{TcpListener, UnixListener};
use tokio::signal;
use tokio::task::JoinHandle;
use tower::{Service, ServiceBuilder};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};

fn main() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    let config = Config::from_file(&config_path).context(format!(
        "Failed to load configuration from '{}'",
        config_path.display()
    ))?;

    init_tracing(&config.logging);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = ?config.server.port,
        unix_socket = ?config.server.unix_socket,
        num_threads = config.server.num_threads,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Complaint desk starting"
    );

    let state = Arc::new(AppState::new(config.clone()));

    let app = build_router(state).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    );

    let tcp_handle = match config.server.port {
        Some(port) => Some(spawn_tcp(app.clone(), port).await?),
        None => None,
    };

    let unix_handle = match &config.server.unix_socket {
        Some(path) => Some(spawn_unix(app, path)?),
        None => None,
    };

    info!("HTTP server(s) started, waiting for shutdown signal");

    match (tcp_handle, unix_handle) {
        (Some(tcp), Some(unix)) => {
            tokio::select! {
                result = tcp => report_exit("TCP", result),
                _ = unix => {}
                _ = shutdown_signal() => {}
            }
        }
        (Some(tcp), None) => report_exit("TCP", tcp.await),
        (None, Some(unix)) => {
            tokio::select! {
                _ = unix => {}
                _ = shutdown_signal() => {}
            }
        }
        (None, None) => {
            error!("No listeners configured");
            bail!("No listeners configured");
        }
    }

    info!("Shutting down gracefully");

    Ok(())
}

async fn spawn_tcp(app: Router, port: u16) -> Result<JoinHandle<Result<()>>> {
    let addr = format!("0.0.0.0:{}", port);

    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind TCP listener to {}", addr))?;

    info!(address = %addr, "TCP listener bound");

    Ok(tokio::spawn(async move {
        serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("TCP server error")
    }))
}

fn spawn_unix(app: Router, path: &Path) -> Result<JoinHandle<()>> {
    if path.exists() {
        std::fs::remove_file(path)
            .context(format!("Failed to remove existing Unix socket: {}", path.display()))?;
    }

    let listener = UnixListener::bind(path)
        .context(format!("Failed to bind Unix socket listener to {}", path.display()))?;

    info!(path = %path.display(), "Unix socket listener bound");

    let mut make_service = app.into_make_service();

    Ok(tokio::spawn(async move {
        loop {
            let (socket, _remote_addr) = match listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    error!(error = %e, "Failed to accept Unix socket connection");
                    continue;
                }
            };

            let tower_service = match make_service.call(&socket).await {
                Ok(svc) => svc,
                Err(infallible) => match infallible {},
            };

            tokio::spawn(async move {
                let socket = hyper_util::rt::TokioIo::new(socket);

                let hyper_service = hyper::service::service_fn(
                    move |request: hyper::Request<hyper::body::Incoming>| {
                        tower_service.clone().call(request)
                    },
                );

                if let Err(err) =
                    hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                        .serve_connection_with_upgrades(socket, hyper_service)
                        .await
                {
                    error!(error = %err, "Error serving Unix socket connection");
                }
            });
        }
    }))
}

fn report_exit(listener: &str, result: Result<Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(listener, error = %e, "Server stopped with error"),
        Err(e) => error!(listener, error = %e, "Server task failed"),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
