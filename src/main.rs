use axum::Server;
use quiz_platform::{build_app, config::Config, init_tracing};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config);

    let addr: SocketAddr = match config.server_address().parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(address = %config.server_address(), error = %e, "Invalid server address");
            std::process::exit(1);
        }
    };

    let builder = match Server::try_bind(&addr) {
        Ok(builder) => builder,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    let app = build_app(&config);

    tracing::info!(%addr, "Server running");
    if let Err(e) = builder.serve(app.into_make_service()).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
