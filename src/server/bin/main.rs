use std::net::SocketAddr;
use axum::body::Body;
use clap::Parser;
use lambda_http::{run, Error};
use tracing::info;
use inventory::config::ServerConfig;
use inventory::server::{build_app, build_state, shutdown_signal};
use inventory::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = ServerConfig::parse();
    setup_tracing(args.log_level, args.pretty_logs);

    let state = build_state(&args.configuration()).await?;

    if args.lambda {
        return run(build_app::<lambda_http::Body>(state)).await;
    }

    let addr: SocketAddr = args.bind_addr().parse()?;
    info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(build_app::<Body>(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
