use crate::utility::shutdown::shutdown_signal;
use axum::Router;
use eyre::{Report, WrapErr};
use std::net::SocketAddr;
use tracing::info;

pub async fn serve(router: Router) -> Result<(), Report> {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".into());

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .wrap_err("HOST/PORT do not form a valid bind address")?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "wallet-os API up, swagger at /swagger-ui/, metrics at /metrics");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
