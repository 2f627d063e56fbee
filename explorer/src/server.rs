use {
    crate::{conf::ServerConf, routes::routes, store::Store},
    anyhow::{Context, Result as AnyResult},
    std::{future::Future, net::SocketAddr, sync::Arc},
};

/// Bind the API to the configured address without starting to serve.
///
/// Returns the bound address, which differs from the configured one when port
/// `0` was requested, and the server future. The future resolves once
/// `shutdown` does and in-flight requests are done.
pub fn bind(
    conf: &ServerConf,
    store: Arc<Store>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> AnyResult<(SocketAddr, impl Future<Output = ()> + Send + 'static)> {
    let addr = conf.socket_addr();

    warp::serve(routes(store, conf.max_body_bytes))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .with_context(|| format!("Failed to listen on {addr}"))
}

/// Serve the API until Ctrl-C is received.
pub async fn serve(conf: &ServerConf, store: Arc<Store>) -> AnyResult<()> {
    let (addr, server) = bind(conf, store, shutdown_signal())?;

    log::info!("Server is running on {addr}");

    server.await;

    log::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Could not listen for Ctrl-C, shutdown must be forced: {e}");

        std::future::pending::<()>().await;
    }

    log::info!("Shutdown requested");
}
