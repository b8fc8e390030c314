use crate::{
    api::{self, AppState, URI_PREFIX},
    prelude::{AppError, ClientManager, command::Cli},
    storage::parse_storage_type,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub async fn run_app(cli: Cli) -> Result<(), AppError> {
    let storage = parse_storage_type(cli.storage_choice, &cli.db_file)?;

    if cli.storage_choice.is_json() {
        tracing::info!(path = %cli.db_file, "Current storage choice is: {}", storage.get_medium());
    } else {
        tracing::info!("Current storage choice is: {}", storage.get_medium());
    }

    let state = AppState::new(ClientManager::new(storage));

    let listener = TcpListener::bind(cli.listen_addr()).await?;
    log_endpoints(listener.local_addr()?);

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn log_endpoints(addr: SocketAddr) {
    tracing::info!("CRM server listening on http://{addr}");
    tracing::info!("Press CTRL+C to stop the server");
    tracing::info!("GET {URI_PREFIX} - list clients, pass a search term in the `search` query parameter");
    tracing::info!(
        "POST {URI_PREFIX} - create a client from {{ name, surname, lastName?, contacts?: [{{ type, value }}] }}"
    );
    tracing::info!("GET {URI_PREFIX}/{{id}} - get a client by id");
    tracing::info!(
        "PATCH {URI_PREFIX}/{{id}} - update a client with {{ name?, surname?, lastName?, contacts? }}"
    );
    tracing::info!("DELETE {URI_PREFIX}/{{id}} - delete a client by id");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
