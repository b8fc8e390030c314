//! HTTP surface of the client service.
//!
//! Routes live under [`URI_PREFIX`]. Every response, including errors and
//! preflight replies, carries permissive CORS headers.

pub mod error;
pub mod handlers;
pub mod query;

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::prelude::{AppError, ClientManager};

pub const URI_PREFIX: &str = "/api/clients";

const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

#[derive(Clone)]
pub struct AppState {
    manager: Arc<Mutex<ClientManager>>,
}

impl AppState {
    pub fn new(manager: ClientManager) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
        }
    }

    /// Runs `f` on the blocking pool while holding the manager lock, so store
    /// load-modify-save cycles of concurrent requests never interleave.
    pub async fn with_manager<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&ClientManager) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let manager = Arc::clone(&self.manager);
        tokio::task::spawn_blocking(move || {
            let manager = manager.lock()?;
            f(&manager)
        })
        .await?
    }
}

pub fn router(state: AppState) -> Router {
    let collection = get(handlers::list_clients)
        .post(handlers::create_client)
        .fallback(handlers::method_not_allowed);

    let item = get(handlers::get_client)
        .patch(handlers::update_client)
        .delete(handlers::delete_client)
        .fallback(handlers::method_not_allowed);

    Router::new()
        .route(URI_PREFIX, collection.clone())
        .route(&format!("{URI_PREFIX}/"), collection)
        .route(&format!("{URI_PREFIX}/:id"), item)
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Answers preflight requests directly and stamps CORS headers on everything else.
async fn cors(request: Request, next: Next) -> Response {
    tracing::debug!(method = %request.method(), uri = %request.uri(), "request");

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
