//! Serves the page over HTTP.
//!
//! `GET /` shows the settings form; `POST /` runs one invocation with the
//! submitted fields and renders the result. Errors render as a banner with
//! status 200.

use std::net::SocketAddr;

use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::{
    NsClient, NsError,
    core::client::constants::{DEFAULT_SERVER_ADDR, DEFAULT_TICKERS},
    input::RequestParams,
    page::{PageState, render_page},
    pipeline,
};

/// Page server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    addr: SocketAddr,
}

impl ServerConfig {
    /// Settings with the default listen address.
    ///
    /// # Errors
    ///
    /// Returns `NsError::Data` if the built-in address fails to parse.
    pub fn new() -> Result<Self, NsError> {
        let addr = DEFAULT_SERVER_ADDR
            .parse()
            .map_err(|e| NsError::Data(format!("listen address {DEFAULT_SERVER_ADDR}: {e}")))?;
        Ok(Self { addr })
    }

    /// Override the listen address.
    #[must_use]
    pub const fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub const fn listen_addr(&self) -> SocketAddr {
        self.addr
    }
}

#[derive(Clone)]
struct AppState {
    client: NsClient,
}

/// Submitted settings form. Missing fields decode as empty.
#[derive(Deserialize)]
pub struct FetchForm {
    #[serde(default)]
    pub tickers: String,
    #[serde(default)]
    pub api_key: String,
}

/// Builds the page router around a client.
pub fn router(client: NsClient) -> Router {
    Router::new()
        .route("/", get(index).post(fetch))
        .with_state(AppState { client })
}

async fn index() -> Html<String> {
    Html(render_page(DEFAULT_TICKERS, &PageState::Welcome))
}

async fn fetch(State(state): State<AppState>, Form(form): Form<FetchForm>) -> Html<String> {
    let params = RequestParams::new(form.tickers, form.api_key);
    let result = pipeline::run(&state.client, &params).await;
    Html(render_page(&params.tickers, &PageState::from_result(&result)))
}

/// Binds the listen address and serves until the process exits.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, client: NsClient) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    #[cfg(feature = "tracing")]
    tracing::info!(addr = %config.listen_addr(), "news sentiment page listening");
    axum::serve(listener, router(client)).await
}
