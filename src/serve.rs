//! HTTP byte source
//!
//! Exposes one file over two read-only endpoints:
//!
//! - `GET /meta` - `{"size": N, "path": "..."}`
//! - `GET /bytes?offset=O&length=L` - raw bytes, truncated at EOF
//!
//! I/O failures are fatal: the failing request gets a 500 and the server
//! shuts down, so [`run`] returns the error.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use crate::source::{ByteSource, Meta, SourceError};

/// Shared handler state.
#[derive(Clone)]
pub struct ServeState {
    source: Arc<dyn ByteSource>,
    path: String,
    fatal: mpsc::UnboundedSender<String>,
}

impl ServeState {
    pub fn new(
        source: Arc<dyn ByteSource>,
        path: impl Into<String>,
        fatal: mpsc::UnboundedSender<String>,
    ) -> Self {
        Self {
            source,
            path: path.into(),
            fatal,
        }
    }

    /// Report an I/O failure; the server stops after this request.
    fn fail(&self, err: SourceError) -> ServeError {
        let message = err.to_string();
        error!(%message, "source I/O failed");
        let _ = self.fatal.send(message.clone());
        ServeError(message)
    }
}

/// Query of `GET /bytes`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ByteRange {
    pub offset: u64,
    pub length: usize,
}

#[derive(Debug)]
pub struct ServeError(String);

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0).into_response()
    }
}

pub fn router(state: ServeState) -> Router {
    Router::new()
        .route("/meta", get(meta))
        .route("/bytes", get(bytes))
        .with_state(state)
}

async fn meta(State(state): State<ServeState>) -> Result<Json<Meta>, ServeError> {
    let source = Arc::clone(&state.source);
    let size = tokio::task::spawn_blocking(move || source.size())
        .await
        .map_err(|e| ServeError(e.to_string()))?
        .map_err(|e| state.fail(e))?;

    Ok(Json(Meta {
        size,
        path: state.path.clone(),
    }))
}

async fn bytes(
    State(state): State<ServeState>,
    Query(range): Query<ByteRange>,
) -> Result<impl IntoResponse, ServeError> {
    let source = Arc::clone(&state.source);
    let data = tokio::task::spawn_blocking(move || source.read(range.offset, range.length))
        .await
        .map_err(|e| ServeError(e.to_string()))?
        .map_err(|e| state.fail(e))?;

    debug!(
        offset = range.offset,
        length = range.length,
        read = data.len(),
        "bytes"
    );
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], data))
}

/// Bind `addr` and serve until interrupted or until a read fails.
pub async fn run(addr: SocketAddr, source: Arc<dyn ByteSource>, path: String) -> Result<()> {
    let (fatal_tx, mut fatal_rx) = mpsc::unbounded_channel();
    let app = router(ServeState::new(source, path, fatal_tx));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    let local = listener.local_addr()?;
    info!(%local, "listening");
    println!("http://localhost:{}", local.port());

    let (failure_tx, mut failure_rx) = oneshot::channel();
    let shutdown = async move {
        tokio::select! {
            Some(message) = fatal_rx.recv() => {
                let _ = failure_tx.send(message);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
            }
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    match failure_rx.try_recv() {
        Ok(message) => anyhow::bail!("source I/O failed: {}", message),
        Err(_) => Ok(()),
    }
}
