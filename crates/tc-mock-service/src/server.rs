//! warp routes and server lifecycle.

use crate::canned::handle_body;
use crate::error::{MockError, MockResult};
use bytes::Bytes;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::mpsc::channel;
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::{Filter, Reply};

/// How the service answers `POST /api/calculate`.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Canned answers of the development backend.
    Canned,
    /// Always reply with this status and raw body.
    Fixed { status: u16, body: String },
}

#[derive(Debug, Clone)]
struct MockState {
    behavior: MockBehavior,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockState {
    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn record(&self, body: &[u8]) {
        let value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let mut received = self.received.lock().unwrap_or_else(|e| e.into_inner());
        received.push(value);
    }

    fn respond(&self, body: &[u8]) -> warp::reply::Response {
        self.record(body);
        match &self.behavior {
            MockBehavior::Canned => {
                let reply = handle_body(body);
                info!(status = ?reply.get("status"), "calculate request answered");
                warp::reply::json(&reply).into_response()
            }
            MockBehavior::Fixed {
                status,
                body: fixed,
            } => {
                let code = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                info!(%code, "calculate request answered with fixed reply");
                let reply =
                    warp::reply::with_header(fixed.clone(), "content-type", "application/json");
                warp::reply::with_status(reply, code).into_response()
            }
        }
    }
}

fn calculate_route(
    state: MockState,
) -> impl Filter<Extract = (warp::reply::Response,), Error = warp::Rejection> + Clone {
    warp::path!("api" / "calculate")
        .and(warp::post())
        .and(warp::body::bytes())
        .map(move |body: Bytes| state.respond(&body))
}

/// Routes of the mock service with the given behavior.
pub fn routes(
    behavior: MockBehavior,
) -> impl Filter<Extract = (warp::reply::Response,), Error = warp::Rejection> + Clone {
    calculate_route(MockState::new(behavior))
}

/// Serve until the process exits.
pub async fn serve(addr: SocketAddr, behavior: MockBehavior) -> MockResult<()> {
    let (bound, server) = warp::serve(routes(behavior))
        .try_bind_ephemeral(addr)
        .map_err(|e| MockError::Bind {
            message: e.to_string(),
        })?;

    info!("Mock calculation service running on http://{bound}/api");
    server.await;
    Ok(())
}

/// Mock service running on a background thread with its own runtime.
///
/// The thread lives until the process exits; tests start one per case on an
/// ephemeral port.
#[derive(Debug, Clone)]
pub struct MockServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockServer {
    /// Start on `127.0.0.1` with an ephemeral port.
    pub fn start(behavior: MockBehavior) -> MockResult<Self> {
        let state = MockState::new(behavior);
        let received = state.received.clone();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let (tx, rx) = channel();
        thread::spawn(move || {
            runtime.block_on(async move {
                let bound = warp::serve(calculate_route(state))
                    .try_bind_ephemeral(([127, 0, 0, 1], 0));
                match bound {
                    Ok((addr, server)) => {
                        let _ = tx.send(Ok(addr));
                        server.await;
                    }
                    Err(e) => {
                        error!(error = %e, "mock service failed to bind");
                        let _ = tx.send(Err(MockError::Bind {
                            message: e.to_string(),
                        }));
                    }
                }
            });
        });

        let addr = rx.recv().map_err(|_| MockError::ThreadExited)??;
        Ok(Self { addr, received })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL a client should be configured with.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Bodies received so far, decoded as JSON (`null` when undecodable).
    pub fn received(&self) -> Vec<Value> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
