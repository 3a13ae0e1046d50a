//! HTTP server: route table, handlers, and the serve loop.
//!
//! Routes:
//!
//! | Method | Path                  | Success body                         |
//! |--------|-----------------------|--------------------------------------|
//! | GET    | `/`                   | HTML page                            |
//! | GET    | `/api/bosses`         | `[{name, enabled, min_kills, max_kills}]` |
//! | POST   | `/api/toggle/{name}`  | `{success: true, enabled}`           |
//! | GET    | `/api/generate`       | `{boss, kills}`                      |
//! | POST   | `/api/complete`       | `{success: true}`                    |
//! | GET    | `/api/history`        | `[{boss, kills, completed}]`         |
//!
//! Service calls do blocking file I/O, so every handler runs its call on
//! Tokio's blocking pool via [`respond_blocking`].

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use boss_core::CompletionRequest;

use crate::application::{ChallengeService, ServiceError};
use crate::domain::{AckReply, ErrorReply, ServerConfig, ToggleReply};

/// The browser page served at `/`.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Upper bound on a `/api/complete` request body.
const MAX_BODY_BYTES: u64 = 16 * 1024;

// ── Public API ────────────────────────────────────────────────────────────────

/// Builds the full route table around `service`.
///
/// Every request yields a response: unmatched paths, bad bodies, and service
/// failures are all turned into JSON error replies.
pub fn routes(
    service: Arc<ChallengeService>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let with_service = warp::any().map(move || Arc::clone(&service));

    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML));

    let bosses = warp::path!("api" / "bosses")
        .and(warp::get())
        .and(with_service.clone())
        .and_then(list_bosses);

    let toggle = warp::path!("api" / "toggle" / String)
        .and(warp::post())
        .and(with_service.clone())
        .and_then(toggle_boss);

    let generate = warp::path!("api" / "generate")
        .and(warp::get())
        .and(with_service.clone())
        .and_then(generate_challenge);

    let complete = warp::path!("api" / "complete")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<CompletionRequest>())
        .and(with_service.clone())
        .and_then(complete_challenge);

    let history = warp::path!("api" / "history")
        .and(warp::get())
        .and(with_service)
        .and_then(recent_history);

    index
        .or(bosses)
        .or(toggle)
        .or(generate)
        .or(complete)
        .or(history)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

/// Binds `config.bind_addr` and serves `service` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, missing
/// permission, address not available).
pub async fn run_server(
    config: &ServerConfig,
    service: Arc<ChallengeService>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let (addr, server) = warp::serve(routes(service))
        .try_bind_with_graceful_shutdown(config.bind_addr, shutdown)
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    info!("boss challenge server listening on http://{addr}");
    server.await;
    info!("HTTP server stopped accepting connections");
    Ok(())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn list_bosses(service: Arc<ChallengeService>) -> Result<Response, Infallible> {
    Ok(respond_blocking(service, |s| s.list_bosses()).await)
}

async fn toggle_boss(raw_name: String, service: Arc<ChallengeService>) -> Result<Response, Infallible> {
    let name = decode_segment(&raw_name);
    Ok(respond_blocking(service, move |s| s.toggle(&name).map(ToggleReply::toggled)).await)
}

async fn generate_challenge(service: Arc<ChallengeService>) -> Result<Response, Infallible> {
    Ok(respond_blocking(service, |s| s.generate()).await)
}

async fn complete_challenge(
    request: CompletionRequest,
    service: Arc<ChallengeService>,
) -> Result<Response, Infallible> {
    Ok(respond_blocking(service, move |s| s.complete(request).map(|_| AckReply::ok())).await)
}

async fn recent_history(service: Arc<ChallengeService>) -> Result<Response, Infallible> {
    Ok(respond_blocking(service, |s| s.recent_history()).await)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Runs `op` on the blocking pool and turns its outcome into a JSON response.
async fn respond_blocking<T, F>(service: Arc<ChallengeService>, op: F) -> Response
where
    F: FnOnce(&ChallengeService) -> Result<T, ServiceError> + Send + 'static,
    T: Serialize + Send + 'static,
{
    match tokio::task::spawn_blocking(move || op(&service)).await {
        Ok(Ok(body)) => json_response(&body, StatusCode::OK),
        Ok(Err(err)) => service_error_response(&err),
        Err(join_err) => {
            error!("request task failed: {join_err}");
            json_response(&ErrorReply::new("internal error"), StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Maps a [`ServiceError`] to the status and body the API contract promises.
fn service_error_response(err: &ServiceError) -> Response {
    match err {
        ServiceError::NotFound(name) => {
            warn!(boss = %name, "toggle for unknown boss");
            json_response(&ToggleReply::not_found(), StatusCode::NOT_FOUND)
        }
        ServiceError::NoBossesEnabled => {
            warn!("challenge requested with every boss disabled");
            json_response(&ErrorReply::new(err.to_string()), StatusCode::BAD_REQUEST)
        }
        ServiceError::InvalidRequest(reason) => {
            warn!("rejected completion: {reason}");
            json_response(&AckReply::rejected(reason.to_string()), StatusCode::BAD_REQUEST)
        }
        ServiceError::Store(store_err) => {
            error!("state store failure: {store_err}");
            json_response(
                &ErrorReply::new(store_err.to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

fn json_response<T: Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

/// Percent-decodes one path segment (`Phosani%27s%20Nightmare` → `Phosani's Nightmare`).
/// Invalid UTF-8 sequences are replaced, which simply yields an unknown name.
fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Converts filter rejections (no route, wrong method, bad body) into JSON.
async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    let (status, body) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, AckReply::rejected("not found"))
    } else if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, AckReply::rejected(format!("invalid request body: {e}")))
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, AckReply::rejected("request body too large"))
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, AckReply::rejected("expected a JSON body"))
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, AckReply::rejected("content-length required"))
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, AckReply::rejected("method not allowed"))
    } else {
        error!("unhandled rejection: {rejection:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, AckReply::rejected("internal error"))
    };

    if status != StatusCode::NOT_FOUND {
        warn!(%status, "request rejected");
    }
    Ok(json_response(&body, status))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
