//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, dispatch to
//! the static file handler, and the single point where the isolation
//! header set is stamped onto the outgoing response.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::{self, isolation};
use crate::logger;

/// Main entry point for HTTP request handling.
///
/// Generic over the request body: the server never reads one, and tests
/// drive this with `()` bodies.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_string();
    let is_head = *req.method() == Method::HEAD;

    let mut response = match req.method() {
        &Method::GET | &Method::HEAD => static_files::serve(&state, &path, is_head).await,
        &Method::OPTIONS => http::build_options_response(),
        _ => http::build_405_response(),
    };

    // Every response carries the isolation and cache-busting headers,
    // whatever the status code.
    isolation::apply(response.headers_mut());

    // Off by default: no per-request output reaches stdout unless the
    // operator opted in.
    if state.config.enable_access_log {
        let mut entry = logger::AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            path,
        );
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Body size as reported by the Content-Length header, 0 when absent.
fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get(hyper::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
