//! Static file serving module
//!
//! Resolves request paths against the served root and builds file,
//! index, listing, 404 and 500 responses.

use std::io;
use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::handler::listing;
use crate::http::{self, mime, response};
use crate::logger;

const INDEX_FILE: &str = "index.html";

/// Outcome of resolving a request path against the served root.
enum Resolved {
    File(PathBuf),
    Directory(PathBuf),
    NotFound,
}

/// Serve a GET/HEAD request for `request_path`.
///
/// Directories serve their `index.html` when present, otherwise a
/// generated listing.
pub async fn serve(state: &AppState, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match resolve(&state.root, request_path) {
        Resolved::File(path) => serve_file(&path, is_head).await,
        Resolved::Directory(path) => {
            let index = path.join(INDEX_FILE);
            if index.is_file() {
                serve_file(&index, is_head).await
            } else {
                listing::serve_listing(&path, request_path, is_head).await
            }
        }
        Resolved::NotFound => http::build_404_response(),
    }
}

/// Resolve a request path to a filesystem path under `root`.
///
/// `..` segments are stripped before joining, and the canonicalized result
/// must stay under the canonicalized root. The second check also covers
/// symlinks pointing outside the tree.
fn resolve(root: &Path, request_path: &str) -> Resolved {
    let clean_path = request_path.trim_start_matches('/').replace("..", "");
    let candidate = root.join(clean_path.trim_start_matches('/'));

    // Missing paths fail to canonicalize; that is the ordinary 404 case.
    let Ok(canonical) = candidate.canonicalize() else {
        return Resolved::NotFound;
    };

    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "path traversal attempt blocked: {request_path} -> {}",
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    if canonical.is_dir() {
        Resolved::Directory(canonical)
    } else {
        Resolved::File(canonical)
    }
}

async fn serve_file(path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
            response::build_file_response(Bytes::from(content), content_type, is_head)
        }
        Err(e) => read_error_response(path, &e),
    }
}

/// Map a read failure to a client-facing status: files that vanished
/// between resolution and read are a plain 404, anything else (permission
/// denied, I/O trouble) surfaces as 500 and the server keeps running.
fn read_error_response(path: &Path, error: &io::Error) -> Response<Full<Bytes>> {
    if error.kind() == io::ErrorKind::NotFound {
        return http::build_404_response();
    }

    logger::log_error(&format!(
        "failed to read '{}': {error}",
        path.display()
    ));
    http::build_500_response()
}
