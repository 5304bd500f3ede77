//! Static file server with cross-origin isolation headers.
//!
//! Serves a directory tree over plain HTTP/1.x and stamps every response
//! with the COOP/COEP/CORP and cache-busting headers that sandboxed browser
//! runtimes (Emscripten, `SharedArrayBuffer` users) require.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
