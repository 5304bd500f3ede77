//! Logger module
//!
//! Lifecycle and error logging, plus the opt-in access log. Per-request
//! output is produced only when `enable_access_log` is set; the default
//! configuration writes nothing to stdout while serving.

use std::net::SocketAddr;

use chrono::Local;

use crate::config::AppState;

pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    println!("======================================");
    println!("Isolated static server started");
    println!("Listening on: http://{addr}");
    println!("Serving root: {}", state.root.display());
    println!(
        "Access log: {}",
        if state.config.enable_access_log {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("======================================\n");
}

pub fn log_server_stop() {
    println!("\n[Shutdown] Listener closed, exiting");
}

pub fn log_signal(name: &str) {
    println!("\n[Signal] {name} received, shutting down");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// Access log entry, written in Common Log Format when access logging is
/// enabled.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_common_includes_request_line_and_status() {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/app.wasm".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 1234;

        let log = entry.format_common();
        assert!(log.contains("192.168.1.1"));
        assert!(log.contains("\"GET /app.wasm HTTP/1.1\""));
        assert!(log.contains("200 1234"));
    }
}
