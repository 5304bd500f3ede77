use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use isoserve::config::{AppState, ServerConfig};
use isoserve::logger;
use isoserve::server::{connection, listener, signal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ServerConfig::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(cfg)?);
    let addr = state.config.socket_addr();

    // Binding conflicts are an operator error: fail immediately, no retry.
    let listener = listener::create_reusable_listener(addr)
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    let shutdown = Arc::new(Notify::new());
    signal::start_signal_handler(Arc::clone(&shutdown));

    logger::log_server_start(&addr, &state);

    run_server_loop(listener, state, shutdown).await
}

/// Accept connections until a shutdown signal arrives.
///
/// Returning `Ok` after the shutdown notification means signal-driven
/// termination exits with status 0.
async fn run_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_server_stop();
                break;
            }
        }
    }

    Ok(())
}
