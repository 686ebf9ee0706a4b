//! Matchclock - a drift-free broadcast clock
//!
//! This is the main entry point for the matchclock binary: it hosts the
//! render engine on a terminal surface (or the reactive store when
//! headless) and exposes the controller surface over a small HTTP API.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{error, info};

use matchclock::{
    api::{create_router, AppState},
    config::Config,
    engine::{ClockController, ClockEngine},
    render::{Surface, TerminalSurface},
    store::AnchorStore,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr: stdout belongs to the terminal surface.
    tracing_subscriber::fmt()
        .with_env_filter(format!("matchclock={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting matchclock v1.2.0");
    info!(
        "Configuration: initial={}s, format={}, direction={:?}, api={}",
        config.initial,
        config.format,
        config.direction,
        config.address()
    );

    if config.headless {
        return run_headless(&config).await;
    }

    // A terminal that cannot be claimed is an initialization failure of
    // the rendering variant, not a reason to crash the host.
    let surface: Box<dyn Surface> = match TerminalSurface::new() {
        Ok(surface) => Box::new(surface),
        Err(e) => {
            error!("Terminal surface init failed: {:#}; running headless", e);
            return run_headless(&config).await;
        }
    };

    let engine = ClockEngine::spawn(surface, config.engine_options());
    let controller = engine.controller();
    if config.autostart {
        controller.start();
    }

    // Keep the painted face matched to the terminal size.
    let resize_watcher = spawn_resize_watcher(controller.clone());

    let state = Arc::new(AppState::new(controller, config.host.clone(), config.port));
    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Control API on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start        - Begin counting");
    info!("  POST /pause        - Freeze the clock");
    info!("  POST /time         - Set an absolute value");
    info!("  POST /time/adjust  - Shift the value");
    info!("  POST /direction    - Switch counting direction");
    info!("  POST /config       - Update visual configuration");
    info!("  POST /command      - Raw protocol message");
    info!("  GET  /status       - Clock and server status");
    info!("  GET  /health       - Health check");

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    resize_watcher.abort();
    engine.shutdown().await;
    info!("Shutdown complete");
    Ok(())
}

/// Run the reactive store without a rendering surface, logging every
/// snapshot change until a shutdown signal arrives.
async fn run_headless(config: &Config) -> anyhow::Result<()> {
    let store = AnchorStore::with_options(config.store_options());
    if config.autostart {
        store.start();
    }
    info!("Running headless: {}", store.snapshot().display);

    let mut updates = store.subscribe();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                if snapshot.is_running {
                    info!("{}", snapshot.display);
                } else {
                    info!("{} (stopped)", snapshot.display);
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }
    info!("Shutdown complete");
    Ok(())
}

/// Poll the terminal size and forward changes as RESIZE commands so the
/// painted face stays centered.
fn spawn_resize_watcher(controller: ClockController) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut last = crossterm::terminal::size().unwrap_or((0, 0));
        let mut ticks = tokio::time::interval(Duration::from_millis(500));
        loop {
            ticks.tick().await;
            if let Ok(size) = crossterm::terminal::size() {
                if size != last {
                    last = size;
                    controller.resize(size.0, size.1, 1.0);
                }
            }
        }
    })
}
