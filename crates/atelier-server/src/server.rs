//! Preview server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use atelier_static::{SiteBuilder, SiteContent};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Export directory to serve
    pub dist_dir: PathBuf,

    /// Paths to watch for changes (public assets, site.toml)
    pub watch_paths: Vec<PathBuf>,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            watch_paths: vec![PathBuf::from("public"), PathBuf::from("site.toml")],
            port: 4100,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Invalid listen address {0}:{1}")]
    AddrError(String, u16),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    config: PreviewConfig,
    hub: ReloadHub,
    builder: SiteBuilder,
    content: SiteContent,
}

/// Preview server: serves the export and rebuilds it on change.
pub struct PreviewServer {
    config: PreviewConfig,
    builder: SiteBuilder,
    content: SiteContent,
}

impl PreviewServer {
    /// Create a new preview server around an existing builder.
    pub fn new(config: PreviewConfig, builder: SiteBuilder, content: SiteContent) -> Self {
        Self {
            config,
            builder,
            content,
        }
    }

    /// Start the preview server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| ServerError::AddrError(self.config.host.clone(), self.config.port))?;

        let state = Arc::new(ServerState {
            config: self.config.clone(),
            hub: ReloadHub::new(),
            builder: self.builder,
            content: self.content,
        });

        let (watcher, mut rx) = FileWatcher::new(&self.config.watch_paths)
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            drop(watcher);
        });

        let app = Router::new()
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler))
            .fallback_service(ServeDir::new(&self.config.dist_dir))
            .with_state(state);

        tracing::info!(
            "Serving {} at http://{}",
            self.config.dist_dir.display(),
            addr
        );

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Rebuild the export and tell connected browsers what happened.
async fn handle_watch_event(state: &Arc<ServerState>, event: WatchEvent) {
    match &event {
        WatchEvent::AssetModified(path) => tracing::info!("Asset modified: {}", path.display()),
        WatchEvent::ConfigModified(path) => tracing::info!("Config modified: {}", path.display()),
        WatchEvent::Created(path) | WatchEvent::Deleted(path) | WatchEvent::Modified(path) => {
            tracing::debug!("Change detected: {}", path.display())
        }
    }

    match state.builder.build(&state.content).await {
        Ok(result) => {
            tracing::info!("Rebuilt {} pages in {}ms", result.pages, result.duration_ms);
            state.hub.send(ReloadMessage::Reload);
        }
        Err(e) => {
            tracing::warn!("Rebuild failed: {}", e);
            state.hub.send(ReloadMessage::BuildFailed {
                message: e.to_string(),
            });
        }
    }
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.hub.subscribe();

    let Ok(msg) = serde_json::to_string(&ReloadMessage::Connected) else {
        return;
    };
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    while let Ok(reload_msg) = rx.recv().await {
        let Ok(json) = serde_json::to_string(&reload_msg) else {
            continue;
        };
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
async fn reload_script_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let ws_url = format!(
        "ws://{}:{}/__reload",
        state.config.host, state.config.port
    );
    let script = reload_client_script(&ws_url);
    ([("content-type", "application/javascript")], script)
}
