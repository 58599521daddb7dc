//! Preview server with live reload for the atelier portfolio.
//!
//! Serves the static export, watches the public asset directory and the site
//! configuration, and rebuilds + reloads connected browsers on change.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{PreviewConfig, PreviewServer, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
