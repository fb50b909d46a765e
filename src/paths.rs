// ~/quote-widget/src/paths.rs

use std::path::{Path, PathBuf};
use crate::warn;

/// Directory holding the executable; config, cache and log live here.
pub fn widget_root_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(path) => {
            if let Some(parent) = path.parent() {
                parent.to_path_buf()
            } else {
                warn!("Current executable has no parent, using current directory as widget root");
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
        Err(e) => {
            warn!("Failed to get current executable path: {e}, using current directory as widget root");
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        }
    }
}

/// Resolve a configured path: absolute paths pass through, relative ones
/// hang off `root`.
pub fn resolve_against(root: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        root.join(configured)
    }
}
