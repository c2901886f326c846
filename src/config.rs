//! Configuration management for the Suno proxy backend.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the upstream API credential,
//! the upstream base URL and the local server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults
//!
//! Every variable is optional. The defaults match the public sunoapi.org
//! deployment; only `SUNO_API_KEY` has no useful default, and requests that
//! carry their own `api_key` still work without it.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory
/// under `sunoproxy/.env`, creating the directory structure if needed, and
/// then falls back to a `.env` file in the current working directory. Both
/// are optional; already-set environment variables always win.
///
/// # Directory Structure
///
/// The function looks for the primary `.env` file in:
/// - Linux: `~/.local/share/sunoproxy/.env`
/// - macOS: `~/Library/Application Support/sunoproxy/.env`
/// - Windows: `%LOCALAPPDATA%/sunoproxy/.env`
///
/// # Example
///
/// ```
/// use sunoproxy::config;
///
/// #[tokio::main]
/// async fn main() {
///     config::load_env().await;
/// }
/// ```
pub async fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sunoproxy/.env");
    if let Some(parent) = path.parent() {
        let _ = async_fs::create_dir_all(parent).await;
    }

    if path.is_file() {
        let _ = dotenv::from_path(&path);
    }
    // Working-directory .env fills in anything still missing.
    let _ = dotenv::dotenv();
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, defaulting to
/// `0.0.0.0:8080` when unset.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "0.0.0.0:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string())
}

/// Returns the process-wide default Suno API key.
///
/// Retrieves the `SUNO_API_KEY` environment variable. Returns an empty
/// string when unset; in that case every request must supply its own
/// `api_key` or it is rejected with a 400.
pub fn suno_api_key() -> String {
    env::var("SUNO_API_KEY").unwrap_or_default()
}

/// Returns the sunoapi.org API base URL.
///
/// Retrieves the `SUNO_API_URL` environment variable which contains the
/// base URL for all upstream endpoints, defaulting to the public
/// deployment. Overriding it is mainly useful for pointing the proxy at a
/// mock upstream.
///
/// # Example
///
/// ```
/// let api_url = suno_apiurl(); // e.g., "https://api.sunoapi.org/api/v1"
/// ```
pub fn suno_apiurl() -> String {
    env::var("SUNO_API_URL").unwrap_or_else(|_| "https://api.sunoapi.org/api/v1".to_string())
}

/// Immutable per-process state shared by all request handlers.
///
/// Built once at startup and installed as an axum `Extension`; never
/// mutated afterwards. Handlers read the default credential from here when
/// a request does not carry its own `api_key`.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Base URL of the upstream API, without a trailing slash.
    pub api_base: String,
    /// Process-wide default credential; may be empty.
    pub default_api_key: String,
}

impl AppContext {
    /// Builds the context from the environment accessors.
    pub fn from_env() -> Self {
        Self {
            api_base: suno_apiurl(),
            default_api_key: suno_api_key(),
        }
    }

    /// Resolves the effective credential for one request.
    ///
    /// A request-supplied key, trimmed, takes precedence; when absent or
    /// blank the process-wide default is used. Returns `None` when neither
    /// is available.
    pub fn resolve_api_key(&self, override_key: Option<&str>) -> Option<String> {
        let key = override_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(&self.default_api_key);
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    }
}
