//! Suno Proxy Backend Library
//!
//! This library provides a thin HTTP backend that forwards browser requests
//! to the sunoapi.org music generation API. It validates incoming requests,
//! attaches a bearer credential, performs a single bounded outbound call per
//! request and reshapes the upstream response into a local JSON shape.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints served to the browser
//! - `config` - Configuration management and environment variables
//! - `error` - The forwarding error taxonomy and its HTTP mapping
//! - `server` - HTTP server setup and routing
//! - `suno` - sunoapi.org upstream client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use sunoproxy::{config, server};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await;
//!     let ctx = Arc::new(config::AppContext::from_env());
//!     server::start_api_server(ctx, None).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod suno;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Server started");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// during startup where recovery is not possible, such as a failed port
/// bind.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. Code after it will not execute.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination, such as a
/// failed upstream call.
///
/// # Example
///
/// ```
/// warning!("Upstream call failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
