//! # API Module
//!
//! This module provides the HTTP endpoints the Suno proxy serves to the
//! browser. It implements the landing page, a health check and the four
//! forwarding endpoints for song and music-video generation.
//!
//! ## Overview
//!
//! The API module is the web interface layer of the proxy. Every
//! forwarding handler follows the same shape:
//!
//! 1. Parse and validate the incoming request (body fields or query
//!    parameters)
//! 2. Resolve the bearer credential (request-supplied value overrides the
//!    process-wide default)
//! 3. Call the matching operation in [`crate::suno`]
//! 4. Reshape the result into the local JSON response
//!
//! Validation failures and upstream failures alike become structured
//! `{"error": ...}` bodies via [`crate::error::ForwardError`]; no error
//! crosses a request boundary unhandled and none is fatal to the process.
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - [`index`] - Serves the bundled landing page at `GET /`.
//!
//! ### Song Generation
//!
//! - [`generate`] - `POST /api/generate`; submits lyrics, style and title
//!   upstream and returns the task identifier to poll with.
//! - [`status`] - `GET /api/status`; relays the upstream record-info
//!   response for a task, verbatim.
//!
//! ### Music Video Generation
//!
//! - [`generate_mv`] - `POST /api/generate-mv`; requests an mp4 render of
//!   a finished song and returns the video task identifier.
//! - [`mv_status`] - `GET /api/mv-status`; relays the mp4 record-info
//!   response for a video task.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web
//! framework. Each endpoint is an async function wired into the router in
//! [`crate::server`]; shared immutable state arrives through an
//! `Extension<Arc<AppContext>>` layer.
//!
//! ## Related Modules
//!
//! - [`crate::suno`] - the upstream client the handlers delegate to
//! - [`crate::types`] - request/response shapes
//! - [`crate::error`] - the error taxonomy and its HTTP mapping

mod generate;
mod health;
mod index;
mod mv;
mod status;

pub use generate::generate;
pub use health::health;
pub use index::index;
pub use mv::{generate_mv, mv_status};
pub use status::status;
