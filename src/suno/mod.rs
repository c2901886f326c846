//! # Suno Integration Module
//!
//! This module provides the client layer for the sunoapi.org music
//! generation API. It handles all HTTP communication with the upstream
//! service: request construction, bearer authentication, bounded timeouts
//! and the three-tier classification of outcomes that every endpoint of
//! this proxy shares.
//!
//! ## Overview
//!
//! The upstream exposes a small task-based contract. A submission call
//! returns a task identifier wrapped in the uniform `{code, msg, data}`
//! envelope, and status calls poll that identifier until the job completes.
//! The actual job lifecycle (queued → processing → complete/failed) lives
//! entirely in the upstream service; this module only observes it, one
//! round trip per call, with no polling loop and no retries.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Suno client layer
//!     ├── Music operations (submit, status)
//!     └── Video operations (submit, status)
//!          ↓
//! forward() - shared validate/call/classify helper
//!          ↓
//! sunoapi.org Web API
//! ```
//!
//! All four public operations are thin instantiations of [`forward`],
//! parameterized by HTTP method, upstream path, query-vs-body parameters,
//! timeout and a fallback failure message.
//!
//! ## API Coverage
//!
//! - `POST /generate` - submit a song generation job (custom mode)
//! - `GET /generate/record-info` - poll a song generation job
//! - `POST /mp4/generate` - submit a music video render for a finished song
//! - `GET /mp4/record-info` - poll a music video render
//!
//! ## Outcome Classification
//!
//! Every call resolves to exactly one of:
//! - **Transport failure** - the request never completed (DNS, connection,
//!   timeout); the underlying message is surfaced.
//! - **Upstream HTTP failure** - a non-200 transport status; the status
//!   code and raw body are surfaced unchanged.
//! - **Upstream logical failure** - transport 200 but envelope `code` ≠ 200;
//!   the envelope's `msg` is surfaced, with a per-endpoint fallback.
//! - **Success** - the envelope's `data` mapping, passed through verbatim.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and per-request timeouts
//! - **serde_json** - envelope decoding and opaque `data` passthrough

mod forward;
pub mod music;
pub mod video;

pub use forward::{UpstreamCall, forward};
pub(crate) use forward::task_id_from;
