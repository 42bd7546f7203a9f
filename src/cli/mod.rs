//! # CLI Module
//!
//! This module provides the command-line interface layer for the playlist
//! feature dataset builder. It implements all user-facing commands and
//! coordinates between the collector, data management, and the Spotify API
//! layer.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Obtains a client-credentials token and caches it locally
//!
//! ### Dataset Operations
//!
//! - [`playlist`] - Builds the feature dataset for all tracks of a playlist
//! - [`tracks`] - Builds the feature dataset for an explicit track-id list
//!
//! ### Information Commands
//!
//! - [`info`] - Reports a playlist's track total and cached-token status
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Collector Layer (Enumeration, Batching, Assembly)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command loads the cached token manager, delegates to the collector,
//! and either writes the dataset to the requested output file or renders a
//! preview table.
//!
//! ## Error Handling Philosophy
//!
//! Commands terminate with a clear message on unrecoverable failures (no
//! cached token, failed collection) and point the user at the next step,
//! e.g. running `playfeat auth` first. Partial results are never written:
//! a failed batch aborts the whole run before any output file is touched.

mod auth;
mod features;
mod info;

pub use auth::auth;
pub use features::playlist;
pub use features::tracks;
pub use info::info;
