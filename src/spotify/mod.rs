//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! dataset builder: authentication, playlist pagination, and the batched
//! track/feature/artist endpoints. It is the single integration layer
//! between the collector and Spotify's services, handling all HTTP
//! communication, error handling, and rate limiting.
//!
//! ## Architecture
//!
//! Each submodule covers one domain of the API surface:
//!
//! ```text
//! Application Layer (CLI, Collector)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (Client-Credentials Grant)
//!     ├── Playlist Operations (Paging, Count Probe)
//!     ├── Track Operations (Tracks, Audio Features)
//!     └── Artist Operations (Artist Metadata)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant:
//! - **Server-to-Server**: No user authorization step; the application's
//!   client ID and secret are exchanged directly for an access token
//! - **HTTP Basic**: Credentials travel base64-encoded in the
//!   `Authorization` header
//! - **Token Lifecycle**: Tokens expire after roughly an hour and are
//!   re-obtained by the token manager, never refreshed
//!
//! ### Playlist Module
//!
//! [`playlists`] - Handles playlist-related API operations:
//! - **Count Probe**: Minimal limit-1 request returning only the total
//! - **Offset Pagination**: Fixed-size pages via limit/offset cursors
//! - **Order Preservation**: Items arrive in playlist order
//!
//! ### Track Module
//!
//! [`tracks`] - Batched track metadata and audio-feature retrieval:
//! - **Multi-Track Requests**: Up to 50 track objects in a single call
//! - **Audio Features**: The numeric descriptor vector per track
//! - **Null Entries**: Unresolvable ids surface as nulls, not errors
//!
//! ### Artist Module
//!
//! [`artists`] - Batched artist metadata retrieval (popularity, genres,
//! follower counts).
//!
//! ## Error Handling Philosophy
//!
//! - **Rate Limiting**: 429 responses are retried after the `Retry-After`
//!   delay; abnormal delays (> 120 s) are surfaced as a warning and the
//!   error is propagated
//! - **Transient Failures**: 502 Bad Gateway is retried after a 10 s pause
//! - **Everything Else**: Propagated unmodified as `reqwest::Error` to the
//!   caller; a failed batch aborts the whole collection
//!
//! ## API Coverage
//!
//! - `POST {accounts}/api/token` - Client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - Playlist page with total count
//! - `GET /tracks` - Batch track objects (≤ 50 ids)
//! - `GET /audio-features` - Batch feature vectors (≤ 100 ids, 50 used)
//! - `GET /artists` - Batch artist objects (≤ 50 ids)
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use: all operations use
//! async/await for non-blocking I/O, requests run strictly sequentially, and
//! there is no global mutable state.

pub mod artists;
pub mod auth;
pub mod playlists;
pub mod tracks;
