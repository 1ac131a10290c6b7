//! # CLI Module
//!
//! Command implementations behind the `longplay` binary. Each command owns the
//! user interaction of a run: progress feedback, table rendering and turning
//! fatal errors into a single diagnostic line.
//!
//! ## Commands
//!
//! - [`report`] - Fetches the playlist, prints its ten longest tracks and the
//!   credited artists ordered by follower count
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Report Layer (sorting, artist aggregation)
//!     ↓
//! Spotify Layer (token, playlist pages, artists)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Output Streams
//!
//! Report tables go to stdout. Spinner, warnings and fatal errors go to stderr,
//! so the report can be piped without noise.

mod report;

pub use report::render_report;
pub use report::report;
