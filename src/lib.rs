//! snapkeep - snapshot and backup lifecycle manager
//!
//! snapkeep creates point-in-time artifacts (ZFS snapshots, MySQL dumps),
//! ships them to a remote store, and purges them once expired. The retention
//! policy travels inside each artifact's name: a UTC creation timestamp and
//! an expiry specification (`exp_<amount><unit>`) are the only persisted
//! record of when an artifact was made and how long it should live.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `retention`: the core engine: identifier codec, age evaluation,
//!   inventory diffing and retention sweeping; pure and I/O-free
//! - `exec`: external command execution with safe mode
//! - `sources`: artifact collaborators (ZFS snapshots, MySQL dumps)
//! - `store`: the remote artifact store
//! - `services`: driver pipelines wiring engine and collaborators together
//! - `config`: configuration and path management
//! - `cli`: command-line interface handlers
//! - `display`: terminal report formatting
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use snapkeep::retention::{parse, is_expired};
//!
//! let id = parse("tank/data@nightly_20230101-0000_exp_30d").unwrap();
//! let now = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
//! assert!(is_expired(&id, now));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod exec;
pub mod retention;
pub mod services;
pub mod sources;
pub mod store;

pub use error::SnapkeepError;
