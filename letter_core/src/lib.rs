//! # Letter Core (The Wayfinder)
//!
//! The engine of the interactive letter. This crate interfaces with
//! `letter_model`, resolves localized content nodes out of a
//! spreadsheet-backed store with deterministic fallback, caches resolved
//! results, and tracks per-session traversal for backward navigation.
//!
//! ## Core Components
//!
//! - **resolver**: the ordered fallback chain over cache, external store, and static table
//! - **cache**: TTL-bounded key-value store with targeted invalidation
//! - **navigation**: edge selection on resolved nodes
//! - **session**: the view-state machine and traversal history
//! - **service**: the facade the transport layer consumes
//!
//! ## Design Philosophy
//!
//! - **Degrade, don't fail**: store faults fall through the fallback chain; only total exhaustion surfaces an error
//! - **Explicit shared state**: the cache is an injected component with a defined concurrency contract, never ambient process state
//! - **Request-scoped**: every resolution is a short-lived independent operation; sessions are exclusively owned by their view

pub mod cache;
pub mod config;
pub mod error;
pub mod navigation;
pub mod resolver;
pub mod service;
pub mod session;
pub mod source;

pub use cache::*;
pub use config::*;
pub use error::*;
pub use navigation::*;
pub use resolver::*;
pub use service::*;
pub use session::*;
pub use source::*;
