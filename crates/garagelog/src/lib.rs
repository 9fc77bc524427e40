//! # Garagelog Architecture
//!
//! Garagelog is a **local-first record keeper for one car**: the mods done to
//! it, its service history, its profile and spec sheet, and a small set of
//! trophies derived from those records. It is a library with no UI of its own.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, repositories and trophies     │
//! │  - Owns the trophy watcher and its pending toast            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Form-input rules: trimming, numeric parsing, defaults    │
//! │  - Resets and the garage summary                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository Layer (store/*.rs)                              │
//! │  - One repository per record kind over GarageStore          │
//! │  - Normalizes every read, publishes a change after writes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Backend (store/backend.rs)                         │
//! │  - String key/value: FsBackend (files), MemBackend (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reads Never Fail
//!
//! Missing, malformed or partially valid stored data is normalized into
//! well-formed records (see [`normalize`]). Only writes return errors.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business operations over the store
//! - [`store`]: backends, the keyed store and its repositories
//! - [`model`]: `ModEntry`, `ServiceEntry`, `CarProfile`
//! - [`normalize`]: tolerant decoding of stored payloads
//! - [`trophies`]: trophy rules and the unlock check
//! - [`notifier`]: synchronous change notification
//! - [`watch`]: runs the unlock check on every change
//! - [`dates`]: UTC day helpers and the MOT countdown
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod model;
pub mod normalize;
pub mod notifier;
pub mod store;
pub mod trophies;
pub mod watch;

#[cfg(test)]
pub mod test_utils;
