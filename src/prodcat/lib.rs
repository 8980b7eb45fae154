//! # Prodcat Architecture
//!
//! Prodcat is a small product catalog kept in a single JSON file. It is a
//! library with a CLI client, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store, the id counter and the load policy       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, linear-scan lookups, read-modify-write       │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load the whole catalog, save it back    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Every operation reloads
//!
//! Nothing is cached between calls. Each operation loads the full catalog,
//! scans it, and write operations save the full catalog back. There is no
//! locking, so concurrent writers race and the last one wins.
//!
//! ## Rejections are results, not errors
//!
//! Adding a product with missing fields or a code already in use, or
//! updating a product to a taken code, is logged and aborted without
//! writing. The command still returns `Ok`, with a warning message in the
//! `CmdResult`. Errors are reserved for I/O, decoding (in strict mode) and
//! configuration failures.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product`, drafts, patches and the id counter
//! - [`config`]: Per-catalog configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
