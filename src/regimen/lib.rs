//! # Regimen Architecture
//!
//! Regimen keeps a personal list of workout exercises (name, muscle groups, sets, reps,
//! weight) in a single file and lets the user add to it, print it, and search it.
//!
//! The library holds everything except the terminal: the interactive menu lives in the
//! binary's `cli` module and talks to the library only through [`api::RegimenApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, rendering, colours                   │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the session's Regimen                 │
//! │  - Dispatches to commands                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / list / search                                      │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore`.
//! 2. **Store**: `FileStore` tests in temporary directories.
//! 3. **CLI**: the menu loop is generic over its input and output, so sessions are
//!    replayed from scripted input; `tests/` drives the real binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Field`, `Exercise`, `Regimen`)
//! - [`config`]: Session settings
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
