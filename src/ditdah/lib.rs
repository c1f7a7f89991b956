//! # Ditdah Architecture
//!
//! Ditdah is a **UI-agnostic Morse translation library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs + args.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Dispatches a Direction to the right conversion           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Pure conversion logic (encode, decode)                   │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Symbol Tables (code/)                                      │
//! │  - Immutable per-mode tables built once at first use        │
//! │  - Precomputed reverse maps for constant-time decode        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, tables), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! This means the same core could serve a web endpoint, a bot, or any other
//! UI.
//!
//! ## Best-Effort Conversions
//!
//! A character or code with no table entry is not a hard error: the rest of
//! the input still converts, and the offenders are collected on the result
//! and reported as warnings. Silent drops make round-trips lossy and hard to
//! debug, so nothing disappears without a message.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Conversion logic for each direction
//! - [`code`]: Symbol tables (international and American Morse)
//! - [`model`]: Core data types (`Mode`, `Direction`)
//! - [`error`]: Error types

pub mod api;
pub mod code;
pub mod commands;
pub mod error;
pub mod model;
