//! # TaskFlow - terminal client for a task management service
//!
//! Reads projects and tasks from a json-server style REST store, caches them
//! per query key and renders dashboard, task and project screens in the
//! terminal. Task completion and subtask toggles are written back with
//! `PATCH` and followed by cache invalidation, never by local patching.
//!
//! ## Layout
//!
//! - [`api`]: the [`api::RemoteStore`] trait, the HTTP client and an in-memory store
//! - [`libs`]: domain types, query cache, mutations, aggregates, rendering, config
//! - [`commands`]: clap subcommands, one per screen, plus an interactive session
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
