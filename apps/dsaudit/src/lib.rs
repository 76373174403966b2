//! dsaudit core library.
//!
//! This crate exposes programmatic APIs for auditing a directory of UI
//! component folders: expected-file structure, design token compliance of
//! stylesheets, and sync with an external design token source.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `analyze`: Structure analyzer and file inspector.
//! - `validate`: Color/spacing compliance checks on raw styling text.
//! - `sync`: External token sources and the sync checker/report.
//! - `quality`: Quality scoring and dashboard.
//! - `ops`: Operations wiring the above over a components root.
//! - `models`: Data models and serializable result shapes.
//! - `output`: Human/JSON printers.
//! - `prompt`: Prompt templates for creating and reviewing components.
//! - `error`: Shared error type.
pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod ops;
pub mod output;
pub mod prompt;
pub mod quality;
pub mod sync;
pub mod utils;
pub mod validate;
