//! Core types for the quickfind search index
//!
//! This crate defines:
//! - Entry and EntryType: the unit of indexing
//! - Error and Result: the error taxonomy
//! - SearchConfig: limits and tokenization settings from `quickfind.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{SearchConfig, CONFIG_FILE_NAME, DEFAULT_MAX_PER_CATEGORY, DEFAULT_MAX_RESULTS};
pub use error::{Error, Result};
pub use types::{Entry, EntryType};
