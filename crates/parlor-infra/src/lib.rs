//! Infrastructure layer for Parlor.
//!
//! Contains the concrete implementation of the completion provider port
//! defined in `parlor-core`, plus configuration file loading.

pub mod config;
pub mod llm;
