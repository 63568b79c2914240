//! Tilepath CLI library.
//!
//! This crate provides command-line interface utilities for the tilepath
//! grid search, including map path resolution, terminal styling and output
//! formatting.

pub mod config;
pub mod output;
pub mod terminal;
