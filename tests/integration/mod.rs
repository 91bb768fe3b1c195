//! Integration tests for fieldops
//!
//! These tests drive the public API and the binary end to end: feeds parsed
//! from backend JSON, stages reconciled against an on-disk cache, and the CLI
//! reading input files.

pub mod cache_files;
pub mod cli;
pub mod feed_board;
pub mod scenarios;
