//! End-to-end scenarios
//!
//! Each test runs a full script through the binary and checks the
//! toggles it reports.

pub mod clicks;
pub mod config_file;
