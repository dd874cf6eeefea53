//! bv - Binary file viewer
//!
//! This library provides shared functionality for bv (terminal viewer) and
//! bv-serve (HTTP byte source).

pub mod app;
pub mod cli;
pub mod format;
pub mod logging;
pub mod nav;
pub mod serve;
pub mod source;
pub mod ui;
