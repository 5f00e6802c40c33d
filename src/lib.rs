//! deptsql - Natural-language to SQL demo with a guarded single-table executor.
//!
//! This library exposes the core modules for use in integration tests.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod guard;
pub mod logging;
pub mod pipeline;
pub mod session;
pub mod synth;
pub mod web;
