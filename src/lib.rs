//! Template CLI: layered profile configuration, typed interactive prompts, and
//! capability-dispatched output formatting.
//!
//! The API client itself lives outside this crate; commands receive a resolved,
//! read-only [`config::Config`] and hand their results to [`output`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod views;
