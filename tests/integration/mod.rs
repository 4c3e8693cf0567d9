//! Integration tests for the template CLI library

mod config_commands;
mod config_resolution;
mod precedence_properties;
mod prompt_pipeline;
mod test_utils;
