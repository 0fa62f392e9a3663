//! Integration tests for page hierarchy resolution and export

mod cli_commands;
mod config_integration;
mod entry_point;
mod hierarchy_scenario;
