//! # mq_app
//!
//! Tooling around the MQ structure defaults: regenerating the defaults source
//! file and inspecting individual defaults.

pub mod cli;
pub mod config_loader;
pub mod errors;
pub mod generator;
pub mod tracing_setup;
