//! Configuration loading for the payroll engine.
//!
//! This module provides the engine settings structure and its YAML loader.
//! Every setting has a default, so an embedding application can run without
//! a configuration file at all.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load("./config/payroll.yaml").unwrap();
//! println!("tick every {:?}", config.tick_interval());
//! ```

mod loader;
mod types;

pub use types::EngineConfig;
