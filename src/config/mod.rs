// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module.
//!
//! Configuration is read once per run, from an optional TOML file, and is
//! never written back.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
