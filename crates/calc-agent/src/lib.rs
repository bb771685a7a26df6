//! An out-of-the-box chat agent that answers arithmetic questions by
//! letting the model call a locally executed calculator tool.
//!
//! The crate includes a CLI tool for using in the terminal. And you can
//! also use it as a library to bring the calculator agent into your own
//! host apps.

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

mod config;
mod models;
mod session;
pub mod tools;

pub use config::{AppEnvironment, Config, ConfigError, LogLevel};
pub use models::{
    AVAILABLE_MODELS, ModelCapability, ModelInfo, ModelVendor, default_model,
    find_model,
};
pub use session::{Session, SessionBuilder};

/// Re-exports of [`calc_agent_core`] crate.
pub mod core {
    pub use calc_agent_core::*;
}
