// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Registry operations never fail; unknown ids are documented no-ops.
//! Errors only come from the surrounding surface: configuration files and
//! runtime wiring.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be serialized to TOML.
    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A registry was constructed outside a Tokio runtime.
    #[error("No Tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

pub type Result<T> = std::result::Result<T, Error>;
