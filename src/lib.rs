pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpCollector;
pub use adapters::storage::JsonFileStore;
pub use config::toml_config::TomlConfig;
pub use crate::core::{engine::SignupEngine, submitter::SignupSubmitter};
pub use domain::model::{Delivery, EmailAddress, Encoding, SignupRecord};
pub use utils::error::{Result, SubmitError};
