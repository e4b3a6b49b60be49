use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::model::Encoding;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "facescan-signup")]
#[command(about = "Capture email signups and deliver them to a collector or a local store")]
pub struct CliConfig {
    /// Email address to submit
    #[arg(long)]
    pub email: Option<String>,

    /// Collector endpoint URL; omit to capture signups locally
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request encoding: query or multipart
    #[arg(long, default_value = "query")]
    pub encoding: String,

    /// Collector request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    /// Directory holding the local fallback store
    #[arg(long, default_value = "./data")]
    pub store_path: String,

    /// Namespace for locally captured signups
    #[arg(long, default_value = "facescan_signups")]
    pub namespace: String,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    /// Print the locally stored signups
    #[arg(long)]
    pub list: bool,

    /// Export the locally stored signups to a CSV file at the given path
    #[arg(long)]
    pub export: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process resource usage")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn collector_endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn encoding(&self) -> Encoding {
        self.encoding.parse().unwrap_or_default()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validation::validate_url("endpoint", endpoint)?;
        }
        self.encoding.parse::<Encoding>()?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validation::validate_path("store_path", &self.store_path)?;
        validation::validate_non_empty_string("namespace", &self.namespace)?;
        Ok(())
    }
}
