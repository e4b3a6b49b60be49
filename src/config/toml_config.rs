use crate::domain::model::Encoding;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SubmitError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NAMESPACE: &str = "facescan_signups";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    /// 未配置 [collector] 時改用本地儲存
    pub collector: Option<CollectorConfig>,
    pub store: StoreConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    pub endpoint: String,
    pub encoding: Option<Encoding>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: String,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SubmitError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SubmitError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COLLECTOR_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(collector) = &self.collector {
            validation::validate_url("collector.endpoint", &collector.endpoint)?;
            if let Some(timeout) = collector.timeout_seconds {
                validation::validate_positive_number("collector.timeout_seconds", timeout, 1)?;
            }
        }

        validation::validate_path("store.path", &self.store.path)?;
        if let Some(namespace) = &self.store.namespace {
            validation::validate_non_empty_string("store.namespace", namespace)?;
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn collector_endpoint(&self) -> Option<&str> {
        self.collector.as_ref().map(|c| c.endpoint.as_str())
    }

    fn encoding(&self) -> Encoding {
        self.collector
            .as_ref()
            .and_then(|c| c.encoding)
            .unwrap_or_default()
    }

    fn timeout_seconds(&self) -> u64 {
        self.collector
            .as_ref()
            .and_then(|c| c.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn store_path(&self) -> &str {
        &self.store.path
    }

    fn namespace(&self) -> &str {
        self.store.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
