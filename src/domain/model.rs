use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, SubmitError};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A syntactically valid email address. Construction is only possible
/// through [`EmailAddress::parse`], which trims the raw input first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(SubmitError::InvalidEmail {
                reason: "email address cannot be empty".to_string(),
            });
        }

        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(SubmitError::InvalidEmail {
                reason: format!("'{}' is not a valid email address", trimmed),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single domain entity: a captured signup. Immutable once created;
/// ownership moves to whichever destination accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub email: String,
    #[serde(rename = "timestamp")]
    pub captured_at: DateTime<Utc>,
}

impl SignupRecord {
    pub fn capture(email: EmailAddress) -> Self {
        Self {
            email: email.into_inner(),
            captured_at: Utc::now(),
        }
    }

    /// RFC 3339 with millisecond precision, the format the collector expects.
    pub fn wire_timestamp(&self) -> String {
        self.captured_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Acknowledgment body returned by the collector on a 2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorAck {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl CollectorAck {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Which destination accepted a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Collector,
    LocalStore,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delivery::Collector => write!(f, "remote collector"),
            Delivery::LocalStore => write!(f, "local store"),
        }
    }
}

/// How the record is encoded onto the collector request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Email and timestamp as URL query parameters, empty body.
    #[default]
    Query,
    /// Email and timestamp as multipart form fields.
    Multipart,
}

impl FromStr for Encoding {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(Encoding::Query),
            "multipart" => Ok(Encoding::Multipart),
            other => Err(SubmitError::InvalidConfigValue {
                field: "encoding".to_string(),
                value: other.to_string(),
                reason: "expected 'query' or 'multipart'".to_string(),
            }),
        }
    }
}
