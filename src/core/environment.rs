//! Deployment environment tag

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment environment, selecting the render handler at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Unspecified,
    Local,
    Testing,
    #[serde(rename = "Prod", alias = "Production")]
    Production,
}

impl Environment {
    pub fn to_str(&self) -> &'static str {
        match self {
            Environment::Unspecified => "Unspecified",
            Environment::Local => "Local",
            Environment::Testing => "Testing",
            Environment::Production => "Prod",
        }
    }

    /// Parse a tag, mapping anything unrecognized to `Unspecified`
    ///
    /// ```
    /// use context_logger::Environment;
    ///
    /// assert_eq!(Environment::parse_lossy("prod"), Environment::Production);
    /// assert_eq!(Environment::parse_lossy("staging"), Environment::Unspecified);
    /// ```
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unspecified" | "" => Ok(Environment::Unspecified),
            "local" => Ok(Environment::Local),
            "testing" | "test" => Ok(Environment::Testing),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: '{}'", s)),
        }
    }
}
