use crate::core::call::{Call, Operation, Receiver};
use crate::core::engine::ArithmeticMode;
use crate::core::render::OutputFormat;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_non_empty, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub calls: Vec<CallConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    pub mode: Option<ArithmeticMode>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallConfig {
    pub op: Operation,
    #[serde(default)]
    pub receiver: Receiver,
    pub a: Option<i32>,
    pub b: Option<i32>,
    pub x: Option<i32>,
}

impl CallConfig {
    pub fn to_call(&self) -> Result<Call> {
        Call::from_parts(self.op, self.receiver, self.a, self.b, self.x)
    }
}

impl TomlConfig {
    /// Loads a batch file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FixtureError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a batch file after environment substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FixtureError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with its environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FixtureError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn to_calls(&self) -> Result<Vec<Call>> {
        self.calls
            .iter()
            .enumerate()
            .map(|(index, call)| {
                call.to_call().map_err(|e| FixtureError::ConfigError {
                    message: format!("calls[{}]: {}", index, e),
                })
            })
            .collect()
    }

    pub fn mode(&self) -> ArithmeticMode {
        self.settings.mode.unwrap_or_default()
    }

    pub fn format(&self) -> OutputFormat {
        self.settings.format.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("calls", &self.calls)?;
        self.to_calls().map(|_| ())
    }
}
