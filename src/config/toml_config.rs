use crate::domain::model::OutputFormat;
use crate::utils::error::{AreaError, Result};
use crate::utils::validation;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub radii: Option<Vec<f64>>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| AreaError::config("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${RADII})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| AreaError::config("env_substitution", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 檔案中的半徑清單；有設定時不可為空
    pub fn radii(&self) -> Result<Option<&[f64]>> {
        match self.demo.radii.as_deref() {
            Some(radii) => {
                validation::validate_non_empty("demo.radii", radii)?;
                Ok(Some(radii))
            }
            None => Ok(None),
        }
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        match self.demo.format.as_deref() {
            Some(format) => {
                validation::validate_format("demo.format", format, &OutputFormat::VALID)?;
                Ok(Some(format.parse()?))
            }
            None => Ok(None),
        }
    }
}
