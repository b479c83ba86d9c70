use crate::config::toml_config::TomlConfig;
use crate::core::demo::DEFAULT_RADII;
use crate::domain::model::OutputFormat;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

/// 合併後的設定：命令列優先，其次 TOML 檔，最後是預設值
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub radii: Vec<f64>,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radii: DEFAULT_RADII.to_vec(),
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// 檔案中的欄位只有在命令列沒有提供時才會被讀取與驗證
    pub fn resolve(
        cli_radii: &[f64],
        cli_format: Option<&str>,
        file: Option<&TomlConfig>,
    ) -> Result<Self> {
        let file_radii = match (cli_radii.is_empty(), file) {
            (true, Some(file)) => file.radii()?,
            _ => None,
        };
        let radii = if !cli_radii.is_empty() {
            cli_radii.to_vec()
        } else {
            file_radii.map_or_else(|| DEFAULT_RADII.to_vec(), |radii| radii.to_vec())
        };

        let format = match (cli_format, file) {
            (Some(format), _) => format.parse()?,
            (None, Some(file)) => file.output_format()?.unwrap_or_default(),
            (None, None) => OutputFormat::default(),
        };

        let settings = Self { radii, format };
        settings.validate()?;
        Ok(settings)
    }
}

impl SettingsProvider for Settings {
    fn radii(&self) -> &[f64] {
        &self.radii
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty("radii", &self.radii)
    }
}
