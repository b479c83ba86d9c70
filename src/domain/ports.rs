use crate::domain::model::OutputFormat;

/// 示範程式需要的設定來源 (CLI 參數或 TOML 檔)
pub trait SettingsProvider: Send + Sync {
    fn radii(&self) -> &[f64];
    fn output_format(&self) -> OutputFormat;
}
