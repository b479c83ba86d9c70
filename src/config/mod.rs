pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::config::settings::Settings;
    use crate::config::toml_config::TomlConfig;
    use crate::utils::error::Result;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "circle-area")]
    #[command(about = "Print the area of a circle for each sample radius")]
    pub struct CliConfig {
        /// Comma-separated radii, e.g. --radius=5,10,-1
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        pub radius: Vec<f64>,

        /// Output format: text or json
        #[arg(long)]
        pub format: Option<String>,

        /// Path to a TOML file with a [demo] section
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 載入 --config 指定的檔案並與命令列參數合併
        pub fn load_settings(&self) -> Result<Settings> {
            let file = self
                .config
                .as_ref()
                .map(TomlConfig::from_file)
                .transpose()?;
            Settings::resolve(&self.radius, self.format.as_deref(), file.as_ref())
        }
    }
}
