pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{settings::Settings, toml_config::TomlConfig};
pub use crate::core::{
    calculator::compute_circle_area,
    demo::{render_entries, DemoOutcome, DemoRunner},
};
pub use crate::domain::model::{Area, AreaEntry, OutputFormat, Radius};
pub use crate::utils::error::{AreaError, Result};
