pub mod calculator;
pub mod demo;

pub use crate::domain::model::{Area, AreaEntry, OutputFormat, Radius};
pub use crate::domain::ports::SettingsProvider;
pub use crate::utils::error::Result;
