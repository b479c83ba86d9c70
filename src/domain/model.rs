use crate::utils::error::{AreaError, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// A validated circle radius: finite and not negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Radius(f64);

impl Radius {
    pub fn new(value: f64) -> Result<Self> {
        crate::utils::validation::validate_radius(value)?;
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// A = π * r²
    pub fn area(self) -> Area {
        Area(PI * self.0 * self.0)
    }
}

impl TryFrom<f64> for Radius {
    type Error = AreaError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Area(f64);

impl Area {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self> {
        crate::utils::validation::validate_format("format", s, &Self::VALID)?;
        match s {
            "json" => Ok(OutputFormat::Json),
            _ => Ok(OutputFormat::Text),
        }
    }
}

/// 單一半徑的計算結果，成功時帶面積，失敗時帶錯誤訊息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaEntry {
    pub radius: f64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_area"
    )]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// serde_json 會把非有限的 f64 寫成 null，溢位的面積改以字串 "inf" 輸出
fn serialize_area<S: Serializer>(
    area: &Option<f64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match area {
        Some(value) if !value.is_finite() => serializer.serialize_str(&value.to_string()),
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_none(),
    }
}

impl AreaEntry {
    pub fn from_result(radius: f64, result: &Result<f64>) -> Self {
        match result {
            Ok(area) => Self {
                radius,
                area: Some(*area),
                error: None,
            },
            Err(e) => Self {
                radius,
                area: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
