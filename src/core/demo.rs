use crate::core::calculator::compute_circle_area;
use crate::core::{AreaEntry, OutputFormat, SettingsProvider};
use crate::utils::error::{AreaError, Result};

pub const DEFAULT_RADII: [f64; 2] = [5.0, 10.0];

/// Result of one demo run: an entry per radius, the rendered text and the first rejection.
#[derive(Debug)]
pub struct DemoOutcome {
    pub entries: Vec<AreaEntry>,
    pub output: String,
    pub first_error: Option<AreaError>,
}

impl DemoOutcome {
    pub fn rejected(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_ok()).count()
    }

    /// 0 when every radius was accepted, otherwise the code of the first rejection
    pub fn exit_code(&self) -> i32 {
        self.first_error.as_ref().map_or(0, AreaError::exit_code)
    }
}

/// Runs every configured radius through the calculator and collects one entry per radius.
pub struct DemoRunner<S: SettingsProvider> {
    settings: S,
}

impl<S: SettingsProvider> DemoRunner<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn run(&self) -> Vec<AreaEntry> {
        self.evaluate().0
    }

    pub fn run_and_render(&self) -> Result<DemoOutcome> {
        let (entries, first_error) = self.evaluate();
        let output = render_entries(&entries, self.settings.output_format())?;
        Ok(DemoOutcome {
            entries,
            output,
            first_error,
        })
    }

    fn evaluate(&self) -> (Vec<AreaEntry>, Option<AreaError>) {
        let radii = self.settings.radii();
        tracing::info!("🔵 Computing areas for {} radii", radii.len());

        let mut entries = Vec::with_capacity(radii.len());
        let mut first_error = None;

        for &radius in radii {
            let result = compute_circle_area(radius);
            entries.push(AreaEntry::from_result(radius, &result));
            match result {
                Ok(area) => tracing::debug!(radius, area, "computed circle area"),
                Err(e) => {
                    tracing::warn!("⚠️ Skipping radius {}: {}", radius, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        (entries, first_error)
    }
}

pub fn render_entries(entries: &[AreaEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Text => {
            let lines: Vec<String> = entries
                .iter()
                .map(|entry| match (&entry.area, &entry.error) {
                    (Some(area), _) => {
                        format!("Area of circle with radius {}: {}", entry.radius, area)
                    }
                    (None, Some(error)) => format!("Radius {}: {}", entry.radius, error),
                    (None, None) => format!("Radius {}: no result", entry.radius),
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSettings {
        radii: Vec<f64>,
        format: OutputFormat,
    }

    impl SettingsProvider for FixedSettings {
        fn radii(&self) -> &[f64] {
            &self.radii
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    #[test]
    fn test_runner_keeps_going_after_invalid_radius() {
        let runner = DemoRunner::new(FixedSettings {
            radii: vec![5.0, -1.0, 10.0],
            format: OutputFormat::Text,
        });

        let entries = runner.run();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_ok());
        assert!(!entries[1].is_ok());
        assert!(entries[2].is_ok());
    }

    #[test]
    fn test_text_rendering() {
        let runner = DemoRunner::new(FixedSettings {
            radii: DEFAULT_RADII.to_vec(),
            format: OutputFormat::Text,
        });

        let outcome = runner.run_and_render().unwrap();
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.first_error.is_none());

        let output = outcome.output;
        let expected = format!(
            "Area of circle with radius 5: {}\nArea of circle with radius 10: {}",
            compute_circle_area(5.0).unwrap(),
            compute_circle_area(10.0).unwrap()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_outcome_exit_code_follows_first_rejection() {
        let runner = DemoRunner::new(FixedSettings {
            radii: vec![1.0, -1.0, f64::NAN],
            format: OutputFormat::Text,
        });

        let outcome = runner.run_and_render().unwrap();
        assert_eq!(outcome.rejected(), 2);
        assert_eq!(outcome.exit_code(), 2);
        match outcome.first_error {
            Some(AreaError::InvalidArgument { value, .. }) => assert_eq!(value, -1.0),
            other => panic!("unexpected first error: {:?}", other),
        }
    }

    #[test]
    fn test_overflowed_area_in_json_output() {
        let runner = DemoRunner::new(FixedSettings {
            radii: vec![1e200],
            format: OutputFormat::Json,
        });

        let outcome = runner.run_and_render().unwrap();
        assert_eq!(outcome.exit_code(), 0);

        let parsed: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(parsed[0]["area"], "inf");
        assert!(parsed[0].get("error").is_none());
    }

    #[test]
    fn test_text_rendering_of_error() {
        let entries = vec![AreaEntry::from_result(-2.0, &compute_circle_area(-2.0))];
        let output = render_entries(&entries, OutputFormat::Text).unwrap();
        assert_eq!(
            output,
            "Radius -2: Invalid argument: radius -2 cannot be negative"
        );
    }

    #[test]
    fn test_json_rendering() {
        let entries = vec![
            AreaEntry::from_result(0.0, &compute_circle_area(0.0)),
            AreaEntry::from_result(-1.0, &compute_circle_area(-1.0)),
        ];
        let output = render_entries(&entries, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["radius"], 0.0);
        assert_eq!(parsed[0]["area"], 0.0);
        assert!(parsed[0].get("error").is_none());
        assert!(parsed[1].get("area").is_none());
        assert!(parsed[1]["error"].as_str().unwrap().contains("negative"));
    }
}
