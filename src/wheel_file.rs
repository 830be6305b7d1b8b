use std::path::Path;
use std::time::Duration;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::constants::spin::{DURATION, FRAME_INTERVAL};
use crate::error::{TomlParseError, WheelError};
use crate::wheel::SpinTiming;

/// A wheel described in TOML
///
/// ```toml
/// options = ["Pizza", "Hambur.", "Sushi"]
/// colors = ["#FF5252", "#52FF9A"]
///
/// [timing]
/// duration_ms = 3000
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WheelFile {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub timing: Option<TimingSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimingSection {
    pub duration_ms: Option<u64>,
    pub frame_interval_ms: Option<u64>,
}

impl WheelFile {
    pub fn parse_file(path: &Path) -> Result<Self, WheelError> {
        let content = std::fs::read_to_string(path).map_err(|e| WheelError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse_str(&content, &path.display().to_string())
    }

    /// Parse wheel file contents, `name` labels the source in diagnostics
    pub fn parse_str(content: &str, name: &str) -> Result<Self, WheelError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            WheelError::TomlParseError(Box::new(TomlParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Timing from the `[timing]` table, missing values take the defaults
    pub fn timing(&self) -> SpinTiming {
        let section = self.timing.clone().unwrap_or_default();
        SpinTiming::new(
            section
                .duration_ms
                .map_or(DURATION, Duration::from_millis),
            section
                .frame_interval_ms
                .map_or(FRAME_INTERVAL, Duration::from_millis),
        )
    }
}
