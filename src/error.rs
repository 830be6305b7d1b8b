use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(decision_wheel::toml_parse_error),
    help("Check the wheel file syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum WheelError {
    #[error("The wheel has no options to choose from")]
    #[diagnostic(
        code(decision_wheel::empty_options),
        help("Pass at least one option, point --config at a wheel file, or use --demo")
    )]
    EmptyOptions,

    #[error("The wheel is still spinning")]
    #[diagnostic(
        code(decision_wheel::spin_in_progress),
        help("Wait for the current spin to report its winner before reconfiguring")
    )]
    SpinInProgress,

    #[error("The spin animation thread panicked")]
    #[diagnostic(
        code(decision_wheel::spin_thread_panicked),
        help("This is likely an internal error - please report it")
    )]
    SpinThreadPanicked,

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(decision_wheel::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(decision_wheel::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(decision_wheel::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(decision_wheel::config_error),
        help("Check your command arguments and wheel file")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "options = [\"Pizza\"";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "wheel.toml".to_string(),
            source_code: NamedSource::new("wheel.toml", source_code.to_string()),
            span: Some((10, 8).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'wheel.toml'");
    }

    #[test]
    fn test_empty_options_error() {
        let error = WheelError::EmptyOptions;
        assert_eq!(
            error.to_string(),
            "The wheel has no options to choose from"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = WheelError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_configuration_error() {
        let error = WheelError::ConfigurationError {
            message: "rotation out of range".to_string(),
        };

        assert_eq!(error.to_string(), "Configuration error: rotation out of range");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        for error in [
            WheelError::EmptyOptions,
            WheelError::SpinInProgress,
            WheelError::SpinThreadPanicked,
        ] {
            assert!(error.code().is_some());
            assert!(error.help().is_some());
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let wheel_err: WheelError = json_err.into();

        match wheel_err {
            WheelError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
