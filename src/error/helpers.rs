use super::{AdsightError, ErrorCode};

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to AdsightError with specific error type
    fn to_config_error(self, message: impl Into<String>) -> Result<T, AdsightError>;
    fn to_output_error(self, message: impl Into<String>) -> Result<T, AdsightError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, AdsightError> {
        self.map_err(|e| AdsightError::config(message).with_source(e))
    }

    fn to_output_error(self, message: impl Into<String>) -> Result<T, AdsightError> {
        self.map_err(|e| AdsightError::output(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;
    use std::path::Path;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> AdsightError {
        AdsightError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create an out-of-range configuration error
    pub fn invalid_threshold(field: &str, value: f64, expected: &str) -> AdsightError {
        AdsightError::validation_with_code(
            ErrorCode::VALIDATION_OUT_OF_RANGE,
            format!("{} must be {}, got {}", field, expected, value),
            Some(field.to_string()),
        )
    }

    /// Create a missing column error for an export
    pub fn missing_column(column: &str) -> AdsightError {
        AdsightError::input_with_code(
            ErrorCode::INPUT_MISSING_COLUMN,
            format!("Required column '{}' not found in export header", column),
            None,
        )
    }

    /// Create the error surfaced when an export has no usable keyword rows
    pub fn empty_export(path: impl AsRef<Path>) -> AdsightError {
        AdsightError::input_with_code(
            ErrorCode::INPUT_EMPTY,
            "Empty or invalid file: no keyword rows could be read",
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create an unsupported output format error
    pub fn unsupported_format(format: &str) -> AdsightError {
        AdsightError::output_with_code(
            ErrorCode::OUTPUT_UNSUPPORTED_FORMAT,
            format!("Unsupported report format '{}'", format),
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_extension_trait() {
        let io_result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));

        let err = io_result
            .to_output_error("Failed to write report")
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::OUTPUT_GENERIC);
        assert_eq!(err.exit_code(), 4);

        let toml_result: Result<toml::Table, toml::de::Error> = toml::from_str("x = ");
        let err = toml_result.to_config_error("Bad settings").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_GENERIC);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_common_error_helpers() {
        let err = common::config_not_found("/etc/adsight/adsight.toml");
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
        assert!(err.user_message().contains("Configuration problem"));

        let err = common::missing_column("clicks");
        assert_eq!(err.code(), ErrorCode::INPUT_MISSING_COLUMN);
        assert!(err.user_message().contains("clicks"));

        let err = common::empty_export("ads.csv");
        assert!(err.user_message().contains("Empty or invalid file"));
    }
}
