//! Crate error type.

/// Errors raised by catalog construction, selection staging and config loading.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A value outside the catalog was staged.
    ///
    /// This is a contract violation by the caller: options offered to the
    /// user always come from the ranked catalog.
    #[error("Invalid selection: {0:?} is not in the timezone catalog")]
    InvalidSelection(String),

    #[error("Duplicate timezone in catalog: {0:?}")]
    DuplicateZone(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_message() {
        let err = PickerError::InvalidSelection("Mars/Olympus".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid selection: \"Mars/Olympus\" is not in the timezone catalog"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: PickerError = json_err.into();
        assert!(matches!(err, PickerError::Config(_)));
    }
}
