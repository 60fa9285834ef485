use thiserror::Error;

/// A user-supplied parameter that cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please ask for between {min} and {max} people (you asked for {value}).")]
    QuantityOutOfRange { value: i64, min: u8, max: u8 },

    #[error("Please ask for a whole number of people (you asked for {literal}).")]
    NotWholeNumber { literal: String },
}

/// Failure while talking to the people API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("people API request failed")]
    Network(#[from] reqwest::Error),

    #[error("people API answered with status {status}")]
    Upstream { status: u16 },

    #[error("people API returned malformed JSON")]
    Malformed(#[from] serde_json::Error),
}

/// Invalid or missing configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("invalid value for `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn malformed_keeps_decode_error_as_source() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FetchError::from(decode);

        assert_eq!(error.to_string(), "people API returned malformed JSON");
        assert!(error.source().is_some());
    }
}
