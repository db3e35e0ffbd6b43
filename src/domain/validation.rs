use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidCountryCode { input: String },
    ZeroQuantity,
    InvalidBaseUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidCountryCode { input } => {
                write!(f, "invalid ISO 3166-1 alpha-3 country code: {input}")
            }
            Self::ZeroQuantity => write!(f, "quantity must be at least 1"),
            Self::InvalidBaseUrl { input } => write!(f, "invalid base URL: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty {
            field: "countryCodeA3",
        };
        assert_eq!(err.to_string(), "countryCodeA3 must not be empty");

        let err = ValidationError::InvalidCountryCode {
            input: "us".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid ISO 3166-1 alpha-3 country code: us"
        );

        let err = ValidationError::ZeroQuantity;
        assert_eq!(err.to_string(), "quantity must be at least 1");

        let err = ValidationError::InvalidBaseUrl {
            input: "not a url".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid base URL: not a url");
    }
}
