//! Error types for Cinescope

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CinescopeError>;

#[derive(Error, Debug)]
pub enum CinescopeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CinescopeError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CinescopeError::InvalidInput(_) => 3,
            CinescopeError::Catalog(CatalogError::ApiKey) => 2,
            CinescopeError::Catalog(_) => 1,
            CinescopeError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures at the catalog API boundary.
///
/// The client rethrows network and decode failures; "no data" conditions
/// (empty result pages, a movie without a trailer) are not errors and come
/// back as empty collections or `None` instead.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog rejected the API key")]
    ApiKey,

    #[error("Catalog returned HTTP {status} for {endpoint}")]
    Status { status: u16, endpoint: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = CinescopeError::InvalidInput("Empty query".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_api_key_error() {
        let error = CinescopeError::Catalog(CatalogError::ApiKey);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_status_error() {
        let error = CinescopeError::Catalog(CatalogError::Status {
            status: 404,
            endpoint: "/movie/1".to_string(),
        });
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = CinescopeError::Config(ConfigError::MissingField("catalog.api_key".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = CinescopeError::InvalidInput("Query cannot be empty".to_string());
        assert_eq!(format!("{}", error), "Invalid input: Query cannot be empty");
    }

    #[test]
    fn test_error_message_formatting_status() {
        let error = CatalogError::Status {
            status: 503,
            endpoint: "/movie/popular".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Catalog returned HTTP 503 for /movie/popular"
        );
    }

    #[test]
    fn test_error_conversion_from_catalog_error() {
        let catalog_error = CatalogError::ApiKey;
        let error: CinescopeError = catalog_error.into();

        match error {
            CinescopeError::Catalog(_) => {}
            _ => panic!("Expected CinescopeError::Catalog"),
        }
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("test".to_string());
        let error: CinescopeError = config_error.into();

        match error {
            CinescopeError::Config(_) => {}
            _ => panic!("Expected CinescopeError::Config"),
        }
    }

    #[test]
    fn test_config_error_read_error_formatting() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let config_error = ConfigError::ReadError(io_error);
        let message = format!("{}", config_error);
        assert!(message.contains("Failed to read config file"));
    }

    #[test]
    fn test_exit_code_consistency() {
        // All API-key rejections are exit code 2
        let a = CinescopeError::Catalog(CatalogError::ApiKey);
        assert_eq!(a.exit_code(), 2);

        // Other catalog failures are exit code 1
        let s = CinescopeError::Catalog(CatalogError::Status {
            status: 500,
            endpoint: "/search/movie".to_string(),
        });
        assert_eq!(s.exit_code(), 1);

        // Invalid input is exit code 3
        let i = CinescopeError::InvalidInput("bad".to_string());
        assert_eq!(i.exit_code(), 3);
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<u32> {
            Ok(7)
        }

        fn returns_err() -> Result<u32> {
            Err(CinescopeError::InvalidInput("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
