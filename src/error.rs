use std::io;
use thiserror::Error;

/// Custom error types for the weather-lookup application
///
/// The `Display` text of every variant that can end a lookup is the exact
/// message shown to the user.
#[derive(Error, Debug)]
pub enum AppError {
    /// The submitted city name was empty after trimming
    #[error("Please enter a city name")]
    EmptyCity,

    /// The weather API does not know the requested city
    #[error("City not found")]
    CityNotFound,

    /// The weather API answered with a non-success status other than 404
    #[error("Failed to fetch weather data")]
    UnexpectedStatus(reqwest::StatusCode),

    /// Wrapper for reqwest errors (connection, TLS, body read)
    #[error("Failed to fetch weather data")]
    RequestError(#[from] reqwest::Error),

    /// Wrapper for JSON deserialization errors of the response body
    #[error("Failed to fetch weather data")]
    JsonError(#[from] serde_json::Error),

    /// Error when environment variable is not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Wrapper for I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Coarse classification of [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any network call
    Validation,
    /// Upstream reported that the city does not exist
    NotFound,
    /// Any other network or HTTP failure
    Fetch,
    /// Startup problems (configuration, terminal I/O)
    Setup,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCity => ErrorKind::Validation,
            Self::CityNotFound => ErrorKind::NotFound,
            Self::UnexpectedStatus(_) | Self::RequestError(_) | Self::JsonError(_) => {
                ErrorKind::Fetch
            }
            Self::EnvVarNotSet(_) | Self::IoError(_) => ErrorKind::Setup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_share_one_message() {
        let status = AppError::UnexpectedStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let json = AppError::from(serde_json::from_str::<u8>("nope").unwrap_err());

        assert_eq!(status.to_string(), "Failed to fetch weather data");
        assert_eq!(json.to_string(), "Failed to fetch weather data");
        assert_eq!(status.kind(), ErrorKind::Fetch);
        assert_eq!(json.kind(), ErrorKind::Fetch);
    }

    #[test]
    fn user_facing_messages() {
        assert_eq!(AppError::EmptyCity.to_string(), "Please enter a city name");
        assert_eq!(AppError::EmptyCity.kind(), ErrorKind::Validation);
        assert_eq!(AppError::CityNotFound.to_string(), "City not found");
        assert_eq!(AppError::CityNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            AppError::EnvVarNotSet("WEATHER_API_KEY".into()).kind(),
            ErrorKind::Setup
        );
    }
}
