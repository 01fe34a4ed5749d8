//! Module errors

use std::error::Error;
use std::fmt;

/// Represents the different types of errors that can occur in the sensor
/// hub.
#[derive(Debug)]
pub enum HubError {
    /// Error indicating that there was an issue building the HTTP client.
    ClientBuild(String),

    /// Error indicating that there was an issue fetching data.
    FetchData(String),

    /// Error indicating that the received data format is incorrect.
    IncorrectDataFormat(String),

    /// Error indicating that a sensor kind is not exposed by the backend.
    UnknownSensor(String),

    Other(String),
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubError::ClientBuild(msg) => write!(f, "client build error: {}", msg),
            HubError::FetchData(msg) => write!(f, "fetch error: {}", msg),
            HubError::IncorrectDataFormat(msg) => write!(f, "incorrect data format: {}", msg),
            HubError::UnknownSensor(msg) => write!(f, "unknown sensor: {}", msg),
            HubError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for HubError {}
