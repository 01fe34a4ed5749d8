use std::error::Error;
use std::fmt;

/// Errors surfaced while collecting the device snapshot.
///
/// The camera capability lookup is the only query surface allowed to fail;
/// every other surface reports degraded values instead of erroring.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// No camera present, or its capabilities could not be read.
    CameraQuery(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::CameraQuery(msg) => write!(f, "camera query failed: {}", msg),
        }
    }
}

impl Error for SnapshotError {}
