use thiserror::Error;

/// Why the microphone stream could not be opened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioAccessError {
    #[error("microphone permission denied: {0}")]
    Denied(String),
    #[error("no audio input device: {0}")]
    NoDevice(String),
    #[error("audio input unavailable: {0}")]
    Unavailable(String),
}

impl AudioAccessError {
    /// Classify a rejected `getUserMedia` by its `DOMException` name.
    pub fn from_dom_exception(name: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => Self::Denied(message),
            "NotFoundError" | "OverconstrainedError" | "DevicesNotFoundError" => {
                Self::NoDevice(message)
            }
            _ => Self::Unavailable(format!("{}: {}", name, message)),
        }
    }
}
