use {std::fmt, vehicle::VehicleError};

/// Why a command did not complete. The `Display` text is the failure reason
/// reported to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionError {
    /// Command text did not parse; carries the raw text.
    Unrecognized(String),
    NotConnected,
    /// The vehicle link rejected or failed a call.
    Vehicle(String),
    /// A vehicle call did not answer in time; carries the operation name.
    Timeout(String),
    /// Another command is in flight.
    Busy,
    NoFrame,
    EmptyCommand,
    Inference(String),
    Preprocess(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Unrecognized(_) => write!(f, "unrecognized command"),
            ActionError::NotConnected => write!(f, "not connected"),
            ActionError::Vehicle(msg) => write!(f, "{msg}"),
            ActionError::Timeout(operation) => write!(f, "{operation} timed out"),
            ActionError::Busy => write!(f, "pipeline busy"),
            ActionError::NoFrame => write!(f, "no frame available"),
            ActionError::EmptyCommand => write!(f, "empty command"),
            ActionError::Inference(msg) => write!(f, "inference failed: {msg}"),
            ActionError::Preprocess(msg) => write!(f, "preprocessing failed: {msg}"),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<VehicleError> for ActionError {
    fn from(err: VehicleError) -> Self {
        ActionError::Vehicle(err.to_string())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "io error: {err}"),
            ConfigError::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
