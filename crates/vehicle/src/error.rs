use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum VehicleError {
    /// The link is down.
    Link(String),
    /// The vehicle refused the command.
    Rejected(String),
}

impl fmt::Display for VehicleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleError::Link(msg) => write!(f, "link error: {msg}"),
            VehicleError::Rejected(msg) => write!(f, "command rejected: {msg}"),
        }
    }
}

impl std::error::Error for VehicleError {}
