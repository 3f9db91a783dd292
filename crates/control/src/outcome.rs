use crate::ActionError;

/// Result of one dispatched command. Never retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Success,
    Failure(ActionError),
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success)
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            DispatchOutcome::Success => None,
            DispatchOutcome::Failure(error) => Some(error),
        }
    }

    /// Failure reason as shown to the operator.
    pub fn reason(&self) -> Option<String> {
        self.error().map(|error| error.to_string())
    }
}

impl From<Result<(), ActionError>> for DispatchOutcome {
    fn from(result: Result<(), ActionError>) -> Self {
        match result {
            Ok(()) => DispatchOutcome::Success,
            Err(error) => DispatchOutcome::Failure(error),
        }
    }
}
