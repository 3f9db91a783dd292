//! Command interpretation and dispatch.
//!
//! `Coordinator::run_once` takes the latest camera frame and an operator
//! prompt, asks the model for command text, parses it and drives the vehicle
//! through `ActionDispatcher`. Progress is published on a `StatusStream`.

pub mod config;
pub mod coordinator;
pub mod dispatcher;
pub mod error;
pub mod outcome;
pub mod status;

pub use config::PipelineConfig;
pub use coordinator::Coordinator;
pub use dispatcher::ActionDispatcher;
pub use error::{ActionError, ConfigError};
pub use outcome::DispatchOutcome;
pub use status::{StatusEvent, StatusReceiver, StatusStream};
