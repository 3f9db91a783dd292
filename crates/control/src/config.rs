use {
    crate::ConfigError,
    serde::Deserialize,
    std::{path::Path, time::Duration},
};

/// Tunables of the command pipeline. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    settle_delay_ms: u64,
    vehicle_timeout_ms: u64,
    inference_timeout_ms: u64,
    model_input_size: usize,
    status_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 500,
            vehicle_timeout_ms: 5000,
            inference_timeout_ms: 10000,
            model_input_size: 224,
            status_capacity: 64,
        }
    }
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Wait after a mode change before issuing dependent commands.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Upper bound for any single vehicle call.
    pub fn with_vehicle_timeout(mut self, timeout: Duration) -> Self {
        self.vehicle_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Upper bound for one model inference.
    pub fn with_inference_timeout(mut self, timeout: Duration) -> Self {
        self.inference_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Side length of the square image handed to the model.
    pub fn with_model_input_size(mut self, size: usize) -> Self {
        self.model_input_size = size;
        self
    }

    pub fn with_status_capacity(mut self, capacity: usize) -> Self {
        self.status_capacity = capacity;
        self
    }

    // Getters
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn vehicle_timeout(&self) -> Duration {
        Duration::from_millis(self.vehicle_timeout_ms)
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_millis(self.inference_timeout_ms)
    }

    pub fn model_input_size(&self) -> usize {
        self.model_input_size
    }

    pub fn status_capacity(&self) -> usize {
        self.status_capacity
    }
}
