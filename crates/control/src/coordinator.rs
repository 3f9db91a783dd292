use {
    crate::{
        ActionDispatcher, ActionError, DispatchOutcome, PipelineConfig, StatusReceiver,
        StatusStream,
    },
    inference::InferenceModel,
    std::time::Duration,
    tokio::sync::Mutex,
    vehicle::VehicleControl,
    video::{Frame, FrameBuffer},
};

/// Runs the frame -> model -> command -> vehicle pipeline, one command at a time.
///
/// A call arriving while another is in flight is rejected with
/// `ActionError::Busy` rather than queued.
pub struct Coordinator<V, M> {
    frames: FrameBuffer,
    model: M,
    vehicle: V,
    dispatcher: ActionDispatcher,
    status: StatusStream,
    in_flight: Mutex<()>,
    model_input_size: usize,
    inference_timeout: Duration,
}

impl<V: VehicleControl, M: InferenceModel> Coordinator<V, M> {
    pub fn new(config: &PipelineConfig, frames: FrameBuffer, model: M, vehicle: V) -> Self {
        let status = StatusStream::new(config.status_capacity());
        Self {
            frames,
            model,
            vehicle,
            dispatcher: ActionDispatcher::new(config, status.clone()),
            status,
            in_flight: Mutex::new(()),
            model_input_size: config.model_input_size(),
            inference_timeout: config.inference_timeout(),
        }
    }

    pub fn subscribe(&self) -> StatusReceiver {
        self.status.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.try_lock().is_err()
    }

    /// Process one operator prompt against the latest frame.
    pub async fn run_once(&self, text: &str) -> DispatchOutcome {
        // held until this call returns, on every path
        let Ok(_in_flight) = self.in_flight.try_lock() else {
            self.status.publish_failure(format!("busy, dropped command: {}", text.trim()));
            return DispatchOutcome::Failure(ActionError::Busy);
        };
        let outcome = self.process(text).await;
        match &outcome {
            DispatchOutcome::Success => self.status.publish("command succeeded"),
            DispatchOutcome::Failure(error) => {
                self.status.publish_failure(format!("command failed: {}", error))
            }
        }
        outcome
    }

    async fn process(&self, text: &str) -> DispatchOutcome {
        if !self.frames.has_frame() {
            return DispatchOutcome::Failure(ActionError::NoFrame);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return DispatchOutcome::Failure(ActionError::EmptyCommand);
        }
        let Some(frame) = self.frames.get_copy() else {
            return DispatchOutcome::Failure(ActionError::NoFrame);
        };

        self.status.publish(format!("processing command: {}", trimmed));
        let output = match self.infer(frame, text).await {
            Ok(output) => output,
            Err(error) => return DispatchOutcome::Failure(error),
        };
        self.status.publish(format!("model output: {}", output));

        let command = command::parse(&output);
        if command.is_unknown() {
            log::warn!("model produced unrecognized command {:?}", output);
        }
        self.dispatcher.dispatch(command, &self.vehicle).await
    }

    async fn infer(&self, frame: Frame, prompt: &str) -> Result<String, ActionError> {
        let size = self.model_input_size;
        let input = image::resize(frame.image, size, size)
            .await
            .map_err(|error| ActionError::Preprocess(error.to_string()))?;
        log::debug!("frame {} preprocessed to {}x{}", frame.sequence, size, size);
        match tokio::time::timeout(self.inference_timeout, self.model.infer(&input, prompt)).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(error)) => Err(ActionError::Inference(error.to_string())),
            Err(_) => Err(ActionError::Inference("timed out".to_string())),
        }
    }
}
