use {
    control::{ActionError, Coordinator, DispatchOutcome, PipelineConfig},
    image::Image,
    inference::{InferError, InferenceModel, KeywordModel},
    std::{
        sync::{Arc, Mutex},
        time::Duration,
    },
    vehicle::{FlightMode, Position, SimVehicle, VehicleCall},
    video::FrameBuffer,
};

const HOME: Position = Position {
    lat: -35.363261,
    lng: 149.165230,
    alt: 0.0,
    yaw: 0.0,
};

fn config() -> PipelineConfig {
    PipelineConfig::default()
        .with_settle_delay(Duration::from_millis(5))
        .with_vehicle_timeout(Duration::from_millis(200))
        .with_inference_timeout(Duration::from_millis(200))
        .with_model_input_size(32)
}

fn frames_with_capture() -> FrameBuffer {
    let frames = FrameBuffer::new();
    frames.on_new_frame(Image::solid(64, 48, [90, 120, 150]).unwrap());
    frames
}

/// Fails whenever the prompt mentions "explode", otherwise behaves like `KeywordModel`.
struct ScriptedModel;

impl InferenceModel for ScriptedModel {
    async fn infer(&self, image: &Image, prompt: &str) -> Result<String, InferError> {
        if prompt.contains("explode") {
            return Err(InferError::Runtime("model crashed".to_string()));
        }
        KeywordModel::new(Duration::ZERO).infer(image, prompt).await
    }
}

/// Never answers.
struct StuckModel;

impl InferenceModel for StuckModel {
    async fn infer(&self, _image: &Image, _prompt: &str) -> Result<String, InferError> {
        std::future::pending().await
    }
}

/// Records the input it was given.
#[derive(Default)]
struct RecordingModel {
    seen: Arc<Mutex<Vec<(usize, usize, String)>>>,
}

impl InferenceModel for RecordingModel {
    async fn infer(&self, image: &Image, prompt: &str) -> Result<String, InferError> {
        self.seen
            .lock()
            .unwrap()
            .push((image.width(), image.height(), prompt.to_string()));
        Ok("LEFT:3".to_string())
    }
}

#[tokio::test]
async fn test_run_once_takes_off() {
    let sim = SimVehicle::new(HOME);
    let coordinator = Coordinator::new(
        &config(),
        frames_with_capture(),
        KeywordModel::new(Duration::ZERO),
        sim.clone(),
    );
    let mut status = coordinator.subscribe();

    let outcome = coordinator.run_once("please take off").await;

    assert_eq!(outcome, DispatchOutcome::Success);
    assert_eq!(
        sim.calls(),
        vec![
            VehicleCall::SetMode(FlightMode::Guided),
            VehicleCall::Takeoff(5.0)
        ]
    );
    assert_eq!(
        status.drain(),
        vec![
            "processing command: please take off".to_string(),
            "model output: TAKEOFF".to_string(),
            "taking off to 5m".to_string(),
            "takeoff succeeded".to_string(),
            "command succeeded".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_run_once_without_frame() {
    let sim = SimVehicle::new(HOME);
    let coordinator = Coordinator::new(
        &config(),
        FrameBuffer::new(),
        KeywordModel::new(Duration::ZERO),
        sim.clone(),
    );

    let outcome = coordinator.run_once("land").await;

    assert_eq!(outcome, DispatchOutcome::Failure(ActionError::NoFrame));
    assert_eq!(outcome.reason().as_deref(), Some("no frame available"));
    assert!(sim.calls().is_empty());
}

#[tokio::test]
async fn test_run_once_empty_command() {
    let coordinator = Coordinator::new(
        &config(),
        frames_with_capture(),
        KeywordModel::new(Duration::ZERO),
        SimVehicle::new(HOME),
    );

    let outcome = coordinator.run_once("   ").await;

    assert_eq!(outcome, DispatchOutcome::Failure(ActionError::EmptyCommand));
    assert_eq!(outcome.reason().as_deref(), Some("empty command"));
}

#[tokio::test]
async fn test_model_sees_preprocessed_frame_and_raw_prompt() {
    let model = RecordingModel::default();
    let seen = Arc::clone(&model.seen);
    let coordinator = Coordinator::new(
        &config(),
        frames_with_capture(),
        model,
        SimVehicle::new(HOME),
    );

    assert!(coordinator.run_once("  slide left  ").await.is_success());

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![(32, 32, "  slide left  ".to_string())]);
}

#[tokio::test]
async fn test_unrecognized_model_output() {
    let sim = SimVehicle::new(HOME);
    let coordinator = Coordinator::new(
        &config(),
        frames_with_capture(),
        KeywordModel::new(Duration::ZERO),
        sim.clone(),
    );
    let mut status = coordinator.subscribe();

    let outcome = coordinator.run_once("do a barrel roll").await;

    assert_eq!(
        outcome,
        DispatchOutcome::Failure(ActionError::Unrecognized("UNKNOWN_COMMAND".to_string()))
    );
    assert!(sim.calls().is_empty());
    assert_eq!(
        status.drain(),
        vec![
            "processing command: do a barrel roll".to_string(),
            "model output: UNKNOWN_COMMAND".to_string(),
            "parse failed: unrecognized command".to_string(),
            "command failed: unrecognized command".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_overlapping_runs_one_is_busy() {
    let sim = SimVehicle::new(HOME);
    let coordinator = Coordinator::new(
        &config(),
        frames_with_capture(),
        KeywordModel::new(Duration::from_millis(50)),
        sim.clone(),
    );

    let (first, second) = tokio::join!(coordinator.run_once("land"), coordinator.run_once("rtl"));

    assert_eq!(first, DispatchOutcome::Success);
    assert_eq!(second, DispatchOutcome::Failure(ActionError::Busy));
    assert_eq!(sim.calls(), vec![VehicleCall::SetMode(FlightMode::Land)]);
    assert!(!coordinator.is_busy());

    // accepted again once the first run finished
    assert!(coordinator.run_once("go home").await.is_success());
    assert_eq!(sim.mode(), Some(FlightMode::Rtl));
}

#[tokio::test]
async fn test_inference_failure_releases_pipeline() {
    let coordinator = Coordinator::new(
        &config(),
        frames_with_capture(),
        ScriptedModel,
        SimVehicle::new(HOME),
    );

    let outcome = coordinator.run_once("explode").await;
    let reason = outcome.reason().expect("expected failure");
    assert!(reason.contains("model crashed"), "reason was {reason}");
    assert!(!coordinator.is_busy());

    assert!(coordinator.run_once("land").await.is_success());
}

#[tokio::test]
async fn test_inference_timeout_releases_pipeline() {
    let coordinator = Coordinator::new(
        &config(),
        frames_with_capture(),
        StuckModel,
        SimVehicle::new(HOME),
    );

    let outcome = coordinator.run_once("land").await;

    assert_eq!(
        outcome,
        DispatchOutcome::Failure(ActionError::Inference("timed out".to_string()))
    );
    assert!(!coordinator.is_busy());
}

#[tokio::test]
async fn test_disconnected_vehicle_reports_failure() {
    let sim = SimVehicle::new(HOME);
    sim.set_connected(false);
    let coordinator = Coordinator::new(
        &config(),
        frames_with_capture(),
        KeywordModel::new(Duration::ZERO),
        sim.clone(),
    );
    let mut status = coordinator.subscribe();

    let outcome = coordinator.run_once("land").await;

    assert_eq!(outcome, DispatchOutcome::Failure(ActionError::NotConnected));
    let messages = status.drain();
    assert_eq!(messages.last().map(String::as_str), Some("command failed: not connected"));
}
