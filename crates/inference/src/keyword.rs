use {
    crate::{InferError, InferenceModel},
    image::Image,
    std::time::Duration,
};

/// Output for prompts that match no rule.
pub const UNKNOWN_OUTPUT: &str = "UNKNOWN_COMMAND";

// first matching rule wins
const RULES: &[(&[&str], &str)] = &[
    (&["takeoff", "take off", "起飞"], "TAKEOFF"),
    (&["land", "降落"], "LAND"),
    (&["forward", "ahead", "前进"], "FORWARD:5"),
    (&["home", "return", "rtl", "返航"], "RTL"),
    (&["backward", "back", "后退"], "BACKWARD:5"),
    (&["left", "左"], "LEFT:5"),
    (&["right", "右"], "RIGHT:5"),
    (&["loiter", "hover", "盘旋", "悬停"], "LOITER"),
];

/// Stand-in model that ignores the image and maps prompt keywords to commands.
///
/// Useful for running the pipeline without model weights; `latency`
/// simulates inference time.
#[derive(Debug, Clone)]
pub struct KeywordModel {
    latency: Duration,
}

impl Default for KeywordModel {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl KeywordModel {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// The command text a prompt maps to.
    pub fn respond(prompt: &str) -> &'static str {
        let prompt = prompt.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| prompt.contains(keyword)))
            .map(|(_, output)| *output)
            .unwrap_or(UNKNOWN_OUTPUT)
    }
}

impl InferenceModel for KeywordModel {
    async fn infer(&self, image: &Image, prompt: &str) -> Result<String, InferError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(InferError::Input("empty frame".to_string()));
        }
        log::debug!(
            "keyword model: {}x{} frame, prompt {:?}",
            image.width(),
            image.height(),
            prompt
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Self::respond(prompt).to_string())
    }
}
