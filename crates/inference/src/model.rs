use {crate::InferError, image::Image};

/// A vision-language model turning a camera frame and an operator prompt
/// into command text such as `TAKEOFF:10` or `LEFT:3`.
#[allow(async_fn_in_trait)]
pub trait InferenceModel {
    /// Run the model on an already preprocessed frame.
    async fn infer(&self, image: &Image, prompt: &str) -> Result<String, InferError>;
}
