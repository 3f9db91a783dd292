pub mod error;
pub mod keyword;
pub mod model;

pub use error::InferError;
pub use keyword::KeywordModel;
pub use model::InferenceModel;
