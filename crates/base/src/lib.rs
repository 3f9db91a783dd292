pub mod clock;
pub use clock::*;

pub mod geo;
pub use geo::*;

pub mod logging;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger, parse_level};

mod tensor;
pub use tensor::*;

// re-exported so downstream crates can name levels without their own dependency
pub use log;
