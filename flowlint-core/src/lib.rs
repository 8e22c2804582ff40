pub mod error;
pub mod flow;
pub mod logging;

pub use error::{Error, Result};
pub use flow::{load_from_file, validate_flow, FlowDocument, Issue};
