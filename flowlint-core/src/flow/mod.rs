pub mod loader;
pub mod types;
pub mod validator;

pub use loader::{load_from_file, load_from_str};
pub use types::{Condition, FlowDocument, State, Transition};
pub use validator::{validate_flow, Issue};
