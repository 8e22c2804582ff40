use super::types::FlowDocument;
use crate::error::{Error, Result};
use std::path::Path;

/// Reads and decodes a flow definition from disk.
///
/// Identical bytes always yield an identical result; the only side effect is
/// the single read. Any read or parse failure is captured as
/// [`Error::Decode`] rather than propagated further.
pub fn load_from_file(path: &Path) -> Result<FlowDocument> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        Error::Decode(format!(
            "failed reading flow file '{}': {err}",
            path.display()
        ))
    })?;

    let document = serde_json::from_str::<FlowDocument>(&raw).map_err(|err| {
        Error::Decode(format!(
            "invalid flow json in '{}': {err}",
            path.display()
        ))
    })?;

    tracing::debug!(
        path = %path.display(),
        states = document.states().len(),
        "decoded flow document"
    );
    Ok(document)
}

pub fn load_from_str(raw: &str) -> Result<FlowDocument> {
    serde_json::from_str::<FlowDocument>(raw)
        .map_err(|err| Error::Decode(format!("invalid flow json: {err}")))
}
