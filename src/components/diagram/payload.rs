//! Drag-and-drop transport for tools moving from the palette to the canvas.

use thiserror::Error;

use crate::components::palette::catalog::Tool;

/// Data-transfer format the palette writes and the canvas reads.
pub const TOOL_MIME: &str = "application/json";

/// Why a dragged tool could not be transported.
#[derive(Debug, Error)]
pub enum PayloadError {
	/// The drop had no data, or only whitespace.
	#[error("drop carried no tool payload")]
	Missing,
	/// The data was not a tool record.
	#[error("malformed tool payload: {0}")]
	Malformed(#[source] serde_json::Error),
	/// Serializing the tool failed.
	#[error("could not encode tool payload: {0}")]
	Encode(#[source] serde_json::Error),
}

/// Serializes a tool as the drag payload.
pub fn encode_tool(tool: &Tool) -> Result<String, PayloadError> {
	serde_json::to_string(tool).map_err(PayloadError::Encode)
}

/// Reads a tool back from drag data, if any was present.
pub fn decode_tool(raw: Option<&str>) -> Result<Tool, PayloadError> {
	let raw = raw.filter(|s| !s.trim().is_empty()).ok_or(PayloadError::Missing)?;
	serde_json::from_str(raw).map_err(PayloadError::Malformed)
}
