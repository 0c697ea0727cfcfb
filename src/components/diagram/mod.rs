//! View-independent diagram model: data types, viewport math, id minting,
//! drag transport and the editor state every view shares.

pub(crate) mod ids;
pub mod payload;
pub mod state;
pub mod transform;
pub mod types;

pub use state::EditorState;
pub use types::{DiagramState, Node, NodeId, Point};
