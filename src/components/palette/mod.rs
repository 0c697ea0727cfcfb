//! Tool palette: the static catalog and the sidebar that arms or drags tools.

pub mod catalog;
mod component;

pub use catalog::{Tool, ToolCategory};
pub(crate) use component::ToolPalette;
