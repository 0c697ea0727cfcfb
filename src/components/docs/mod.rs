//! Documentation panel with its markdown preview and mock assistant.

pub(crate) mod chat;
mod component;
pub mod markdown;
pub(crate) mod responder;

pub(crate) use component::DocumentationPanel;
