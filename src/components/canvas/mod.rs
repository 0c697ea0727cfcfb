mod component;
mod render;

pub(crate) use component::DiagramCanvas;
