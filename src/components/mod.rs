//! Editor building blocks. The diagram model, tool catalog and markdown
//! preview are public; the views are mounted by the pages.

pub(crate) mod canvas;
pub mod diagram;
pub mod docs;
pub mod palette;
pub(crate) mod starfield;
