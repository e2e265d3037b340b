#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Live document backend for `qd3`.
//!
//! [`render`] walks a frozen [`qd3_core::Sel`] tree and applies it to anything implementing
//! [`LiveDocument`]: it selects or creates an element for every node, sets the node's attributes
//! on it, and recurses into the children with that element as their parent.
//!
//! Two documents ship with the crate:
//!
//! - [`MemoryDocument`], an arena document usable on every target (servers, tests, the CLI).
//! - `WebDocument`, the browser DOM through `web-sys`, available on `wasm32` targets.
//!
//! Errors are never swallowed: a `Select` that matches nothing stops rendering with
//! [`RenderError::SelectorNotFound`] instead of dropping the subtree silently.

mod document;
#[cfg(target_arch = "wasm32")]
mod dom;
mod error;
mod memory;
mod renderer;
pub mod selector;

pub use document::LiveDocument;
#[cfg(target_arch = "wasm32")]
pub use dom::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use error::WebError;
pub use error::{DomError, RenderError};
pub use memory::{Descendants, MemoryDocument, NodeId};
pub use qd3_core::namespace;
pub use renderer::render;
pub use selector::{Selector, SelectorError};
