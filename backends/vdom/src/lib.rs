#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Virtual element backend for `qd3`.
//!
//! Projects a frozen [`qd3_core::Sel`] tree onto `{tag, props, children}` descriptors, the shape a
//! UI runtime's reconciler consumes. Rendering is pure: it touches no document, so it can run
//! before mount or outside a browser entirely.
//!
//! The runtime's element-creation API is abstracted by [`ElementFactory`]; [`VElement`] is the
//! built-in descriptor type and prints itself as markup with [`VElement::to_markup`].

mod element;
mod renderer;

pub use element::VElement;
pub use renderer::{ElementFactory, VElementFactory, render, render_with};
