#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Core data model for `qd3`.
//!
//! A render pass describes its elements with a [`Selection`] builder, freezes the builder into an
//! immutable [`Sel`] tree, and hands that tree to exactly one renderer. The renderers live in
//! sibling crates: `qd3-vdom` projects the tree onto virtual element descriptors and `qd3-web`
//! applies it to a live document.
//!
//! ```
//! use qd3_core::{Action, Selection, serialize};
//!
//! let mut svg = Selection::select("svg");
//! svg.append("rect").attr("width", 10).attr("stroke", "red");
//!
//! let ir = serialize(&svg);
//! assert_eq!(ir.action(), Action::Select);
//! assert_eq!(ir.children()[0].selector(), "rect");
//! ```

mod builder;
mod ir;
pub mod markup;
pub mod namespace;
mod serialize;
mod value;

pub use builder::Selection;
pub use ir::{Action, Attributes, DepthFirst, Sel};
pub use serialize::serialize;
pub use value::AttrValue;
