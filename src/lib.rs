#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod component;
pub mod scenes;

#[doc(inline)]
pub use component::{Qd3, RenderPass};
pub use qd3_vdom as vdom;
pub use qd3_web as web;

#[doc(inline)]
pub use qd3_core::{Action, AttrValue, Attributes, Sel, Selection, serialize};

pub mod prelude {
    //! Commonly used types for building and rendering scenes.
    //!
    //! ```rust
    //! use qd3::prelude::*;
    //!
    //! let mut svg = Selection::select("svg");
    //! svg.append("circle").attr("r", 4);
    //! let element = Qd3::new(move || svg.clone()).pass().into_virtual();
    //! assert_eq!(element.children()[0].tag(), "circle");
    //! ```
    pub use super::{Qd3, RenderPass};
    pub use qd3_core::{Action, AttrValue, Sel, Selection, serialize};
    pub use qd3_vdom::{ElementFactory, VElement};
    pub use qd3_web::{LiveDocument, MemoryDocument, RenderError};
}
