use crate::memory::NodeId;
use crate::selector::SelectorError;

/// Error produced while applying a tree to a live document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A `Select` node matched nothing. Its subtree is not rendered.
    #[error("selector `{selector}` did not match any element")]
    SelectorNotFound {
        /// The selector that failed to resolve.
        selector: String,
    },
    /// An `Append` node was rendered with no parent to attach to.
    #[error("cannot append `{selector}` without a parent element")]
    AppendWithoutParent {
        /// Tag of the element that could not be created.
        selector: String,
    },
    /// The document rejected an operation.
    #[error("document operation failed: {0}")]
    Document(String),
}

/// Error produced by [`MemoryDocument`](crate::MemoryDocument).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The selector could not be parsed.
    #[error(transparent)]
    Selector(#[from] SelectorError),
    /// The handle was not issued by this document.
    #[error("node {0} does not belong to this document")]
    UnknownNode(NodeId),
    /// The element or attribute name cannot appear in markup.
    #[error("`{0}` is not a valid element or attribute name")]
    InvalidName(String),
    /// The document could not be printed.
    #[error("failed to print markup: {0}")]
    Markup(String),
}

/// Error type produced by the browser document.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, thiserror::Error)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    #[error("DOM is not available")]
    DomUnavailable,
    /// Wrapper around JavaScript exceptions.
    #[error("JavaScript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<RenderError> for wasm_bindgen::JsValue {
    fn from(value: RenderError) -> Self {
        Self::from(value.to_string())
    }
}
