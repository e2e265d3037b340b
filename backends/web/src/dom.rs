use qd3_core::{AttrValue, namespace};
use web_sys::{Document, Element, Window};

use crate::{document::LiveDocument, error::WebError};

/// The browser's live document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Binds to the document of the current window.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::DomUnavailable`] outside a browser window.
    pub fn new() -> Result<Self, WebError> {
        console_error_panic_hook::set_once();
        let window: Window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document: Document = window.document().ok_or(WebError::DomUnavailable)?;
        Ok(Self { document })
    }

    /// Wraps an existing document.
    #[must_use]
    pub const fn from_document(document: Document) -> Self {
        Self { document }
    }

    /// Returns the owning document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }
}

impl LiveDocument for WebDocument {
    type Handle = Element;
    type Error = WebError;

    fn select(&self, selector: &str, scope: Option<&Element>) -> Result<Option<Element>, WebError> {
        let found = match scope {
            Some(scope) => scope.query_selector(selector)?,
            None => self.document.query_selector(selector)?,
        };
        Ok(found)
    }

    fn append(&mut self, tag: &str, parent: &Element) -> Result<Element, WebError> {
        let inherited = match parent.namespace_uri() {
            Some(uri) if uri == namespace::SVG => namespace::SVG,
            _ => namespace::XHTML,
        };
        let name = namespace::element(tag, inherited);
        let element = if name.namespace == namespace::XHTML {
            self.document.create_element(name.local)?
        } else {
            self.document
                .create_element_ns(Some(name.namespace), name.local)?
        };
        parent.append_child(&element)?;
        Ok(element)
    }

    fn set_attribute(&mut self, handle: &Element, key: &str, value: &AttrValue) -> Result<(), WebError> {
        let value = value.to_string();
        match namespace::attribute(key) {
            Some(name) => handle.set_attribute_ns(Some(name.namespace), name.local, &value)?,
            None => handle.set_attribute(key, &value)?,
        }
        Ok(())
    }
}
