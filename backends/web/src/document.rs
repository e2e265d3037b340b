use core::fmt;

use qd3_core::AttrValue;

/// Mutation surface of a live document.
///
/// This is everything the imperative renderer needs: look an element up, create a child, and set
/// an attribute. Handles are cheap references to realized elements.
pub trait LiveDocument {
    /// Reference to an element in this document.
    type Handle: Clone + fmt::Debug;
    /// Failure reported by the document itself.
    type Error: fmt::Display;

    /// Finds the first element matching `selector`.
    ///
    /// With a `scope`, only descendants of that element are candidates; otherwise the whole
    /// document is searched. `Ok(None)` means the selector was valid but matched nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is malformed or the scope is not a live element.
    fn select(
        &self,
        selector: &str,
        scope: Option<&Self::Handle>,
    ) -> Result<Option<Self::Handle>, Self::Error>;

    /// Creates a `tag` element as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be created or attached.
    fn append(&mut self, tag: &str, parent: &Self::Handle) -> Result<Self::Handle, Self::Error>;

    /// Sets `key` to `value` on the element.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the attribute.
    fn set_attribute(
        &mut self,
        handle: &Self::Handle,
        key: &str,
        value: &AttrValue,
    ) -> Result<(), Self::Error>;
}
