//! Markup output shared by the renderers.
//!
//! Both renderers print through the `html5ever` serializer. An element reports its raw name and
//! the serializer side resolves namespaces with [`crate::namespace`], so `svg:g` under an `<svg>`
//! prints as `<g>` whichever renderer produced it, the way a browser's `outerHTML` does.

use std::borrow::Cow;
use std::io;

use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{LocalName, Namespace, QualName, ns, serialize};

use crate::namespace::{self, QualifiedName};

/// An element tree that can be printed as markup.
pub trait MarkupElement: Sized {
    /// Qualified name of this element when its parent lives in `parent`.
    fn name(&self, parent: &'static str) -> QualifiedName<'_>;

    /// Attribute names and values in document order.
    fn attributes(&self) -> impl Iterator<Item = (&str, Cow<'_, str>)>;

    /// Child elements in document order.
    fn children(&self) -> impl Iterator<Item = Self>;
}

/// Error returned when a tree cannot be printed.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// An element or attribute name contains characters markup cannot carry.
    #[error("`{0}` is not a valid element or attribute name")]
    InvalidName(String),
    /// The serializer failed to write.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl MarkupError {
    fn from_io(error: io::Error) -> Self {
        let name = error
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<Self>())
            .and_then(|inner| match inner {
                Self::InvalidName(name) => Some(name.clone()),
                Self::Io(_) => None,
            });
        match name {
            Some(name) => Self::InvalidName(name),
            None => Self::Io(error),
        }
    }
}

/// Prints `root` and its subtree. `root` is resolved as a child of an XHTML document.
///
/// # Errors
///
/// Fails with [`MarkupError::InvalidName`] if any element or attribute name is not a valid name.
pub fn to_markup<E: MarkupElement>(root: &E) -> Result<String, MarkupError> {
    print(root, TraversalScope::IncludeNode)
}

/// Prints the children of `root` without `root` itself.
///
/// # Errors
///
/// See [`to_markup`].
pub fn children_to_markup<E: MarkupElement>(root: &E) -> Result<String, MarkupError> {
    print(root, TraversalScope::ChildrenOnly(None))
}

fn print<E: MarkupElement>(root: &E, traversal_scope: TraversalScope) -> Result<String, MarkupError> {
    let mut out = Vec::new();
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    serialize(&mut out, &Printable(root), opts).map_err(MarkupError::from_io)?;
    String::from_utf8(out).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error).into())
}

struct Printable<'a, E>(&'a E);

impl<E: MarkupElement> Serialize for Printable<'_, E> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        match traversal_scope {
            TraversalScope::IncludeNode => write_element(serializer, self.0, namespace::XHTML),
            TraversalScope::ChildrenOnly(_) => {
                let inherited = self.0.name(namespace::XHTML).namespace;
                for child in self.0.children() {
                    write_element(serializer, &child, inherited)?;
                }
                Ok(())
            }
        }
    }
}

fn write_element<S, E>(serializer: &mut S, element: &E, parent: &'static str) -> io::Result<()>
where
    S: Serializer,
    E: MarkupElement,
{
    let qualified = element.name(parent);
    check_name(qualified.local)?;
    let name = QualName::new(
        None,
        Namespace::from(qualified.namespace),
        LocalName::from(qualified.local),
    );

    let mut attributes = Vec::new();
    for (key, value) in element.attributes() {
        check_name(key)?;
        attributes.push((attribute_name(key), value));
    }

    serializer.start_elem(
        name.clone(),
        attributes.iter().map(|(key, value)| (key, &**value)),
    )?;
    for child in element.children() {
        write_element(serializer, &child, qualified.namespace)?;
    }
    serializer.end_elem(name)
}

fn check_name(name: &str) -> io::Result<()> {
    if namespace::is_valid_name(name) {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            MarkupError::InvalidName(name.to_owned()),
        ))
    }
}

/// `xlink:`, `xml:` and `xmlns:` keep their prefix through the serializer; any other name is
/// printed as written.
fn attribute_name(key: &str) -> QualName {
    match namespace::attribute(key) {
        Some(name)
            if matches!(
                name.namespace,
                namespace::XLINK | namespace::XML | namespace::XMLNS
            ) =>
        {
            let local = name.local.rsplit_once(':').map_or(name.local, |(_, local)| local);
            QualName::new(None, Namespace::from(name.namespace), LocalName::from(local))
        }
        _ => QualName::new(None, ns!(), LocalName::from(key)),
    }
}
