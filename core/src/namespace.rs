//! Element and attribute names: namespace resolution and validity.
//!
//! A created element inherits its parent's namespace unless its name carries a known prefix
//! (`svg:rect`) or is itself a known prefix (`svg`). This keeps children of `<svg>` in the SVG
//! namespace, which browsers need in order to draw them.

/// The XHTML namespace, the default for documents.
pub const XHTML: &str = "http://www.w3.org/1999/xhtml";
/// The SVG namespace.
pub const SVG: &str = "http://www.w3.org/2000/svg";
/// The XLink namespace.
pub const XLINK: &str = "http://www.w3.org/1999/xlink";
/// The XML namespace.
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
/// The XMLNS namespace.
pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";

/// A name split into its namespace and local part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    /// Namespace URI the element or attribute belongs to.
    pub namespace: &'static str,
    /// Name without prefix.
    pub local: &'a str,
}

fn lookup(prefix: &str) -> Option<&'static str> {
    match prefix {
        "svg" => Some(SVG),
        "xhtml" => Some(XHTML),
        "xlink" => Some(XLINK),
        "xml" => Some(XML),
        "xmlns" => Some(XMLNS),
        _ => None,
    }
}

/// Resolves an explicit namespace from `name`, if it names one.
///
/// `svg:rect` and `svg` resolve to SVG; `xmlns:foo` keeps its full name under XMLNS; anything else
/// yields `None`.
#[must_use]
pub fn explicit(name: &str) -> Option<QualifiedName<'_>> {
    match name.split_once(':') {
        Some(("xmlns", _)) => Some(QualifiedName {
            namespace: XMLNS,
            local: name,
        }),
        Some((prefix, local)) => lookup(prefix).map(|namespace| QualifiedName { namespace, local }),
        None => lookup(name).map(|namespace| QualifiedName {
            namespace,
            local: name,
        }),
    }
}

/// Resolves the namespace of an element named `tag` created under a parent in `parent`.
#[must_use]
pub fn element<'a>(tag: &'a str, parent: &'static str) -> QualifiedName<'a> {
    explicit(tag).unwrap_or(QualifiedName {
        namespace: parent,
        local: tag,
    })
}

/// Resolves an attribute name; only prefixed names leave the null namespace.
#[must_use]
pub fn attribute(key: &str) -> Option<QualifiedName<'_>> {
    if key.contains(':') { explicit(key) } else { None }
}

/// Returns `true` if `name` may be used as an element or attribute name.
///
/// Follows the XML `Name` production closely enough to reject anything that would break out of
/// a tag: whitespace, quotes, `<`, `>`, `/` and `=` never pass.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_name_start(first) && chars.all(|ch| is_name_start(ch) || matches!(ch, '-' | '.' | '0'..='9'))
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || matches!(ch, '_' | ':')
        || (!ch.is_ascii() && !ch.is_whitespace() && !ch.is_control())
}
