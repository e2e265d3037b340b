//! Freezing builders into IR snapshots.

use crate::builder::Selection;
use crate::ir::Sel;

/// Produces an independent, immutable copy of `selection`.
///
/// The returned tree shares no storage with the builder: later calls to
/// [`Selection::attr`] or [`Selection::append`] leave the snapshot untouched.
#[must_use]
pub fn serialize(selection: &Selection) -> Sel {
    Sel::new(
        selection.selector.clone(),
        selection.action,
        selection.attrs.clone(),
        selection.children.iter().map(serialize).collect(),
    )
}
