//! The render pass of a `qd3` component.
//!
//! A [`Qd3`] component owns a scene function. Every time the host renders, [`Qd3::pass`] runs the
//! scene on a fresh builder and freezes the result once. The resulting [`RenderPass`] is consumed
//! by exactly one renderer: [`RenderPass::into_virtual`] during the host's render phase, or
//! [`RenderPass::mount`] from the host's "document is available" hook.

use core::any::type_name;
use core::fmt;

use qd3_core::{Sel, Selection};
use qd3_vdom::{ElementFactory, VElement};
use qd3_web::{LiveDocument, RenderError};

/// A component that draws a scene through either renderer.
pub struct Qd3<F> {
    scene: F,
}

impl<F> fmt::Debug for Qd3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

impl<F> Qd3<F>
where
    F: Fn() -> Selection,
{
    /// Wraps a scene function.
    pub const fn new(scene: F) -> Self {
        Self { scene }
    }

    /// Builds the scene afresh and freezes it into a single-use pass.
    pub fn pass(&self) -> RenderPass {
        let snapshot = (self.scene)().freeze();
        tracing::trace!(
            root = snapshot.selector(),
            nodes = snapshot.node_count(),
            "froze render pass"
        );
        RenderPass { snapshot }
    }
}

/// A frozen tree waiting for its renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    snapshot: Sel,
}

impl From<Sel> for RenderPass {
    fn from(snapshot: Sel) -> Self {
        Self { snapshot }
    }
}

impl RenderPass {
    /// The frozen tree.
    #[must_use]
    pub const fn snapshot(&self) -> &Sel {
        &self.snapshot
    }

    /// Renders the pass as virtual elements.
    #[must_use]
    pub fn into_virtual(self) -> VElement {
        qd3_vdom::render(&self.snapshot)
    }

    /// Renders the pass through a UI runtime's element factory.
    pub fn into_virtual_with<R: ElementFactory>(self, runtime: &mut R) -> R::Element {
        qd3_vdom::render_with(&self.snapshot, runtime)
    }

    /// Applies the pass to a live document, resolving the root against the whole document.
    ///
    /// # Errors
    ///
    /// See [`qd3_web::render`].
    pub fn mount<D: LiveDocument>(self, document: &mut D) -> Result<D::Handle, RenderError> {
        qd3_web::render(document, &self.snapshot, None)
    }

    /// Applies the pass beneath `parent`.
    ///
    /// # Errors
    ///
    /// See [`qd3_web::render`].
    pub fn mount_within<D: LiveDocument>(
        self,
        document: &mut D,
        parent: &D::Handle,
    ) -> Result<D::Handle, RenderError> {
        qd3_web::render(document, &self.snapshot, Some(parent))
    }
}
