//! Element binding traits
//!
//! A binding resolves class names to a collection of nodes and exposes the
//! stylable elements among them. Nodes that cannot carry inline styles are
//! filtered out by the binding, so the applier never inspects element kinds.

pub mod memory;

use crate::color::HoverStyle;
use crate::error::Result;

pub use memory::{MemoryCollection, MemoryDocument, MemoryElement, MemoryNode};

/// Resolves target collections
pub trait Document {
    /// Collection type returned by a lookup
    type Collection: NodeCollection;

    /// Collection of elements carrying every class in `class_names`
    ///
    /// An empty match is not an error. Bindings that can reject a selector
    /// report it as `ThemeError::TargetResolution`; the in-memory and DOM
    /// bindings accept any class list.
    fn elements_by_class(&self, class_names: &str) -> Result<Self::Collection>;
}

/// A resolved set of nodes
pub trait NodeCollection {
    /// Handle to a stylable element
    type Element: ThemeElement;

    /// Stylable elements currently in the collection, in document order
    fn elements(&self) -> Vec<Self::Element>;

    /// Number of nodes, stylable or not
    fn node_count(&self) -> usize;
}

/// An element accepting inline styles and hover handlers
pub trait ThemeElement {
    /// Set an inline style property
    fn set_style(&self, property: &str, value: &str) -> Result<()>;

    /// Install the pointer enter/leave pair, replacing any pair bound earlier
    fn bind_hover(&self, hover: &HoverStyle) -> Result<()>;

    /// Remove the pair installed by `bind_hover`, returning whether one existed
    fn unbind_hover(&self) -> Result<bool>;
}
