//! In-memory document
//!
//! A minimal node tree with class lookup, inline styles and simulated pointer
//! events. Collections are live: they are filtered again on every access.

use super::{Document, NodeCollection, ThemeElement};
use crate::color::HoverStyle;
use crate::constants::style::BACKGROUND_PROPERTY;
use crate::error::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementState {
    tag: String,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    hover: Option<HoverStyle>,
}

/// Shared handle to a stylable element
#[derive(Debug, Clone)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    /// Create an element with a tag name and a whitespace-separated class list
    pub fn new(tag: &str, class_list: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                tag: tag.to_string(),
                classes: class_list.split_whitespace().map(str::to_string).collect(),
                ..ElementState::default()
            })),
        }
    }

    /// Tag name
    pub fn tag(&self) -> String {
        self.state.borrow().tag.clone()
    }

    /// Current inline value of `property`
    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    /// Number of hover listeners attached (0 or 2)
    pub fn listener_count(&self) -> usize {
        if self.state.borrow().hover.is_some() {
            2
        } else {
            0
        }
    }

    /// Simulate the pointer entering the element
    pub fn pointer_enter(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(enter) = state.hover.as_ref().map(|hover| hover.enter.clone()) {
            state.styles.insert(BACKGROUND_PROPERTY.to_string(), enter);
        }
    }

    /// Simulate the pointer leaving the element
    pub fn pointer_leave(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(leave) = state.hover.as_ref().map(|hover| hover.leave.clone()) {
            state.styles.insert(BACKGROUND_PROPERTY.to_string(), leave);
        }
    }

    /// Add a class to the element
    pub fn add_class(&self, class_name: &str) {
        self.state.borrow_mut().classes.push(class_name.to_string());
    }

    fn has_classes(&self, wanted: &[String]) -> bool {
        let state = self.state.borrow();
        !wanted.is_empty() && wanted.iter().all(|class| state.classes.contains(class))
    }
}

impl ThemeElement for MemoryElement {
    fn set_style(&self, property: &str, value: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn bind_hover(&self, hover: &HoverStyle) -> Result<()> {
        self.state.borrow_mut().hover = Some(hover.clone());
        Ok(())
    }

    fn unbind_hover(&self) -> Result<bool> {
        Ok(self.state.borrow_mut().hover.take().is_some())
    }
}

/// A node in the in-memory document
#[derive(Debug, Clone)]
pub enum MemoryNode {
    /// Element that accepts inline styles
    Styled(MemoryElement),
    /// Element without an inline style surface, such as an SVG shape
    Unstyled { tag: String, classes: Vec<String> },
}

impl MemoryNode {
    /// Create an unstyled node
    pub fn unstyled(tag: &str, class_list: &str) -> Self {
        MemoryNode::Unstyled {
            tag: tag.to_string(),
            classes: class_list.split_whitespace().map(str::to_string).collect(),
        }
    }

    fn has_classes(&self, wanted: &[String]) -> bool {
        match self {
            MemoryNode::Styled(element) => element.has_classes(wanted),
            MemoryNode::Unstyled { classes, .. } => {
                !wanted.is_empty() && wanted.iter().all(|class| classes.contains(class))
            }
        }
    }
}

/// Document holding a flat list of nodes
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Rc<RefCell<Vec<MemoryNode>>>,
}

impl MemoryDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stylable element and return its handle
    pub fn add_element(&self, tag: &str, class_list: &str) -> MemoryElement {
        let element = MemoryElement::new(tag, class_list);
        self.nodes
            .borrow_mut()
            .push(MemoryNode::Styled(element.clone()));
        element
    }

    /// Append any node
    pub fn add_node(&self, node: MemoryNode) {
        self.nodes.borrow_mut().push(node);
    }

    /// Remove every node
    pub fn clear(&self) {
        self.nodes.borrow_mut().clear();
    }
}

impl Document for MemoryDocument {
    type Collection = MemoryCollection;

    fn elements_by_class(&self, class_names: &str) -> Result<MemoryCollection> {
        Ok(MemoryCollection {
            nodes: Rc::clone(&self.nodes),
            classes: class_names.split_whitespace().map(str::to_string).collect(),
        })
    }
}

/// Live view over the nodes matching a class list
#[derive(Debug, Clone)]
pub struct MemoryCollection {
    nodes: Rc<RefCell<Vec<MemoryNode>>>,
    classes: Vec<String>,
}

impl NodeCollection for MemoryCollection {
    type Element = MemoryElement;

    fn elements(&self) -> Vec<MemoryElement> {
        self.nodes
            .borrow()
            .iter()
            .filter(|node| node.has_classes(&self.classes))
            .filter_map(|node| match node {
                MemoryNode::Styled(element) => Some(element.clone()),
                MemoryNode::Unstyled { .. } => None,
            })
            .collect()
    }

    fn node_count(&self) -> usize {
        self.nodes
            .borrow()
            .iter()
            .filter(|node| node.has_classes(&self.classes))
            .count()
    }
}
