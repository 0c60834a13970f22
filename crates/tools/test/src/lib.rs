//! Test your `icy_popup` menus in headless mode.
//!
//! [`Headless`] is a [`Surface`] that draws nothing. It keeps the state a
//! real backend would keep (the popup container, its styles and the
//! listeners it was asked to bind) and records every call it receives, so
//! tests can assert on both the end state and the order of operations.
//!
//! ```
//! use icy_popup_core::{Size, Surface};
//! use icy_popup_test::{Headless, Op};
//!
//! let mut surface = Headless::new(Size::new(800.0, 600.0));
//!
//! surface.create_popup_container("icy-popup-theme");
//! surface.show_container();
//!
//! assert!(surface.is_shown());
//! assert_eq!(surface.ops().last(), Some(&Op::Show));
//! ```
use icy_popup_core::{Listener, Node, NodeId, Property, Size, Surface};

use rustc_hash::{FxHashMap, FxHashSet};

/// A call received by a [`Headless`] surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// A container was created with the given theme.
    Create(String),
    /// The container was removed.
    Remove,
    /// A tree with the given number of top-level nodes was rendered.
    Render(usize),
    /// A container style was set or cleared.
    Style(Property, Option<f32>),
    /// The container was shown.
    Show,
    /// The container was hidden.
    Hide,
    /// A listener was bound.
    Listen(Listener),
    /// A listener was unbound.
    Unlisten(Listener),
}

/// The popup container of a [`Headless`] surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    /// The theme class of the container.
    pub theme: String,
    /// The rendered tree.
    pub nodes: Vec<Node>,
    /// The style properties currently set.
    pub styles: FxHashMap<Property, f32>,
    /// Whether the container is visible.
    pub shown: bool,
}

/// A [`Surface`] that records instead of drawing.
#[derive(Debug, Clone)]
pub struct Headless {
    viewport: Size,
    container: Option<Container>,
    listeners: FxHashSet<Listener>,
    ops: Vec<Op>,
}

impl Headless {
    /// Creates a [`Headless`] surface with the given viewport.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            container: None,
            listeners: FxHashSet::default(),
            ops: Vec::new(),
        }
    }

    /// Resizes the viewport.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns every call received so far, in order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Forgets the recorded calls, keeping the current state.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Returns the popup container, if one exists.
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// Returns whether a popup container exists and is visible.
    pub fn is_shown(&self) -> bool {
        self.container.as_ref().is_some_and(|container| container.shown)
    }

    /// Returns whether the given listener is currently bound.
    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    /// Returns the number of listeners currently bound.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns the value of a container style property, if set.
    pub fn style(&self, property: Property) -> Option<f32> {
        self.container
            .as_ref()
            .and_then(|container| container.styles.get(&property).copied())
    }

    /// Finds the first rendered node with the given title.
    pub fn find(&self, title: &str) -> Result<NodeId, Error> {
        let container = self.container.as_ref().ok_or(Error::NoContainer)?;

        container
            .nodes
            .iter()
            .find_map(|node| node.find(title))
            .map(|node| node.id)
            .ok_or_else(|| Error::NotFound(title.to_owned()))
    }
}

impl Surface for Headless {
    fn create_popup_container(&mut self, theme: &str) {
        self.ops.push(Op::Create(theme.to_owned()));
        self.container = Some(Container {
            theme: theme.to_owned(),
            ..Container::default()
        });
    }

    fn remove_popup_container(&mut self) {
        self.ops.push(Op::Remove);
        self.container = None;
    }

    fn render_tree(&mut self, nodes: &[Node]) {
        self.ops.push(Op::Render(nodes.len()));

        if let Some(container) = &mut self.container {
            container.nodes = nodes.to_vec();
        }
    }

    fn set_container_style(&mut self, property: Property, value: Option<f32>) {
        self.ops.push(Op::Style(property, value));

        if let Some(container) = &mut self.container {
            let _ = match value {
                Some(value) => container.styles.insert(property, value),
                None => container.styles.remove(&property),
            };
        }
    }

    fn show_container(&mut self) {
        self.ops.push(Op::Show);

        if let Some(container) = &mut self.container {
            container.shown = true;
        }
    }

    fn hide_container(&mut self) {
        self.ops.push(Op::Hide);

        if let Some(container) = &mut self.container {
            container.shown = false;
        }
    }

    fn add_global_listener(&mut self, listener: Listener) {
        self.ops.push(Op::Listen(listener));
        let _ = self.listeners.insert(listener);
    }

    fn remove_global_listener(&mut self, listener: Listener) {
        self.ops.push(Op::Unlisten(listener));
        let _ = self.listeners.remove(&listener);
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

/// A headless lookup error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// No popup container exists.
    #[error("no popup container is open")]
    NoContainer,
    /// No rendered node has the given title.
    #[error("no menu entry titled {0:?}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_are_set_and_cleared() {
        let mut surface = Headless::new(Size::new(800.0, 600.0));
        surface.create_popup_container("theme");

        surface.set_container_style(Property::Left, Some(8.0));
        assert_eq!(surface.style(Property::Left), Some(8.0));

        surface.set_container_style(Property::Left, None);
        assert_eq!(surface.style(Property::Left), None);
    }

    #[test]
    fn find_without_container_fails() {
        let surface = Headless::new(Size::new(800.0, 600.0));

        assert!(matches!(surface.find("Open"), Err(Error::NoContainer)));
    }

    #[test]
    fn listeners_are_a_set() {
        let mut surface = Headless::new(Size::new(800.0, 600.0));

        surface.add_global_listener(Listener::Click);
        surface.add_global_listener(Listener::Click);
        assert_eq!(surface.listener_count(), 1);

        surface.remove_global_listener(Listener::Click);
        assert!(!surface.has_listener(Listener::Click));
    }
}
