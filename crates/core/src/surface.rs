//! Drive the host that draws popups.
use crate::event::Listener;
use crate::menu::Node;
use crate::position::Property;
use crate::Size;

/// The rendering backend of a popup menu.
///
/// A [`Surface`] owns at most one popup container at a time. It can be
/// backed by a DOM, a virtual DOM, a native toolkit or a headless recorder;
/// the menu logic only ever talks to it through this trait.
///
/// Surfaces never store callbacks. Events they were asked to listen for are
/// handed back to the controller that owns the open menu, and clicks on
/// rendered [`Node`]s are reported by their id.
pub trait Surface {
    /// Creates the (still hidden) popup container with the given theme class.
    fn create_popup_container(&mut self, theme: &str);

    /// Removes the popup container and everything rendered into it.
    fn remove_popup_container(&mut self);

    /// Renders the resolved menu into the popup container.
    fn render_tree(&mut self, nodes: &[Node]);

    /// Sets a style property of the container, or clears it with `None`.
    fn set_container_style(&mut self, property: Property, value: Option<f32>);

    /// Makes the popup container visible.
    fn show_container(&mut self);

    /// Hides the popup container.
    fn hide_container(&mut self);

    /// Starts forwarding the given [`Listener`] events.
    fn add_global_listener(&mut self, listener: Listener);

    /// Stops forwarding the given [`Listener`] events.
    fn remove_global_listener(&mut self, listener: Listener);

    /// Returns the size of the visible viewport.
    fn viewport_size(&self) -> Size;
}
