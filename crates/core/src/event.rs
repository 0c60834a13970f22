//! Handle the events a popup menu reacts to.

/// An event the popup listens for while a menu is open.
///
/// Hosts register these with their input plumbing when asked to by a
/// [`Surface`](crate::Surface) and forward them to the controller that owns
/// the open menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// A pointer button was pressed anywhere outside the popup.
    PointerDown,

    /// A click landed anywhere outside the popup.
    Click,

    /// A context menu was requested on the popup itself.
    ///
    /// Unlike the other listeners, this one is scoped to the popup
    /// container rather than the whole document.
    ContextMenu,
}

impl Listener {
    /// Every listener bound while a menu is open, in registration order.
    pub const ALL: [Listener; 3] = [Listener::PointerDown, Listener::Click, Listener::ContextMenu];

    /// Returns the conventional DOM event name of the [`Listener`].
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Listener::PointerDown => "mousedown",
            Listener::Click => "click",
            Listener::ContextMenu => "contextmenu",
        }
    }
}

/// The status of an event after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The event was **NOT** handled; the host keeps its default behavior.
    #[default]
    Ignored,

    /// The event was handled. The host should prevent its default action
    /// and stop it from bubbling.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use icy_popup_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    #[must_use]
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }

    /// Returns whether the event was captured.
    #[must_use]
    pub fn is_captured(self) -> bool {
        self == Status::Captured
    }
}
