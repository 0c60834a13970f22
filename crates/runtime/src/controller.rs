//! Keep at most one popup menu open.
use crate::core::{Listener, NodeId, Status, Surface};

use std::fmt;

/// An open popup menu.
///
/// Holds what the [`Controller`] needs to tear the menu down: the close
/// callback, and the dispatch table of the rendered entries once bound.
pub struct Session {
    generation: u64,
    on_close: Box<dyn FnOnce()>,
    dispatch: Option<Box<dyn Fn(NodeId) -> bool>>,
}

impl Session {
    /// Creates a [`Session`] running `on_close` when it ends.
    pub fn new(on_close: impl FnOnce() + 'static) -> Self {
        Self {
            generation: 0,
            on_close: Box::new(on_close),
            dispatch: None,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("generation", &self.generation)
            .field("dispatch", &self.dispatch.is_some())
            .finish_non_exhaustive()
    }
}

/// The owner of the open popup menu.
///
/// Opening a menu always closes the previous one first, so no more than one
/// [`Session`] is ever alive. Every session ends exactly once, running its
/// close callback.
///
/// A host keeps one [`Controller`] per [`Surface`] and forwards to it the
/// events the surface was asked to listen for, through [`handle`], and the
/// clicks on rendered entries, through [`select`].
///
/// Each session gets a new generation. Entries must be rendered with ids of
/// that generation (see [`generation`]); clicks carrying ids of an earlier
/// menu are ignored.
///
/// Dropping a [`Controller`] with a menu open still runs the close callback,
/// but it cannot reach the [`Surface`]: call [`close`] first to remove the
/// popup container and its listeners.
///
/// [`handle`]: Self::handle
/// [`select`]: Self::select
/// [`generation`]: Self::generation
/// [`close`]: Self::close
#[derive(Default)]
pub struct Controller {
    session: Option<Session>,
    generation: u64,
}

impl Controller {
    /// Creates an idle [`Controller`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a menu is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the generation of the most recently opened [`Session`].
    ///
    /// `0` until the first menu opens.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Opens a [`Session`], closing the current one first.
    ///
    /// `render` draws the popup container; the dismissal listeners are bound
    /// right after it.
    pub fn open<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        mut session: Session,
        render: impl FnOnce(&mut S),
    ) {
        self.close(surface);

        self.generation = self.generation.wrapping_add(1);
        session.generation = self.generation;

        log::debug!("Opening popup menu (generation {})", self.generation);
        self.session = Some(session);

        render(surface);

        for listener in Listener::ALL {
            surface.add_global_listener(listener);
        }
    }

    /// Binds the dispatch table of the open menu.
    ///
    /// `dispatch` runs the action of an entry and returns whether one ran.
    pub fn bind(&mut self, dispatch: impl Fn(NodeId) -> bool + 'static) {
        match &mut self.session {
            Some(session) => session.dispatch = Some(Box::new(dispatch)),
            None => log::warn!("Ignoring dispatch table bound while no menu is open"),
        }
    }

    /// Closes the open menu, if any.
    ///
    /// Removes the popup container, unbinds every listener and runs the close
    /// callback of the session. Does nothing when idle.
    pub fn close<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let Some(session) = self.session.take() else {
            return;
        };

        log::debug!("Closing popup menu (generation {})", session.generation);

        surface.remove_popup_container();

        for listener in Listener::ALL {
            surface.remove_global_listener(listener);
        }

        (session.on_close)();
    }

    /// Handles an event of a bound [`Listener`].
    ///
    /// Any of them closes the open menu. A context menu requested on the
    /// popup itself is also captured, so the host suppresses the native one.
    pub fn handle<S: Surface + ?Sized>(&mut self, surface: &mut S, listener: Listener) -> Status {
        if !self.is_open() {
            return Status::Ignored;
        }

        self.close(surface);

        match listener {
            Listener::ContextMenu => Status::Captured,
            Listener::PointerDown | Listener::Click => Status::Ignored,
        }
    }

    /// Handles a click on a rendered entry.
    ///
    /// If the entry dispatches, its action runs and the menu closes.
    /// Clicks on dividers, headers, disabled entries and entries of an
    /// earlier menu are ignored.
    pub fn select<S: Surface + ?Sized>(&mut self, surface: &mut S, id: NodeId) -> Status {
        let Some(session) = &self.session else {
            return Status::Ignored;
        };

        if id.generation() != session.generation {
            log::debug!(
                "Ignoring stale popup menu entry {} (generation {}, open {})",
                id.index(),
                id.generation(),
                session.generation
            );
            return Status::Ignored;
        }

        let dispatched = session
            .dispatch
            .as_ref()
            .is_some_and(|dispatch| dispatch(id));

        if !dispatched {
            return Status::Ignored;
        }

        log::debug!("Dispatched popup menu entry {}", id.index());
        self.close(surface);

        Status::Captured
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            log::warn!(
                "Popup menu controller dropped with a menu open (generation {})",
                session.generation
            );

            (session.on_close)();
        }
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("session", &self.session)
            .field("generation", &self.generation)
            .finish()
    }
}
