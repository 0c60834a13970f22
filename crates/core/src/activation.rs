//! Describe what opened a menu.
//!
//! Every callback of a menu, at any nesting depth, receives the same
//! [`Activation`]: the element the menu was requested on, the application
//! data bound to it, and the [`Origin`] of the request.
use crate::Point;

/// An opaque handle to the element a menu was triggered on.
///
/// Hosts choose the numbering; the menu only hands it back to callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Target(pub u64);

/// A pointer press that requested a context menu.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// The pointer position, in page coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Creates a [`PointerEvent`] at the given page coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

/// The calling convention of a trigger handler.
///
/// Chosen once when a handler is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contract {
    /// Callbacks receive the originating [`PointerEvent`].
    #[default]
    Modern,

    /// Callbacks receive the positional index of the triggering element
    /// within its collection, as older event models did.
    Legacy,
}

/// The second argument every menu callback sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Origin {
    /// The event that requested the menu.
    Event(PointerEvent),

    /// The index of the triggering element, under [`Contract::Legacy`].
    Index(usize),
}

/// A raw request to open a menu, as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger<D> {
    /// The element the menu was requested on.
    pub target: Target,

    /// The pointer event that requested the menu.
    pub event: PointerEvent,

    /// The application data bound to the element.
    pub data: D,

    /// The index of the element within its collection, if known.
    pub index: Option<usize>,
}

impl<D> Trigger<D> {
    /// Creates a [`Trigger`] without an index.
    pub fn new(target: Target, event: PointerEvent, data: D) -> Self {
        Self {
            target,
            event,
            data,
            index: None,
        }
    }

    /// Sets the index of the triggering element.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Everything a menu knows about the request that opened it.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation<D> {
    target: Target,
    data: D,
    event: PointerEvent,
    origin: Origin,
}

impl<D> Activation<D> {
    /// Builds the [`Activation`] of a [`Trigger`] under the given [`Contract`].
    pub fn new(contract: Contract, trigger: Trigger<D>) -> Self {
        let Trigger {
            target,
            event,
            data,
            index,
        } = trigger;

        let origin = match contract {
            Contract::Modern => Origin::Event(event),
            Contract::Legacy => Origin::Index(index.unwrap_or_else(|| {
                log::warn!("Legacy trigger on {target:?} without an index, using 0");
                0
            })),
        };

        Self {
            target,
            data,
            event,
            origin,
        }
    }

    /// Returns the element the menu was triggered on.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Returns the application data bound to the triggering element.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Returns the pointer event that requested the menu.
    ///
    /// Available under both contracts; positioning always relies on it.
    pub fn event(&self) -> PointerEvent {
        self.event
    }

    /// Returns what callbacks receive as their second argument.
    pub fn origin(&self) -> Origin {
        self.origin
    }
}
