//! Attach popup menus to trigger events.
//!
//! A [`ContextMenu`] pairs a [`Menu`] description with its [`Config`]. The
//! host calls [`ContextMenu::trigger`] every time the user requests a menu
//! on an element; the menu is resolved, rendered and placed on the given
//! [`Surface`], replacing whatever menu was open before.
//!
//! ```
//! use icy_popup_runtime::core::menu::{self, Menu};
//! use icy_popup_runtime::core::{Activation, PointerEvent, Size, Target, Trigger};
//! use icy_popup_runtime::{Config, ContextMenu, Controller};
//! use icy_popup_test::Headless;
//!
//! let menu = ContextMenu::new(
//!     Menu::new(vec![menu::item!("Remove", |activation: &Activation<u32>| {
//!         println!("removing {}", activation.data());
//!     })]),
//!     Config::new().on_close(|_| println!("closed")),
//! );
//!
//! let mut controller = Controller::new();
//! let mut surface = Headless::new(Size::new(800.0, 600.0));
//!
//! let outcome = menu.trigger(
//!     &mut controller,
//!     &mut surface,
//!     Trigger::new(Target(1), PointerEvent::new(10.0, 10.0), 42),
//! );
//!
//! assert!(outcome.is_opened());
//! assert!(surface.is_shown());
//! ```
use crate::Error;
use crate::controller::{Controller, Session};
use crate::core::menu::{self, Menu};
use crate::core::position::Placement;
use crate::core::{
    Activation, Anchor, Contract, Factory, Settings, Status, Surface, Trigger, Value, to_factory,
};

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Whether an opening menu may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// Show the menu.
    #[default]
    Proceed,

    /// Keep the menu hidden.
    Veto,
}

impl From<()> for Verdict {
    fn from((): ()) -> Self {
        Verdict::Proceed
    }
}

impl From<bool> for Verdict {
    fn from(proceed: bool) -> Self {
        if proceed {
            Verdict::Proceed
        } else {
            Verdict::Veto
        }
    }
}

/// A callback receiving the [`Activation`] of a menu.
pub type Callback<D> = Rc<dyn Fn(&Activation<D>)>;

/// The configuration of a [`ContextMenu`].
///
/// A lone closure converts into a [`Config`] with only
/// [`on_open`](Self::on_open) set.
pub struct Config<D> {
    on_open: Option<Factory<D, Verdict>>,
    on_close: Option<Callback<D>>,
    position: Option<Value<D, Option<Anchor>>>,
    theme: Option<Value<D, String>>,
}

impl<D: 'static> Config<D> {
    /// Creates an empty [`Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback run after the menu is rendered, before it is shown.
    ///
    /// Returning `false` vetoes showing the menu; returning `()` or `true`
    /// lets it proceed.
    #[must_use]
    pub fn on_open<R: Into<Verdict>>(
        mut self,
        on_open: impl Fn(&Activation<D>) -> R + 'static,
    ) -> Self {
        self.on_open = Some(Rc::new(move |activation: &Activation<D>| -> Verdict {
            on_open(activation).into()
        }));
        self
    }

    /// Sets the callback run once when the menu closes, however it closes.
    #[must_use]
    pub fn on_close(mut self, on_close: impl Fn(&Activation<D>) + 'static) -> Self {
        self.on_close = Some(Rc::new(on_close));
        self
    }

    /// Sets where the menu is placed instead of the pointer position.
    ///
    /// A computed position may return `None` to fall back to the pointer.
    #[must_use]
    pub fn position(mut self, position: impl Into<Value<D, Option<Anchor>>>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Sets the theme class of the popup container.
    #[must_use]
    pub fn theme(mut self, theme: impl Into<Value<D, String>>) -> Self {
        self.theme = Some(theme.into());
        self
    }
}

impl<D> Default for Config<D> {
    fn default() -> Self {
        Self {
            on_open: None,
            on_close: None,
            position: None,
            theme: None,
        }
    }
}

impl<D, F, R> From<F> for Config<D>
where
    D: 'static,
    F: Fn(&Activation<D>) -> R + 'static,
    R: Into<Verdict>,
{
    fn from(on_open: F) -> Self {
        Config::new().on_open(on_open)
    }
}

impl<D> fmt::Debug for Config<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("position", &self.position)
            .field("theme", &self.theme)
            .finish()
    }
}

/// What happened when a [`ContextMenu`] was triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The menu is shown at the given [`Placement`].
    Opened(Placement),

    /// `on_open` vetoed the menu. It stays open but hidden until dismissed.
    Vetoed,
}

impl Outcome {
    /// Returns whether the menu is shown.
    pub fn is_opened(&self) -> bool {
        matches!(self, Outcome::Opened(_))
    }

    /// Returns the [`Status`] of the trigger event.
    ///
    /// A shown menu captures the event, so the host suppresses its native
    /// context menu. A vetoed one leaves it alone.
    pub fn status(&self) -> Status {
        match self {
            Outcome::Opened(_) => Status::Captured,
            Outcome::Vetoed => Status::Ignored,
        }
    }
}

/// A popup menu ready to be attached to trigger events.
pub struct ContextMenu<D> {
    menu: Menu<D>,
    on_open: Option<Factory<D, Verdict>>,
    on_close: Option<Callback<D>>,
    position: Factory<D, Option<Anchor>>,
    theme: Factory<D, String>,
    contract: Contract,
    nudge: f32,
}

impl<D: 'static> ContextMenu<D> {
    /// Creates a [`ContextMenu`] with the default [`Settings`].
    pub fn new(menu: impl Into<Menu<D>>, config: impl Into<Config<D>>) -> Self {
        Self::with_settings(menu, config, Settings::default())
    }

    /// Creates a [`ContextMenu`] with the given [`Settings`].
    pub fn with_settings(
        menu: impl Into<Menu<D>>,
        config: impl Into<Config<D>>,
        settings: Settings,
    ) -> Self {
        let Config {
            on_open,
            on_close,
            position,
            theme,
        } = config.into();

        Self {
            menu: menu.into(),
            on_open,
            on_close,
            position: to_factory(position, None),
            theme: to_factory(theme, settings.theme),
            contract: Contract::default(),
            nudge: settings.nudge,
        }
    }

    /// Sets the calling [`Contract`] of the callbacks.
    #[must_use]
    pub fn contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    /// Opens the menu for the given [`Trigger`].
    ///
    /// Any open menu is closed first. The new menu is resolved against the
    /// trigger, rendered, and, unless `on_open` vetoes it, placed and shown.
    pub fn trigger<S: Surface + ?Sized>(
        &self,
        controller: &mut Controller,
        surface: &mut S,
        trigger: Trigger<D>,
    ) -> Outcome {
        let activation = Rc::new(Activation::new(self.contract, trigger));

        controller.close(surface);

        let theme = (self.theme)(&activation);

        let session = Session::new({
            let on_close = self.on_close.clone();
            let activation = Rc::clone(&activation);

            move || {
                if let Some(on_close) = on_close {
                    on_close(&activation);
                }
            }
        });

        controller.open(surface, session, |surface| {
            surface.create_popup_container(&theme);
        });

        let resolved = menu::resolve_in(&self.menu, &activation, controller.generation());
        surface.render_tree(resolved.nodes());

        controller.bind({
            let activation = Rc::clone(&activation);

            move |id| resolved.activate(id, &activation)
        });

        let verdict = self
            .on_open
            .as_ref()
            .map_or(Verdict::Proceed, |on_open| on_open(&activation));

        if verdict == Verdict::Veto {
            log::debug!("Popup menu on {:?} vetoed", activation.target());
            surface.hide_container();

            return Outcome::Vetoed;
        }

        let placement = Placement::compute(
            activation.event().position,
            (self.position)(&activation),
            surface.viewport_size(),
            self.nudge,
        );

        for (property, value) in placement.styles() {
            surface.set_container_style(property, value);
        }

        surface.show_container();

        Outcome::Opened(placement)
    }
}

impl<D> fmt::Debug for ContextMenu<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextMenu")
            .field("menu", &self.menu)
            .field("contract", &self.contract)
            .field("nudge", &self.nudge)
            .finish_non_exhaustive()
    }
}

/// A command a host can send to the popup menu by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Close the open menu, if any.
    Close,
}

impl Command {
    /// Runs the [`Command`].
    pub fn run<S: Surface + ?Sized>(self, controller: &mut Controller, surface: &mut S) {
        match self {
            Command::Close => controller.close(surface),
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "close" => Ok(Command::Close),
            _ => Err(Error::UnknownCommand(name.to_owned())),
        }
    }
}
