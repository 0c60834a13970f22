//! Contextual popup menus with dynamic entries and nested submenus.
//!
//! `icy_popup` turns a declarative menu description into a popup placed next
//! to the pointer. Every field of an entry may be a literal or a closure of
//! the element the menu was requested on, so a single description serves
//! every element of a collection:
//!
//! ```
//! use icy_popup::menu::{self, Item};
//! use icy_popup::{Activation, Config, Controller, PointerEvent, Size, Target, Trigger, Value};
//! use icy_popup_test::Headless;
//!
//! let files = icy_popup::context_menu(
//!     vec![
//!         Item::new(Value::computed(|activation: &Activation<String>| {
//!             activation.data().clone()
//!         })),
//!         menu::separator!(),
//!         menu::item!("Open", |activation| println!("open {}", activation.data())),
//!         Item::new("Delete")
//!             .disabled(Value::computed(|activation: &Activation<String>| {
//!                 activation.data().ends_with(".lock")
//!             }))
//!             .action(|activation| println!("delete {}", activation.data())),
//!     ],
//!     Config::new().theme("files-menu"),
//! );
//!
//! let mut controller = Controller::new();
//! let mut surface = Headless::new(Size::new(800.0, 600.0));
//!
//! let _ = files.trigger(
//!     &mut controller,
//!     &mut surface,
//!     Trigger::new(Target(3), PointerEvent::new(120.0, 80.0), "notes.txt".to_owned()),
//! );
//! assert!(controller.is_open());
//!
//! // The host reports clicks on rendered entries back by id
//! let open = surface.find("Open").expect("rendered entry");
//! let _ = controller.select(&mut surface, open);
//! assert!(!controller.is_open());
//! ```
//!
//! Rendering is left to a [`Surface`]. A host implements it for its own
//! toolkit and forwards the events it was asked to listen for to the
//! [`Controller`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_popup_core as core;
pub use icy_popup_runtime as runtime;

pub use crate::core::menu;
pub use crate::core::settings;

pub use crate::core::{
    Activation, Anchor, Contract, Item, Listener, Menu, Node, NodeId, Origin, Placement, Point,
    PointerEvent, Property, Settings, Size, Status, Surface, Target, Trigger, Value,
};
pub use runtime::{Command, Config, ContextMenu, Controller, Outcome, Session, Verdict};

/// Creates a [`ContextMenu`] from a menu description and its [`Config`].
///
/// A lone closure may be given as the configuration; it becomes the
/// `on_open` callback.
pub fn context_menu<D: 'static>(
    menu: impl Into<Menu<D>>,
    config: impl Into<Config<D>>,
) -> ContextMenu<D> {
    ContextMenu::new(menu, config)
}

/// Closes the open menu of the [`Controller`], if any.
pub fn close<S: Surface + ?Sized>(controller: &mut Controller, surface: &mut S) {
    Command::Close.run(controller, surface);
}
