//! Popup menu model.
//!
//! A menu is described by a list of [`Item`]s. Every field of an item may be
//! a literal or a closure of the [`Activation`] that opened the menu, so the
//! same description can produce a different menu on every open:
//!
//! ```
//! use icy_popup_core::menu::{self, Item, Menu};
//! use icy_popup_core::{Activation, Value};
//!
//! let menu: Menu<String> = Menu::new(vec![
//!     Item::new("Node actions"),
//!     menu::item!("Rename", |activation| println!("rename {}", activation.data())),
//!     Item::new("Delete")
//!         .disabled(Value::computed(|activation: &Activation<String>| {
//!             activation.data() == "root"
//!         }))
//!         .action(|activation| println!("delete {}", activation.data())),
//!     menu::separator!(),
//!     menu::submenu!("Color", [
//!         menu::item!("Red", |_| {}),
//!         menu::item!("Blue", |_| {}),
//!     ]),
//! ]);
//! # let _ = menu;
//! ```
//!
//! Descriptions are turned into renderable [`Node`]s by [`resolve`].
mod node;
mod resolve;

pub use node::{Classes, Kind, Node, NodeId};
pub use resolve::{Resolved, resolve, resolve_in};

use crate::{Activation, Value};

use std::fmt;
use std::rc::Rc;

/// The callback of an actionable [`Item`].
pub type Action<D> = Rc<dyn Fn(&Activation<D>)>;

/// The children of an [`Item`].
///
/// `None` marks an item without a submenu. An empty list still opens an
/// (empty) submenu.
pub type Children<D> = Option<Vec<Item<D>>>;

/// The description of a single menu entry.
///
/// What an item renders as is decided every time the menu is resolved:
/// a divider, a parent of a submenu, an actionable leaf, or a plain header.
pub struct Item<D> {
    title: Value<D, String>,
    action: Option<Action<D>>,
    children: Value<D, Children<D>>,
    divider: Value<D, bool>,
    disabled: Value<D, bool>,
    class: Option<Value<D, String>>,
}

impl<D> Item<D> {
    /// Creates an [`Item`] with the given title.
    ///
    /// Without an action or children it renders as a header.
    pub fn new(title: impl Into<Value<D, String>>) -> Self {
        Self {
            title: title.into(),
            action: None,
            children: Value::Literal(None),
            divider: Value::Literal(false),
            disabled: Value::Literal(false),
            class: None,
        }
    }

    /// Creates a divider [`Item`].
    pub fn separator() -> Self {
        Self::new(String::new()).divider(true)
    }

    /// Sets the action run when the [`Item`] is clicked.
    #[must_use]
    pub fn action(mut self, action: impl Fn(&Activation<D>) + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    /// Sets the children of the [`Item`], turning it into a submenu parent.
    #[must_use]
    pub fn children(mut self, children: impl Into<Value<D, Children<D>>>) -> Self {
        self.children = children.into();
        self
    }

    /// Sets whether the [`Item`] renders as a divider.
    #[must_use]
    pub fn divider(mut self, divider: impl Into<Value<D, bool>>) -> Self {
        self.divider = divider.into();
        self
    }

    /// Sets whether the [`Item`] is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: impl Into<Value<D, bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    /// Sets an extra class name for styling the [`Item`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Value<D, String>>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Returns whether the [`Item`] carries an action.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

impl<D> Clone for Item<D> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            action: self.action.clone(),
            children: self.children.clone(),
            divider: self.divider.clone(),
            disabled: self.disabled.clone(),
            class: self.class.clone(),
        }
    }
}

impl<D> fmt::Debug for Item<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("title", &self.title)
            .field("action", &self.action.is_some())
            .field("children", &self.children)
            .field("divider", &self.divider)
            .field("disabled", &self.disabled)
            .field("class", &self.class)
            .finish()
    }
}

impl<D> From<Vec<Item<D>>> for Value<D, Children<D>> {
    fn from(children: Vec<Item<D>>) -> Self {
        Value::Literal(Some(children))
    }
}

/// The root list of a menu.
pub struct Menu<D>(Value<D, Vec<Item<D>>>);

impl<D> Menu<D> {
    /// Creates a [`Menu`] with a fixed list of items.
    pub fn new(items: Vec<Item<D>>) -> Self {
        Self(Value::Literal(items))
    }

    /// Creates a [`Menu`] whose items are computed on every open.
    pub fn computed(items: impl Fn(&Activation<D>) -> Vec<Item<D>> + 'static) -> Self {
        Self(Value::computed(items))
    }

    /// Resolves the top-level items for the given [`Activation`].
    pub fn items(&self, activation: &Activation<D>) -> Vec<Item<D>> {
        self.0.resolve(activation)
    }
}

impl<D> Clone for Menu<D> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<D> fmt::Debug for Menu<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Menu").field(&self.0).finish()
    }
}

impl<D> From<Vec<Item<D>>> for Menu<D> {
    fn from(items: Vec<Item<D>>) -> Self {
        Self::new(items)
    }
}

impl<D> From<Value<D, Vec<Item<D>>>> for Menu<D> {
    fn from(items: Value<D, Vec<Item<D>>>) -> Self {
        Self(items)
    }
}

// ============================================================================
// Macros for terser menu descriptions
// ============================================================================

/// Creates an actionable menu [`Item`].
///
/// # Example
/// ```
/// use icy_popup_core::menu::{self, Item};
///
/// let open: Item<()> = menu::item!("Open", |_| println!("open"));
/// # let _ = open;
/// ```
#[macro_export]
macro_rules! menu_item {
    ($title:expr, $action:expr $(,)?) => {
        $crate::menu::Item::new($title).action($action)
    };
}

/// Creates a divider [`Item`].
///
/// # Example
/// ```
/// use icy_popup_core::menu::{self, Item};
///
/// let divider: Item<()> = menu::separator!();
/// # let _ = divider;
/// ```
#[macro_export]
macro_rules! menu_separator {
    () => {
        $crate::menu::Item::separator()
    };
}

/// Creates a submenu parent [`Item`] with fixed children.
///
/// # Example
/// ```
/// use icy_popup_core::menu::{self, Item};
///
/// let sort: Item<()> = menu::submenu!("Sort by", [
///     menu::item!("Name", |_| {}),
///     menu::item!("Size", |_| {}),
/// ]);
/// # let _ = sort;
/// ```
#[macro_export]
macro_rules! menu_submenu {
    ($title:expr, [$($child:expr),* $(,)?] $(,)?) => {
        $crate::menu::Item::new($title).children(vec![$($child),*])
    };
}

// Re-export macros under the menu module: menu::item!(), menu::submenu!(), etc.
#[doc(inline)]
pub use crate::menu_item as item;
#[doc(inline)]
pub use crate::menu_separator as separator;
#[doc(inline)]
pub use crate::menu_submenu as submenu;
