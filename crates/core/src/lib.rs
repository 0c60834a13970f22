//! The core library of [icy_popup].
//!
//! This library holds the basic types describing a popup menu: how entries
//! are declared, how they resolve against the request that opened them, and
//! where the popup goes. It knows nothing about how menus are drawn; see
//! [`Surface`] for the seam a rendering backend implements.
//!
//! [icy_popup]: https://docs.rs/icy_popup
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod activation;
pub mod event;
pub mod menu;
pub mod position;
pub mod settings;
pub mod surface;
pub mod value;

mod point;
mod size;

pub use activation::{Activation, Contract, Origin, PointerEvent, Target, Trigger};
pub use event::{Listener, Status};
pub use menu::{Item, Menu, Node, NodeId};
pub use point::Point;
pub use position::{Anchor, Placement, Property};
pub use settings::Settings;
pub use size::Size;
pub use surface::Surface;
pub use value::{Factory, Value, to_factory};
