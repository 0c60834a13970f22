//! The lifecycle of `icy_popup` menus.
//!
//! A [`Controller`] owns the open menu of a surface and a [`ContextMenu`]
//! opens menus through it. Everything else a menu is made of lives in
//! [`core`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_popup_core as core;

pub mod context_menu;
pub mod controller;

mod error;

pub use context_menu::{Command, Config, ContextMenu, Outcome, Verdict};
pub use controller::{Controller, Session};
pub use error::Error;
