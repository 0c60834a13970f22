//! Place a popup next to the pointer without measuring it first.
//!
//! The popup is anchored from the edge of the viewport closest to the
//! pointer: a pointer in the right half anchors the popup by its right edge,
//! a pointer in the bottom half by its bottom edge. The popup therefore
//! always grows towards the center of the viewport.
use crate::{Point, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A caller-supplied position for the popup, in page coordinates.
///
/// Replaces the pointer position when computing a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anchor {
    /// Distance from the left edge of the page.
    pub left: f32,

    /// Distance from the top edge of the page.
    pub top: f32,
}

impl Anchor {
    /// Creates a new [`Anchor`].
    #[must_use]
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

impl<D> From<Anchor> for crate::Value<D, Option<Anchor>> {
    fn from(anchor: Anchor) -> Self {
        crate::Value::Literal(Some(anchor))
    }
}

/// A style property of the popup container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Offset from the left edge of the viewport.
    Left,
    /// Offset from the right edge of the viewport.
    Right,
    /// Offset from the top edge of the viewport.
    Top,
    /// Offset from the bottom edge of the viewport.
    Bottom,
}

impl Property {
    /// Returns the CSS name of the [`Property`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Property::Left => "left",
            Property::Right => "right",
            Property::Top => "top",
            Property::Bottom => "bottom",
        }
    }
}

/// The horizontal half of a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
    /// Offset of the popup's left edge from the viewport's left edge.
    Left(f32),
    /// Offset of the popup's right edge from the viewport's right edge.
    Right(f32),
}

/// The vertical half of a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertical {
    /// Offset of the popup's top edge from the viewport's top edge.
    Top(f32),
    /// Offset of the popup's bottom edge from the viewport's bottom edge.
    Bottom(f32),
}

/// Where a popup is anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The horizontal anchor.
    pub horizontal: Horizontal,
    /// The vertical anchor.
    pub vertical: Vertical,
}

impl Placement {
    /// Computes the [`Placement`] of a popup opened at `pointer`.
    ///
    /// Without an [`Anchor`] the popup is offset by `nudge` pixels towards
    /// the pointer, so the pointer ends up inside it.
    #[must_use]
    pub fn compute(pointer: Point, anchor: Option<Anchor>, viewport: Size, nudge: f32) -> Self {
        let (center_x, center_y) = viewport.center();

        let horizontal = if pointer.x > center_x {
            Horizontal::Right(anchor.map_or(viewport.width - pointer.x - nudge, |anchor| {
                viewport.width - anchor.left
            }))
        } else {
            Horizontal::Left(anchor.map_or(pointer.x - nudge, |anchor| anchor.left))
        };

        let vertical = if pointer.y > center_y {
            Vertical::Bottom(anchor.map_or(viewport.height - pointer.y - nudge, |anchor| {
                viewport.height - anchor.top
            }))
        } else {
            Vertical::Top(anchor.map_or(pointer.y - nudge, |anchor| anchor.top))
        };

        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the style updates applying the [`Placement`].
    ///
    /// Each anchored property is set and its opposite is cleared.
    #[must_use]
    pub fn styles(&self) -> [(Property, Option<f32>); 4] {
        let [left, right] = match self.horizontal {
            Horizontal::Left(value) => [(Property::Left, Some(value)), (Property::Right, None)],
            Horizontal::Right(value) => [(Property::Right, Some(value)), (Property::Left, None)],
        };

        let [top, bottom] = match self.vertical {
            Vertical::Top(value) => [(Property::Top, Some(value)), (Property::Bottom, None)],
            Vertical::Bottom(value) => [(Property::Bottom, Some(value)), (Property::Top, None)],
        };

        [left, right, top, bottom]
    }
}
