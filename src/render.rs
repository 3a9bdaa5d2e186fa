//! The seams to the layout/rendering and parsing collaborators.
//!
//! The editing core never computes geometry itself: a [`Renderer`] hands it
//! the on-screen bounding boxes the last layout pass produced, and is told
//! which block subtree to lay out again after each mutation. Likewise text
//! conversion belongs to a [`Converter`]; the core only moves fragments.

use crate::error::ParseError;
use crate::node::{AtomId, Doc, Fragment};

/// An on-screen bounding box, in the coordinate space the layout engine
/// reports pointer events in.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Rect {
        Rect { top, bottom, left, right }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn y_center(&self) -> f64 {
        self.top + (self.bottom - self.top) / 2.0
    }

    /// Strict containment - points on the edge are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.top < y && self.bottom > y && self.left < x && self.right > x
    }
}

/// The layout/rendering collaborator.
///
/// Geometry queries take `&mut self` because renderers commonly cache or
/// lazily compute their measurements.
pub trait Renderer {
    /// The bounding box of an atom, if the last layout pass produced one.
    fn bounds(&mut self, atom: AtomId) -> Option<Rect>;

    /// The currently visible region.
    fn viewport(&mut self) -> Rect;

    /// Requests a re-layout of the subtree rooted at `block`. Called by the
    /// splice primitives with the nearest enclosing block of every edit.
    fn refresh(&mut self, doc: &Doc, block: AtomId);

    /// The bounding box of an atom which is required to have one. Asking
    /// for geometry of an atom the layout engine never placed is a contract
    /// breach between the collaborators, not a recoverable state.
    fn rect(&mut self, atom: AtomId) -> Rect {
        self.bounds(atom)
            .unwrap_or_else(|| panic!("no geometry for atom {:?}", atom))
    }

    /// Whether any part of the atom's box is inside the viewport.
    fn visible(&mut self, atom: AtomId) -> bool {
        match self.bounds(atom) {
            Some(rect) => {
                let viewport = self.viewport();
                rect.bottom >= viewport.top && rect.top <= viewport.bottom
            }
            None => false,
        }
    }
}

/// The parsing/serialization collaborator.
pub trait Converter {
    /// Turns markup text into fragments ready to graft. Failures leave the
    /// document untouched; see [`crate::error::ParseError`].
    fn parse(&self, text: &str) -> Result<Vec<Fragment>, ParseError>;

    /// Serializes a sequence of sibling atoms back into markup text.
    fn serialize(&self, doc: &Doc, atoms: &[AtomId]) -> String;
}
