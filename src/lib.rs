//! # mathdoc
//!
//! Building blocks for structured mathematical document editors: an editable
//! tree of prose and notation, a caret with selection algebra, a transactional
//! undo/redo log, geometry-driven hit-testing, and a matrix grid builder.
//!
//! The crate deliberately stops at the editing core. Parsing and
//! serialization, visual layout, and symbolic computation are external
//! collaborators reached through the [`render::Converter`],
//! [`render::Renderer`] and [`engine::Backend`] traits; an editor shell wires
//! them to an [`Editor`] session and feeds it user input.

pub mod error;
pub mod node;
pub mod nav;
pub mod render;
pub mod record;
pub mod caret;
pub mod hit;
pub mod matrix;
pub mod engine;

#[cfg(test)]
pub mod tests;

pub use crate::{
    caret::{Caret, Editor},
    node::{Atom, AtomId, Block, BlockKind, Delim, Doc, Frac, Fragment, Group, Matrix, SupSub, Sym},
    record::{Edit, Record, Transaction},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
