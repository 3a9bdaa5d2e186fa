//! The document tree: atoms, the arena-backed [`Doc`] that owns them, and the
//! owned [`Fragment`] interchange form.
//!
//! Atoms live in an arena and refer to each other through [`AtomId`] handles.
//! Ownership flows strictly downwards (a group owns its body, a composite
//! atom owns its sub-groups); every non-root atom additionally carries a
//! non-owning parent handle used only for upward navigation. [`Fragment`]s
//! are the document-independent form produced by the parsing collaborator and
//! by clipboard copies; [`Doc::graft`] turns them into fresh atoms.

mod atom;
pub use atom::*;

mod fragment;
pub use fragment::*;

mod doc;
pub use doc::*;

mod splice;
