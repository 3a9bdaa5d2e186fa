//! The definition of the atom kinds themselves.

/// A handle to an atom within a [`Doc`](super::Doc) arena.
///
/// Handles are plain indices: cheap to copy, stable for the lifetime of the
/// document session, and meaningless outside the document that issued them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct AtomId(pub(crate) u32);

/// An atom in the document tree.
///
/// Every variant that contains other material does so through groups: a
/// fraction owns a numerator group and a denominator group, a matrix owns one
/// group per cell, and so on. Groups are the only atoms the caret can stand
/// in.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Atom {
    /// The sentinel heading every group body. It gives an otherwise empty
    /// group an addressable caret position, and is never spliced in or out.
    First,

    /// An atomic symbol - a character of prose or notation. A `'\n'` symbol
    /// is an explicit line break.
    Sym(Sym),

    /// An ordered sequence of atoms. `body[0]` is always a [`Atom::First`];
    /// real content starts at index 1.
    Group(Group),

    /// A fraction with numerator and denominator groups.
    Frac(Frac),

    /// A nucleus atom carrying a superscript and/or subscript group. At
    /// least one of the two scripts is always present.
    SupSub(SupSub),

    /// A delimiter pair wrapped around a body group.
    Delim(Delim),

    /// A two-dimensional grid of cell groups, all rows the same length.
    Matrix(Matrix),

    /// A sectioning or display block with a single body group.
    Block(Block),
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Sym {
    pub ch: char,
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Group {
    pub body: Vec<AtomId>,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Frac {
    pub numer: AtomId,
    pub denom: AtomId,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SupSub {
    pub nuc: AtomId,
    pub sup: Option<AtomId>,
    pub sub: Option<AtomId>,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Delim {
    pub left: char,
    pub right: char,
    pub body: AtomId,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Matrix {
    /// `rows[r][c]` is the cell group at row `r`, column `c`.
    pub rows: Vec<Vec<AtomId>>,
    /// Per-row labels, for grids whose rows can be referenced.
    pub labels: Option<Vec<String>>,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Block {
    pub kind: BlockKind,
    pub label: Option<String>,
    pub body: AtomId,
}

/// The kind of a [`Block`] atom.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum BlockKind {
    /// Inline mathematics embedded in prose.
    Inline,
    /// Display mathematics on its own visual row.
    Display,
    /// A section heading.
    Section,
    /// A theorem-like environment.
    Theorem,
}

impl Matrix {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The widest row. Rows are kept equal-length by the grid builder, but
    /// the count is computed defensively the same way throughout the crate.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }
}

impl Atom {
    /// Whether this atom ends a visual row when scanning a group for
    /// explicit breaks: a newline symbol, or a block that always occupies
    /// its own row.
    pub fn is_line_break(&self) -> bool {
        matches!(self, Atom::Sym(Sym { ch: '\n' }))
            || matches!(
                self,
                Atom::Block(Block { kind: BlockKind::Display | BlockKind::Section, .. })
            )
    }
}
