//! The owned, document-independent form of a subtree.

use super::BlockKind;

/// An atom tree by value, with no arena handles and no sentinel bookkeeping.
///
/// Fragments are what the parsing collaborator produces, what clipboard
/// copies extract, and what tests compare for structural equality. Grafting
/// a fragment into a [`Doc`](super::Doc) always constructs fresh atoms, so a
/// fragment can be grafted any number of times without sharing.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Fragment {
    Sym(char),
    Frac {
        numer: Vec<Fragment>,
        denom: Vec<Fragment>,
    },
    SupSub {
        nuc: Box<Fragment>,
        sup: Option<Vec<Fragment>>,
        sub: Option<Vec<Fragment>>,
    },
    Delim {
        left: char,
        right: char,
        body: Vec<Fragment>,
    },
    Matrix {
        rows: Vec<Vec<Vec<Fragment>>>,
        labels: Option<Vec<String>>,
    },
    Block {
        kind: BlockKind,
        label: Option<String>,
        body: Vec<Fragment>,
    },
}

impl Fragment {
    /// Builds a fragment sequence from plain text, one symbol per character.
    pub fn text(s: &str) -> Vec<Fragment> {
        s.chars().map(Fragment::Sym).collect()
    }
}
