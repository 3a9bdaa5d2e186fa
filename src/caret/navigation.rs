//! Directional caret movement and selection growth.
//!
//! Horizontal movement follows two rules. At a group boundary the caret
//! *exits* the enclosing composite: where it lands depends on what kind of
//! atom owned the group. Anywhere else it advances one position and then
//! *descends* into the atom it stepped over, if that atom has an addressable
//! child group - this descent-on-entry is what lets a single keystroke move
//! "into" a fraction or a script.

use crate::matrix;
use crate::nav::{self, MoveResult, VerticalDirection};
use crate::node::{Atom, AtomId, Doc};
use crate::render::Renderer;

use super::Editor;

impl Doc {
    /// The first child group a rightward caret enters when stepping over
    /// `id`, or `None` for atoms with nothing to descend into. A script
    /// attachment over a delimited nucleus presents the nucleus body first.
    pub(crate) fn first_child_group(&self, id: AtomId) -> Option<(AtomId, usize)> {
        match self.get(id) {
            Atom::Delim(d) => Some((d.body, 0)),
            Atom::Frac(f) => Some((f.numer, 0)),
            Atom::Matrix(m) => Some((m.rows[0][0], 0)),
            Atom::Block(b) => Some((b.body, 0)),
            Atom::SupSub(s) => {
                if let Atom::Delim(d) = self.get(s.nuc) {
                    Some((d.body, 0))
                } else if let Some(sup) = s.sup {
                    Some((sup, 0))
                } else if let Some(sub) = s.sub {
                    Some((sub, 0))
                } else {
                    panic!("script attachment needs a superscript or a subscript");
                }
            }
            Atom::First | Atom::Sym(_) | Atom::Group(_) => None,
        }
    }

    /// The child group a leftward caret enters when stepping over `id`,
    /// positioned at its end.
    pub(crate) fn last_child_group(&self, id: AtomId) -> Option<(AtomId, usize)> {
        let end = |group: AtomId| (group, self.group(group).body.len() - 1);
        match self.get(id) {
            Atom::Delim(d) => Some(end(d.body)),
            Atom::Frac(f) => Some(end(f.numer)),
            Atom::Matrix(m) => Some(end(*m.rows[0].last().expect("matrix has no columns"))),
            Atom::Block(b) => Some(end(b.body)),
            Atom::SupSub(s) => {
                if let Some(sup) = s.sup {
                    Some(end(sup))
                } else if let Some(sub) = s.sub {
                    Some(end(sub))
                } else {
                    panic!("script attachment needs a superscript or a subscript");
                }
            }
            Atom::First | Atom::Sym(_) | Atom::Group(_) => None,
        }
    }
}

impl Editor {
    /// Moves the caret one position right, collapsing a selection to its
    /// right edge first.
    pub fn move_right(&mut self) {
        if let Some((_, hi)) = self.range() {
            let target = self.caret.target;
            self.set(target, hi);
            self.clear_sel();
            return;
        }

        if self.is_last() {
            self.exit_right();
        } else {
            self.caret.pos += 1;
            if let Some((group, pos)) = self.doc.first_child_group(self.cur()) {
                self.set(group, pos);
            }
        }
    }

    /// Moves the caret one position left, collapsing a selection to its
    /// left edge first.
    pub fn move_left(&mut self) {
        if let Some((lo, _)) = self.range() {
            let target = self.caret.target;
            self.set(target, lo);
            self.clear_sel();
            return;
        }

        if self.is_first() {
            self.exit_left();
        } else {
            match self.doc.last_child_group(self.cur()) {
                Some((group, pos)) => self.set(group, pos),
                None => self.caret.pos -= 1,
            }
        }
    }

    /// Leaves the caret's group rightwards, landing after the composite that
    /// owned it. At the document root there is nowhere to go.
    fn exit_right(&mut self) {
        let target = self.caret.target;
        let Some(parent) = self.doc.parent(target) else { return };

        match self.doc.get(parent).clone() {
            Atom::SupSub(_) => {
                let (group, index) = self.owner_position(parent);
                self.set(group, index);
            }
            Atom::Frac(_) => {
                let (group, index) = self.owner_position(parent);
                self.set(group, index);
            }
            Atom::Delim(_) => self.exit_body_right(parent),
            Atom::Block(_) => {
                let (group, index) = self.owner_position(parent);
                self.set(group, index);
            }
            Atom::Matrix(m) => {
                let (r, c) = matrix::row_col_of(&self.doc, parent, target)
                    .expect("caret group is not a cell of its matrix");
                if c + 1 == m.rows[r].len() {
                    let (group, index) = self.owner_position(parent);
                    self.set(group, index);
                } else {
                    self.set(m.rows[r][c + 1], 0);
                }
            }
            Atom::First | Atom::Sym(_) | Atom::Group(_) => {
                panic!("group {:?} is owned by a non-composite atom", target)
            }
        }
    }

    /// Leaves the caret's group leftwards, landing before the composite that
    /// owned it.
    fn exit_left(&mut self) {
        let target = self.caret.target;
        let Some(parent) = self.doc.parent(target) else { return };

        match self.doc.get(parent).clone() {
            Atom::SupSub(s) => {
                // A delimited nucleus swallows the leftward exit: the caret
                // lands at the end of its body instead of before the
                // attachment.
                if let Atom::Delim(d) = self.doc.get(s.nuc) {
                    let pos = self.doc.group(d.body).body.len() - 1;
                    let body = d.body;
                    self.set(body, pos);
                } else {
                    let (group, index) = self.owner_position(parent);
                    self.set(group, index - 1);
                }
            }
            Atom::Frac(_) => {
                let (group, index) = self.owner_position(parent);
                self.set(group, index - 1);
            }
            Atom::Delim(_) => self.exit_body_left(parent),
            Atom::Block(_) => {
                let (group, index) = self.owner_position(parent);
                self.set(group, index - 1);
            }
            Atom::Matrix(m) => {
                let (r, c) = matrix::row_col_of(&self.doc, parent, target)
                    .expect("caret group is not a cell of its matrix");
                if c == 0 {
                    let (group, index) = self.owner_position(parent);
                    self.set(group, index - 1);
                } else {
                    let cell = m.rows[r][c - 1];
                    let pos = self.doc.group(cell).body.len() - 1;
                    self.set(cell, pos);
                }
            }
            Atom::First | Atom::Sym(_) | Atom::Group(_) => {
                panic!("group {:?} is owned by a non-composite atom", target)
            }
        }
    }

    /// Exits a delimited body rightwards. When the delimiter is the nucleus
    /// of a script attachment the caret moves into the attachment's first
    /// script rather than past it.
    fn exit_body_right(&mut self, delim: AtomId) {
        let owner = self
            .doc
            .parent(delim)
            .unwrap_or_else(|| panic!("delimited atom {:?} has no parent", delim));
        if let Atom::SupSub(s) = self.doc.get(owner).clone() {
            let script = s
                .sup
                .or(s.sub)
                .unwrap_or_else(|| panic!("script attachment needs a superscript or a subscript"));
            self.set(script, 0);
        } else {
            let (group, index) = self.owner_position(delim);
            self.set(group, index);
        }
    }

    /// Exits a delimited body leftwards, stepping before the whole script
    /// attachment when the delimiter is its nucleus.
    fn exit_body_left(&mut self, delim: AtomId) {
        let owner = self
            .doc
            .parent(delim)
            .unwrap_or_else(|| panic!("delimited atom {:?} has no parent", delim));
        if let Atom::SupSub(_) = self.doc.get(owner) {
            let (group, index) = self.owner_position(owner);
            self.set(group, index - 1);
        } else {
            let (group, index) = self.owner_position(delim);
            self.set(group, index - 1);
        }
    }

    /// The group holding `composite` and the composite's body index within
    /// it. Exiting an atom whose owner is not a group is an invariant
    /// breach.
    fn owner_position(&self, composite: AtomId) -> (AtomId, usize) {
        let group = self
            .doc
            .parent(composite)
            .unwrap_or_else(|| panic!("atom {:?} has no parent to exit into", composite));
        (group, self.doc.index_in_parent(composite))
    }

    /// Moves the caret up: subscript to superscript, denominator to
    /// numerator, or one matrix row towards the top, matching the nearest
    /// horizontal position in the destination group.
    pub fn move_up(&mut self, renderer: &mut impl Renderer) -> MoveResult {
        self.move_vertically(VerticalDirection::Up, renderer)
    }

    /// Moves the caret down; the mirror image of [`move_up`](Editor::move_up).
    pub fn move_down(&mut self, renderer: &mut impl Renderer) -> MoveResult {
        self.move_vertically(VerticalDirection::Down, renderer)
    }

    fn move_vertically(
        &mut self,
        direction: VerticalDirection,
        renderer: &mut impl Renderer,
    ) -> MoveResult {
        let target = self.caret.target;
        let Some(parent) = self.doc.parent(target) else { return MoveResult::MovedOut };

        match self.doc.get(parent).clone() {
            Atom::SupSub(s) => {
                let (from, to) = match direction {
                    VerticalDirection::Up => (s.sub, s.sup),
                    VerticalDirection::Down => (s.sup, s.sub),
                };
                if from != Some(target) {
                    return MoveResult::MovedOut;
                }
                // With no opposite script the gesture is still ours; the
                // caret just has nowhere to go.
                if let Some(to) = to {
                    self.jump_to(to, renderer);
                }
                MoveResult::MovedWithin
            }
            Atom::Frac(f) => {
                let (from, to) = match direction {
                    VerticalDirection::Up => (f.denom, f.numer),
                    VerticalDirection::Down => (f.numer, f.denom),
                };
                if from != target {
                    return MoveResult::MovedOut;
                }
                self.jump_to(to, renderer);
                MoveResult::MovedWithin
            }
            Atom::Matrix(m) => {
                let (r, c) = matrix::row_col_of(&self.doc, parent, target)
                    .expect("caret group is not a cell of its matrix");
                let dest = match direction {
                    VerticalDirection::Up => {
                        if r == 0 {
                            return MoveResult::MovedOut;
                        }
                        r - 1
                    }
                    VerticalDirection::Down => {
                        if r + 1 == m.rows.len() {
                            return MoveResult::MovedOut;
                        }
                        r + 1
                    }
                };
                self.jump_to(m.rows[dest][c], renderer);
                MoveResult::MovedWithin
            }
            _ => MoveResult::MovedOut,
        }
    }

    /// Lands in `group` at the position horizontally nearest to the caret's
    /// current x coordinate.
    fn jump_to(&mut self, group: AtomId, renderer: &mut impl Renderer) {
        let x = self.caret_x(renderer);
        let pos = nav::nearest_boundary(&self.doc, renderer, group, x);
        self.clear_sel();
        self.set(group, pos);
    }

    /// Grows (or starts) the selection one position rightward without
    /// changing structural depth.
    pub fn shift_right(&mut self) {
        if self.is_last() {
            return;
        }
        let anchor = self.cur();
        self.caret.pos += 1;
        let focus = self.cur();
        let anchor = match self.caret.sel {
            Some((a, _)) => a,
            None => anchor,
        };
        self.set_sel(Some((anchor, focus)));
    }

    /// Grows (or starts) the selection one position leftward.
    pub fn shift_left(&mut self) {
        if self.is_first() {
            return;
        }
        let anchor = match self.caret.sel {
            Some((a, _)) => a,
            None => self.cur(),
        };
        self.caret.pos -= 1;
        let focus = self.cur();
        self.set_sel(Some((anchor, focus)));
    }

    /// Extends the selection leftwards to the nearest explicit break - a
    /// newline symbol or a display/section block - scanning only the caret's
    /// group. With no break it reaches the group start.
    pub fn select_left(&mut self) {
        let pos = self.caret.pos;
        let body = &self.doc.group(self.caret.target).body;
        let mut last = 0;
        for i in (1..=pos).rev() {
            if self.doc.get(body[i]).is_line_break() {
                last = i;
                break;
            }
        }
        let anchor = match self.caret.sel {
            Some((a, _)) => a,
            None => body[pos],
        };
        let focus = self.doc.group(self.caret.target).body[last];
        self.set_sel(Some((anchor, focus)));
        let target = self.caret.target;
        self.set(target, last);
    }

    /// Extends the selection rightwards to the nearest explicit break, or to
    /// the group end.
    pub fn select_right(&mut self) {
        let pos = self.caret.pos;
        let body = &self.doc.group(self.caret.target).body;
        let mut last = body.len() - 1;
        for i in pos..body.len() {
            if self.doc.get(body[i]).is_line_break() {
                last = i - 1;
                break;
            }
        }
        let anchor = match self.caret.sel {
            Some((a, _)) => a,
            None => body[pos],
        };
        let focus = self.doc.group(self.caret.target).body[last];
        self.set_sel(Some((anchor, focus)));
        let target = self.caret.target;
        self.set(target, last);
    }

    /// Selects the whole of the caret's group.
    pub fn select_all(&mut self) {
        let body = &self.doc.group(self.caret.target).body;
        let (first, last) = (body[0], body[body.len() - 1]);
        let end = body.len() - 1;
        self.set_sel(Some((first, last)));
        let target = self.caret.target;
        self.set(target, end);
    }

    /// Extends the selection to the position under a dragged pointer,
    /// resolved through hit-testing within the caret's group. A drag that
    /// escapes into a different group moves the caret but drops the
    /// selection, since a selection spans exactly one group.
    pub fn extend_sel(&mut self, x: f64, y: f64, renderer: &mut impl Renderer) {
        let start = match self.caret.sel {
            Some((a, _)) => a,
            None => self.cur(),
        };
        let (group, pos) = crate::hit::locate(&self.doc, renderer, self.caret.target, x, y, false);
        self.set(group, pos);
        if self.doc.parent(start) == Some(group) {
            let focus = self.doc.group(group).body[pos];
            self.set_sel(Some((start, focus)));
        } else {
            self.clear_sel();
        }
    }

    /// Places the caret under a pointer-down, hit-testing from the document
    /// root. With `recursive` the search continues into the structure under
    /// the hit position.
    pub fn point(&mut self, x: f64, y: f64, recursive: bool, renderer: &mut impl Renderer) {
        self.clear_sel();
        let root = self.doc.root();
        let (group, pos) = crate::hit::locate(&self.doc, renderer, root, x, y, recursive);
        self.set(group, pos);
    }
}
