use std::collections::HashMap;

use crate::caret::Editor;
use crate::error::ParseError;
use crate::node::{Atom, AtomId, Doc, Fragment};
use crate::render::{Converter, Rect, Renderer};

macro_rules! sym {
    ($c:literal) => {
        crate::node::Fragment::Sym($c)
    };
}

macro_rules! syms {
    ($s:literal) => {
        crate::node::Fragment::text($s)
    };
}

macro_rules! frac {
    ($n:expr, $d:expr $(,)?) => {
        crate::node::Fragment::Frac { numer: $n, denom: $d }
    };
}

macro_rules! sup {
    ($nuc:expr, $s:expr $(,)?) => {
        crate::node::Fragment::SupSub {
            nuc: std::boxed::Box::new($nuc),
            sup: Some($s),
            sub: None,
        }
    };
}

macro_rules! sub {
    ($nuc:expr, $s:expr $(,)?) => {
        crate::node::Fragment::SupSub {
            nuc: std::boxed::Box::new($nuc),
            sup: None,
            sub: Some($s),
        }
    };
}

macro_rules! supsub {
    ($nuc:expr, $sup:expr, $sub:expr $(,)?) => {
        crate::node::Fragment::SupSub {
            nuc: std::boxed::Box::new($nuc),
            sup: Some($sup),
            sub: Some($sub),
        }
    };
}

macro_rules! delim {
    ($body:expr) => {
        crate::node::Fragment::Delim { left: '(', right: ')', body: $body }
    };
}

macro_rules! block {
    ($kind:ident, $body:expr $(,)?) => {
        crate::node::Fragment::Block {
            kind: crate::node::BlockKind::$kind,
            label: None,
            body: $body,
        }
    };
}

macro_rules! pmatrix {
    ($($($cell:expr),+);+ $(;)?) => {
        crate::node::Fragment::Matrix {
            rows: vec![$(vec![$($cell),+]),+],
            labels: None,
        }
    };
}

/// ```text
///          56
///    34 + ----
///          78
/// 12+---------+12
///       90
/// ```
pub fn complex_document() -> Vec<Fragment> {
    vec![
        sym!('1'),
        sym!('2'),
        sym!('+'),
        frac!(
            vec![
                sym!('3'),
                sym!('4'),
                sym!('+'),
                frac!(syms!("56"), syms!("78")),
            ],
            syms!("90"),
        ),
        sym!('+'),
        sym!('1'),
        sym!('2'),
    ]
}

/// A renderer double holding explicitly placed boxes, in the role the
/// layout collaborator plays in production. Tests lay out exactly the
/// geometry they talk about.
pub struct GridRenderer {
    boxes: HashMap<AtomId, Rect>,
    pub viewport: Rect,
    pub refreshed: Vec<AtomId>,
}

/// Cell width of the monospace test layout.
pub const CELL_W: f64 = 10.0;
/// Row height of the monospace test layout.
pub const CELL_H: f64 = 16.0;

impl GridRenderer {
    pub fn new() -> GridRenderer {
        GridRenderer {
            boxes: HashMap::new(),
            viewport: Rect::new(0.0, 10_000.0, 0.0, 10_000.0),
            refreshed: Vec::new(),
        }
    }

    pub fn set_box(&mut self, atom: AtomId, rect: Rect) {
        self.boxes.insert(atom, rect);
    }

    /// Places a group's direct children on one monospace row starting at
    /// `(left, top)`: the sentinel gets a zero-width box, every other child
    /// one cell. Returns the row's right edge.
    pub fn layout_row(&mut self, doc: &Doc, group: AtomId, left: f64, top: f64) -> f64 {
        let mut x = left;
        for &atom in &doc.group(group).body {
            let width = match doc.get(atom) {
                Atom::First => 0.0,
                _ => CELL_W,
            };
            self.boxes.insert(atom, Rect::new(top, top + CELL_H, x, x + width));
            x += width;
        }
        self.boxes.insert(group, Rect::new(top, top + CELL_H, left, x));
        x
    }
}

impl Renderer for GridRenderer {
    fn bounds(&mut self, atom: AtomId) -> Option<Rect> {
        self.boxes.get(&atom).copied()
    }

    fn viewport(&mut self) -> Rect {
        self.viewport
    }

    fn refresh(&mut self, _doc: &Doc, block: AtomId) {
        self.refreshed.push(block);
    }
}

/// A converter double standing in for the external LaTeX collaborator:
/// plain characters parse one symbol each, anything containing a command is
/// rejected, and serialization writes familiar markup.
pub struct TexConverter;

impl Converter for TexConverter {
    fn parse(&self, text: &str) -> Result<Vec<Fragment>, ParseError> {
        if text.contains('\\') {
            return Err(ParseError(format!("unsupported command in {:?}", text)));
        }
        Ok(Fragment::text(text))
    }

    fn serialize(&self, doc: &Doc, atoms: &[AtomId]) -> String {
        atoms.iter().map(|&atom| write_atom(doc, atom)).collect()
    }
}

fn write_atom(doc: &Doc, atom: AtomId) -> String {
    match doc.get(atom) {
        Atom::First => String::new(),
        Atom::Sym(s) => s.ch.to_string(),
        Atom::Group(_) => write_body(doc, atom),
        Atom::Frac(f) => {
            format!("\\frac{{{}}}{{{}}}", write_body(doc, f.numer), write_body(doc, f.denom))
        }
        Atom::SupSub(s) => {
            let mut out = write_atom(doc, s.nuc);
            if let Some(sup) = s.sup {
                out.push_str(&format!("^{{{}}}", write_body(doc, sup)));
            }
            if let Some(sub) = s.sub {
                out.push_str(&format!("_{{{}}}", write_body(doc, sub)));
            }
            out
        }
        Atom::Delim(d) => {
            format!("\\left{}{}\\right{}", d.left, write_body(doc, d.body), d.right)
        }
        Atom::Matrix(m) => {
            let rows = m
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|&cell| write_body(doc, cell))
                        .collect::<Vec<_>>()
                        .join("&")
                })
                .collect::<Vec<_>>()
                .join("\\\\");
            format!("\\begin{{pmatrix}}{}\\end{{pmatrix}}", rows)
        }
        Atom::Block(b) => format!("{{{}}}", write_body(doc, b.body)),
    }
}

fn write_body(doc: &Doc, group: AtomId) -> String {
    doc.group(group).body[1..]
        .iter()
        .map(|&atom| write_atom(doc, atom))
        .collect()
}

/// A fresh editor over the given content, with a renderer double.
pub fn editor_with(fragments: &[Fragment]) -> (Editor, GridRenderer) {
    let mut renderer = GridRenderer::new();
    let mut editor = Editor::new();
    editor.set_content(fragments, &mut renderer);
    (editor, renderer)
}

/// The atom at a body index of a group.
pub fn nth(doc: &Doc, group: AtomId, index: usize) -> AtomId {
    doc.group(group).body[index]
}

/// The numerator and denominator groups of a fraction atom.
pub fn frac_parts(doc: &Doc, frac: AtomId) -> (AtomId, AtomId) {
    match doc.get(frac) {
        Atom::Frac(f) => (f.numer, f.denom),
        other => panic!("expected fraction, found {:?}", other),
    }
}

/// The script groups of a script attachment.
pub fn script_parts(doc: &Doc, supsub: AtomId) -> (Option<AtomId>, Option<AtomId>) {
    match doc.get(supsub) {
        Atom::SupSub(s) => (s.sup, s.sub),
        other => panic!("expected script attachment, found {:?}", other),
    }
}
