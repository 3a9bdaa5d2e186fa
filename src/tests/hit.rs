use crate::hit;
use crate::node::Atom;
use crate::render::Rect;
use crate::tests::util::{editor_with, frac_parts, nth};

#[test]
fn test_nearest_leaf_on_one_line() {
    // Two leaves on one line; the point is nearer the second one's right
    // edge, so it resolves to that leaf's index.
    let (ed, mut renderer) = editor_with(&syms!("ab"));
    let root = ed.doc.root();
    renderer.layout_row(&ed.doc, root, 0.0, 0.0);

    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 18.0, 8.0, false), (root, 2));
    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 11.0, 8.0, false), (root, 1));
}

#[test]
fn test_click_left_of_a_symbol_midpoint() {
    let (ed, mut renderer) = editor_with(&syms!("ab"));
    let root = ed.doc.root();
    renderer.layout_row(&ed.doc, root, 0.0, 0.0);

    // x = 2 is left of 'a's midpoint: the caret belongs before it
    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 2.0, 8.0, false), (root, 0));
}

#[test]
fn test_equal_distances_prefer_the_earlier_index() {
    let (ed, mut renderer) = editor_with(&syms!("ab"));
    let root = ed.doc.root();
    let body = ed.doc.group(root).body.clone();

    renderer.set_box(body[0], Rect::new(0.0, 16.0, 0.0, 0.0));
    // Both symbols share a right edge, so their anchors coincide
    renderer.set_box(body[1], Rect::new(0.0, 16.0, 0.0, 10.0));
    renderer.set_box(body[2], Rect::new(0.0, 16.0, 10.0, 10.0));

    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 10.0, 8.0, false), (root, 1));
}

#[test]
fn test_line_search() {
    let (ed, mut renderer) = editor_with(&syms!("ab\ncd"));
    let root = ed.doc.root();
    let body = ed.doc.group(root).body.clone();

    // Two visual rows: "ab" then "cd", with the newline ending row one
    renderer.set_box(body[0], Rect::new(0.0, 16.0, 0.0, 0.0));
    renderer.set_box(body[1], Rect::new(0.0, 16.0, 0.0, 10.0));
    renderer.set_box(body[2], Rect::new(0.0, 16.0, 10.0, 20.0));
    renderer.set_box(body[3], Rect::new(0.0, 16.0, 20.0, 20.0));
    renderer.set_box(body[4], Rect::new(20.0, 36.0, 0.0, 10.0));
    renderer.set_box(body[5], Rect::new(20.0, 36.0, 10.0, 20.0));

    // A point in the second row resolves there, not to the nearer-x atom of
    // the first row
    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 18.0, 28.0, false), (root, 5));
    // And a point in the first row stops scanning at the row break
    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 18.0, 8.0, false), (root, 2));
}

#[test]
fn test_point_below_everything_falls_back_to_the_last_index() {
    let (ed, mut renderer) = editor_with(&syms!("ab"));
    let root = ed.doc.root();
    renderer.layout_row(&ed.doc, root, 0.0, 0.0);

    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 5.0, 500.0, false), (root, 2));
}

#[test]
fn test_scrolled_out_row_is_skipped() {
    let (ed, mut renderer) = editor_with(&syms!("ab"));
    let root = ed.doc.root();
    let body = ed.doc.group(root).body.clone();

    renderer.set_box(body[0], Rect::new(0.0, 16.0, 0.0, 0.0));
    renderer.set_box(body[1], Rect::new(0.0, 16.0, 0.0, 10.0));
    renderer.set_box(body[2], Rect::new(20.0, 36.0, 0.0, 10.0));
    // The first row sits above the viewport
    renderer.viewport = Rect::new(18.0, 1000.0, 0.0, 1000.0);

    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 9.0, 28.0, false), (root, 2));
}

#[test]
fn test_block_containment_beats_distance() {
    let (ed, mut renderer) = editor_with(&[sym!('a'), block!(Theorem, syms!("xy"))]);
    let root = ed.doc.root();
    let block = nth(&ed.doc, root, 2);
    let body = match ed.doc.get(block) {
        Atom::Block(b) => b.body,
        _ => unreachable!(),
    };

    renderer.layout_row(&ed.doc, root, 0.0, 0.0);
    renderer.set_box(block, Rect::new(0.0, 16.0, 10.0, 60.0));
    renderer.layout_row(&ed.doc, body, 10.0, 0.0);

    // The point is inside the block, so the search enters its body even
    // though the 'a' anchor is closer
    let (group, pos) = hit::locate(&ed.doc, &mut renderer, root, 12.0, 8.0, false);
    assert_eq!(group, body);
    assert_eq!(pos, 0);
}

#[test]
fn test_recursive_descent_into_a_fraction() {
    let (ed, mut renderer) = editor_with(&[frac!(syms!("5"), syms!("90"))]);
    let root = ed.doc.root();
    let frac = nth(&ed.doc, root, 1);
    let (numer, denom) = frac_parts(&ed.doc, frac);

    let body = ed.doc.group(root).body.clone();
    renderer.set_box(body[0], Rect::new(0.0, 36.0, 0.0, 0.0));
    renderer.set_box(frac, Rect::new(0.0, 36.0, 0.0, 20.0));
    renderer.layout_row(&ed.doc, numer, 0.0, 0.0);
    renderer.layout_row(&ed.doc, denom, 0.0, 20.0);

    // Near the right edge of the '0' in the denominator
    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 18.0, 28.0, true), (denom, 2));
    // Near the '5' in the numerator
    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 18.0, 8.0, true), (numer, 1));
    // Without recursion the fraction itself is the result
    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 18.0, 28.0, false), (root, 1));
}

#[test]
fn test_empty_group_hits_its_sentinel() {
    let (ed, mut renderer) = editor_with(&[]);
    let root = ed.doc.root();
    assert_eq!(hit::locate(&ed.doc, &mut renderer, root, 100.0, 100.0, false), (root, 0));
}

#[test]
fn test_point_places_the_caret() {
    let (mut ed, mut renderer) = editor_with(&syms!("abc"));
    let root = ed.doc.root();
    renderer.layout_row(&ed.doc, root, 0.0, 0.0);

    ed.set(root, 1);
    ed.shift_right();
    assert!(ed.range().is_some());

    ed.point(28.0, 8.0, false, &mut renderer);
    assert_eq!((ed.caret.target, ed.caret.pos), (root, 3));
    assert_eq!(ed.range(), None);
}
