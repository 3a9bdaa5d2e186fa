use crate::tests::util::{editor_with, TexConverter};

#[test]
fn test_range_normalization() {
    let (mut ed, _renderer) = editor_with(&syms!("abcd"));
    let root = ed.doc.root();

    // Dragging right and dragging left over the same span read back as the
    // same sorted range
    ed.set(root, 1);
    ed.shift_right();
    ed.shift_right();
    assert_eq!(ed.range(), Some((1, 3)));

    ed.clear_sel();
    ed.set(root, 3);
    ed.shift_left();
    ed.shift_left();
    assert_eq!(ed.range(), Some((1, 3)));
}

#[test]
fn test_shift_at_boundaries() {
    let (mut ed, _renderer) = editor_with(&syms!("ab"));
    let root = ed.doc.root();

    ed.set(root, 0);
    ed.shift_left();
    assert_eq!(ed.range(), None);

    ed.set(root, 2);
    ed.shift_right();
    assert_eq!(ed.range(), None);

    // Growing then shrinking a selection back collapses it
    ed.set(root, 1);
    ed.shift_right();
    assert_eq!(ed.range(), Some((1, 2)));
    ed.shift_left();
    assert_eq!(ed.range(), None);
}

#[test]
fn test_select_to_break() {
    let (mut ed, _renderer) = editor_with(&[
        sym!('a'),
        sym!('b'),
        sym!('\n'),
        sym!('c'),
        sym!('d'),
    ]);
    let root = ed.doc.root();

    // Rightwards from after 'a': stop just before the newline
    ed.set(root, 1);
    ed.select_right();
    assert_eq!(ed.range(), Some((1, 2)));
    assert_eq!((ed.caret.target, ed.caret.pos), (root, 2));

    // Leftwards from the end: stop at the newline
    ed.clear_sel();
    ed.set(root, 5);
    ed.select_left();
    assert_eq!(ed.range(), Some((3, 5)));
    assert_eq!((ed.caret.target, ed.caret.pos), (root, 3));

    // Without a break the scan reaches the group edge
    ed.clear_sel();
    ed.set(root, 4);
    ed.select_right();
    assert_eq!(ed.range(), Some((4, 5)));
}

#[test]
fn test_display_block_is_a_break() {
    let (mut ed, _renderer) = editor_with(&[
        sym!('a'),
        block!(Display, syms!("x")),
        sym!('b'),
    ]);
    let root = ed.doc.root();

    ed.set(root, 0);
    ed.select_right();
    assert_eq!(ed.range(), Some((0, 1)));
}

#[test]
fn test_select_all() {
    let (mut ed, _renderer) = editor_with(&syms!("abc"));
    let root = ed.doc.root();

    ed.set(root, 1);
    ed.select_all();
    assert_eq!(ed.range(), Some((0, 3)));
    assert_eq!((ed.caret.target, ed.caret.pos), (root, 3));
}

#[test]
fn test_copy_and_cut() {
    let (mut ed, mut renderer) = editor_with(&[
        sym!('a'),
        frac!(syms!("1"), syms!("2")),
        sym!('b'),
    ]);
    let root = ed.doc.root();

    // Nothing selected, nothing copied
    assert_eq!(ed.copy(&TexConverter), None);

    ed.set(root, 0);
    ed.shift_right();
    ed.shift_right();
    assert_eq!(
        ed.copy(&TexConverter),
        Some("a\\frac{1}{2}".to_string()),
    );
    // Copying leaves the document and selection alone
    assert_eq!(ed.range(), Some((0, 2)));

    let cut = ed.cut(&TexConverter, &mut renderer);
    assert_eq!(cut, Some("a\\frac{1}{2}".to_string()));
    assert_eq!(ed.doc.extract_body(root), vec![sym!('b')]);
    assert_eq!(ed.range(), None);

    // Cut is an ordinary transaction
    ed.undo(&mut renderer);
    assert_eq!(
        ed.doc.extract_body(root),
        vec![sym!('a'), frac!(syms!("1"), syms!("2")), sym!('b')],
    );
}

#[test]
fn test_extend_sel_by_pointer() {
    let (mut ed, mut renderer) = editor_with(&syms!("abcd"));
    let root = ed.doc.root();
    renderer.layout_row(&ed.doc, root, 0.0, 0.0);

    // Drag from after 'a' to the right edge of 'c'
    ed.set(root, 1);
    ed.extend_sel(29.0, 8.0, &mut renderer);
    assert_eq!(ed.range(), Some((1, 3)));
    assert_eq!((ed.caret.target, ed.caret.pos), (root, 3));

    // Dragging further extends the same anchor
    ed.extend_sel(39.0, 8.0, &mut renderer);
    assert_eq!(ed.range(), Some((1, 4)));
}
