//! Row and column editing for matrix grids.
//!
//! Grids always keep at least one row and one column: deleting the last of
//! either is a no-op, not an error. Out-of-range positions, on the other
//! hand, are programming errors and panic. The directional helpers mirror
//! the gestures of a grid-builder widget and hand back the cell the caret
//! should stand in afterwards, clamped to the remaining bounds.

use tracing::debug;

use crate::node::{AtomId, Doc};
use crate::render::Renderer;

/// Where to grow the grid relative to the caret's cell.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Side {
    Above,
    Below,
    Left,
    Right,
}

/// Which run of cells to delete through the caret's cell.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Axis {
    Row,
    Column,
}

/// The row and column of a cell group within its matrix, or `None` if the
/// group is not one of the matrix's cells.
pub fn row_col_of(doc: &Doc, mat: AtomId, cell: AtomId) -> Option<(usize, usize)> {
    for (r, row) in doc.matrix(mat).rows.iter().enumerate() {
        if let Some(c) = row.iter().position(|&group| group == cell) {
            return Some((r, c));
        }
    }
    None
}

/// Inserts a row of empty cells at `pos`, padded to the widest row. A
/// labelled matrix gains a fresh label for the new row. Panics unless
/// `pos <= row_count`.
pub fn add_row(doc: &mut Doc, mat: AtomId, pos: usize, renderer: &mut impl Renderer) {
    let rows = doc.matrix(mat).row_count();
    if pos > rows {
        panic!("row position {} out of range for {}-row matrix", pos, rows);
    }

    let cols = doc.matrix(mat).col_count().max(1);
    let row: Vec<AtomId> = (0..cols).map(|_| doc.empty_group(Some(mat))).collect();
    let label = doc.matrix(mat).labels.is_some().then(|| doc.fresh_label());

    let matrix = doc.matrix_mut(mat);
    matrix.rows.insert(pos, row);
    if let (Some(labels), Some(label)) = (matrix.labels.as_mut(), label) {
        labels.insert(pos, label);
    }

    debug!(?mat, pos, "added matrix row");
    let block = doc.enclosing_block(mat);
    renderer.refresh(doc, block);
}

/// Inserts an empty cell at `pos` in every row. Panics unless
/// `pos <= col_count`.
pub fn add_column(doc: &mut Doc, mat: AtomId, pos: usize, renderer: &mut impl Renderer) {
    let cols = doc.matrix(mat).col_count();
    if pos > cols {
        panic!("column position {} out of range for {}-column matrix", pos, cols);
    }

    let rows = doc.matrix(mat).row_count();
    let cells: Vec<AtomId> = (0..rows).map(|_| doc.empty_group(Some(mat))).collect();

    let matrix = doc.matrix_mut(mat);
    for (row, cell) in matrix.rows.iter_mut().zip(cells) {
        row.insert(pos, cell);
    }

    debug!(?mat, pos, "added matrix column");
    let block = doc.enclosing_block(mat);
    renderer.refresh(doc, block);
}

/// Removes the row at `pos`. A no-op on a single-row matrix; panics when
/// `pos` is out of range.
pub fn delete_row(doc: &mut Doc, mat: AtomId, pos: usize, renderer: &mut impl Renderer) {
    let rows = doc.matrix(mat).row_count();
    if rows == 1 {
        return;
    }
    if pos > rows - 1 {
        panic!("row position {} out of range for {}-row matrix", pos, rows);
    }

    let matrix = doc.matrix_mut(mat);
    let removed = matrix.rows.remove(pos);
    if let Some(labels) = matrix.labels.as_mut() {
        labels.remove(pos);
    }
    for cell in removed {
        doc.set_parent(cell, None);
    }

    debug!(?mat, pos, "deleted matrix row");
    let block = doc.enclosing_block(mat);
    renderer.refresh(doc, block);
}

/// Removes the column at `pos` from every row. A no-op on a single-column
/// matrix; panics when `pos` is out of range.
pub fn delete_col(doc: &mut Doc, mat: AtomId, pos: usize, renderer: &mut impl Renderer) {
    let cols = doc.matrix(mat).col_count();
    if cols == 1 {
        return;
    }
    if pos > cols - 1 {
        panic!("column position {} out of range for {}-column matrix", pos, cols);
    }

    let matrix = doc.matrix_mut(mat);
    let mut removed = Vec::with_capacity(matrix.rows.len());
    for row in matrix.rows.iter_mut() {
        if pos < row.len() {
            removed.push(row.remove(pos));
        }
    }
    for cell in removed {
        doc.set_parent(cell, None);
    }

    debug!(?mat, pos, "deleted matrix column");
    let block = doc.enclosing_block(mat);
    renderer.refresh(doc, block);
}

/// Grows the grid on the given side of the cell at `(row, col)` and returns
/// the cell the caret should move into.
pub fn insert_beside(
    doc: &mut Doc,
    mat: AtomId,
    row: usize,
    col: usize,
    side: Side,
    renderer: &mut impl Renderer,
) -> (usize, usize) {
    match side {
        Side::Above => {
            add_row(doc, mat, row, renderer);
            (row, col)
        }
        Side::Below => {
            add_row(doc, mat, row + 1, renderer);
            (row + 1, col)
        }
        Side::Left => {
            add_column(doc, mat, col, renderer);
            (row, col)
        }
        Side::Right => {
            add_column(doc, mat, col + 1, renderer);
            (row, col + 1)
        }
    }
}

/// Deletes the row or column through the cell at `(row, col)` and returns a
/// safe caret cell clamped to the remaining bounds.
pub fn delete_through(
    doc: &mut Doc,
    mat: AtomId,
    row: usize,
    col: usize,
    axis: Axis,
    renderer: &mut impl Renderer,
) -> (usize, usize) {
    match axis {
        Axis::Row => {
            delete_row(doc, mat, row, renderer);
            (row.min(doc.matrix(mat).row_count() - 1), col)
        }
        Axis::Column => {
            delete_col(doc, mat, col, renderer);
            (row, col.min(doc.matrix(mat).col_count() - 1))
        }
    }
}
