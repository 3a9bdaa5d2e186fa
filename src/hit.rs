//! Hit-testing: resolving a 2-D pointer coordinate to a caret position,
//! using the bounding geometry supplied by the rendering collaborator.
//!
//! The search has two phases. A *line search* walks a group's children in
//! order, watching for visual row breaks (a child whose bottom edge sits
//! above the next child's top edge) until it finds the row containing the
//! pointer's y coordinate. A *nearest-neighbour search* then scans that row
//! for the child whose anchor point - right edge, vertical centre - is
//! closest in squared distance. A block child strictly containing the
//! pointer is entered immediately, taking precedence over any distance.

use crate::node::{Atom, AtomId, Doc};
use crate::render::Renderer;

/// Resolves `(x, y)` to a `(group, position)` within the tree under `root`.
///
/// With `recursive` set, the search continues below the hit position: the
/// nearest caret-addressable atom among its descendants wins, resolved to
/// its owning group. Equal distances keep the earlier candidate throughout.
pub fn locate(
    doc: &Doc,
    renderer: &mut impl Renderer,
    root: AtomId,
    x: f64,
    y: f64,
    recursive: bool,
) -> (AtomId, usize) {
    let (group, pos) = point_block(doc, renderer, root, x, y);
    if !recursive {
        return (group, pos);
    }

    let chosen = doc.group(group).body[pos];
    let mut best = chosen;
    let mut best_distance = f64::INFINITY;
    for atom in doc.descendants(chosen) {
        // Only atoms sitting directly in a group body are addressable;
        // composite sub-groups and matrix cells are reached through them.
        let Some(parent) = doc.parent(atom) else { continue };
        if !matches!(doc.get(parent), Atom::Group(_)) {
            continue;
        }
        let distance = anchor_distance(renderer, atom, x, y);
        if distance < best_distance {
            best_distance = distance;
            best = atom;
        }
    }

    if best_distance.is_infinite() {
        return (group, pos);
    }
    let parent = doc.parent(best).expect("chosen atom has no parent");
    (parent, doc.index_in_parent(best))
}

/// The flat search within one group, descending through block children that
/// contain the pointer outright.
fn point_block(
    doc: &Doc,
    renderer: &mut impl Renderer,
    root: AtomId,
    x: f64,
    y: f64,
) -> (AtomId, usize) {
    let mut group = root;

    'descend: loop {
        let body = &doc.group(group).body;
        if body.len() == 1 {
            return (group, 0);
        }

        // Line search: find the start of the visual row containing y.
        // Before any break is seen, off-screen children are skipped; after
        // that, leaving the viewport ends the scan.
        let mut line = 0;
        for (index, &atom) in body.iter().enumerate() {
            if !renderer.visible(atom) {
                if line == 0 {
                    continue;
                }
                break;
            }
            if y < renderer.rect(atom).bottom {
                line = index;
                break;
            }
            if index == body.len() - 1 {
                return (group, index);
            }
            if is_new_line(renderer, atom, body[index + 1]) {
                line = index + 1;
            }
        }

        // A symbol at the row start hit left of its horizontal midpoint
        // belongs to the position before it.
        if let Atom::Sym(_) = doc.get(body[line]) {
            let rect = renderer.rect(body[line]);
            if x < rect.right - rect.width() / 2.0 {
                return (group, line - 1);
            }
        }

        // Nearest neighbour within the row.
        let mut best = line;
        let mut best_distance = f64::INFINITY;
        for index in line..body.len() {
            let atom = body[index];
            if let Atom::Block(block) = doc.get(atom) {
                if let Some(rect) = renderer.bounds(atom) {
                    if rect.contains(x, y) {
                        group = block.body;
                        continue 'descend;
                    }
                }
            }
            let distance = anchor_distance(renderer, atom, x, y);
            if distance < best_distance {
                best_distance = distance;
                best = index;
            }
            if index == body.len() - 1 {
                break;
            }
            if is_new_line(renderer, atom, body[index + 1]) {
                break;
            }
        }
        return (group, best);
    }
}

/// Whether two adjacent children sit on different visual rows.
fn is_new_line(renderer: &mut impl Renderer, atom: AtomId, next: AtomId) -> bool {
    match (renderer.bounds(atom), renderer.bounds(next)) {
        (Some(a), Some(b)) => a.bottom < b.top,
        _ => false,
    }
}

/// Squared distance from the pointer to an atom's anchor point. Atoms the
/// layout engine never placed are infinitely far away.
fn anchor_distance(renderer: &mut impl Renderer, atom: AtomId, x: f64, y: f64) -> f64 {
    match renderer.bounds(atom) {
        Some(rect) => (x - rect.right).powi(2) + (y - rect.y_center()).powi(2),
        None => f64::INFINITY,
    }
}
