//! Target aggregation for container terms.
//!
//! HTML Help drops index entries that do not link anywhere, so a term
//! without targets borrows the targets of its descendants.

use tracing::{instrument, trace};

use crate::term::{TermId, TermTree};

/// Aggregates targets for every term of the forest.
///
/// Equivalent to calling [`aggregate`] on each top-level term.
#[instrument(level = "debug", skip(tree), fields(terms = tree.len()))]
pub fn aggregate_all(tree: &mut TermTree) {
    let order: Vec<TermId> = tree.iter_postorder().map(|(idx, _)| idx).collect();
    pull_up(tree, &order);
}

/// Pulls descendant targets up into `root` and every target-less term below it.
///
/// Children are aggregated before their parent. A term that already has a
/// target keeps its list unchanged; its subtree is still aggregated. Targets
/// are appended in child order without deduplication.
pub fn aggregate(tree: &mut TermTree, root: TermId) {
    let mut order = Vec::new();
    collect_postorder(tree, root, &mut order);
    pull_up(tree, &order);
}

fn collect_postorder(tree: &TermTree, idx: TermId, order: &mut Vec<TermId>) {
    for &child in tree.children(idx) {
        collect_postorder(tree, child, order);
    }
    order.push(idx);
}

/// Visits terms in post-order, so children are final when read.
fn pull_up(tree: &mut TermTree, order: &[TermId]) {
    for &idx in order {
        let Some(term) = tree.term(idx) else {
            continue;
        };
        if !term.targets.is_empty() {
            continue;
        }

        let inherited: Vec<_> = term
            .children()
            .iter()
            .filter_map(|&child| tree.term(child))
            .flat_map(|child| child.targets.iter().cloned())
            .collect();
        if inherited.is_empty() {
            continue;
        }

        if let Some(term) = tree.term_mut(idx) {
            trace!(term = %term.full_name, count = inherited.len(), "inherited targets");
            term.targets.extend(inherited);
        }
    }
}
