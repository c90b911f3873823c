//! Direct see-reference markup.

use super::Topic;
use crate::extension::ExtensionRewriter;
use crate::term::{TermId, TermTree};

/// Returns one topic per own target of the term.
///
/// Modern markup carries redirection targets on the term itself, so no
/// name search happens and no state is kept between calls. Unknown handles
/// resolve to nothing.
pub fn resolve_modern(tree: &TermTree, idx: TermId, rewriter: &ExtensionRewriter) -> Vec<Topic> {
    tree.term(idx)
        .map(|term| {
            term.targets
                .iter()
                .map(|target| Topic::from_target(target, rewriter))
                .collect()
        })
        .unwrap_or_default()
}
