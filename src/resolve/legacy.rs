//! Name-based see-reference resolution.
//!
//! Legacy index markup has no explicit link for "see" terms: the target is
//! whichever term carries the same name. A see chain (`A see B`, nested
//! `B see C`) narrows the search to the matched term's sub-terms, so the
//! scope and the in-chain flag travel with the emit pass in document order.

use tracing::warn;

use super::Topic;
use crate::extension::ExtensionRewriter;
use crate::term::{TermId, TermTree};

/// Term name whose failed lookup is never reported.
pub const UNRESOLVED_SENTINEL: &str = "***";

/// Resolution state threaded through one emit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeeState {
    /// Set while descending through the sub-terms of a see term
    pub in_chain: bool,
    /// Terms eligible for the next name lookup
    pub scope: Vec<TermId>,
}

impl SeeState {
    /// Snapshots the top-level terms as initial search scope.
    pub fn new(tree: &TermTree) -> Self {
        Self {
            in_chain: false,
            scope: tree.roots().to_vec(),
        }
    }
}

/// Outcome of resolving a single term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Topics to emit inside the term's entry
    pub topics: Vec<Topic>,
    /// State for the next term in document order
    pub state: SeeState,
    /// Name of a see term whose target could not be found
    pub unresolved: Option<String>,
}

/// Resolves topics for `idx` given the state left by the previous term.
///
/// Terms with a prefix, and every term below one until the chain reaches a
/// leaf, are looked up by name in the current scope. The first match lends
/// its first target and its sub-terms become the new scope. Other terms emit
/// their own targets.
///
/// # Arguments
///
/// * `tree`: Term tree being rendered
/// * `idx`: Term to resolve
/// * `state`: State returned for the previous term (or [`SeeState::new`])
/// * `rewriter`: Extension rewriter applied to emitted locators
///
/// # Returns
///
/// Topics, updated state and the unresolved term name, if any
pub fn resolve_legacy(
    tree: &TermTree,
    idx: TermId,
    mut state: SeeState,
    rewriter: &ExtensionRewriter,
) -> Resolution {
    let Some(term) = tree.term(idx) else {
        return Resolution {
            topics: Vec::new(),
            state,
            unresolved: None,
        };
    };

    if !term.is_redirection() && !state.in_chain {
        let topics = term
            .targets
            .iter()
            .map(|target| Topic::from_target(target, rewriter))
            .collect();
        return Resolution {
            topics,
            state,
            unresolved: None,
        };
    }

    state.in_chain = true;
    let mut topics = Vec::new();
    let matched = state
        .scope
        .iter()
        .filter_map(|&candidate| tree.term(candidate))
        .find(|candidate| candidate.name == term.name);

    if let Some(found) = matched {
        if let Some(first) = found.targets.first() {
            topics.push(Topic::from_target(first, rewriter));
        }
        state.scope = found.children().to_vec();
    }

    // Chain ends at a leaf
    if term.children().is_empty() {
        state.in_chain = false;
    }

    let unresolved = if matched.is_none() && term.name != UNRESOLVED_SENTINEL {
        warn!(term = %term.name.trim(), "see reference does not match any index term");
        Some(term.name.clone())
    } else {
        None
    };

    Resolution {
        topics,
        state,
        unresolved,
    }
}
