//! Arena-backed index term tree.
//!
//! Terms are stored in a generational arena and addressed by [`TermId`]
//! handles, so passes that mutate target lists never hold references into
//! the tree while walking it.

use generational_arena::{Arena, Index};
use std::fmt;

/// Stable handle of a term inside a [`TermTree`].
pub type TermId = Index;

/// Document location an index term points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    /// Relative document locator, `None` for a title-only entry
    pub uri: Option<String>,
    /// Human readable label shown next to the link
    pub display_name: Option<String>,
}

impl Target {
    /// Creates target pointing at `uri` with optional display name.
    pub fn new(uri: impl Into<String>, display_name: Option<&str>) -> Self {
        Self {
            uri: Some(uri.into()),
            display_name: display_name.map(String::from),
        }
    }

    /// Creates title-only target without a locator.
    pub fn label(display_name: impl Into<String>) -> Self {
        Self {
            uri: None,
            display_name: Some(display_name.into()),
        }
    }

    /// Returns the trimmed display name, `None` when absent or blank.
    pub fn title(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Single named node of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Display name
    pub name: String,
    /// Name qualified by the ancestor path, used as rendering key
    pub full_name: String,
    /// Stable identifier assigned by the collector
    pub key: Option<String>,
    /// See/see-also marker, only present on redirection terms
    pub prefix: Option<String>,
    /// Ordered targets of this term
    pub targets: Vec<Target>,
    parent: Option<TermId>,
    children: Vec<TermId>,
}

impl Term {
    /// Creates term whose full name equals its display name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            full_name: name.clone(),
            name,
            key: None,
            prefix: None,
            targets: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Returns true for see and see-also terms.
    ///
    /// A non-empty prefix is the only thing that marks a redirection.
    pub fn is_redirection(&self) -> bool {
        self.prefix.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Parent term, `None` for top-level terms.
    pub fn parent(&self) -> Option<TermId> {
        self.parent
    }

    /// Sub-terms in display order.
    pub fn children(&self) -> &[TermId] {
        &self.children
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

/// Forest of index terms in document order.
#[derive(Debug, Clone)]
pub struct TermTree {
    arena: Arena<Term>,
    roots: Vec<TermId>,
}

impl Default for TermTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TermTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
        }
    }

    /// Inserts term as last child of `parent`, or as last top-level term.
    ///
    /// Any children or parent already recorded on `term` are discarded; the
    /// tree owns the structure. An unknown parent handle makes the term a
    /// top-level term.
    pub fn insert(&mut self, mut term: Term, parent: Option<TermId>) -> TermId {
        let parent = parent.filter(|idx| self.arena.contains(*idx));
        term.parent = parent;
        term.children.clear();
        let idx = self.arena.insert(term);

        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(parent) => parent.children.push(idx),
            None => self.roots.push(idx),
        }
        idx
    }

    pub fn term(&self, idx: TermId) -> Option<&Term> {
        self.arena.get(idx)
    }

    pub fn term_mut(&mut self, idx: TermId) -> Option<&mut Term> {
        self.arena.get_mut(idx)
    }

    /// Children of `idx`, empty for unknown handles.
    pub fn children(&self, idx: TermId) -> &[TermId] {
        self.term(idx).map(Term::children).unwrap_or(&[])
    }

    /// Top-level terms in insertion order.
    pub fn roots(&self) -> &[TermId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Depth-first pre-order walk over every tree of the forest.
    pub fn iter(&self) -> TermIterator<'_> {
        TermIterator::new(self)
    }

    /// Depth-first post-order walk: children come before their parent.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }
}

pub struct TermIterator<'a> {
    tree: &'a TermTree,
    stack: Vec<TermId>,
}

impl<'a> TermIterator<'a> {
    fn new(tree: &'a TermTree) -> Self {
        Self {
            tree,
            stack: tree.roots.iter().rev().copied().collect(),
        }
    }
}

impl<'a> Iterator for TermIterator<'a> {
    type Item = (TermId, &'a Term);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(term) = self.tree.term(current) {
                // Reverse push keeps siblings left to right
                self.stack.extend(term.children.iter().rev().copied());
                return Some((current, term));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a TermTree,
    stack: Vec<(TermId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a TermTree) -> Self {
        Self {
            tree,
            stack: tree.roots.iter().rev().map(|&idx| (idx, false)).collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (TermId, &'a Term);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(term) = self.tree.term(current) {
                if visited {
                    return Some((current, term));
                }
                self.stack.push((current, true));
                self.stack
                    .extend(term.children.iter().rev().map(|&child| (child, false)));
            }
        }
        None
    }
}
