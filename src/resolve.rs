//! See-reference resolution.
//!
//! Turns a term's targets into the topics an index entry links to. The
//! legacy variant infers see and see-also targets by searching term names;
//! the modern variant trusts each term's own targets.

mod legacy;
mod modern;

pub use legacy::{Resolution, SeeState, UNRESOLVED_SENTINEL, resolve_legacy};
pub use modern::resolve_modern;

use crate::extension::ExtensionRewriter;
use crate::term::Target;

/// Link emitted inside an index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topic {
    /// Navigable link with extension-rewritten locator
    Link { href: String, title: Option<String> },
    /// Title-only entry for targets without a locator
    Label { title: Option<String> },
}

impl Topic {
    /// Builds topic for `target`, rewriting the locator extension.
    pub fn from_target(target: &Target, rewriter: &ExtensionRewriter) -> Self {
        let title = target.title().map(String::from);
        match target.uri.as_deref() {
            Some(uri) => Topic::Link {
                href: rewriter.rewrite(uri),
                title,
            },
            None => Topic::Label { title },
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Topic::Link { href, .. } => Some(href),
            Topic::Label { .. } => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Topic::Link { title, .. } | Topic::Label { title } => title.as_deref(),
        }
    }
}
