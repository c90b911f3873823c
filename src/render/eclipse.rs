//! Eclipse help `index.xml` renderer.

use maud::{Markup, PreEscaped, html};

use super::{Rendered, SeeMarkup};
use crate::extension::ExtensionRewriter;
use crate::resolve::{SeeState, Topic, resolve_legacy, resolve_modern};
use crate::term::{TermId, TermTree};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Renders the index document.
///
/// Legacy markup writes one `entry` per term keyed by full name and resolves
/// see terms by name. Modern markup writes `see`/`subpath` elements for
/// redirections and keys entries by plain name.
pub(super) fn render(
    tree: &TermTree,
    see_markup: SeeMarkup,
    rewriter: &ExtensionRewriter,
) -> Rendered {
    let mut walker = Walker {
        tree,
        rewriter,
        unresolved: Vec::new(),
    };

    let mut entries = Vec::with_capacity(tree.roots().len());
    match see_markup {
        SeeMarkup::Legacy => {
            let mut state = SeeState::new(tree);
            for &idx in tree.roots() {
                let (markup, next) = walker.legacy_entry(idx, state);
                state = next;
                entries.push(markup);
            }
        }
        SeeMarkup::Modern => {
            let mut in_see = false;
            for &idx in tree.roots() {
                let (markup, next) = walker.modern_entry(idx, in_see);
                in_see = next;
                entries.push(markup);
            }
        }
    }

    let markup = html! {
        (PreEscaped(XML_DECLARATION))
        index {
            @for entry in &entries {
                (entry)
            }
        }
    };

    Rendered {
        markup,
        unresolved: walker.unresolved,
    }
}

struct Walker<'a> {
    tree: &'a TermTree,
    rewriter: &'a ExtensionRewriter,
    unresolved: Vec<String>,
}

impl Walker<'_> {
    /// Emits `entry` for a term and its sub-terms, threading see state.
    fn legacy_entry(&mut self, idx: TermId, state: SeeState) -> (Markup, SeeState) {
        let tree = self.tree;
        let Some(term) = tree.term(idx) else {
            return (html! {}, state);
        };

        let resolution = resolve_legacy(tree, idx, state, self.rewriter);
        self.unresolved.extend(resolution.unresolved);

        let mut state = resolution.state;
        let mut children = Vec::with_capacity(term.children().len());
        for &child in term.children() {
            let (markup, next) = self.legacy_entry(child, state);
            state = next;
            children.push(markup);
        }

        let markup = html! {
            entry keyword=(term.full_name) {
                @for topic in &resolution.topics {
                    (topic_element(topic))
                }
                @for child in &children {
                    (child)
                }
            }
        };
        (markup, state)
    }

    /// Emits `see`, `subpath` or `entry` depending on redirection state.
    ///
    /// Sub-terms of a `subpath` follow it inside the enclosing `see`.
    fn modern_entry(&mut self, idx: TermId, in_see: bool) -> (Markup, bool) {
        let tree = self.tree;
        let Some(term) = tree.term(idx) else {
            return (html! {}, in_see);
        };

        if term.is_redirection() {
            let (children, _) = self.modern_children(term.children(), true);
            let markup = html! {
                see keyword=(term.name) {
                    @for child in &children {
                        (child)
                    }
                }
            };
            return (markup, false);
        }

        if in_see {
            let (children, in_see) = self.modern_children(term.children(), true);
            let markup = html! {
                subpath keyword=(term.name) {}
                @for child in &children {
                    (child)
                }
            };
            return (markup, in_see);
        }

        let topics = resolve_modern(tree, idx, self.rewriter);
        let (children, in_see) = self.modern_children(term.children(), false);
        let markup = html! {
            entry keyword=(term.name) {
                @for topic in &topics {
                    (topic_element(topic))
                }
                @for child in &children {
                    (child)
                }
            }
        };
        (markup, in_see)
    }

    fn modern_children(&mut self, children: &[TermId], mut in_see: bool) -> (Vec<Markup>, bool) {
        let mut rendered = Vec::with_capacity(children.len());
        for &child in children {
            let (markup, next) = self.modern_entry(child, in_see);
            in_see = next;
            rendered.push(markup);
        }
        (rendered, in_see)
    }
}

fn topic_element(topic: &Topic) -> Markup {
    html! {
        @match topic {
            Topic::Link { href, title } => {
                topic href=(href) title=[title] {}
            },
            Topic::Label { title } => {
                topic title=[title] {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Target, Term};

    fn rewriter() -> ExtensionRewriter {
        ExtensionRewriter::new(".html")
    }

    #[test]
    fn test_bare_entries_in_insertion_order() {
        // Arrange
        let mut tree = TermTree::new();
        tree.insert(Term::new("second"), None);
        tree.insert(Term::new("first"), None);

        // Act
        let html = render(&tree, SeeMarkup::Modern, &rewriter()).into_string();

        // Assert
        assert_eq!(
            html,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<index><entry keyword="second"></entry><entry keyword="first"></entry></index>"#
            )
        );
    }

    #[test]
    fn test_legacy_entry_uses_full_name() {
        // Arrange
        let mut tree = TermTree::new();
        let parent = tree.insert(Term::new("name1"), None);
        tree.insert(
            Term::new("name2")
                .with_full_name("name1:name2")
                .with_target(Target::new("topic.dita#t", Some("Topic"))),
            Some(parent),
        );

        // Act
        let html = render(&tree, SeeMarkup::Legacy, &rewriter()).into_string();

        // Assert
        assert!(html.contains(
            r#"<entry keyword="name1"><entry keyword="name1:name2"><topic href="topic.html#t" title="Topic"></topic></entry></entry>"#
        ));
    }

    #[test]
    fn test_legacy_see_resolves_by_name() {
        // Arrange
        let mut tree = TermTree::new();
        tree.insert(
            Term::new("X").with_target(Target::new("y.dita", Some("Y"))),
            None,
        );
        let holder = tree.insert(Term::new("holder"), None);
        tree.insert(Term::new("X").with_prefix("See"), Some(holder));

        // Act
        let rendered = render(&tree, SeeMarkup::Legacy, &rewriter());
        let html = rendered.markup.into_string();

        // Assert
        assert!(html.contains(
            r#"<entry keyword="holder"><entry keyword="X"><topic href="y.html" title="Y"></topic></entry></entry>"#
        ));
        assert!(rendered.unresolved.is_empty());
    }

    #[test]
    fn test_legacy_unresolved_collected_once() {
        // Arrange
        let mut tree = TermTree::new();
        let holder = tree.insert(Term::new("holder"), None);
        tree.insert(Term::new("ghost").with_prefix("See"), Some(holder));
        tree.insert(
            Term::new(crate::resolve::UNRESOLVED_SENTINEL).with_prefix("See"),
            Some(holder),
        );

        // Act
        let rendered = render(&tree, SeeMarkup::Legacy, &rewriter());

        // Assert
        assert_eq!(rendered.unresolved, vec!["ghost".to_string()]);
    }

    #[test]
    fn test_modern_see_and_subpath() {
        // Arrange
        let mut tree = TermTree::new();
        let see = tree.insert(Term::new("Cars").with_prefix("See"), None);
        let sub = tree.insert(Term::new("Sports"), Some(see));
        tree.insert(Term::new("Coupe"), Some(sub));
        tree.insert(
            Term::new("after").with_target(Target::label("Plain")),
            None,
        );

        // Act
        let html = render(&tree, SeeMarkup::Modern, &rewriter()).into_string();

        // Assert
        assert!(html.contains(
            r#"<see keyword="Cars"><subpath keyword="Sports"></subpath><subpath keyword="Coupe"></subpath></see>"#
        ));
        assert!(
            html.contains(r#"<entry keyword="after"><topic title="Plain"></topic></entry>"#),
            "State must reset after the see element closes: {}",
            html
        );
    }

    #[test]
    fn test_modern_does_not_search_names() {
        // Arrange
        let mut tree = TermTree::new();
        tree.insert(
            Term::new("X").with_target(Target::new("x.dita", None)),
            None,
        );
        let holder = tree.insert(Term::new("holder"), None);
        tree.insert(Term::new("missing"), Some(holder));

        // Act
        let rendered = render(&tree, SeeMarkup::Modern, &rewriter());

        // Assert
        assert!(rendered.unresolved.is_empty());
        assert!(
            rendered
                .markup
                .into_string()
                .contains(r#"<entry keyword="X"><topic href="x.html"></topic></entry>"#)
        );
    }

    #[test]
    fn test_topic_title_is_trimmed() {
        // Arrange
        let mut tree = TermTree::new();
        tree.insert(
            Term::new("padded").with_target(Target::new("p.dita", Some(" Padded "))),
            None,
        );

        // Act
        let html = render(&tree, SeeMarkup::Legacy, &rewriter()).into_string();

        // Assert
        assert!(html.contains(r#"<topic href="p.html" title="Padded"></topic>"#));
    }

    #[test]
    fn test_keyword_is_escaped() {
        let mut tree = TermTree::new();
        tree.insert(Term::new(r#"a<b & "c""#), None);

        let html = render(&tree, SeeMarkup::Legacy, &rewriter()).into_string();

        assert!(html.contains(r#"keyword="a&lt;b &amp; &quot;c&quot;""#));
    }
}
