//! HTML Help `.hhk` sitemap renderer.

use maud::{Markup, PreEscaped, html};

use crate::aggregate::aggregate_all;
use crate::extension::ExtensionRewriter;
use crate::term::{TermId, TermTree};

const DOCTYPE: &str = r#"<!DOCTYPE HTML PUBLIC "-//IETF//DTD HTML//EN">"#;
const GENERATOR: &str = "Microsoft\u{00AE} HTML Help Workshop 4.1";
const SITEMAP_COMMENT: &str = "<!-- Sitemap 1.0 -->";

/// Renders the sitemap index.
///
/// Terms without targets vanish from the HTML Help index tab, so targets are
/// first aggregated from descendants on a private copy of the tree.
pub(super) fn render(tree: &TermTree, rewriter: &ExtensionRewriter) -> Markup {
    let mut tree = tree.clone();
    aggregate_all(&mut tree);

    html! {
        (PreEscaped(DOCTYPE))
        html {
            head {
                meta name="GENERATOR" content=(GENERATOR);
                (PreEscaped(SITEMAP_COMMENT))
            }
            body {
                ul {
                    @for &idx in tree.roots() {
                        (list_item(&tree, idx, rewriter))
                    }
                }
            }
        }
    }
}

/// Renders one `li` with its sitemap object and nested sub-term list.
fn list_item(tree: &TermTree, idx: TermId, rewriter: &ExtensionRewriter) -> Markup {
    let Some(term) = tree.term(idx) else {
        return html! {};
    };

    html! {
        li {
            object type="text/sitemap" {
                param name="Name" value=(term.full_name);
                @for target in &term.targets {
                    param name="Name" value=(target.title().unwrap_or(term.full_name.as_str()));
                    @if let Some(uri) = &target.uri {
                        param name="Local" value=(rewriter.rewrite(uri));
                    }
                }
            }
            @if !term.children().is_empty() {
                ul {
                    @for &child in term.children() {
                        (list_item(tree, child, rewriter))
                    }
                }
            }
        }
    }
}
