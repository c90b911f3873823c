//! JSON term tree input.
//!
//! The document collector that extracts index terms from topics lives
//! elsewhere; it hands over the finished tree as nested JSON nodes:
//!
//! ```json
//! [{"name": "cars", "targets": [{"uri": "cars.dita", "displayName": "Cars"}],
//!   "children": [{"name": "sports", "fullName": "cars:sports"}]}]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{IndexError, IndexResult};
use crate::term::{Target, Term, TermId, TermTree};

/// Serialized index term with nested sub-terms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TermNode {
    pub name: String,
    /// Defaults to `name` when absent
    pub full_name: Option<String>,
    pub key: Option<String>,
    pub prefix: Option<String>,
    pub targets: Vec<TargetNode>,
    pub children: Vec<TermNode>,
}

/// Serialized target.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetNode {
    pub uri: Option<String>,
    pub display_name: Option<String>,
}

impl From<TargetNode> for Target {
    fn from(node: TargetNode) -> Self {
        Target {
            uri: node.uri,
            display_name: node.display_name,
        }
    }
}

impl TermTree {
    /// Builds tree from serialized top-level nodes, keeping their order.
    pub fn from_nodes(nodes: Vec<TermNode>) -> Self {
        let mut tree = TermTree::new();
        for node in nodes {
            insert_node(&mut tree, node, None);
        }
        tree
    }
}

fn insert_node(tree: &mut TermTree, node: TermNode, parent: Option<TermId>) {
    let TermNode {
        name,
        full_name,
        key,
        prefix,
        targets,
        children,
    } = node;

    let mut term = Term::new(name);
    if let Some(full_name) = full_name {
        term.full_name = full_name;
    }
    term.key = key;
    term.prefix = prefix;
    term.targets = targets.into_iter().map(Target::from).collect();

    let idx = tree.insert(term, parent);
    for child in children {
        insert_node(tree, child, Some(idx));
    }
}

/// Parses a JSON array of term nodes.
///
/// # Errors
///
/// Returns [`IndexError::Parse`] tagged with `origin` when the JSON is invalid
pub fn parse_terms(json: &str, origin: &Path) -> IndexResult<TermTree> {
    let nodes: Vec<TermNode> = serde_json::from_str(json).map_err(|source| IndexError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    Ok(TermTree::from_nodes(nodes))
}

/// Loads a term tree from a JSON file.
///
/// # Errors
///
/// Returns error if the file cannot be read or does not hold a term array
pub fn load_terms(path: &Path) -> IndexResult<TermTree> {
    let json = fs::read_to_string(path)
        .map_err(|e| IndexError::io(format!("reading term tree {}", path.display()), e))?;
    let tree = parse_terms(&json, path)?;
    debug!(path = %path.display(), terms = tree.len(), "loaded term tree");
    Ok(tree)
}
