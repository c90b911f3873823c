//! Shared test utilities for integration tests.
//!
//! Provides term tree fixtures and helpers for writing term JSON files into
//! temporary directories.

#![allow(dead_code)]

use anyhow::Result;
use helpidx::{Target, Term, TermId, TermTree};
use std::fs;
use std::path::{Path, PathBuf};

pub use helpidx::testing::init_test_setup;

/// Writes term JSON into `dir` and returns the file path.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_terms_file(dir: &Path, json: &str) -> Result<PathBuf> {
    let path = dir.join("terms.json");
    fs::write(&path, json)?;
    Ok(path)
}

/// Tree with a canonical `X` term and a nested see reference to it.
///
/// ```text
/// X            -> y.dita "Y", z.dita "Z"
///   detail     -> d.dita "Detail"
/// holder
///   X (See)
///     detail
/// ```
///
/// # Returns
///
/// Tree plus handles of the see term and its child
pub fn see_tree() -> (TermTree, TermId, TermId) {
    let mut tree = TermTree::new();
    let canonical = tree.insert(
        Term::new("X")
            .with_target(Target::new("y.dita", Some("Y")))
            .with_target(Target::new("z.dita", Some("Z"))),
        None,
    );
    tree.insert(
        Term::new("detail")
            .with_full_name("X:detail")
            .with_target(Target::new("d.dita#part", Some("Detail"))),
        Some(canonical),
    );
    let holder = tree.insert(Term::new("holder"), None);
    let see = tree.insert(
        Term::new("X").with_full_name("holder:X").with_prefix("See"),
        Some(holder),
    );
    let nested = tree.insert(
        Term::new("detail").with_full_name("holder:X:detail"),
        Some(see),
    );
    (tree, see, nested)
}

/// Chain `A -> B -> C` where only `C` has targets.
pub fn chain_tree() -> (TermTree, [TermId; 3]) {
    let mut tree = TermTree::new();
    let a = tree.insert(Term::new("A"), None);
    let b = tree.insert(Term::new("B").with_full_name("A:B"), Some(a));
    let c = tree.insert(
        Term::new("C")
            .with_full_name("A:B:C")
            .with_target(Target::new("c1.dita", Some("C one")))
            .with_target(Target::new("sub/c2.xml#x", None)),
        Some(b),
    );
    (tree, [a, b, c])
}

pub const TERMS_JSON: &str = r#"[
  {"name": "cars",
   "targets": [{"uri": "topics/cars.dita", "displayName": "Cars"}],
   "children": [
     {"name": "sports", "fullName": "cars:sports",
      "targets": [{"uri": "topics/sports.dita#s1", "displayName": "Sports cars"}]}
   ]},
  {"name": "vehicles",
   "children": [
     {"name": "cars", "fullName": "vehicles:cars", "prefix": "See"},
     {"name": "trucks", "fullName": "vehicles:trucks", "prefix": "See also"}
   ]}
]"#;
