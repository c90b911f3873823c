//! Back-of-book index rendering for Eclipse help and HTML Help.

mod aggregate;
mod config;
mod error;
mod extension;
mod input;
pub mod render;
pub mod resolve;
mod term;
pub mod testing;

pub use aggregate::{aggregate, aggregate_all};
pub use config::{Config, OutputFormat};
pub use error::{IndexError, IndexResult};
pub use extension::{ExtensionRewriter, rewrite_extension};
pub use input::{TargetNode, TermNode, load_terms, parse_terms};
pub use render::{IndexFormat, RenderOptions, Rendered, SeeMarkup, render, write_index, write_to};
pub use resolve::{
    Resolution, SeeState, Topic, UNRESOLVED_SENTINEL, resolve_legacy, resolve_modern,
};
pub use term::{PostOrderIterator, Target, Term, TermId, TermIterator, TermTree};
