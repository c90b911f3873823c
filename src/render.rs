//! Index renderers and output handling.
//!
//! Each renderer is a pure function of the term tree and [`RenderOptions`].
//! Writing happens in one place so both formats share the same scoped file
//! handling and error wrapping.

mod eclipse;
mod htmlhelp;

use maud::Markup;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::error::{IndexError, IndexResult};
use crate::extension::ExtensionRewriter;
use crate::term::TermTree;

/// Output format of an index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    /// Eclipse help `index.xml`
    Eclipse,
    /// HTML Help `.hhk` sitemap
    HtmlHelp,
}

impl IndexFormat {
    /// Returns index file path for the given output root.
    ///
    /// HTML Help appends `.hhk` to the root; Eclipse help always writes
    /// `index.xml` in the directory containing the root.
    pub fn index_path(self, output_root: &Path) -> PathBuf {
        match self {
            IndexFormat::HtmlHelp => {
                let mut path = output_root.as_os_str().to_owned();
                path.push(".hhk");
                PathBuf::from(path)
            }
            IndexFormat::Eclipse => output_root
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join("index.xml"),
        }
    }
}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexFormat::Eclipse => write!(f, "Eclipse help"),
            IndexFormat::HtmlHelp => write!(f, "HTML Help"),
        }
    }
}

/// How see and see-also terms are expressed in Eclipse help output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeeMarkup {
    /// Plain `entry` elements, see targets found by name lookup
    #[default]
    Legacy,
    /// Dedicated `see`/`subpath` elements
    Modern,
}

/// Settings selected once per render invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub see_markup: SeeMarkup,
    /// Output extension for target locators, leading dot included
    pub target_ext: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            see_markup: SeeMarkup::Legacy,
            target_ext: ".html".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn rewriter(&self) -> ExtensionRewriter {
        ExtensionRewriter::new(self.target_ext.as_str())
    }
}

/// Finished index document.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub markup: Markup,
    /// See terms whose target could not be found, in document order
    pub unresolved: Vec<String>,
}

impl Rendered {
    pub fn into_string(self) -> String {
        self.markup.into_string()
    }
}

/// Renders the term tree in the requested format.
///
/// The tree is never modified; HTML Help aggregation works on a copy.
#[instrument(level = "debug", skip(tree, options), fields(terms = tree.len()))]
pub fn render(tree: &TermTree, format: IndexFormat, options: &RenderOptions) -> Rendered {
    let rewriter = options.rewriter();
    match format {
        IndexFormat::Eclipse => eclipse::render(tree, options.see_markup, &rewriter),
        IndexFormat::HtmlHelp => Rendered {
            markup: htmlhelp::render(tree, &rewriter),
            unresolved: Vec::new(),
        },
    }
}

/// Renders into an arbitrary byte sink.
///
/// # Returns
///
/// Names of unresolved see terms
///
/// # Errors
///
/// Returns [`IndexError::Sink`] wrapping the sink's error when writing or
/// flushing fails
pub fn write_to<W: Write>(
    tree: &TermTree,
    format: IndexFormat,
    options: &RenderOptions,
    sink: W,
) -> IndexResult<Vec<String>> {
    emit(tree, format, options, sink).map_err(|source| IndexError::Sink { format, source })
}

fn emit<W: Write>(
    tree: &TermTree,
    format: IndexFormat,
    options: &RenderOptions,
    mut sink: W,
) -> io::Result<Vec<String>> {
    let rendered = render(tree, format, options);
    sink.write_all(rendered.markup.0.as_bytes())?;
    sink.flush()?;
    Ok(rendered.unresolved)
}

/// Renders and writes one index file.
///
/// The file handle is scoped to this call and released on every path. A
/// write failure is returned as is; closing is only checked after a
/// successful write. A failed pass may leave a partial file behind for the
/// caller to discard.
///
/// # Errors
///
/// Returns [`IndexError::Render`] wrapping the underlying I/O error
pub fn write_index(
    tree: &TermTree,
    format: IndexFormat,
    options: &RenderOptions,
    path: &Path,
) -> IndexResult<Vec<String>> {
    let write_file = || -> io::Result<Vec<String>> {
        let mut out = BufWriter::new(File::create(path)?);
        let unresolved = emit(tree, format, options, &mut out)?;
        let file = out.into_inner().map_err(io::IntoInnerError::into_error)?;
        file.sync_all()?;
        Ok(unresolved)
    };

    let unresolved = write_file().map_err(|source| IndexError::Render {
        format,
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), unresolved = unresolved.len(), "index written");
    Ok(unresolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    #[test]
    fn test_index_path_per_format() {
        // Arrange
        let root = Path::new("out/help/index");

        // Act
        let hhk = IndexFormat::HtmlHelp.index_path(root);
        let xml = IndexFormat::Eclipse.index_path(root);

        // Assert
        assert_eq!(hhk, PathBuf::from("out/help/index.hhk"));
        assert_eq!(xml, PathBuf::from("out/help/index.xml"));
    }

    #[test]
    fn test_index_path_without_parent() {
        assert_eq!(
            IndexFormat::Eclipse.index_path(Path::new("index")),
            PathBuf::from("index.xml")
        );
    }

    #[test]
    fn test_write_to_sink() {
        // Arrange
        let mut tree = TermTree::new();
        tree.insert(Term::new("alpha"), None);
        let mut sink = Vec::new();

        // Act
        let unresolved = write_to(
            &tree,
            IndexFormat::Eclipse,
            &RenderOptions::default(),
            &mut sink,
        )
        .expect("Writing to memory should succeed");

        // Assert
        let text = String::from_utf8(sink).expect("Output should be UTF-8");
        assert!(text.contains(r#"<entry keyword="alpha">"#));
        assert!(unresolved.is_empty());
    }

    /// Sink that rejects every write.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_failing_sink_is_sink_error() {
        // Arrange
        let mut tree = TermTree::new();
        tree.insert(Term::new("alpha"), None);

        // Act
        let result = write_to(
            &tree,
            IndexFormat::HtmlHelp,
            &RenderOptions::default(),
            BrokenSink,
        );

        // Assert
        match result {
            Err(err @ IndexError::Sink { .. }) => {
                assert!(err.to_string().contains("HTML Help"));
                let cause = std::error::Error::source(&err).map(ToString::to_string);
                assert_eq!(cause.as_deref(), Some("sink closed"));
            }
            other => panic!("Expected sink error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_index_missing_directory_is_render_error() {
        // Arrange
        let tree = TermTree::new();
        let path = Path::new("/nonexistent-helpidx-dir/sub/index.xml");

        // Act
        let result = write_index(&tree, IndexFormat::Eclipse, &RenderOptions::default(), path);

        // Assert
        match result {
            Err(IndexError::Render { format, path: failed, .. }) => {
                assert_eq!(format, IndexFormat::Eclipse);
                assert_eq!(failed, path);
            }
            other => panic!("Expected render error, got {:?}", other),
        }
    }

    #[test]
    fn test_format_display() {
        assert_eq!(IndexFormat::Eclipse.to_string(), "Eclipse help");
        assert_eq!(IndexFormat::HtmlHelp.to_string(), "HTML Help");
    }
}
