//! Target locator extension rewriting.

/// Rewrites source document extensions to the rendered output extension.
///
/// Index targets point at source topics (`topics/intro.dita#intro`) while
/// help viewers need the generated page (`topics/intro.html#intro`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRewriter {
    target_ext: String,
}

impl ExtensionRewriter {
    /// Creates rewriter producing `target_ext` (leading dot included).
    pub fn new(target_ext: impl Into<String>) -> Self {
        Self {
            target_ext: target_ext.into(),
        }
    }

    pub fn target_ext(&self) -> &str {
        &self.target_ext
    }

    /// Rewrites locator extension, see [`rewrite_extension`].
    pub fn rewrite(&self, locator: &str) -> String {
        rewrite_extension(locator, &self.target_ext)
    }
}

/// Replaces the file extension of `locator` with `desired_ext`.
///
/// Handles different locator shapes:
/// - Same-document anchors (`#frag`) remain unchanged
/// - Fragments survive the rewrite (`a/b.dita#frag` becomes `a/b.html#frag`)
/// - Locators whose last path segment has no extension remain unchanged
///
/// # Arguments
///
/// * `locator`: Relative document locator
/// * `desired_ext`: Output extension including the leading dot
///
/// # Returns
///
/// Locator pointing at the rendered document
pub fn rewrite_extension(locator: &str, desired_ext: &str) -> String {
    if locator.starts_with('#') {
        return locator.to_string();
    }

    let (path, fragment) = match locator.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (locator, None),
    };

    let file_start = path.rfind('/').map_or(0, |slash| slash + 1);
    let Some(dot) = path[file_start..].rfind('.') else {
        return locator.to_string();
    };

    let mut rewritten = String::with_capacity(locator.len() + desired_ext.len());
    rewritten.push_str(&path[..file_start + dot]);
    rewritten.push_str(desired_ext);
    if let Some(fragment) = fragment {
        rewritten.push('#');
        rewritten.push_str(fragment);
    }
    rewritten
}
