//! Directive processing context.
//!
//! Provides file access and source location information to directive handlers.

use std::io;
use std::path::{Path, PathBuf};

/// Context handed to a directive handler for each directive occurrence.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use apiref_renderer::directive::DirectiveContext;
///
/// let ctx = DirectiveContext {
///     source_path: Some(Path::new("docs/api/at.md")),
///     base_dir: Path::new("docs/api"),
///     line: 12,
///     read_file: &|path| std::fs::read_to_string(path),
/// };
///
/// let resolved = ctx.resolve_path("at.overloads.toml");
/// assert_eq!(resolved, Path::new("docs/api/at.overloads.toml"));
/// ```
pub struct DirectiveContext<'a> {
    /// Path to the source file being rendered (if known).
    pub source_path: Option<&'a Path>,
    /// Base directory for resolving relative paths.
    pub base_dir: &'a Path,
    /// Line number where the directive appears (1-indexed).
    pub line: usize,
    /// Callback to read a file from the file system.
    pub read_file: &'a dyn Fn(&Path) -> io::Result<String>,
}

impl DirectiveContext<'_> {
    /// Resolve a relative path against the base directory.
    #[must_use]
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }

    /// Read a file using the context's `read_file` callback.
    pub fn read(&self, path: &Path) -> io::Result<String> {
        (self.read_file)(path)
    }

    /// Prefix a message with the source location, for warnings.
    ///
    /// ```
    /// use std::path::Path;
    /// use apiref_renderer::directive::DirectiveContext;
    ///
    /// let ctx = DirectiveContext {
    ///     source_path: Some(Path::new("api/at.md")),
    ///     base_dir: Path::new("api"),
    ///     line: 7,
    ///     read_file: &|_| Ok(String::new()),
    /// };
    /// assert_eq!(ctx.located("bad"), "api/at.md:7: bad");
    /// ```
    #[must_use]
    pub fn located(&self, message: &str) -> String {
        match self.source_path {
            Some(path) => format!("{}:{}: {message}", path.display(), self.line),
            None => format!("line {}: {message}", self.line),
        }
    }
}
