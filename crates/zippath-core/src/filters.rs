//! Exclusion filtering.
//!
//! Patterns are shell-style globs (`*`, `?`, `[...]`, `[!...]`) tested against
//! two strings per entry: the path relative to the source root with `/`
//! separators, and the bare file or directory name. Either match excludes the
//! entry. `*` crosses `/`, so `build/*` also excludes `build/a/b.txt`.
//!
//! The dialect is plain fnmatch: `**` is just `*`, and a `[` with no closing
//! `]` is a literal bracket. Patterns are rewritten into that shape before
//! they reach [`glob::Pattern`], which would otherwise treat `**` as a
//! recursive directory wildcard and reject unclosed classes.

use crate::Result;
use crate::ZipPathError;
use glob::MatchOptions;
use glob::Pattern;
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled, ordered set of exclusion patterns.
///
/// # Examples
///
/// ```
/// use zippath_core::filters::ExclusionSet;
/// use std::path::Path;
///
/// let set = ExclusionSet::new(&["*.tmp", "build"])?;
/// let root = Path::new("/project");
///
/// assert!(set.is_excluded(Path::new("/project/a/b.tmp"), root));
/// assert!(set.is_excluded(Path::new("/project/build"), root));
/// assert!(!set.is_excluded(Path::new("/project/src/main.rs"), root));
/// # Ok::<(), zippath_core::ZipPathError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    patterns: Vec<Pattern>,
}

impl ExclusionSet {
    /// Compiles `patterns`, normalizing `\` to `/` and rewriting each one
    /// with [`fnmatch_pattern`] first.
    ///
    /// # Errors
    ///
    /// Returns [`ZipPathError::InvalidPattern`] for the first pattern the glob
    /// compiler still rejects after rewriting.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|raw| {
                let raw = raw.as_ref();
                let rewritten = fnmatch_pattern(&raw.replace('\\', "/"));
                Pattern::new(&rewritten).map_err(|e| ZipPathError::InvalidPattern {
                    pattern: raw.to_string(),
                    message: e.msg.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns `true` when no patterns were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Tests `path` against every pattern.
    ///
    /// `root` is the directory relative paths are computed from. If `path`
    /// is not under `root`, the whole path is used instead.
    #[must_use]
    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let relative = relative_slash_path(path, root);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.patterns.iter().any(|pattern| {
            pattern.matches_with(&relative, MATCH_OPTIONS)
                || pattern.matches_with(&name, MATCH_OPTIONS)
        })
    }
}

/// Rewrites a shell pattern so `glob` reads it the way fnmatch does.
///
/// Runs of `*` collapse to one `*`. A `[` that opens no complete class is
/// escaped as `[[]`. A class is complete when a `]` follows, not counting a
/// `]` placed first (after an optional `!`). Class contents are copied as-is.
///
/// # Examples
///
/// ```
/// use zippath_core::filters::fnmatch_pattern;
///
/// assert_eq!(fnmatch_pattern("**/*.log"), "*/*.log");
/// assert_eq!(fnmatch_pattern("a***b"), "a*b");
/// assert_eq!(fnmatch_pattern("[abc"), "[[]abc");
/// assert_eq!(fnmatch_pattern("[!]x]*"), "[!]x]*");
/// ```
#[must_use]
pub fn fnmatch_pattern(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                if !out.ends_with('*') {
                    out.push('*');
                }
                i += 1;
            }
            '[' => {
                let mut j = i + 1;
                if chars.get(j) == Some(&'!') {
                    j += 1;
                }
                if chars.get(j) == Some(&']') {
                    j += 1;
                }
                match chars[j..].iter().position(|&c| c == ']') {
                    Some(offset) => {
                        let end = j + offset;
                        out.extend(&chars[i..=end]);
                        i = end + 1;
                    }
                    None => {
                        out.push_str("[[]");
                        i += 1;
                    }
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Returns `path` relative to `root` as a `/`-separated string.
///
/// Falls back to the whole of `path` when it does not live under `root`.
///
/// # Examples
///
/// ```
/// use zippath_core::filters::relative_slash_path;
/// use std::path::Path;
///
/// let rel = relative_slash_path(Path::new("/a/b/c.txt"), Path::new("/a"));
/// assert_eq!(rel, "b/c.txt");
/// ```
#[must_use]
pub fn relative_slash_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}
