//! Task options and the resolved configuration.
//!
//! [`TaskOptions`] is the record a host hands over: loosely typed, every field
//! optional, `exclude` and `include_meta` accepted in more than one shape.
//! [`TaskOptions::resolve`] turns it into a [`ZipPathConfig`], which is what
//! the pipeline actually runs on.

use crate::Result;
use crate::ZipPathError;
use serde::Deserialize;
use std::path::PathBuf;

/// Options record as delivered by the host.
///
/// # Examples
///
/// ```
/// use zippath_core::TaskOptions;
///
/// let options = TaskOptions::new("site")
///     .with_exclude("*.tmp, build")
///     .with_include_meta("yes");
/// let config = options.resolve()?;
///
/// assert_eq!(config.exclude_patterns, vec!["*.tmp", "build"]);
/// assert!(config.include_meta);
/// # Ok::<(), zippath_core::ZipPathError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskOptions {
    /// Path to the directory or file to compress.
    #[serde(default)]
    pub path: Option<String>,

    /// Output zip file path.
    #[serde(default)]
    pub output: Option<String>,

    /// Patterns to exclude from the archive.
    #[serde(default)]
    pub exclude: Option<ListArg>,

    /// Whether to write a `.resource-meta.xml` next to the archive.
    #[serde(default)]
    pub include_meta: Option<FlagArg>,
}

/// A list-valued option: either a comma-delimited string or a native list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListArg {
    /// `"a, b, c"`
    Delimited(String),
    /// `["a", "b", "c"]`
    List(Vec<String>),
}

impl ListArg {
    /// Normalizes into an ordered list of items.
    ///
    /// A delimited string is split on `,`, items are trimmed, and empty items
    /// are dropped. A list is taken as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use zippath_core::options::ListArg;
    ///
    /// let arg = ListArg::Delimited(" *.log ,, tmp/* ".to_string());
    /// assert_eq!(arg.into_vec(), vec!["*.log", "tmp/*"]);
    /// ```
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Delimited(s) => split_delimited(&s),
            Self::List(items) => items,
        }
    }
}

impl From<&str> for ListArg {
    fn from(s: &str) -> Self {
        Self::Delimited(s.to_string())
    }
}

impl From<Vec<String>> for ListArg {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// A boolean option that may arrive as a real boolean or as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlagArg {
    /// `true` / `false`
    Bool(bool),
    /// `"True"`, `"yes"`, `"1"`, ...
    Text(String),
}

impl FlagArg {
    /// Interprets the flag.
    ///
    /// Strings `true`, `1` and `yes` (any case) are true; every other string is
    /// false.
    ///
    /// # Examples
    ///
    /// ```
    /// use zippath_core::options::FlagArg;
    ///
    /// assert!(FlagArg::Text("YES".into()).is_set());
    /// assert!(!FlagArg::Text("on".into()).is_set());
    /// assert!(FlagArg::Bool(true).is_set());
    /// ```
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => parse_flag(s),
        }
    }
}

impl From<bool> for FlagArg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for FlagArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl TaskOptions {
    /// Creates an options record with only `path` set.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Decodes an options record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ZipPathError::InvalidOptions`] on malformed JSON, unknown
    /// keys, or values of the wrong shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use zippath_core::TaskOptions;
    ///
    /// let options = TaskOptions::from_json(r#"{"path": "dist", "include_meta": "1"}"#)?;
    /// assert!(options.resolve()?.include_meta);
    /// # Ok::<(), zippath_core::ZipPathError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ZipPathError::InvalidOptions(e.to_string()))
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets the exclude option.
    #[must_use]
    pub fn with_exclude(mut self, exclude: impl Into<ListArg>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    /// Sets the include_meta option.
    #[must_use]
    pub fn with_include_meta(mut self, include_meta: impl Into<FlagArg>) -> Self {
        self.include_meta = Some(include_meta.into());
        self
    }

    /// Resolves the record into a typed configuration.
    ///
    /// No filesystem access happens here; existence of `path` is checked by
    /// the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ZipPathError::MissingRequiredOption`] if `path` is absent or
    /// empty.
    pub fn resolve(self) -> Result<ZipPathConfig> {
        let path = self
            .path
            .filter(|p| !p.is_empty())
            .ok_or(ZipPathError::MissingRequiredOption { name: "path" })?;

        Ok(ZipPathConfig {
            path: PathBuf::from(path),
            output: self.output.filter(|o| !o.is_empty()).map(PathBuf::from),
            exclude_patterns: self.exclude.map(ListArg::into_vec).unwrap_or_default(),
            include_meta: self.include_meta.as_ref().is_some_and(FlagArg::is_set),
        })
    }
}

/// Resolved configuration for one zip-path run.
///
/// # Examples
///
/// ```
/// use zippath_core::ZipPathConfig;
///
/// let config = ZipPathConfig::new("dist")
///     .with_output("out/dist.zip")
///     .with_exclude_patterns(vec!["*.map".to_string()])
///     .with_include_meta(true);
///
/// assert!(config.include_meta);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipPathConfig {
    /// File or directory to compress.
    pub path: PathBuf,

    /// Explicit destination archive. `None` derives it from `path`.
    pub output: Option<PathBuf>,

    /// Glob patterns, tested against relative path and bare name.
    pub exclude_patterns: Vec<String>,

    /// Write the static-resource sidecar next to the archive.
    ///
    /// Default: `false`.
    pub include_meta: bool,
}

impl ZipPathConfig {
    /// Creates a configuration for `path` with no output override, no
    /// exclusions and no sidecar.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            output: None,
            exclude_patterns: Vec::new(),
            include_meta: false,
        }
    }

    /// Sets the destination archive path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets the exclude patterns.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Sets whether to write the sidecar.
    #[must_use]
    pub fn with_include_meta(mut self, include: bool) -> Self {
        self.include_meta = include;
        self
    }
}

/// Splits a comma-delimited option value.
pub(crate) fn split_delimited(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the text form of a boolean option.
///
/// # Examples
///
/// ```
/// use zippath_core::options::parse_flag;
///
/// assert!(parse_flag("True"));
/// assert!(parse_flag("1"));
/// assert!(!parse_flag("no"));
/// assert!(!parse_flag(""));
/// ```
#[must_use]
pub fn parse_flag(s: &str) -> bool {
    ["true", "1", "yes"]
        .iter()
        .any(|accepted| s.eq_ignore_ascii_case(accepted))
}
