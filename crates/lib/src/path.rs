//! Path types for dotted-name variable access.
//!
//! A path names a location in the variable tree. Segments are separated by
//! [`DELIMITER`](crate::constants::DELIMITER) and taken verbatim: there is no
//! normalization and no escaping, so `"a..b"` has an empty middle segment and
//! the empty string is the single segment `""`. A key containing a literal dot
//! cannot be addressed as one segment.
//!
//! The [`Path`]/[`PathBuf`] types follow the same borrowed/owned pattern as
//! `std::path::Path`/`PathBuf`.
//!
//! # Usage
//!
//! ```rust
//! use varstore::path::{Path, PathBuf};
//!
//! let path = Path::new("player.stats.hp");
//! assert_eq!(path.segments().collect::<Vec<_>>(), vec!["player", "stats", "hp"]);
//!
//! let built = PathBuf::from("player").push("stats").push("hp");
//! assert_eq!(built.as_path(), path);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref};

use crate::constants::DELIMITER;

/// An owned path.
///
/// Construction never fails: any string is a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed path.
///
/// `Path` is to [`PathBuf`] what `str` is to `String`. It is unsized and always
/// used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Wraps a string slice as a path.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the segments, in order from the root.
    ///
    /// Always yields at least one segment.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split(DELIMITER)
    }

    /// Returns the number of segments. Never zero.
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the path is the empty string.
    ///
    /// An empty path still has one (empty) segment.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Splits the path into the segments leading to the parent and the final
    /// segment.
    ///
    /// ```rust
    /// # use varstore::path::Path;
    /// let (parents, leaf) = Path::new("a.b.c").split_leaf();
    /// assert_eq!(parents, vec!["a", "b"]);
    /// assert_eq!(leaf, "c");
    /// ```
    pub fn split_leaf(&self) -> (Vec<&str>, &str) {
        match self.inner.rsplit_once(DELIMITER) {
            Some((parent, leaf)) => (parent.split(DELIMITER).collect(), leaf),
            None => (Vec::new(), &self.inner),
        }
    }

    /// Returns the final segment.
    pub fn leaf(&self) -> &str {
        self.split_leaf().1
    }

    /// Returns the parent path, or `None` for a single-segment path.
    pub fn parent(&self) -> Option<&Path> {
        self.inner
            .rsplit_once(DELIMITER)
            .map(|(parent, _)| Path::new(parent))
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl PathBuf {
    /// Creates a path holding the single empty segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path, inserting a delimiter.
    ///
    /// The argument may itself contain delimiters; it is appended as-is.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        self.inner.push(DELIMITER);
        self.inner.push_str(path.as_ref());
        self
    }

    /// Returns the borrowed form.
    pub fn as_path(&self) -> &Path {
        self
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(&self.inner)
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        PathBuf {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        PathBuf { inner }
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.inner)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.inner)
    }
}

/// Joins segments into a [`PathBuf`].
///
/// Each argument is converted with `to_string()`, so numbers and other
/// `Display` types can be mixed with string literals.
///
/// ```rust
/// # use varstore::path;
/// let slot = 3;
/// let path = path!("inventory", slot, "count");
/// assert_eq!(path.as_str(), "inventory.3.count");
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::path::PathBuf::from($first.to_string());
        $(
            let path = path.push($rest.to_string());
        )*
        path
    }};
}
