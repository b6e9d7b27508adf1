//! File-like parts of a URL path.

/// `dirname`, `basename`, `filename` and `extension` of a path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct PathParts<'a> {
    pub dirname: &'a str,
    pub basename: &'a str,
    pub filename: &'a str,
    pub extension: &'a str,
}

/// Splits the path at its final `/` and the basename at its final `.`.
///
/// - `"/en/docs/search.php"` → dirname `"/en/docs"`, basename `"search.php"`,
///   filename `"search"`, extension `"php"`
/// - `"archive."` → filename `"archive"`, extension `""`
pub(super) fn path_parts(path: &str) -> PathParts<'_> {
    let (dirname, basename) = match path.rsplit_once('/') {
        Some((dir, base)) => (dir, base),
        None => ("", path),
    };
    let (filename, extension) = match basename.rsplit_once('.') {
        Some((name, ext)) => (name, ext),
        None => (basename, ""),
    };
    PathParts {
        dirname,
        basename,
        filename,
        extension,
    }
}

/// Splits the path on `/`, dropping one leading and one trailing empty entry.
///
/// Internal empty entries (from `//`) are kept.
pub(super) fn path_segments(path: &str) -> Vec<String> {
    let mut parts: Vec<&str> = path.split('/').collect();
    if parts.first() == Some(&"") {
        parts.remove(0);
    }
    if parts.last() == Some(&"") {
        parts.pop();
    }
    parts.into_iter().map(str::to_string).collect()
}
