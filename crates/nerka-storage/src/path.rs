//! Logical path helpers.
//!
//! Logical paths are slash-delimited and rooted at `/`. They are joined and
//! cleaned lexically, so the result never climbs above the root:
//!
//! - `join("/docs/page", "../other")` → `"/docs/other"`
//! - `join("/", "../../etc/passwd")` → `"/etc/passwd"`
//!
//! The helpers never touch the filesystem.

/// Clean a logical path.
///
/// Removes empty and `.` segments, resolves `..` against the preceding
/// segment (dropping it at the root), and returns a rooted path without a
/// trailing slash. The root itself is `"/"`.
pub fn clean(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let mut cleaned = String::with_capacity(path.len() + 1);
    for segment in &segments {
        cleaned.push('/');
        cleaned.push_str(segment);
    }
    if cleaned.is_empty() {
        cleaned.push('/');
    }
    cleaned
}

/// Join a relative segment onto a logical path and clean the result.
///
/// The segment is always appended, even when it starts with `/`.
pub fn join(base: &str, segment: &str) -> String {
    clean(&format!("{base}/{segment}"))
}

/// Last element of a logical path, ignoring trailing slashes.
///
/// Returns `"/"` for the root.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Whether the path ends with a slash.
pub fn has_trailing_slash(path: &str) -> bool {
    path.ends_with('/')
}

/// Whether any segment of the path is `..`.
pub fn has_parent_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment == "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_root() {
        assert_eq!(clean("/"), "/");
        assert_eq!(clean(""), "/");
        assert_eq!(clean("//"), "/");
    }

    #[test]
    fn test_clean_removes_dot_and_empty_segments() {
        assert_eq!(clean("/docs/./guide//intro/"), "/docs/guide/intro");
    }

    #[test]
    fn test_clean_resolves_parent_segments() {
        assert_eq!(clean("/docs/page/../other"), "/docs/other");
    }

    #[test]
    fn test_clean_clamps_at_root() {
        assert_eq!(clean("/../../etc/passwd"), "/etc/passwd");
        assert_eq!(clean(".."), "/");
    }

    #[test]
    fn test_join_relative() {
        assert_eq!(join("/docs/", "guide"), "/docs/guide");
        assert_eq!(join("/docs/page", "other"), "/docs/page/other");
    }

    #[test]
    fn test_join_absolute_segment_is_appended() {
        assert_eq!(join("/docs", "/guide"), "/docs/guide");
    }

    #[test]
    fn test_join_parent() {
        assert_eq!(join("/docs/page", "../other"), "/docs/other");
        assert_eq!(join("/", "../secret"), "/secret");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/docs"), "docs");
        assert_eq!(base_name("/docs/page/"), "page");
        assert_eq!(base_name("/"), "/");
        assert_eq!(base_name("page"), "page");
    }

    #[test]
    fn test_has_trailing_slash() {
        assert!(has_trailing_slash("/docs/"));
        assert!(has_trailing_slash("/"));
        assert!(!has_trailing_slash("/docs"));
    }

    #[test]
    fn test_has_parent_segment() {
        assert!(has_parent_segment("/../etc"));
        assert!(has_parent_segment("/docs/../x"));
        assert!(!has_parent_segment("/docs/..hidden"));
        assert!(!has_parent_segment("/docs/a..b"));
    }
}
