//! Breadcrumb derivation from the current path.

use crate::models::Crumb;
use crate::utils::url::decode_component;

/// Build the breadcrumb trail for `path`.
///
/// The query is stripped from the raw path, which is then split on `/` and
/// each segment decoded on its own, so escaped `?` or `#` stay part of their
/// name. Every non-empty segment yields a crumb whose `path` is the prefix
/// ending at that segment; the last crumb is labelled with a trailing `" /"`.
/// The root path has no crumbs.
pub fn compute_breadcrumb(path: &str) -> Vec<Crumb> {
    let pathname = path.split('?').next().unwrap_or_default();
    if pathname.is_empty() || pathname == "/" {
        return Vec::new();
    }

    let parts: Vec<String> = pathname.split('/').map(decode_component).collect();
    let last = parts.iter().rposition(|p| !p.is_empty());

    parts
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(idx, name)| {
            let suffix = if Some(idx) == last { " /" } else { "" };
            Crumb {
                name: format!("{}{}", name, suffix),
                path: parts[..=idx].join("/"),
            }
        })
        .collect()
}

/// Parent directory of `path` (`/a/b` -> `/a`, `/a` -> `/`).
pub fn parent_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let trimmed = normalized.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => trimmed[..idx].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumb(name: &str, path: &str) -> Crumb {
        Crumb {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_root_has_no_crumbs() {
        assert!(compute_breadcrumb("/").is_empty());
        assert!(compute_breadcrumb("").is_empty());
        assert!(compute_breadcrumb("/?search=x").is_empty());
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            compute_breadcrumb("/a/b/c"),
            vec![
                crumb("a", "/a"),
                crumb("b", "/a/b"),
                crumb("c /", "/a/b/c"),
            ]
        );
    }

    #[test]
    fn test_decodes_and_strips_query() {
        assert_eq!(
            compute_breadcrumb("/my%20docs/v1?search=readme"),
            vec![crumb("my docs", "/my docs"), crumb("v1 /", "/my docs/v1")]
        );
    }

    #[test]
    fn test_escaped_reserved_chars_stay_in_segment() {
        assert_eq!(
            compute_breadcrumb("/what%3F/sub"),
            vec![crumb("what?", "/what?"), crumb("sub /", "/what?/sub")]
        );
        assert_eq!(
            compute_breadcrumb("/issue%231/notes?raw=false"),
            vec![crumb("issue#1", "/issue#1"), crumb("notes /", "/issue#1/notes")]
        );
    }

    #[test]
    fn test_empty_segments_skipped() {
        assert_eq!(
            compute_breadcrumb("/a//b/"),
            vec![crumb("a", "/a"), crumb("b /", "/a//b")]
        );
    }

    #[test]
    fn test_last_crumb_reconstructs_path() {
        for path in ["/x", "/x/y", "/deep/er/and/deeper", "/with.dots/file.tar.gz"] {
            let crumbs = compute_breadcrumb(path);
            assert_eq!(crumbs.last().map(|c| c.path.as_str()), Some(path));
            let names: Vec<&str> = crumbs
                .iter()
                .map(|c| c.name.trim_end_matches(" /"))
                .collect();
            assert_eq!(format!("/{}", names.join("/")), path);
        }
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("/a/b"), "/a");
        assert_eq!(parent_path("/a/b/"), "/a");
        assert_eq!(parent_path("/a"), "/");
        assert_eq!(parent_path("/"), "/");
        assert_eq!(parent_path(r"\a\b"), "/a");
    }
}
