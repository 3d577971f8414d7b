//! Path resolution for the virtual filesystem.
//!
//! Every path-taking command resolves its argument here before it touches
//! the VFS. Resolution is purely lexical: it never consults the tree.
//!
//! | cwd | candidate | resolved |
//! |-----|-----------|----------|
//! | `/a/b` | `..` | `/a` |
//! | `/a/b` | `../../x` | `/x` |
//! | `/a` | `.` | `/a` |
//! | `/` | `..` | `/` |
//! | `/docs` | `/secrets` | `/secrets` |

/// Resolve `candidate` against `cwd` into a canonical absolute path.
///
/// A candidate starting with `/` ignores `cwd`. Empty segments and `.` are
/// dropped, `..` pops one segment and is a no-op at the root. The result
/// always starts with `/` and never ends with one, except for the root
/// itself.
pub fn resolve(cwd: &str, candidate: &str) -> String {
    let joined;
    let full = if candidate.starts_with('/') {
        candidate
    } else {
        joined = format!("{}/{}", cwd, candidate);
        &joined
    };

    let mut stack: Vec<&str> = Vec::new();
    for segment in full.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name),
        }
    }

    format!("/{}", stack.join("/"))
}

/// Split a canonical path into its segments. The root has none.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// True if `path` is `prefix` or lies underneath it.
///
/// Both arguments must already be canonical.
pub fn is_within(path: &str, prefix: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of_nested() {
        assert_eq!(resolve("/a/b", ".."), "/a");
    }

    #[test]
    fn test_never_escapes_root() {
        assert_eq!(resolve("/a/b", "../../x"), "/x");
        assert_eq!(resolve("/a/b", "../../../../x"), "/x");
        assert_eq!(resolve("/", ".."), "/");
    }

    #[test]
    fn test_dot_is_noop() {
        assert_eq!(resolve("/a", "."), "/a");
        assert_eq!(resolve("/", "."), "/");
    }

    #[test]
    fn test_absolute_ignores_cwd() {
        assert_eq!(resolve("/docs", "/secrets"), "/secrets");
    }

    #[test]
    fn test_collapses_empty_segments_and_trailing_slash() {
        assert_eq!(resolve("/", "docs//regions.txt"), "/docs/regions.txt");
        assert_eq!(resolve("/", "docs/"), "/docs");
        assert_eq!(resolve("/", "//"), "/");
    }

    #[test]
    fn test_relative_from_root() {
        assert_eq!(resolve("/", "docs"), "/docs");
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("/secrets", "/secrets"));
        assert!(is_within("/secrets/key", "/secrets"));
        assert!(!is_within("/secretsauce", "/secrets"));
        assert!(is_within("/anything", "/"));
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("/").count(), 0);
        assert_eq!(segments("/docs/regions.txt").collect::<Vec<_>>(), ["docs", "regions.txt"]);
    }
}
