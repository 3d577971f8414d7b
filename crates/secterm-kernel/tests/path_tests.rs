//! Path resolution laws, parameterized with rstest.

use rstest::rstest;
use secterm_kernel::paths::resolve;

#[rstest]
#[case::parent("/a/b", "..", "/a")]
#[case::never_escapes_root("/a/b", "../../x", "/x")]
#[case::far_above_root("/a", "../../../../..", "/")]
#[case::dot("/a", ".", "/a")]
#[case::root_parent("/", "..", "/")]
#[case::root_dot("/", ".", "/")]
#[case::absolute("/docs", "/secrets", "/secrets")]
#[case::absolute_with_dots("/docs", "/docs/../secrets/.", "/secrets")]
#[case::relative("/docs", "regions.txt", "/docs/regions.txt")]
#[case::sibling("/docs", "../secrets", "/secrets")]
#[case::empty_segments("/", "docs///regions.txt", "/docs/regions.txt")]
#[case::trailing_slash("/", "docs/", "/docs")]
#[case::empty_candidate("/docs", "", "/docs")]
fn resolve_laws(#[case] cwd: &str, #[case] candidate: &str, #[case] expected: &str) {
    assert_eq!(resolve(cwd, candidate), expected);
}

#[rstest]
#[case("/a/b", "..")]
#[case("/", "x/./y/../z")]
#[case("/docs", "../../..")]
#[case("/deep/er/still", "/abs//path/")]
fn resolve_is_idempotent(#[case] cwd: &str, #[case] candidate: &str) {
    let once = resolve(cwd, candidate);
    assert_eq!(resolve(&once, "."), once);
    assert_eq!(resolve("/", &once), once);
}

#[rstest]
#[case("/", "a/b/c")]
#[case("/x", "../y/./z//")]
fn resolved_paths_are_canonical(#[case] cwd: &str, #[case] candidate: &str) {
    let path = resolve(cwd, candidate);
    assert!(path.starts_with('/'));
    assert!(path == "/" || !path.ends_with('/'));
    assert!(!path.contains("//"));
    assert!(path.split('/').all(|s| s != "." && s != ".."));
}
