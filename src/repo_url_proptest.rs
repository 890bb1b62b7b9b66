//! Property-based tests for repository URL parsing and source path derivation.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use std::path::{Component, Path, PathBuf};

    use crate::error::Error;
    use crate::path::calculate_source_path;
    use crate::repo_url::{parse_loose_url, parse_repo_url, parse_standard_url};
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
    use proptest::prelude::*;

    /// Mixed-case hosts, some with non-ASCII letters.
    fn host() -> impl Strategy<Value = String> {
        "[a-zA-Zäöüé][a-zA-Z0-9äöü]{0,8}(\\.[a-zA-Z]{2,5}){0,2}"
    }

    fn user() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_]{0,8}"
    }

    /// Path segments of arbitrary characters, `%` included, apart from
    /// separators, controls and the `.`/`..` names both syntaxes rewrite.
    fn segments() -> impl Strategy<Value = Vec<String>> {
        let segment = "[^/\\\\?#\\x00-\\x1f]{1,10}"
            .prop_filter("dot segment", |s| s != "." && s != "..");
        prop::collection::vec(segment, 1..6)
    }

    /// Percent-encode segments for use in a standard URL path.
    fn encoded(segments: &[String]) -> Vec<String> {
        segments
            .iter()
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect()
    }

    fn expected(host: &str, segments: &[String]) -> Vec<String> {
        std::iter::once(host.to_string())
            .chain(segments.iter().cloned())
            .collect()
    }

    // ============================================================================
    // parse_standard_url property tests
    // ============================================================================

    proptest! {
        /// Property: scheme://user@host/seg1/.../segN yields [host, seg1, ..., segN]
        #[test]
        fn standard_url_yields_host_then_segments(
            scheme in prop::sample::select(vec!["https", "HTTPS", "http", "ssh", "Ssh", "git"]),
            user in user(),
            host in host(),
            segments in segments(),
        ) {
            let path = encoded(&segments).join("/");
            let repo = format!("{}://{}@{}/{}", scheme, user, host, path);
            let parts = parse_standard_url(&repo);
            prop_assert_eq!(parts, Ok(expected(&host, &segments)));
        }

        /// Property: doubled slashes in a standard URL are collapsed
        #[test]
        fn standard_url_drops_empty_segments(
            host in host(),
            segments in segments(),
        ) {
            let repo = format!("https://{}//{}//", host, encoded(&segments).join("//"));
            let parts = parse_standard_url(&repo);
            prop_assert_eq!(parts, Ok(expected(&host, &segments)));
        }

        /// Property: an encoded slash separates segments like a literal one
        #[test]
        fn standard_url_splits_on_encoded_slash(
            host in host(),
            segments in segments(),
        ) {
            let repo = format!("https://{}/%2F{}", host, encoded(&segments).join("%2F"));
            let parts = parse_standard_url(&repo);
            prop_assert_eq!(parts, Ok(expected(&host, &segments)));
        }
    }

    // ============================================================================
    // parse_loose_url property tests
    // ============================================================================

    proptest! {
        /// Property: user@host:seg1/.../segN yields [host, seg1, ..., segN]
        #[test]
        fn loose_url_with_user_yields_host_then_segments(
            user in user(),
            host in host(),
            segments in segments(),
        ) {
            let repo = format!("{}@{}:{}", user, host, segments.join("/"));
            let parts = parse_loose_url(&repo);
            prop_assert_eq!(parts, Ok(expected(&host, &segments)));
        }

        /// Property: host:seg1/.../segN yields the literal host
        #[test]
        fn loose_url_without_user_yields_literal_host(
            host in host(),
            segments in segments(),
        ) {
            let repo = format!("{}:{}", host, segments.join("/"));
            let parts = parse_loose_url(&repo);
            prop_assert_eq!(parts, Ok(expected(&host, &segments)));
        }

        /// Property: any empty path component in a loose URL is rejected
        #[test]
        fn loose_url_rejects_blank_segment(
            host in host(),
            segments in segments(),
            position in any::<prop::sample::Index>(),
        ) {
            let mut segments = segments;
            let at = position.index(segments.len() + 1);
            segments.insert(at, String::new());
            let repo = format!("git@{}:{}", host, segments.join("/"));
            prop_assert_eq!(parse_loose_url(&repo), Err(Error::EmptyPathSegment));
        }

        /// Property: parse_repo_url never panics and a success always leads with a host
        #[test]
        fn parse_repo_url_success_has_non_empty_host(input in ".*") {
            if let Ok(parts) = parse_repo_url(&input) {
                prop_assert!(!parts.is_empty());
                prop_assert!(!parts[0].is_empty(), "empty host from {:?}", input);
            }
        }
    }

    // ============================================================================
    // calculate_source_path property tests
    // ============================================================================

    proptest! {
        /// Property: standard and loose forms of the same repository converge
        #[test]
        fn source_path_forms_converge(
            user in user(),
            host in host(),
            segments in segments(),
        ) {
            let root = Path::new("/home/user");
            let path = encoded(&segments).join("/");
            let standard = format!("https://{}@{}/{}", user, host, path);
            let loose = format!("{}@{}:{}", user, host, segments.join("/"));

            let from_standard = calculate_source_path(root, &standard);
            let from_loose = calculate_source_path(root, &loose);
            prop_assert!(from_standard.is_ok());
            prop_assert_eq!(from_standard, from_loose);
        }

        /// Property: the result is root/src/host/... without the repository name
        #[test]
        fn source_path_drops_repository_name(
            host in host(),
            segments in segments(),
        ) {
            let repo = format!("{}:{}", host, segments.join("/"));
            let path = calculate_source_path(Path::new("/ws"), &repo).unwrap();

            let mut want = PathBuf::from("/ws/src");
            want.push(&host);
            want.extend(&segments[..segments.len() - 1]);
            prop_assert_eq!(path, want);
        }

        /// Property: whatever the input, a resolved path stays under root/src
        #[test]
        fn source_path_stays_under_src(input in ".*") {
            if let Ok(path) = calculate_source_path(Path::new("/ws"), &input) {
                prop_assert!(path.starts_with("/ws/src"), "{:?} -> {:?}", input, path);
                prop_assert!(
                    !path.components().any(|c| c == Component::ParentDir),
                    "{:?} -> {:?}",
                    input,
                    path
                );
            }
        }

        /// Property: calculate_source_path is deterministic
        #[test]
        fn source_path_is_deterministic(input in ".*") {
            let root = Path::new("/home/user");
            prop_assert_eq!(
                calculate_source_path(root, &input),
                calculate_source_path(root, &input)
            );
        }
    }
}
