//! # Repository URL Parsing
//!
//! Repository references come in two syntaxes:
//!
//! - **Standard URLs** with an explicit scheme, such as
//!   `https://user@host.com/path/to/repo` or `ssh://host.com/path/to/repo`.
//! - **Loose URLs** in the SCP-like form git accepts for SSH remotes, such as
//!   `user@host.com:path/to/repo` or `host.com:path/to/repo`.
//!
//! Both parsers produce the same shape: a segment sequence whose first element
//! is the host, followed by the path components in order.
//!
//! The two parsers treat empty path components differently. Standard URLs
//! have well-defined empty-segment semantics, so `//` is collapsed. The loose
//! form has no scheme to anchor it, so an empty component is rejected rather
//! than silently dropped.

use log::{debug, trace};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{Error, Result};

/// Parse a URI with an explicit scheme into `[host, path...]`.
///
/// The host is taken verbatim from the input, port included, so it matches
/// what the loose form of the same URL yields. The path is percent-decoded as
/// a whole before it is split, and empty segments (leading slash, doubled
/// slashes, trailing slash) are dropped.
pub fn parse_standard_url(repo: &str) -> Result<Vec<String>> {
    let parsed = Url::parse(repo)?;

    let host = raw_host(repo, parsed.scheme()).ok_or(Error::MissingHost)?;
    if host.is_empty() {
        return Err(Error::MissingHost);
    }

    let path = percent_decode_str(parsed.path()).decode_utf8_lossy();

    let mut parts = vec![host.to_string()];
    parts.extend(
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string),
    );

    Ok(parts)
}

/// The `host[:port]` text of a `scheme://[userinfo@]host[:port]/...` input.
///
/// `None` when the scheme is not followed by `//`, i.e. there is no authority.
fn raw_host<'a>(repo: &'a str, scheme: &str) -> Option<&'a str> {
    let (written_scheme, rest) = repo.trim_start().split_once("://")?;
    if !written_scheme.eq_ignore_ascii_case(scheme) {
        return None;
    }

    let end = rest
        .find(|c| matches!(c, '/' | '\\' | '?' | '#'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];

    Some(match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    })
}

/// Parse an SCP-like `[user@]host:path/to/repo` string into `[host, path...]`.
///
/// The host ends at the first `:`. A `@` before that colon separates a user
/// name, which is discarded; a `@` after it belongs to the path.
pub fn parse_loose_url(repo: &str) -> Result<Vec<String>> {
    let colon = repo.find(':').ok_or(Error::MissingColon)?;
    let (authority, path) = (&repo[..colon], &repo[colon + 1..]);

    let host = match authority.find('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };

    if host.is_empty() {
        return Err(Error::MissingHost);
    }
    if path.is_empty() {
        return Err(Error::MissingColon);
    }

    let mut parts = vec![host.to_string()];
    for segment in path.split('/') {
        if segment.is_empty() {
            return Err(Error::EmptyPathSegment);
        }
        parts.push(segment.to_string());
    }

    Ok(parts)
}

/// Parse a repository reference in either syntax.
///
/// The standard parser is tried first. Any failure there, not only a missing
/// host, falls back to the loose parser, whose error is returned as-is.
pub fn parse_repo_url(repo: &str) -> Result<Vec<String>> {
    let parts = match parse_standard_url(repo) {
        Ok(parts) => parts,
        Err(err) => {
            debug!("{} is not a standard URL ({}), trying loose form", repo, err);
            parse_loose_url(repo)?
        }
    };

    trace!("{} -> {:?}", repo, parts);
    Ok(parts)
}
