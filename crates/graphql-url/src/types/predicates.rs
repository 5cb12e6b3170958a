//! The two independent checks behind URL validity.
//!
//! A string is a valid URL when either predicate holds. Neither one resolves,
//! fetches, canonicalizes or percent-encodes anything.

/// Returns `true` if `s` parses as an absolute URL that has a host.
///
/// Parsing uses the WHATWG rules of the `url` crate, so `https://foo.com/bar`
/// and `ftp://files.example.com` pass while `mailto:a@b.c` (no host) and
/// `not valid url` (no scheme) do not.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    parse_absolute(s).is_some()
}

/// Returns `true` if `s` is a path relative to the root, i.e. starts with `/`.
#[must_use]
pub fn is_root_relative_path(s: &str) -> bool {
    s.starts_with('/')
}

/// Returns `true` if `s` is an absolute URL or a root-relative path.
#[must_use]
pub fn is_valid_url(s: &str) -> bool {
    is_absolute_url(s) || is_root_relative_path(s)
}

/// Parses `s` as an absolute URL with a host, discarding the parse result
/// for anything else.
pub(crate) fn parse_absolute(s: &str) -> Option<url::Url> {
    url::Url::parse(s).ok().filter(url::Url::has_host)
}
