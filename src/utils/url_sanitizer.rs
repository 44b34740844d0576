//! Target URL sanitization.
//!
//! Strips known tracking parameters from target URLs before they are stored,
//! so that the same logical destination does not fan out into many mappings
//! differing only in analytics noise.
//!
//! Sanitization never rejects: input that does not parse as an absolute URL
//! is passed through unchanged. Deciding whether a target is acceptable is
//! request validation's job, not the sanitizer's.

use url::Url;

/// Query parameters removed from every target URL.
///
/// Matching is exact and case-sensitive on the decoded parameter name, so
/// `utm_source` is stripped while `UTM_SOURCE` and `utm_source_custom` pass
/// through.
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
    "ref",
    "source",
];

/// Removes tracking parameters from `raw`, preserving everything else.
///
/// The URL is parsed, its query rebuilt without the tracking pairs, and
/// re-serialized. Re-serialization canonicalizes the query encoding, which
/// makes the function idempotent: sanitizing an already sanitized URL
/// returns it byte-for-byte.
///
/// # Examples
///
/// ```ignore
/// let clean = sanitize_url("https://example.com/page?utm_source=ads&id=5");
/// assert_eq!(clean, "https://example.com/page?id=5");
///
/// // Unparseable input is returned unchanged.
/// assert_eq!(sanitize_url("not a url"), "not a url");
/// ```
pub fn sanitize_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    if url.query().is_none() {
        return url.to_string();
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }

    url.to_string()
}
