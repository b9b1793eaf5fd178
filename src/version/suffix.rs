//! Base/suffix decomposition of version strings
//!
//! `1.2.3-rc.4` splits into the base `1.2.3` and the suffix number `4`.
//! Only the text before the first hyphen is the base; only a trailing `.n`
//! token of the suffix counts as its number.

/// A version string split into its base and the numeric tail of its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed<'a> {
    pub base: &'a str,
    pub suffix_number: i64,
}

/// Split a version string into base and suffix number.
///
/// The suffix number is 0 when there is no suffix, when the suffix has no
/// dot-separated tail, or when that tail is not an integer.
pub fn decompose(version: &str) -> Decomposed<'_> {
    let (base, suffix) = match version.split_once('-') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (version, None),
    };

    let suffix_number = suffix
        .and_then(|suffix| suffix.rsplit_once('.'))
        .and_then(|(_, last)| last.parse::<i64>().ok())
        .unwrap_or(0);

    Decomposed {
        base,
        suffix_number,
    }
}
